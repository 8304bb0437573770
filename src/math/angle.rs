use std::f64::consts::TAU;

use super::{Point2, Vector2};

/// Returns the vector from `from` to `to`.
///
/// With `needs_flip` the y component is negated, converting image
/// coordinates (y down) to the counter-clockwise convention used by
/// [`swept_angle`].
#[must_use]
pub fn direction(from: &Point2, to: &Point2, needs_flip: bool) -> Vector2 {
    let d = to - from;
    if needs_flip {
        Vector2::new(d.x, -d.y)
    } else {
        d
    }
}

/// Counter-clockwise angle in degrees, in `[0, 360)`, swept from the
/// direction `origin -> first` to the direction `origin -> second`.
///
/// This is deliberately not the undirected angle between the two vectors:
/// a reflex arrangement reports a value above 180.
#[must_use]
pub fn swept_angle(origin: &Point2, first: &Point2, second: &Point2, needs_flip: bool) -> f64 {
    let d1 = direction(origin, first, needs_flip);
    let d2 = direction(origin, second, needs_flip);
    let mut diff = d2.y.atan2(d2.x) - d1.y.atan2(d1.x);
    if diff < 0.0 {
        diff += TAU;
    }
    // A tiny negative difference rounds up to exactly TAU.
    if diff >= TAU {
        diff = 0.0;
    }
    diff.to_degrees()
}

/// Swept angles around `origin` between consecutive `neighbors`.
///
/// Two neighbors yield the single angle from the first to the second.
/// Three or more yield one angle per consecutive pair, taken cyclically.
/// Fewer than two yield nothing.
#[must_use]
pub fn swept_angles(origin: &Point2, neighbors: &[Point2], needs_flip: bool) -> Vec<f64> {
    match neighbors.len() {
        0 | 1 => Vec::new(),
        2 => vec![swept_angle(origin, &neighbors[0], &neighbors[1], needs_flip)],
        n => (0..n)
            .map(|i| swept_angle(origin, &neighbors[i], &neighbors[(i + 1) % n], needs_flip))
            .collect(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn origin() -> Point2 {
        Point2::new(0.0, 0.0)
    }

    #[test]
    fn direction_plain_subtraction() {
        let d = direction(&Point2::new(1.0, 2.0), &Point2::new(4.0, 6.0), false);
        assert_abs_diff_eq!(d.x, 3.0);
        assert_abs_diff_eq!(d.y, 4.0);
    }

    #[test]
    fn direction_flip_negates_dy() {
        let d = direction(&Point2::new(1.0, 2.0), &Point2::new(4.0, 6.0), true);
        assert_abs_diff_eq!(d.x, 3.0);
        assert_abs_diff_eq!(d.y, -4.0);
    }

    #[test]
    fn quarter_turn_counter_clockwise() {
        let a = swept_angle(&origin(), &Point2::new(1.0, 0.0), &Point2::new(0.0, 1.0), false);
        assert_abs_diff_eq!(a, 90.0, epsilon = 1e-9);
    }

    #[test]
    fn reverse_order_is_reflex() {
        let a = swept_angle(&origin(), &Point2::new(0.0, 1.0), &Point2::new(1.0, 0.0), false);
        assert_abs_diff_eq!(a, 270.0, epsilon = 1e-9);
    }

    #[test]
    fn flip_mirrors_the_sweep() {
        let a = swept_angle(&origin(), &Point2::new(1.0, 0.0), &Point2::new(0.0, 1.0), true);
        assert_abs_diff_eq!(a, 270.0, epsilon = 1e-9);
    }

    #[test]
    fn identical_directions_sweep_zero() {
        let p = Point2::new(2.0, 3.0);
        let a = swept_angle(&origin(), &p, &p, false);
        assert_abs_diff_eq!(a, 0.0);
    }

    #[test]
    fn straight_line_is_half_turn() {
        let a = swept_angle(&origin(), &Point2::new(-1.0, 0.0), &Point2::new(1.0, 0.0), false);
        assert_abs_diff_eq!(a, 180.0, epsilon = 1e-9);
    }

    #[test]
    fn three_angles_sum_to_full_turn() {
        let neighbors = [
            Point2::new(1.0, 0.2),
            Point2::new(-0.4, 1.0),
            Point2::new(-0.3, -1.5),
        ];
        let angles = swept_angles(&origin(), &neighbors, false);
        assert_eq!(angles.len(), 3);
        assert_abs_diff_eq!(angles.iter().sum::<f64>(), 360.0, epsilon = 1e-9);
    }

    #[test]
    fn two_neighbors_yield_one_angle() {
        let neighbors = [Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)];
        let angles = swept_angles(&origin(), &neighbors, false);
        assert_eq!(angles.len(), 1);
        assert_abs_diff_eq!(angles[0], 90.0, epsilon = 1e-9);
    }

    #[test]
    fn fewer_than_two_neighbors_yield_none() {
        assert!(swept_angles(&origin(), &[], false).is_empty());
        assert!(swept_angles(&origin(), &[Point2::new(1.0, 0.0)], false).is_empty());
    }

    #[test]
    fn always_in_half_open_range() {
        let pts = [
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1e-17),
            Point2::new(-1.0, 0.0),
            Point2::new(-1.0, -1e-17),
            Point2::new(0.0, -1.0),
        ];
        for a in &pts {
            for b in &pts {
                let angle = swept_angle(&origin(), a, b, false);
                assert!((0.0..360.0).contains(&angle), "angle {angle} out of range");
            }
        }
    }
}
