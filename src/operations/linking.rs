use crate::topology::{FaceId, Link};

use super::classify::{ClassifiedJunction, JunctionKind};

/// Derives the face links implied by one classified junction.
///
/// Links never touch the background face and are returned in canonical
/// form, in the order the junction's faces are visited.
#[derive(Debug)]
pub struct DeriveLinks {
    background: Option<FaceId>,
}

impl DeriveLinks {
    /// Creates a link derivation that excludes `background`.
    #[must_use]
    pub fn new(background: Option<FaceId>) -> Self {
        Self { background }
    }

    /// Executes the derivation for `junction`.
    ///
    /// - `L`, `T` and `Unknown` emit nothing.
    /// - `FORK` links every pair of its non-background faces.
    /// - `ARROW` emits one link. With exactly two non-background faces they
    ///   are linked; with three or more, the index of the largest swept angle
    ///   is removed from `{0, 1, 2}` and the remaining two indices are taken
    ///   from the background-free face list.
    #[must_use]
    pub fn execute(&self, junction: &ClassifiedJunction) -> Vec<Link> {
        let faces: Vec<FaceId> = junction
            .faces
            .iter()
            .copied()
            .filter(|&f| Some(f) != self.background)
            .collect();

        let links = match junction.kind {
            JunctionKind::L | JunctionKind::T | JunctionKind::Unknown => Vec::new(),
            JunctionKind::Fork => fork_links(&faces),
            JunctionKind::Arrow => arrow_link(&faces, &junction.angles).into_iter().collect(),
        };

        for link in &links {
            tracing::debug!(junction = %junction.id, kind = %junction.kind, %link, "link");
        }
        links
    }
}

fn fork_links(faces: &[FaceId]) -> Vec<Link> {
    let mut links = Vec::new();
    for (i, &a) in faces.iter().enumerate() {
        for &b in &faces[i + 1..] {
            links.extend(Link::new(a, b));
        }
    }
    links
}

fn arrow_link(faces: &[FaceId], angles: &[f64]) -> Option<Link> {
    if angles.len() != 3 {
        return None;
    }
    match faces.len() {
        0 | 1 => None,
        2 => Link::new(faces[0], faces[1]),
        _ => {
            let widest = index_of_max(angles);
            let mut rest = (0..3).filter(|&i| i != widest);
            let (i, j) = (rest.next()?, rest.next()?);
            Link::new(faces[i], faces[j])
        }
    }
}

/// Index of the first maximum.
fn index_of_max(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > values[best] {
            best = i;
        }
    }
    best
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::topology::JunctionKey;

    fn f(id: u64) -> FaceId {
        FaceId(id)
    }

    fn link(a: u64, b: u64) -> Link {
        Link::new(f(a), f(b)).unwrap()
    }

    fn junction(kind: JunctionKind, angles: Vec<f64>, faces: &[u64]) -> ClassifiedJunction {
        ClassifiedJunction {
            key: JunctionKey::default(),
            id: "J".to_owned(),
            kind,
            neighbors: Vec::new(),
            angles,
            faces: faces.iter().copied().map(FaceId).collect(),
        }
    }

    #[test]
    fn l_and_t_and_unknown_emit_nothing() {
        let derive = DeriveLinks::new(None);
        for kind in [JunctionKind::L, JunctionKind::T, JunctionKind::Unknown] {
            let j = junction(kind, vec![90.0, 90.0, 180.0], &[1, 2, 3]);
            assert!(derive.execute(&j).is_empty(), "{kind} emitted links");
        }
    }

    #[test]
    fn fork_links_every_pair() {
        let j = junction(JunctionKind::Fork, vec![120.0; 3], &[1, 2, 3]);
        let links = DeriveLinks::new(None).execute(&j);
        assert_eq!(links, vec![link(1, 2), link(1, 3), link(2, 3)]);
    }

    #[test]
    fn fork_with_background_links_remaining_pair() {
        let j = junction(JunctionKind::Fork, vec![120.0; 3], &[1, 2, 3]);
        let links = DeriveLinks::new(Some(f(2))).execute(&j);
        assert_eq!(links, vec![link(1, 3)]);
    }

    #[test]
    fn fork_with_one_real_face_emits_nothing() {
        let j = junction(JunctionKind::Fork, vec![120.0; 3], &[1, 2]);
        assert!(DeriveLinks::new(Some(f(2))).execute(&j).is_empty());
    }

    #[test]
    fn arrow_skips_faces_of_widest_angle() {
        // Index 1 holds the widest angle, so faces at positions 0 and 2 link.
        let j = junction(JunctionKind::Arrow, vec![70.0, 220.0, 70.0], &[4, 5, 6]);
        assert_eq!(DeriveLinks::new(None).execute(&j), vec![link(4, 6)]);

        let j = junction(JunctionKind::Arrow, vec![250.0, 50.0, 60.0], &[4, 5, 6]);
        assert_eq!(DeriveLinks::new(None).execute(&j), vec![link(5, 6)]);
    }

    #[test]
    fn arrow_with_two_real_faces_links_them() {
        let j = junction(JunctionKind::Arrow, vec![60.0, 240.0, 60.0], &[4, 9, 5]);
        assert_eq!(DeriveLinks::new(Some(f(9))).execute(&j), vec![link(4, 5)]);
    }

    #[test]
    fn arrow_indices_align_with_background_free_faces() {
        // Four distinct faces, the first being background: indices are taken
        // against [2, 3, 4] after removal, not against the raw list.
        let j = junction(JunctionKind::Arrow, vec![60.0, 60.0, 240.0], &[1, 2, 3, 4]);
        assert_eq!(DeriveLinks::new(Some(f(1))).execute(&j), vec![link(2, 3)]);
    }

    #[test]
    fn arrow_with_single_real_face_emits_nothing() {
        let j = junction(JunctionKind::Arrow, vec![60.0, 240.0, 60.0], &[4, 9]);
        assert!(DeriveLinks::new(Some(f(9))).execute(&j).is_empty());
    }

    #[test]
    fn first_maximum_wins_ties() {
        assert_eq!(index_of_max(&[200.0, 200.0, 10.0]), 0);
        assert_eq!(index_of_max(&[10.0, 200.0, 200.0]), 1);
    }
}
