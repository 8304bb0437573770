use crate::topology::Link;

use super::body::Body;

/// Phase 1: merges bodies joined by at least two links until none are.
///
/// Pairs `(i, j)` with `i < j` are scanned in index order. The first pair
/// whose connecting count in `counted` reaches two is replaced by its union,
/// appended at the end, and the scan restarts. The result is a fixpoint:
/// running this again on it merges nothing.
#[must_use]
pub fn merge_strongly_linked(mut bodies: Vec<Body>, counted: &[Link]) -> Vec<Body> {
    while let Some((i, j)) = first_strong_pair(&bodies, counted) {
        let b = bodies.remove(j);
        let a = bodies.remove(i);
        tracing::info!(
            first = ?a.faces(),
            second = ?b.faces(),
            "global merge"
        );
        bodies.push(a.merged(b));
    }
    bodies
}

fn first_strong_pair(bodies: &[Body], counted: &[Link]) -> Option<(usize, usize)> {
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            if bodies[i].connecting_links(&bodies[j], counted) >= 2 {
                return Some((i, j));
            }
        }
    }
    None
}
