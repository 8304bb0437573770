use super::body::Body;

/// Phase 2: folds single-face bodies with exactly one incident link into the
/// body holding that link's other face.
///
/// Bodies are scanned in order; the first qualifying singleton is absorbed
/// and the scan restarts. The receiving body keeps its position.
#[must_use]
pub fn absorb_single_links(mut bodies: Vec<Body>) -> Vec<Body> {
    while let Some((single, target)) = first_absorbable(&bodies) {
        let body = bodies.remove(single);
        let target = if target > single { target - 1 } else { target };
        tracing::info!(
            single = ?body.faces(),
            into = ?bodies[target].faces(),
            "single-body merge"
        );
        bodies[target].absorb(body);
    }
    bodies
}

/// Finds the first singleton with one incident link, paired with the index of
/// the body that holds the link's other face.
fn first_absorbable(bodies: &[Body]) -> Option<(usize, usize)> {
    bodies.iter().enumerate().find_map(|(i, body)| {
        let face = body.sole_face()?;
        let mut incident = body.links().iter().filter(|l| l.touches(face));
        let link = incident.next()?;
        if incident.next().is_some() {
            return None;
        }
        let other = link.other(face)?;
        let target = bodies.iter().position(|b| b.contains(other))?;
        (target != i).then_some((i, target))
    })
}
