mod absorb;
mod body;
mod global;

pub use absorb::absorb_single_links;
pub use body::Body;
pub use global::merge_strongly_linked;

use std::collections::BTreeSet;

use crate::config::LinkCounting;
use crate::topology::{FaceId, Link};

/// Partitions linked faces into bodies.
///
/// Runs Phase 1 ([`merge_strongly_linked`]) from one singleton body per
/// linked face, in ascending face order, then Phase 2
/// ([`absorb_single_links`]). Links touching the background are discarded
/// first; faces that end up in no link appear in no body.
#[derive(Debug)]
pub struct GroupRegions {
    links: Vec<Link>,
    background: Option<FaceId>,
    counting: LinkCounting,
}

impl GroupRegions {
    /// Creates a grouping over every link emitted in the scene, repeats
    /// included.
    #[must_use]
    pub fn new(links: Vec<Link>) -> Self {
        Self {
            links,
            background: None,
            counting: LinkCounting::Distinct,
        }
    }

    /// Excludes links touching `background`.
    #[must_use]
    pub fn with_background(mut self, background: Option<FaceId>) -> Self {
        self.background = background;
        self
    }

    /// Selects how Phase 1 counts connecting links.
    #[must_use]
    pub fn with_link_counting(mut self, counting: LinkCounting) -> Self {
        self.counting = counting;
        self
    }

    /// Executes both phases and returns the final bodies.
    #[must_use]
    pub fn execute(&self) -> Vec<Body> {
        let emitted: Vec<Link> = self
            .links
            .iter()
            .copied()
            .filter(|l| !self.background.is_some_and(|bg| l.touches(bg)))
            .collect();
        let distinct: BTreeSet<Link> = emitted.iter().copied().collect();

        let counted = match self.counting {
            LinkCounting::Distinct => distinct.iter().copied().collect(),
            LinkCounting::Multiplicity => emitted,
        };

        let bodies = merge_strongly_linked(initial_bodies(&distinct), &counted);
        tracing::debug!(bodies = bodies.len(), "global grouping done");
        let bodies = absorb_single_links(bodies);
        tracing::info!(bodies = bodies.len(), "grouping done");
        bodies
    }
}

/// One singleton body per face named by `links`, in ascending face order.
#[must_use]
pub fn initial_bodies(links: &BTreeSet<Link>) -> Vec<Body> {
    let faces: BTreeSet<FaceId> = links.iter().flat_map(|l| [l.low(), l.high()]).collect();
    faces
        .into_iter()
        .map(|face| Body::singleton(face, links))
        .collect()
}
