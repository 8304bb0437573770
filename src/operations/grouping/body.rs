use std::collections::BTreeSet;

use crate::topology::{FaceId, Link};

/// A group of faces believed to form one solid, with the links touching it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    faces: BTreeSet<FaceId>,
    links: BTreeSet<Link>,
}

impl Body {
    /// Creates a single-face body carrying every link in `links` that touches
    /// `face`.
    #[must_use]
    pub fn singleton<'a>(face: FaceId, links: impl IntoIterator<Item = &'a Link>) -> Self {
        Self {
            faces: BTreeSet::from([face]),
            links: links.into_iter().filter(|l| l.touches(face)).copied().collect(),
        }
    }

    /// Faces of the body, sorted.
    #[must_use]
    pub fn faces(&self) -> &BTreeSet<FaceId> {
        &self.faces
    }

    /// Links incident to the body, sorted.
    #[must_use]
    pub fn links(&self) -> &BTreeSet<Link> {
        &self.links
    }

    /// The only face of a single-face body.
    #[must_use]
    pub fn sole_face(&self) -> Option<FaceId> {
        match self.faces.len() {
            1 => self.faces.first().copied(),
            _ => None,
        }
    }

    /// Returns `true` if `face` belongs to the body.
    #[must_use]
    pub fn contains(&self, face: FaceId) -> bool {
        self.faces.contains(&face)
    }

    /// Number of entries of `links` joining this body to `other`.
    ///
    /// Repeated entries are counted each time they appear.
    #[must_use]
    pub fn connecting_links(&self, other: &Body, links: &[Link]) -> usize {
        links
            .iter()
            .filter(|l| l.connects(&self.faces, &other.faces))
            .count()
    }

    /// Moves every face and link of `other` into this body.
    pub fn absorb(&mut self, other: Body) {
        self.faces.extend(other.faces);
        self.links.extend(other.links);
    }

    /// Consumes two bodies and returns their union.
    #[must_use]
    pub fn merged(mut self, other: Body) -> Body {
        self.absorb(other);
        self
    }
}
