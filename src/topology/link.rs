use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use super::FaceId;

/// An unordered pair of distinct faces asserted to belong to the same body.
///
/// The pair is stored sorted, so two links are equal exactly when they name
/// the same two faces, whichever junction produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Link {
    low: FaceId,
    high: FaceId,
}

impl Link {
    /// Creates the canonical link between `a` and `b`.
    ///
    /// Returns `None` when `a == b`: a face is never linked to itself.
    #[must_use]
    pub fn new(a: FaceId, b: FaceId) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { low: a, high: b }),
            std::cmp::Ordering::Greater => Some(Self { low: b, high: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// The smaller face identifier.
    #[must_use]
    pub fn low(&self) -> FaceId {
        self.low
    }

    /// The larger face identifier.
    #[must_use]
    pub fn high(&self) -> FaceId {
        self.high
    }

    /// Returns `true` if either endpoint is `face`.
    #[must_use]
    pub fn touches(&self, face: FaceId) -> bool {
        self.low == face || self.high == face
    }

    /// The endpoint opposite `face`, or `None` if the link does not touch it.
    #[must_use]
    pub fn other(&self, face: FaceId) -> Option<FaceId> {
        if self.low == face {
            Some(self.high)
        } else if self.high == face {
            Some(self.low)
        } else {
            None
        }
    }

    /// Returns `true` if one endpoint lies in `a` and the other in `b`.
    #[must_use]
    pub fn connects(&self, a: &BTreeSet<FaceId>, b: &BTreeSet<FaceId>) -> bool {
        (a.contains(&self.low) && b.contains(&self.high))
            || (a.contains(&self.high) && b.contains(&self.low))
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.low, self.high)
    }
}
