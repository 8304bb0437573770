use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a face (region) of the drawing.
///
/// Faces carry no state of their own; junctions and links refer to them
/// by this identifier only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaceId(pub u64);

impl FaceId {
    /// Parses a numeral string (ASCII digits only) into a face identifier.
    #[must_use]
    pub fn from_numeral(s: &str) -> Option<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        s.parse().ok().map(Self)
    }
}

impl From<u64> for FaceId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numerals_parse() {
        assert_eq!(FaceId::from_numeral("7"), Some(FaceId(7)));
        assert_eq!(FaceId::from_numeral("042"), Some(FaceId(42)));
    }

    #[test]
    fn non_numerals_rejected() {
        assert_eq!(FaceId::from_numeral(""), None);
        assert_eq!(FaceId::from_numeral("A"), None);
        assert_eq!(FaceId::from_numeral("+3"), None);
        assert_eq!(FaceId::from_numeral("3a"), None);
        assert_eq!(FaceId::from_numeral("99999999999999999999999"), None);
    }
}
