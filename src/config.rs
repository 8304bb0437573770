use serde::{Deserialize, Serialize};

use crate::error::{OperationError, Result};
use crate::math::DEFAULT_T_TOLERANCE_DEG;

/// How Phase 1 of region grouping counts the links joining two bodies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkCounting {
    /// Each distinct face pair counts once, however many junctions emit it.
    #[default]
    Distinct,
    /// Every emission counts, so a pair asserted by two junctions counts twice.
    Multiplicity,
}

/// Tunable parameters for a scene analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AnalysisConfig {
    /// Negate the y axis before measuring angles (image coordinates).
    pub needs_flip: bool,
    /// Half-width of the window around 180° that labels a junction `T`.
    pub t_tolerance_deg: f64,
    /// Link counting rule for Phase 1 merges.
    pub link_counting: LinkCounting,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            needs_flip: false,
            t_tolerance_deg: DEFAULT_T_TOLERANCE_DEG,
            link_counting: LinkCounting::Distinct,
        }
    }
}

impl AnalysisConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the vertical-axis flip.
    #[must_use]
    pub fn with_flip(mut self, needs_flip: bool) -> Self {
        self.needs_flip = needs_flip;
        self
    }

    /// Sets the T-junction tolerance in degrees.
    #[must_use]
    pub fn with_t_tolerance(mut self, degrees: f64) -> Self {
        self.t_tolerance_deg = degrees;
        self
    }

    /// Sets the Phase 1 link counting rule.
    #[must_use]
    pub fn with_link_counting(mut self, counting: LinkCounting) -> Self {
        self.link_counting = counting;
        self
    }

    /// Checks that every parameter is usable.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidConfig` if the T-junction tolerance is
    /// negative, non-finite, or not below 90°.
    pub fn validate(&self) -> Result<()> {
        let tol = self.t_tolerance_deg;
        if !tol.is_finite() || !(0.0..90.0).contains(&tol) {
            return Err(OperationError::InvalidConfig(format!(
                "t-tolerance must be within [0, 90) degrees, got {tol}"
            ))
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = AnalysisConfig::default();
        assert!(!config.needs_flip);
        assert_eq!(config.link_counting, LinkCounting::Distinct);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_tolerance() {
        assert!(AnalysisConfig::new().with_t_tolerance(-1.0).validate().is_err());
        assert!(AnalysisConfig::new().with_t_tolerance(f64::NAN).validate().is_err());
        assert!(AnalysisConfig::new().with_t_tolerance(90.0).validate().is_err());
    }

    #[test]
    fn deserializes_partial_document() {
        let config: AnalysisConfig =
            serde_json::from_str(r#"{ "needs-flip": true, "link-counting": "multiplicity" }"#)
                .unwrap();
        assert!(config.needs_flip);
        assert_eq!(config.link_counting, LinkCounting::Multiplicity);
        assert!((config.t_tolerance_deg - DEFAULT_T_TOLERANCE_DEG).abs() < 1e-12);
    }
}
