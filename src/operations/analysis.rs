use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::report::{JunctionReport, SceneReport};
use crate::topology::Scene;

use super::classify::ClassifyJunction;
use super::grouping::GroupRegions;
use super::linking::DeriveLinks;

/// Runs the whole interpretation of a scene: classification, link
/// derivation, then both grouping phases.
#[derive(Debug, Default)]
pub struct SceneAnalysis {
    config: AnalysisConfig,
}

impl SceneAnalysis {
    /// Creates a new analysis with the given configuration.
    #[must_use]
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Executes the analysis.
    ///
    /// Junctions are visited in scene insertion order and the background is
    /// taken from the scene as given.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidConfig` for an unusable configuration,
    /// or a topology error if the scene's internal references are broken.
    pub fn execute(&self, scene: &Scene) -> Result<SceneReport> {
        self.config.validate()?;
        let background = scene.background();
        let derive = DeriveLinks::new(background);

        let mut junctions = Vec::with_capacity(scene.len());
        let mut emitted = Vec::new();
        for (key, _) in scene.iter() {
            let classified = ClassifyJunction::new(key)
                .with_flip(self.config.needs_flip)
                .with_t_tolerance(self.config.t_tolerance_deg)
                .execute(scene)?;
            let links = derive.execute(&classified);
            emitted.extend_from_slice(&links);
            junctions.push(JunctionReport::new(&classified, links));
        }
        tracing::debug!(links = emitted.len(), "links derived");

        let bodies = GroupRegions::new(emitted)
            .with_background(background)
            .with_link_counting(self.config.link_counting)
            .execute();

        Ok(SceneReport::new(background, junctions, &bodies))
    }
}
