use crate::error::{Result, TopologyError};
use crate::topology::{FaceId, Incidence, Scene};

/// Guesses the background face as the one touched most often.
///
/// Every incidence entry naming a face counts once; ties go to the face that
/// appears first in scene order. This is a preprocessing heuristic for
/// drivers: [`SceneAnalysis`](super::SceneAnalysis) never calls it and only
/// uses the background stored on the scene.
#[derive(Debug, Default)]
pub struct DetectBackground;

impl DetectBackground {
    /// Creates a new background detection.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the detection.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::NoFaces` if no junction references a face.
    pub fn execute(&self, scene: &Scene) -> Result<FaceId> {
        let mut counts: Vec<(FaceId, usize)> = Vec::new();
        for (_, junction) in scene.iter() {
            for token in &junction.incidence {
                if let Incidence::Face(face) = scene.resolve(token) {
                    match counts.iter_mut().find(|(f, _)| *f == face) {
                        Some((_, n)) => *n += 1,
                        None => counts.push((face, 1)),
                    }
                }
            }
        }

        let (face, n) = counts
            .into_iter()
            .fold(None, |best: Option<(FaceId, usize)>, (face, n)| match best {
                Some((_, m)) if m >= n => best,
                _ => Some((face, n)),
            })
            .ok_or(TopologyError::NoFaces)?;
        tracing::info!(%face, occurrences = n, "detected background");
        Ok(face)
    }
}
