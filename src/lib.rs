//! Interpretation of line drawings of polyhedral scenes.
//!
//! Junctions of a drawing are labelled `L`, `T`, `ARROW`, `FORK` or
//! `UNKNOWN` from the angles their edges make, each label implies links
//! between the faces around the junction, and the links are merged in two
//! phases into bodies: groups of faces that belong to one solid.
//!
//! ```no_run
//! use polyscene::{load_scene, AnalysisConfig, SceneAnalysis};
//!
//! # fn main() -> polyscene::Result<()> {
//! let scene = load_scene("cube.json")?;
//! let report = SceneAnalysis::new(AnalysisConfig::default()).execute(&scene)?;
//! for body in &report.bodies {
//!     println!("{:?}", body.faces);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod load;
pub mod math;
pub mod operations;
pub mod report;
pub mod topology;

pub use config::{AnalysisConfig, LinkCounting};
pub use error::{Result, SceneError};
pub use load::{load_scene, parse_scene};
pub use operations::{DetectBackground, JunctionKind, SceneAnalysis};
pub use report::{BodyReport, JunctionReport, SceneReport};
pub use topology::{FaceId, Link, Scene};
