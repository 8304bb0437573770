use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::math::{swept_angles, Point2, DEFAULT_T_TOLERANCE_DEG};
use crate::topology::{FaceId, JunctionKey, Scene};

/// Local shape of a junction, decided from its degree and swept angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JunctionKind {
    L,
    T,
    Arrow,
    Fork,
    Unknown,
}

impl fmt::Display for JunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::L => "L",
            Self::T => "T",
            Self::Arrow => "ARROW",
            Self::Fork => "FORK",
            Self::Unknown => "UNKNOWN",
        };
        f.write_str(label)
    }
}

/// A junction together with everything classification derived for it.
#[derive(Debug, Clone)]
pub struct ClassifiedJunction {
    pub key: JunctionKey,
    pub id: String,
    pub kind: JunctionKind,
    /// Distinct neighbors in cyclic order.
    pub neighbors: Vec<JunctionKey>,
    /// Swept angles in degrees: one for `L`, three for degree-3 kinds,
    /// none for `Unknown`.
    pub angles: Vec<f64>,
    /// Distinct incident faces in cyclic order, background included.
    pub faces: Vec<FaceId>,
}

/// Labels a degree-3 junction from its three swept angles.
///
/// Priority: an angle within `t_tolerance_deg` of 180° makes a `T`, else a
/// reflex angle makes an `ARROW`, else the junction is a `FORK`.
#[must_use]
pub fn classify_angles(angles: &[f64; 3], t_tolerance_deg: f64) -> JunctionKind {
    if angles.iter().any(|a| (a - 180.0).abs() < t_tolerance_deg) {
        JunctionKind::T
    } else if angles.iter().any(|&a| a > 180.0) {
        JunctionKind::Arrow
    } else {
        JunctionKind::Fork
    }
}

/// Classifies one junction of a scene.
#[derive(Debug)]
pub struct ClassifyJunction {
    junction: JunctionKey,
    needs_flip: bool,
    t_tolerance_deg: f64,
}

impl ClassifyJunction {
    /// Creates a new classification for `junction` with default parameters.
    #[must_use]
    pub fn new(junction: JunctionKey) -> Self {
        Self {
            junction,
            needs_flip: false,
            t_tolerance_deg: DEFAULT_T_TOLERANCE_DEG,
        }
    }

    /// Negates the y axis when measuring angles.
    #[must_use]
    pub fn with_flip(mut self, needs_flip: bool) -> Self {
        self.needs_flip = needs_flip;
        self
    }

    /// Overrides the T-junction tolerance.
    #[must_use]
    pub fn with_t_tolerance(mut self, degrees: f64) -> Self {
        self.t_tolerance_deg = degrees;
        self
    }

    /// Executes the classification.
    ///
    /// Degrees other than 2 and 3 yield `Unknown` without error.
    ///
    /// # Errors
    ///
    /// Returns an error if the junction or one of its neighbors is not in the
    /// scene.
    pub fn execute(&self, scene: &Scene) -> Result<ClassifiedJunction> {
        let junction = scene.junction(self.junction)?;
        let neighbors = scene.neighbors(self.junction)?;
        let faces = scene.faces(self.junction)?;

        let (kind, angles) = match neighbors.len() {
            2 | 3 => {
                let positions = neighbors
                    .iter()
                    .map(|&n| scene.junction(n).map(|j| j.position))
                    .collect::<std::result::Result<Vec<Point2>, _>>()?;
                let angles = swept_angles(&junction.position, &positions, self.needs_flip);
                let kind = match <[f64; 3]>::try_from(angles.as_slice()) {
                    Ok(three) => classify_angles(&three, self.t_tolerance_deg),
                    Err(_) => JunctionKind::L,
                };
                (kind, angles)
            }
            _ => (JunctionKind::Unknown, Vec::new()),
        };

        tracing::debug!(
            junction = %junction.id,
            degree = neighbors.len(),
            ?angles,
            %kind,
            "classified junction"
        );

        Ok(ClassifiedJunction {
            key: self.junction,
            id: junction.id.clone(),
            kind,
            neighbors,
            angles,
            faces,
        })
    }
}
