use crate::math::Point2;

use super::FaceId;

slotmap::new_key_type! {
    /// Unique identifier for a junction in the scene store.
    pub struct JunctionKey;
}

/// One entry of a junction's cyclic incidence list, as supplied by the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncidenceToken {
    /// A string token: a neighboring junction's identifier, or a numeral
    /// face identifier when no junction carries that name.
    Name(String),
    /// A face given directly as an integer.
    Face(FaceId),
}

/// An incidence token after resolution against the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Incidence<'a> {
    Neighbor(JunctionKey),
    Face(FaceId),
    /// A name that matches no junction and is not a numeral.
    Dangling(&'a str),
}

/// Data associated with a junction of the line drawing.
#[derive(Debug, Clone)]
pub struct JunctionData {
    /// Identifier as given by the scene document.
    pub id: String,
    /// Position in drawing coordinates.
    pub position: Point2,
    /// Neighbors and faces in cyclic order around the junction.
    pub incidence: Vec<IncidenceToken>,
}

impl JunctionData {
    /// Creates a new junction.
    #[must_use]
    pub fn new(id: impl Into<String>, position: Point2, incidence: Vec<IncidenceToken>) -> Self {
        Self {
            id: id.into(),
            position,
            incidence,
        }
    }
}
