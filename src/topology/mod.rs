pub mod face;
pub mod junction;
pub mod link;

pub use face::FaceId;
pub use junction::{Incidence, IncidenceToken, JunctionData, JunctionKey};
pub use link::Link;

use std::collections::HashMap;

use crate::error::TopologyError;
use slotmap::SlotMap;

/// Central arena that owns all junctions of a line drawing.
///
/// Junctions reference each other by name in their incidence lists; the
/// store resolves those names to typed keys. Iteration follows insertion
/// order, which fixes the order every later stage visits junctions in.
#[derive(Debug, Default)]
pub struct Scene {
    junctions: SlotMap<JunctionKey, JunctionData>,
    names: HashMap<String, JunctionKey>,
    background: Option<FaceId>,
}

impl Scene {
    /// Creates a new, empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The distinguished background face, if any.
    #[must_use]
    pub fn background(&self) -> Option<FaceId> {
        self.background
    }

    /// Marks `face` as the background, or clears it with `None`.
    pub fn set_background(&mut self, face: Option<FaceId>) {
        self.background = face;
    }

    /// Number of junctions in the scene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.junctions.len()
    }

    /// Returns `true` if the scene has no junctions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.junctions.is_empty()
    }

    /// Inserts a junction and returns its key.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::DuplicateJunction` if a junction with the same
    /// identifier is already present.
    pub fn add_junction(&mut self, data: JunctionData) -> Result<JunctionKey, TopologyError> {
        if self.names.contains_key(&data.id) {
            return Err(TopologyError::DuplicateJunction(data.id));
        }
        let name = data.id.clone();
        let key = self.junctions.insert(data);
        self.names.insert(name, key);
        Ok(key)
    }

    /// Returns a reference to the junction data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn junction(&self, key: JunctionKey) -> Result<&JunctionData, TopologyError> {
        self.junctions
            .get(key)
            .ok_or_else(|| TopologyError::EntityNotFound("junction".into()))
    }

    /// Looks up a junction key by its document identifier.
    #[must_use]
    pub fn key_of(&self, id: &str) -> Option<JunctionKey> {
        self.names.get(id).copied()
    }

    /// Iterates junctions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (JunctionKey, &JunctionData)> {
        self.junctions.iter()
    }

    /// Resolves one incidence token against the scene.
    #[must_use]
    pub fn resolve<'a>(&self, token: &'a IncidenceToken) -> Incidence<'a> {
        match token {
            IncidenceToken::Face(face) => Incidence::Face(*face),
            IncidenceToken::Name(name) => {
                if let Some(key) = self.key_of(name) {
                    Incidence::Neighbor(key)
                } else if let Some(face) = FaceId::from_numeral(name) {
                    Incidence::Face(face)
                } else {
                    Incidence::Dangling(name)
                }
            }
        }
    }

    /// Distinct neighbors of a junction, in cyclic order.
    ///
    /// A closing entry that repeats the first neighbor is dropped, then any
    /// remaining repeats keep only their first occurrence. Names that resolve
    /// to no junction, and references to the junction itself, are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` is not in the store.
    pub fn neighbors(&self, key: JunctionKey) -> Result<Vec<JunctionKey>, TopologyError> {
        let junction = self.junction(key)?;
        let mut raw = Vec::new();
        for token in &junction.incidence {
            match self.resolve(token) {
                Incidence::Neighbor(n) if n != key => raw.push(n),
                Incidence::Neighbor(_) => {
                    tracing::warn!(junction = %junction.id, "ignoring self reference");
                }
                Incidence::Dangling(name) => {
                    tracing::warn!(junction = %junction.id, neighbor = name, "dropping unknown neighbor reference");
                }
                Incidence::Face(_) => {}
            }
        }
        if raw.len() > 1 && raw.first() == raw.last() {
            raw.pop();
        }
        let mut distinct = Vec::with_capacity(raw.len());
        for n in raw {
            if !distinct.contains(&n) {
                distinct.push(n);
            }
        }
        Ok(distinct)
    }

    /// Distinct faces incident to a junction, in cyclic order.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` is not in the store.
    pub fn faces(&self, key: JunctionKey) -> Result<Vec<FaceId>, TopologyError> {
        let junction = self.junction(key)?;
        let mut faces = Vec::new();
        for token in &junction.incidence {
            if let Incidence::Face(face) = self.resolve(token) {
                if !faces.contains(&face) {
                    faces.push(face);
                }
            }
        }
        Ok(faces)
    }

    /// Every face referenced by any junction, in first-appearance order.
    #[must_use]
    pub fn all_faces(&self) -> Vec<FaceId> {
        let mut faces = Vec::new();
        for (_, junction) in self.iter() {
            for token in &junction.incidence {
                if let Incidence::Face(face) = self.resolve(token) {
                    if !faces.contains(&face) {
                        faces.push(face);
                    }
                }
            }
        }
        faces
    }
}
