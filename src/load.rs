//! Scene document loading.
//!
//! A scene document is JSON of the form
//!
//! ```text
//! {
//!   "background": 4,
//!   "vertex-data": [
//!     { "id": "A", "coords": [0.0, 0.0], "kind-list": ["B", 1, "C", "2", "D", 4] }
//!   ]
//! }
//! ```
//!
//! `kind-list` mixes neighbor junction names (strings) and faces (integers or
//! numeral strings) in cyclic order. `background` may be omitted or `null`.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{InputError, Result};
use crate::math::Point2;
use crate::topology::{FaceId, IncidenceToken, JunctionData, Scene};

/// Raw scene document as found on disk.
#[derive(Debug, Deserialize)]
pub struct SceneDocument {
    #[serde(default)]
    pub background: Option<Value>,
    #[serde(rename = "vertex-data")]
    pub vertex_data: Vec<VertexRecord>,
}

/// One junction record of a [`SceneDocument`].
#[derive(Debug, Deserialize)]
pub struct VertexRecord {
    pub id: String,
    pub coords: [f64; 2],
    #[serde(rename = "kind-list")]
    pub kind_list: Vec<Value>,
}

impl SceneDocument {
    /// Converts the document into a [`Scene`].
    ///
    /// # Errors
    ///
    /// Returns an `InputError` for malformed tokens, coordinates or
    /// background, or a `TopologyError` for duplicate junction identifiers.
    pub fn into_scene(self) -> Result<Scene> {
        let mut scene = Scene::new();
        scene.set_background(self.background.as_ref().map(background_face).transpose()?.flatten());
        for record in self.vertex_data {
            let [x, y] = record.coords;
            if !x.is_finite() || !y.is_finite() {
                return Err(InputError::NonFiniteCoordinate(record.id).into());
            }
            let incidence = record
                .kind_list
                .iter()
                .map(|token| incidence_token(&record.id, token))
                .collect::<Result<Vec<_>>>()?;
            scene.add_junction(JunctionData::new(record.id, Point2::new(x, y), incidence))?;
        }
        Ok(scene)
    }
}

fn incidence_token(junction: &str, token: &Value) -> Result<IncidenceToken> {
    match token {
        Value::String(name) => Ok(IncidenceToken::Name(name.clone())),
        Value::Number(n) => n
            .as_u64()
            .map(|id| IncidenceToken::Face(FaceId(id)))
            .ok_or_else(|| invalid_token(junction, token)),
        _ => Err(invalid_token(junction, token)),
    }
}

fn invalid_token(junction: &str, token: &Value) -> crate::error::SceneError {
    InputError::InvalidToken {
        junction: junction.to_owned(),
        token: token.to_string(),
    }
    .into()
}

fn background_face(value: &Value) -> Result<Option<FaceId>> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_u64()
            .map(|id| Some(FaceId(id)))
            .ok_or_else(|| InputError::InvalidBackground(value.to_string()).into()),
        Value::String(s) => FaceId::from_numeral(s)
            .map(Some)
            .ok_or_else(|| InputError::InvalidBackground(value.to_string()).into()),
        _ => Err(InputError::InvalidBackground(value.to_string()).into()),
    }
}

/// Parses a scene from JSON text.
///
/// # Errors
///
/// Returns `InputError::Json` for text that is not a scene document, or any
/// error of [`SceneDocument::into_scene`].
pub fn parse_scene(text: &str) -> Result<Scene> {
    let document: SceneDocument = serde_json::from_str(text).map_err(InputError::from)?;
    document.into_scene()
}

/// Reads and parses a scene file.
///
/// # Errors
///
/// Returns `InputError::Io` if the file cannot be read, or any error of
/// [`parse_scene`].
pub fn load_scene(path: impl AsRef<Path>) -> Result<Scene> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let scene = parse_scene(&text)?;
    tracing::info!(path = %path.display(), junctions = scene.len(), "loaded scene");
    Ok(scene)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{SceneError, TopologyError};

    #[test]
    fn parses_mixed_tokens() {
        let scene = parse_scene(
            r#"{
                "background": "4",
                "vertex-data": [
                    { "id": "A", "coords": [0, 0], "kind-list": ["B", 1, "C", "2"] },
                    { "id": "B", "coords": [1, 0], "kind-list": ["A", 1] },
                    { "id": "C", "coords": [0, 1], "kind-list": ["A", 2] }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(scene.len(), 3);
        assert_eq!(scene.background(), Some(FaceId(4)));
        let a = scene.key_of("A").unwrap();
        assert_eq!(scene.faces(a).unwrap(), vec![FaceId(1), FaceId(2)]);
        assert_eq!(scene.neighbors(a).unwrap().len(), 2);
    }

    #[test]
    fn background_optional() {
        let scene = parse_scene(r#"{ "vertex-data": [] }"#).unwrap();
        assert_eq!(scene.background(), None);
        let scene = parse_scene(r#"{ "background": null, "vertex-data": [] }"#).unwrap();
        assert_eq!(scene.background(), None);
    }

    #[test]
    fn rejects_fractional_face() {
        let err = parse_scene(
            r#"{ "vertex-data": [ { "id": "A", "coords": [0, 0], "kind-list": [1.5] } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, SceneError::Input(InputError::InvalidToken { .. })));
    }

    #[test]
    fn rejects_non_numeral_background() {
        let err = parse_scene(r#"{ "background": "sky", "vertex-data": [] }"#).unwrap_err();
        assert!(matches!(err, SceneError::Input(InputError::InvalidBackground(_))));
    }

    #[test]
    fn rejects_missing_fields() {
        let err = parse_scene(r#"{ "vertex-data": [ { "id": "A" } ] }"#).unwrap_err();
        assert!(matches!(err, SceneError::Input(InputError::Json(_))));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = parse_scene(
            r#"{ "vertex-data": [
                { "id": "A", "coords": [0, 0], "kind-list": [] },
                { "id": "A", "coords": [1, 1], "kind-list": [] }
            ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, SceneError::Topology(TopologyError::DuplicateJunction(_))));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_scene("/nonexistent/scene.json").unwrap_err();
        assert!(matches!(err, SceneError::Input(InputError::Io { .. })));
    }
}
