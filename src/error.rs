use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for scene interpretation.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised while turning a scene document into a [`Scene`](crate::topology::Scene).
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read scene file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed scene document")]
    Json(#[from] serde_json::Error),

    #[error("junction {junction}: invalid incidence token {token}")]
    InvalidToken { junction: String, token: String },

    #[error("invalid background face identifier {0}")]
    InvalidBackground(String),

    #[error("junction {0}: coordinates must be finite")]
    NonFiniteCoordinate(String),
}

/// Errors related to the junction graph itself.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("duplicate junction identifier: {0}")]
    DuplicateJunction(String),

    #[error("scene references no faces")]
    NoFaces,
}

/// Errors related to analysis operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience type alias for results using [`SceneError`].
pub type Result<T> = std::result::Result<T, SceneError>;
