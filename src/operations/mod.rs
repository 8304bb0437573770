mod analysis;
mod background;
mod classify;
mod grouping;
mod linking;

pub use analysis::SceneAnalysis;
pub use background::DetectBackground;
pub use classify::{classify_angles, ClassifiedJunction, ClassifyJunction, JunctionKind};
pub use grouping::{
    absorb_single_links, initial_bodies, merge_strongly_linked, Body, GroupRegions,
};
pub use linking::DeriveLinks;
