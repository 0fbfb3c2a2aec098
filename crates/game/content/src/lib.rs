//! Data plumbing for the actor core.
//!
//! `game-content` turns on-disk descriptions (sheet manifests, key-binding
//! tables, scene layouts, tuning values) into the oracle implementations
//! and spawn specifications the runtime consumes. Nothing here decodes
//! pixels or touches a device; the files only carry names, rectangles, and
//! numbers.
pub mod loaders;

pub use loaders::{
    ActorKind, ActorSpec, ConfigLoader, ControlBindings, ObstacleSpec, SceneLoader, SceneSpec,
    SheetRegistry,
};
