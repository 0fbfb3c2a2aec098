//! Content loaders for reading game data from files.
//!
//! One loader per file kind: TOML for sheet manifests, key bindings, and
//! tuning values; RON for scene layout. Each loader keeps its serde format
//! structs private and hands out plain `game-core` types.

pub mod config;
pub mod controls;
pub mod scene;
pub mod sheets;

pub use config::ConfigLoader;
pub use controls::ControlBindings;
pub use scene::{ActorKind, ActorSpec, ObstacleSpec, SceneLoader, SceneSpec};
pub use sheets::SheetRegistry;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
