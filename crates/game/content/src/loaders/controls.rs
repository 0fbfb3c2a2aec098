//! Key binding loader.
//!
//! Bindings map lower-case key names to movement directions. The input
//! layer asks for a name and gets `None` for anything unbound; unknown keys
//! are never an error.

use std::collections::HashMap;
use std::path::Path;

use game_core::Direction;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Key binding structure for TOML files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ControlsToml {
    bindings: HashMap<String, Direction>,
}

/// Lookup from key names to movement directions.
#[derive(Debug, Clone)]
pub struct ControlBindings {
    bindings: HashMap<String, Direction>,
}

impl ControlBindings {
    /// Load bindings from a TOML file.
    pub fn load(path: &Path) -> LoadResult<Self> {
        let content = read_file(path)?;
        let data: ControlsToml = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse controls TOML: {}", e))?;
        Ok(Self {
            bindings: data.bindings,
        })
    }

    /// Direction bound to `key`, if any.
    pub fn direction(&self, key: &str) -> Option<Direction> {
        self.bindings.get(key).copied()
    }

    pub fn bind(&mut self, key: &str, direction: Direction) {
        self.bindings.insert(key.to_owned(), direction);
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for ControlBindings {
    /// Arrow keys plus WASD.
    fn default() -> Self {
        let mut bindings = HashMap::new();
        for (key, direction) in [
            ("up", Direction::Up),
            ("down", Direction::Down),
            ("left", Direction::Left),
            ("right", Direction::Right),
            ("w", Direction::Up),
            ("s", Direction::Down),
            ("a", Direction::Left),
            ("d", Direction::Right),
        ] {
            bindings.insert(key.to_owned(), direction);
        }
        Self { bindings }
    }
}
