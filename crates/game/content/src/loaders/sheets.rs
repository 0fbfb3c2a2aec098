//! Character sheet manifest loader and slicer.
//!
//! A sheet manifest names each appearance and records its frame size; the
//! slicer turns that into a grid of source rectangles (one row per
//! direction, three poses per row) without ever decoding pixels. The
//! registry maps appearance names to the compact ids the core works with.

use std::collections::HashMap;
use std::path::Path;

use game_core::{AppearanceId, CoreConfig, Direction, FrameGrid, Rect, SheetOracle, Vec2};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Sheet manifest structure for TOML files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SheetManifestToml {
    sheet: Vec<SheetEntryToml>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SheetEntryToml {
    name: String,
    frame_size: (i32, i32),
    #[serde(default = "default_columns")]
    columns: usize,
    #[serde(default = "default_rows")]
    rows: usize,
}

fn default_columns() -> usize {
    CoreConfig::SHEET_COLUMNS
}

fn default_rows() -> usize {
    CoreConfig::SHEET_ROWS
}

/// Maps appearance names to ids and serves sliced frame grids.
#[derive(Debug, Clone, Default)]
pub struct SheetRegistry {
    names: HashMap<String, AppearanceId>,
    grids: Vec<FrameGrid>,
}

impl SheetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a sheet manifest from a TOML file.
    pub fn load(path: &Path) -> LoadResult<Self> {
        let content = read_file(path)?;
        let manifest: SheetManifestToml = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse sheet manifest TOML: {}", e))?;

        let mut registry = Self::new();
        for entry in manifest.sheet {
            if entry.columns != CoreConfig::SHEET_COLUMNS || entry.rows != CoreConfig::SHEET_ROWS {
                anyhow::bail!(
                    "sheet '{}' has shape {}x{}, expected {}x{}",
                    entry.name,
                    entry.columns,
                    entry.rows,
                    CoreConfig::SHEET_COLUMNS,
                    CoreConfig::SHEET_ROWS,
                );
            }
            let frame_size = Vec2::new(entry.frame_size.0, entry.frame_size.1);
            registry.insert(&entry.name, frame_size)?;
        }
        Ok(registry)
    }

    /// Register an appearance and slice its grid. Names are unique.
    pub fn insert(&mut self, name: &str, frame_size: Vec2) -> LoadResult<AppearanceId> {
        if self.names.contains_key(name) {
            anyhow::bail!("duplicate sheet name '{}'", name);
        }
        let id = AppearanceId(self.grids.len() as u16);
        self.names.insert(name.to_owned(), id);
        self.grids.push(split_sheet(frame_size));
        Ok(id)
    }

    /// Register a single-still tile (scenery has no walk poses; every grid
    /// cell points at the same rectangle).
    pub fn insert_tile(&mut self, name: &str, size: Vec2) -> LoadResult<AppearanceId> {
        if self.names.contains_key(name) {
            anyhow::bail!("duplicate sheet name '{}'", name);
        }
        let id = AppearanceId(self.grids.len() as u16);
        self.names.insert(name.to_owned(), id);
        let still = Rect { pos: Vec2::ZERO, size };
        self.grids.push(FrameGrid::new(
            [[still; CoreConfig::SHEET_COLUMNS]; CoreConfig::SHEET_ROWS],
        ));
        Ok(id)
    }

    /// Resolve an appearance name to its id.
    pub fn id(&self, name: &str) -> Option<AppearanceId> {
        self.names.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }
}

impl SheetOracle for SheetRegistry {
    fn frames(&self, appearance: AppearanceId) -> Option<FrameGrid> {
        self.grids.get(usize::from(appearance.0)).copied()
    }
}

/// Slice a sheet into its grid of source rectangles.
///
/// Row order follows [`Direction::sheet_row`]; columns run left to right
/// within a row.
pub fn split_sheet(frame_size: Vec2) -> FrameGrid {
    let mut frames = [[Rect::default(); CoreConfig::SHEET_COLUMNS]; CoreConfig::SHEET_ROWS];
    for (row, row_frames) in frames.iter_mut().enumerate() {
        for (column, frame) in row_frames.iter_mut().enumerate() {
            *frame = Rect {
                pos: Vec2::new(column as i32 * frame_size.x, row as i32 * frame_size.y),
                size: frame_size,
            };
        }
    }
    FrameGrid::new(frames)
}
