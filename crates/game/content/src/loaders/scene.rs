//! Scene layout loader.
//!
//! A scene file fixes the viewport, places the static obstacles on a tile
//! grid, and lists the actors to spawn. Obstacle positions are top-left
//! corners; actor positions are visual-rect centers.

use std::path::Path;

use game_core::{Direction, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Scene structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SceneRon {
    bounds: (i32, i32),
    tile_size: (i32, i32),
    obstacle_appearance: String,
    obstacles: Vec<(i32, i32)>,
    actors: Vec<ActorRon>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ActorRon {
    kind: ActorKind,
    appearance: String,
    position: (i32, i32),
    speed: i32,
    #[serde(default = "default_facing")]
    facing: Direction,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    wait_range: Option<(u64, u64)>,
}

fn default_facing() -> Direction {
    Direction::Down
}

/// How an actor's direction changes are decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorKind {
    Player,
    Wander,
}

/// One actor to spawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorSpec {
    pub kind: ActorKind,
    pub appearance: String,
    pub position: Vec2,
    pub speed: i32,
    pub facing: Direction,
    /// Pin the wander seed for replays; `None` lets the runtime roll one.
    pub seed: Option<u64>,
    /// Override the configured re-decision delay bounds.
    pub wait_range: Option<(u64, u64)>,
}

/// One obstacle to place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObstacleSpec {
    pub position: Vec2,
    pub size: Vec2,
    pub appearance: String,
}

/// Everything the runtime needs to build a scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneSpec {
    pub bounds: Rect,
    pub obstacles: Vec<ObstacleSpec>,
    pub actors: Vec<ActorSpec>,
}

/// Loader for scene layout from RON files.
pub struct SceneLoader;

impl SceneLoader {
    /// Load a scene layout from a RON file.
    pub fn load(path: &Path) -> LoadResult<SceneSpec> {
        let content = read_file(path)?;
        let data: SceneRon = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scene RON: {}", e))?;

        let tile_size = Vec2::new(data.tile_size.0, data.tile_size.1);
        let obstacles = data
            .obstacles
            .into_iter()
            .map(|(x, y)| ObstacleSpec {
                position: Vec2::new(x, y),
                size: tile_size,
                appearance: data.obstacle_appearance.clone(),
            })
            .collect();

        let actors = data
            .actors
            .into_iter()
            .map(|actor| ActorSpec {
                kind: actor.kind,
                appearance: actor.appearance,
                position: Vec2::new(actor.position.0, actor.position.1),
                speed: actor.speed,
                facing: actor.facing,
                seed: actor.seed,
                wait_range: actor.wait_range,
            })
            .collect();

        Ok(SceneSpec {
            bounds: Rect::new(0, 0, data.bounds.0, data.bounds.1),
            obstacles,
            actors,
        })
    }
}
