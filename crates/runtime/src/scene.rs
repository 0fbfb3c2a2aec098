//! Scene state and per-frame stepping.
//!
//! A scene owns its actors and obstacles exclusively; nothing outside the
//! frame loop mutates them except the input layer nudging the player's
//! direction stack. Actors step in insertion order, and obstacles are
//! immutable for the whole frame, so per-actor resolution order cannot
//! change the outcome against the static world.

use game_core::{
    Actor, ActorId, Controller, CoreConfig, Millis, Obstacle, Rect, SheetOracle, StepOutcome,
    WanderBrain,
};
use game_content::{ActorKind, SceneSpec, SheetRegistry};

use crate::error::SceneError;

/// Per-frame stepping statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Actors that corrected at least one overlap this frame.
    pub collisions: u32,
    /// Actors whose resolver hit its iteration cap this frame. Nonzero
    /// means the level leaves gaps narrower than a footprint.
    pub capped: u32,
}

/// A running scene: one player, any number of wanderers, static scenery.
#[derive(Debug)]
pub struct Scene {
    bounds: Rect,
    obstacles: Vec<Obstacle>,
    actors: Vec<Actor>,
    player: usize,
}

impl Scene {
    /// Build a scene from a loaded specification.
    ///
    /// Wanderers without a pinned seed get one from the process RNG; pin
    /// seeds in the scene file to make a session replayable.
    pub fn build(
        spec: &SceneSpec,
        sheets: &SheetRegistry,
        config: &CoreConfig,
    ) -> Result<Self, SceneError> {
        let mut obstacles = Vec::with_capacity(spec.obstacles.len());
        for obstacle in &spec.obstacles {
            let appearance = sheets
                .id(&obstacle.appearance)
                .ok_or_else(|| SceneError::UnknownAppearance(obstacle.appearance.clone()))?;
            obstacles.push(Obstacle::new(obstacle.position, obstacle.size, appearance));
        }

        let mut actors = Vec::with_capacity(spec.actors.len());
        let mut player = None;
        for actor_spec in &spec.actors {
            let appearance = sheets
                .id(&actor_spec.appearance)
                .ok_or_else(|| SceneError::UnknownAppearance(actor_spec.appearance.clone()))?;
            let grid = sheets
                .frames(appearance)
                .ok_or_else(|| SceneError::UnknownAppearance(actor_spec.appearance.clone()))?;

            let controller = match actor_spec.kind {
                ActorKind::Player => {
                    if player.is_some() {
                        return Err(SceneError::DuplicatePlayer);
                    }
                    player = Some(actors.len());
                    Controller::Player
                }
                ActorKind::Wander => {
                    let seed = actor_spec.seed.unwrap_or_else(rand::random);
                    let wait_range = actor_spec.wait_range.unwrap_or(config.wait_range);
                    Controller::Wander(WanderBrain::new(seed, wait_range))
                }
            };

            let id = ActorId(actors.len() as u32);
            actors.push(Actor::new(
                id,
                appearance,
                &grid,
                actor_spec.position,
                actor_spec.speed,
                actor_spec.facing,
                controller,
                config,
            ));
        }

        let player = player.ok_or(SceneError::MissingPlayer)?;
        tracing::debug!(
            "scene built: {} actors, {} obstacles, bounds {}",
            actors.len(),
            obstacles.len(),
            spec.bounds,
        );

        Ok(Self {
            bounds: spec.bounds,
            obstacles,
            actors,
            player,
        })
    }

    /// Step every actor once. `now` must be monotonically non-decreasing
    /// across calls.
    pub fn advance_frame(&mut self, now: Millis) -> FrameReport {
        let mut report = FrameReport::default();
        for actor in &mut self.actors {
            let outcome: StepOutcome = actor.update(now, &self.bounds, &self.obstacles);
            if outcome.collided {
                report.collisions += 1;
                tracing::trace!("actor {} corrected a collision", actor.id);
            }
            if outcome.capped {
                report.capped += 1;
                tracing::warn!(
                    "actor {} hit the collision resolver cap; an obstacle gap is narrower than a footprint",
                    actor.id,
                );
            }
        }
        report
    }

    pub fn player(&self) -> &Actor {
        &self.actors[self.player]
    }

    pub fn player_mut(&mut self) -> &mut Actor {
        &mut self.actors[self.player]
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }
}
