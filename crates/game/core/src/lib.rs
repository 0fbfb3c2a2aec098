//! Deterministic actor logic for a single-screen 2D world.
//!
//! `game-core` defines the canonical per-frame rules: held-direction stacks,
//! axis-separated movement with push-out collision correction, screen-edge
//! wraparound, and time-based walk animation. The crate performs no I/O and
//! reads no clock or OS randomness; callers supply a monotonic timestamp each
//! frame and seed the wander brains explicitly, so a session can be replayed
//! exactly. Supporting crates depend on the types re-exported here.
pub mod actor;
pub mod animation;
pub mod config;
pub mod direction;
pub mod env;
pub mod geom;
pub mod motion;
pub mod world;

pub use actor::{Actor, Controller, WanderBrain};
pub use animation::{AnimationState, FrameBank, FrameGrid, WalkCycle};
pub use config::CoreConfig;
pub use direction::{Direction, DirectionStack};
pub use env::{Pcg32, SheetOracle};
pub use geom::{Axis, Millis, Rect, Vec2};
pub use motion::StepOutcome;
pub use world::{ActorId, AppearanceId, Obstacle};
