//! Frame-stepped orchestration for the actor core.
//!
//! This crate wires loaded content into a running scene: it owns the actor
//! collection and obstacle set, routes already-polled keyboard events to
//! the player, and steps every actor once per rendered frame. All work is
//! synchronous; the caller drives `advance_frame` from its render loop and
//! supplies the timestamp.
//!
//! Modules are organized by responsibility:
//! - [`scene`] hosts the scene state, builder, and per-frame stepping
//! - [`input`] translates key events into player intents
//! - [`clock`] adapts the wall clock to the core's millisecond timestamps
//! - [`error`] carries scene construction failures
pub mod clock;
pub mod error;
pub mod input;
pub mod scene;

pub use clock::FrameClock;
pub use error::SceneError;
pub use input::InputHandler;
pub use scene::{FrameReport, Scene};
