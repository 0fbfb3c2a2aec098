//! Seams to read-only collaborators.
//!
//! The actor core does not load sheets or roll OS randomness itself: frame
//! grids arrive through the [`SheetOracle`] trait and wander decisions draw
//! from an explicitly seeded [`Pcg32`]. Both keep the per-frame rules
//! deterministic and replayable.
mod rng;
mod sheets;

pub use rng::Pcg32;
pub use sheets::SheetOracle;
