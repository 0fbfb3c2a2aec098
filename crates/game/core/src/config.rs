use crate::geom::Vec2;

/// Core configuration constants and tunable parameters.
///
/// Components never read module-level globals; a `CoreConfig` value is
/// threaded through construction so harnesses can tighten or loosen the
/// timing behavior per scene.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoreConfig {
    /// Walk animation rate in poses per second. The cadence is time-based:
    /// a slow render loop shows fewer poses per second, never faster ones.
    pub animate_fps: u32,
    /// Distance kept from a screen edge when an actor wraps to the opposite
    /// side, so the sprite does not flicker on the boundary.
    pub wrap_margin: i32,
    /// Inclusive bounds (milliseconds) for the randomized wander
    /// re-decision delay.
    pub wait_range: (u64, u64),
}

impl CoreConfig {
    // ===== compile-time constants used as type parameters =====
    /// At most one held intent per direction.
    pub const MAX_HELD_DIRECTIONS: usize = 4;

    // ===== sheet and footprint geometry =====
    /// Size of one still in a character sheet.
    pub const SPRITE_SIZE: Vec2 = Vec2::new(32, 36);
    /// Collision footprint, smaller than the visual rect and anchored to
    /// its bottom center.
    pub const FOOTPRINT_SIZE: Vec2 = Vec2::new(20, 20);
    /// Sheet grid shape: one row per direction, three poses per row.
    pub const SHEET_ROWS: usize = 4;
    pub const SHEET_COLUMNS: usize = 3;

    /// Upper bound on push-out corrections per axis. Well-formed levels
    /// leave gaps at least one footprint wide and never get near this;
    /// hitting it is reported through `StepOutcome::capped` instead of
    /// looping forever.
    pub const MAX_RESOLVE_STEPS: usize = 16;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ANIMATE_FPS: u32 = 10;
    pub const DEFAULT_WRAP_MARGIN: i32 = 10;
    pub const DEFAULT_WAIT_RANGE: (u64, u64) = (500, 2000);

    pub fn new() -> Self {
        Self {
            animate_fps: Self::DEFAULT_ANIMATE_FPS,
            wrap_margin: Self::DEFAULT_WRAP_MARGIN,
            wait_range: Self::DEFAULT_WAIT_RANGE,
        }
    }

    /// Milliseconds between animation advances.
    pub fn frame_interval_ms(&self) -> u64 {
        1000 / u64::from(self.animate_fps.max(1))
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new()
    }
}
