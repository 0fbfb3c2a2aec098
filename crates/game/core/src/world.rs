use std::fmt;

use crate::geom::{Rect, Vec2};

/// Unique identifier for an actor within a scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(pub u32);

impl ActorId {
    /// Reserved identifier for the keyboard-controlled character.
    pub const PLAYER: Self = Self(0);

    #[inline]
    pub const fn is_player(self) -> bool {
        self.0 == Self::PLAYER.0
    }
}

impl Default for ActorId {
    fn default() -> Self {
        Self::PLAYER
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier for a registered character sheet or tile image.
///
/// The compositor resolves ids back to decoded pixels; this core only ever
/// handles ids and source rectangles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AppearanceId(pub u16);

impl fmt::Display for AppearanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "appearance:{}", self.0)
    }
}

/// Immutable static blocker occupying a fixed rectangle.
///
/// Obstacles are owned and placed by level-loading logic; the actor core
/// only reads them during collision resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Obstacle {
    pub rect: Rect,
    pub appearance: AppearanceId,
}

impl Obstacle {
    pub fn new(top_left: Vec2, size: Vec2, appearance: AppearanceId) -> Self {
        Self {
            rect: Rect {
                pos: top_left,
                size,
            },
            appearance,
        }
    }
}
