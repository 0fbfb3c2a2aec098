use arrayvec::ArrayVec;

use crate::config::CoreConfig;
use crate::geom::Axis;

/// Facing and travel directions over the screen plane.
///
/// The variant order fixes the sheet row layout: character sheets place the
/// up-facing row first, then down, left, right.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
    pub const COUNT: usize = 4;

    /// Unit travel vector. Exactly one component is nonzero; +y is down.
    pub const fn unit(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The axis selected by the nonzero component of [`Self::unit`].
    pub const fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Y,
            Direction::Left | Direction::Right => Axis::X,
        }
    }

    /// Row index for this direction in a character sheet frame grid.
    pub const fn sheet_row(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

/// Ordered, duplicate-free stack of held movement intents.
///
/// The top entry is the direction the actor currently travels. Pushing a
/// direction that is already held re-affirms it: the entry moves to the top
/// without duplication. Releasing restores the previous intent, so holding
/// right, tapping up, and letting go resumes the rightward walk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectionStack {
    held: ArrayVec<Direction, { CoreConfig::MAX_HELD_DIRECTIONS }>,
}

impl DirectionStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or re-affirm an intent; it becomes the current direction.
    pub fn push(&mut self, direction: Direction) {
        if let Some(index) = self.held.iter().position(|&d| d == direction) {
            self.held.remove(index);
        }
        self.held.push(direction);
    }

    /// Release an intent. Releasing a direction that is not held is a no-op.
    pub fn release(&mut self, direction: Direction) {
        if let Some(index) = self.held.iter().position(|&d| d == direction) {
            self.held.remove(index);
        }
    }

    /// Drop every held intent.
    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// The most recently affirmed intent, if any is held.
    pub fn current(&self) -> Option<Direction> {
        self.held.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }
}
