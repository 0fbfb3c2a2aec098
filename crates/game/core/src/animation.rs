//! Walk-cycle animation synchronized to travel direction and elapsed time.
//!
//! A character sheet is a fixed grid of stills: one row per direction, three
//! columns per row. Walking alternates between the outer columns (neutral
//! stance, stepping stance); the middle column is unused while walking. Each
//! direction owns its own two-pose cycle, and a cycle keeps its phase while
//! the actor faces elsewhere, so returning to a direction resumes mid-stride
//! rather than restarting.

use crate::config::CoreConfig;
use crate::direction::Direction;
use crate::geom::{Millis, Rect};

/// Source rectangles for one appearance: rows are directions (see
/// [`Direction::sheet_row`]), columns are poses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameGrid {
    frames: [[Rect; CoreConfig::SHEET_COLUMNS]; CoreConfig::SHEET_ROWS],
}

impl FrameGrid {
    pub fn new(frames: [[Rect; CoreConfig::SHEET_COLUMNS]; CoreConfig::SHEET_ROWS]) -> Self {
        Self { frames }
    }

    pub fn frame(&self, direction: Direction, column: usize) -> Rect {
        self.frames[direction.sheet_row()][column]
    }
}

/// Unending two-pose round robin for one direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WalkCycle {
    poses: [Rect; 2],
    phase: usize,
}

impl WalkCycle {
    /// Outer columns of the direction's sheet row.
    fn from_row(grid: &FrameGrid, direction: Direction) -> Self {
        Self {
            poses: [grid.frame(direction, 0), grid.frame(direction, 2)],
            phase: 0,
        }
    }

    /// Current pose; the phase advances for the next call.
    pub fn next(&mut self) -> Rect {
        let pose = self.poses[self.phase];
        self.phase = (self.phase + 1) % self.poses.len();
        pose
    }
}

/// One walk cycle per direction, all built from the same sheet grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameBank {
    cycles: [WalkCycle; Direction::COUNT],
}

impl FrameBank {
    pub fn new(grid: &FrameGrid) -> Self {
        Self {
            cycles: Direction::ALL.map(|direction| WalkCycle::from_row(grid, direction)),
        }
    }

    fn cycle_mut(&mut self, direction: Direction) -> &mut WalkCycle {
        &mut self.cycles[direction.sheet_row()]
    }
}

/// Tracks the pose an actor displays.
///
/// `sync` follows the facing direction; `advance` steps the active cycle on
/// a wall-time cadence. Pose selection is time-based, not frame-based: a
/// render loop running at half speed shows half the poses, each held twice
/// as long.
#[derive(Clone, Copy, Debug)]
pub struct AnimationState {
    bank: FrameBank,
    facing: Direction,
    current: Rect,
    redraw: bool,
    animate_timer: Millis,
    frame_interval: u64,
}

impl AnimationState {
    pub fn new(grid: &FrameGrid, facing: Direction, config: &CoreConfig) -> Self {
        let mut state = Self {
            bank: FrameBank::new(grid),
            facing,
            current: grid.frame(facing, 0),
            redraw: true,
            animate_timer: Millis::ZERO,
            frame_interval: config.frame_interval_ms(),
        };
        // Draw the initial pose so the actor is visible before its first
        // update tick.
        state.advance(Millis::ZERO);
        state
    }

    /// Switch the active cycle when the facing changes. The next `advance`
    /// draws immediately, regardless of the cadence timer.
    pub fn sync(&mut self, facing: Direction) {
        if facing != self.facing {
            self.facing = facing;
            self.redraw = true;
        }
    }

    /// Step the active cycle if a redraw is pending or the cadence interval
    /// elapsed. Returns true when the displayed pose changed.
    pub fn advance(&mut self, now: Millis) -> bool {
        let due = now.saturating_since(self.animate_timer) > self.frame_interval;
        let changed = self.redraw || due;
        if changed {
            self.current = self.bank.cycle_mut(self.facing).next();
            self.animate_timer = now;
        }
        self.redraw = false;
        changed
    }

    /// Source rectangle of the pose currently on display.
    pub fn current(&self) -> Rect {
        self.current
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }
}
