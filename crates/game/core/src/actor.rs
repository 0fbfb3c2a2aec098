//! Actors: the player character and independently wandering NPCs.
//!
//! Both share one per-frame flow (animation sync, horizontal step, vertical
//! step, wraparound); they differ only in how their direction stack changes.
//! The player's stack is driven by key presses routed in from outside; a
//! wanderer re-rolls its own intent on a randomized timer and whenever it
//! bumps into something.

use crate::animation::{AnimationState, FrameGrid};
use crate::config::CoreConfig;
use crate::direction::{Direction, DirectionStack};
use crate::env::Pcg32;
use crate::geom::{Axis, Millis, Rect, Vec2, footprint_for};
use crate::motion::{self, StepOutcome};
use crate::world::{ActorId, AppearanceId, Obstacle};

/// Strategy deciding how an actor's held directions change over time.
#[derive(Clone, Debug)]
pub enum Controller {
    /// Directions arrive via [`Actor::press`] / [`Actor::release`].
    Player,
    /// Directions are re-rolled by a timer and by collision feedback.
    Wander(WanderBrain),
}

/// Decision state for a wandering actor.
///
/// Two states: idle (empty stack) and moving (one held direction). Every
/// transition re-rolls the delay uniformly from `wait_range` and restarts
/// the timer. A collision forces a transition immediately, bypassing the
/// timer.
#[derive(Clone, Debug)]
pub struct WanderBrain {
    wait_range: (u64, u64),
    wait_delay: u64,
    wait_time: Millis,
    rng: Pcg32,
}

impl WanderBrain {
    pub fn new(seed: u64, wait_range: (u64, u64)) -> Self {
        let mut rng = Pcg32::new(seed);
        let wait_delay = rng.range_u64(wait_range.0, wait_range.1);
        Self {
            wait_range,
            wait_delay,
            wait_time: Millis::ZERO,
            rng,
        }
    }

    fn due(&self, now: Millis) -> bool {
        now.saturating_since(self.wait_time) > self.wait_delay
    }

    /// Drop all held intents, then either pick a direction or go idle, each
    /// with equal probability. Re-rolls the delay and restarts the timer.
    fn decide(&mut self, stack: &mut DirectionStack, now: Millis) -> Option<Direction> {
        stack.clear();
        let choice = self.rng.index(Direction::COUNT + 1);
        let direction = Direction::ALL.get(choice).copied();
        if let Some(direction) = direction {
            stack.push(direction);
        }
        self.wait_delay = self.rng.range_u64(self.wait_range.0, self.wait_range.1);
        self.wait_time = now;
        direction
    }
}

/// A drawable, movable entity: the player or one wandering NPC.
#[derive(Debug)]
pub struct Actor {
    pub id: ActorId,
    pub appearance: AppearanceId,
    speed: i32,
    facing: Direction,
    stack: DirectionStack,
    animation: AnimationState,
    /// On-screen rectangle consumed by the compositor.
    pub rect: Rect,
    /// Collision footprint anchored to the visual rect's bottom center.
    pub hit_rect: Rect,
    wrap_margin: i32,
    dirty: bool,
    controller: Controller,
}

impl Actor {
    /// `position` is the center of the visual rectangle. A wanderer makes
    /// its first decision immediately, so it may already be moving on the
    /// first frame.
    pub fn new(
        id: ActorId,
        appearance: AppearanceId,
        grid: &FrameGrid,
        position: Vec2,
        speed: i32,
        facing: Direction,
        controller: Controller,
        config: &CoreConfig,
    ) -> Self {
        let rect = Rect::from_center(position, CoreConfig::SPRITE_SIZE);
        let hit_rect = footprint_for(&rect);
        let mut actor = Self {
            id,
            appearance,
            speed,
            facing,
            stack: DirectionStack::new(),
            animation: AnimationState::new(grid, facing, config),
            rect,
            hit_rect,
            wrap_margin: config.wrap_margin,
            dirty: true,
            controller,
        };
        if matches!(actor.controller, Controller::Wander(_)) {
            actor.redecide(Millis::ZERO);
        }
        actor
    }

    /// Per-frame update: animation first, then the horizontal step, the
    /// vertical step, and wraparound, in that fixed order. The collision
    /// flag in the outcome is what wander brains react to.
    pub fn update(&mut self, now: Millis, bounds: &Rect, obstacles: &[Obstacle]) -> StepOutcome {
        if let Controller::Wander(brain) = &self.controller
            && brain.due(now)
        {
            self.redecide(now);
        }

        let outcome = self.step(now, bounds, obstacles);

        if outcome.collided && matches!(self.controller, Controller::Wander(_)) {
            self.redecide(now);
        }
        outcome
    }

    fn step(&mut self, now: Millis, bounds: &Rect, obstacles: &[Obstacle]) -> StepOutcome {
        self.animation.sync(self.facing);
        if self.animation.advance(now) {
            self.dirty = true;
        }

        let mut outcome = StepOutcome::default();
        if !self.stack.is_empty() {
            self.dirty = true;
            for axis in Axis::ORDER {
                outcome = outcome.merge(motion::step_axis(
                    &mut self.rect,
                    &mut self.hit_rect,
                    self.facing,
                    self.speed,
                    axis,
                    obstacles,
                ));
            }
            motion::wrap(&mut self.rect, &mut self.hit_rect, bounds, self.wrap_margin);
        }
        outcome
    }

    fn redecide(&mut self, now: Millis) {
        let Controller::Wander(brain) = &mut self.controller else {
            return;
        };
        if let Some(direction) = brain.decide(&mut self.stack, now) {
            self.facing = direction;
        }
    }

    /// A pressed key adds or re-affirms an intent; the actor faces it at
    /// once.
    pub fn press(&mut self, direction: Direction) {
        self.stack.push(direction);
        self.facing = direction;
    }

    /// A released key drops the intent; the previous one (if any) takes
    /// over. With nothing left held, the last facing persists for the idle
    /// pose.
    pub fn release(&mut self, direction: Direction) {
        self.stack.release(direction);
        if let Some(top) = self.stack.current() {
            self.facing = top;
        }
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn is_moving(&self) -> bool {
        !self.stack.is_empty()
    }

    pub fn is_player(&self) -> bool {
        matches!(self.controller, Controller::Player)
    }

    /// Source rectangle of the pose to composite.
    pub fn frame(&self) -> Rect {
        self.animation.current()
    }

    /// True when the compositor must redraw this actor.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::FrameGrid;
    use crate::geom::Vec2;

    fn grid() -> FrameGrid {
        let size = CoreConfig::SPRITE_SIZE;
        let mut frames = [[Rect::default(); CoreConfig::SHEET_COLUMNS]; CoreConfig::SHEET_ROWS];
        for (row, row_frames) in frames.iter_mut().enumerate() {
            for (column, frame) in row_frames.iter_mut().enumerate() {
                *frame = Rect {
                    pos: Vec2::new(column as i32 * size.x, row as i32 * size.y),
                    size,
                };
            }
        }
        FrameGrid::new(frames)
    }

    fn player(position: Vec2, speed: i32) -> Actor {
        Actor::new(
            ActorId::PLAYER,
            AppearanceId(0),
            &grid(),
            position,
            speed,
            Direction::Down,
            Controller::Player,
            &CoreConfig::new(),
        )
    }

    fn wanderer(seed: u64) -> Actor {
        Actor::new(
            ActorId(1),
            AppearanceId(0),
            &grid(),
            Vec2::new(100, 100),
            2,
            Direction::Down,
            Controller::Wander(WanderBrain::new(seed, CoreConfig::DEFAULT_WAIT_RANGE)),
            &CoreConfig::new(),
        )
    }

    fn bounds() -> Rect {
        Rect::new(0, 0, 640, 480)
    }

    #[test]
    fn held_direction_moves_speed_per_frame_along_one_axis() {
        let mut actor = player(Vec2::new(100, 100), 3);
        let start = actor.rect;
        actor.press(Direction::Right);

        let outcome = actor.update(Millis(16), &bounds(), &[]);
        assert!(!outcome.collided);
        assert_eq!(actor.rect.pos.x, start.pos.x + 3);
        assert_eq!(actor.rect.pos.y, start.pos.y);
    }

    #[test]
    fn empty_stack_means_stationary() {
        let mut actor = player(Vec2::new(100, 100), 3);
        let start = actor.rect;

        let outcome = actor.update(Millis(16), &bounds(), &[]);
        assert!(!outcome.collided);
        assert_eq!(actor.rect, start);
    }

    #[test]
    fn release_resumes_previous_intent_and_facing() {
        let mut actor = player(Vec2::new(100, 100), 2);
        actor.press(Direction::Right);
        actor.press(Direction::Up);
        assert_eq!(actor.facing(), Direction::Up);

        actor.release(Direction::Up);
        assert_eq!(actor.facing(), Direction::Right);
        assert!(actor.is_moving());

        actor.release(Direction::Right);
        assert!(!actor.is_moving());
        // Last facing persists for the idle pose.
        assert_eq!(actor.facing(), Direction::Right);
    }

    #[test]
    fn blocked_walk_stabilizes_flush_and_keeps_reporting() {
        let mut actor = player(Vec2::new(100, 100), 2);
        let obstacles = [Obstacle::new(
            Vec2::new(108, 100),
            Vec2::new(20, 20),
            AppearanceId(1),
        )];
        actor.press(Direction::Right);

        let mut collisions = 0;
        for frame in 0..5 {
            let outcome = actor.update(Millis(frame * 16), &bounds(), &obstacles);
            if outcome.collided {
                collisions += 1;
            }
        }
        assert!(collisions > 0);
        assert_eq!(actor.hit_rect.right(), 108);

        let before = actor.rect;
        let outcome = actor.update(Millis(200), &bounds(), &obstacles);
        assert!(outcome.collided);
        assert_eq!(actor.rect, before);
        assert_eq!(actor.hit_rect.right(), 108);
    }

    #[test]
    fn wanderer_idles_about_one_time_in_five() {
        let mut brain = WanderBrain::new(0xBAD5EED, CoreConfig::DEFAULT_WAIT_RANGE);
        let mut stack = DirectionStack::new();
        let mut idle = 0u32;
        let cycles = 2000;
        for _ in 0..cycles {
            if brain.decide(&mut stack, Millis::ZERO).is_none() {
                idle += 1;
            }
        }
        let fraction = f64::from(idle) / f64::from(cycles);
        assert!(
            (0.15..=0.25).contains(&fraction),
            "idle fraction {fraction} far from 1/5"
        );
    }

    #[test]
    fn wanderer_redecides_when_the_delay_expires() {
        let mut actor = wanderer(3);
        let delay = match &actor.controller {
            Controller::Wander(brain) => brain.wait_delay,
            Controller::Player => unreachable!(),
        };

        // Before the delay elapses the timer stays put.
        actor.update(Millis(delay / 2), &bounds(), &[]);
        let wait_time = match &actor.controller {
            Controller::Wander(brain) => brain.wait_time,
            Controller::Player => unreachable!(),
        };
        assert_eq!(wait_time, Millis::ZERO);

        actor.update(Millis(delay + 1), &bounds(), &[]);
        let wait_time = match &actor.controller {
            Controller::Wander(brain) => brain.wait_time,
            Controller::Player => unreachable!(),
        };
        assert_eq!(wait_time, Millis(delay + 1));
    }

    #[test]
    fn collision_forces_an_immediate_redecision() {
        // Seal the wanderer in a box that touches its footprint (90..110,
        // 98..118) without overlapping it; the first step in any direction
        // collides.
        let mut actor = wanderer(9);
        let walls = [
            Obstacle::new(Vec2::new(74, 82), Vec2::new(20, 16), AppearanceId(1)),
            Obstacle::new(Vec2::new(94, 82), Vec2::new(20, 16), AppearanceId(1)),
            Obstacle::new(Vec2::new(106, 82), Vec2::new(20, 16), AppearanceId(1)),
            Obstacle::new(Vec2::new(74, 118), Vec2::new(20, 16), AppearanceId(1)),
            Obstacle::new(Vec2::new(94, 118), Vec2::new(20, 16), AppearanceId(1)),
            Obstacle::new(Vec2::new(106, 118), Vec2::new(20, 16), AppearanceId(1)),
            Obstacle::new(Vec2::new(70, 98), Vec2::new(20, 20), AppearanceId(1)),
            Obstacle::new(Vec2::new(110, 98), Vec2::new(20, 20), AppearanceId(1)),
        ];

        for frame in 1..=2000u64 {
            let now = Millis(frame * 16);
            let outcome = actor.update(now, &bounds(), &walls);
            if outcome.collided {
                let wait_time = match &actor.controller {
                    Controller::Wander(brain) => brain.wait_time,
                    Controller::Player => unreachable!(),
                };
                assert_eq!(wait_time, now, "collision must restart the timer");
                return;
            }
        }
        // A wanderer cannot stay idle for half a minute of simulated time;
        // getting here means collisions were never reported.
        panic!("wanderer never collided inside a sealed box");
    }
}
