//! Axis-separated movement, push-out collision correction, and screen wrap.
//!
//! These helpers operate on plain rectangles so they are easy to test
//! without constructing a full actor. The caller moves the horizontal axis
//! strictly before the vertical one; a diagonal walk blocked on one axis can
//! still make progress on the other.

use crate::config::CoreConfig;
use crate::direction::Direction;
use crate::geom::{Axis, Rect};
use crate::world::Obstacle;

/// Result of one movement step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// At least one overlap was corrected.
    pub collided: bool,
    /// The resolver stopped at [`CoreConfig::MAX_RESOLVE_STEPS`] with an
    /// overlap still present. Only pathological obstacle layouts (gaps
    /// narrower than a footprint) get here.
    pub capped: bool,
}

impl StepOutcome {
    pub fn merge(self, other: StepOutcome) -> StepOutcome {
        StepOutcome {
            collided: self.collided || other.collided,
            capped: self.capped || other.capped,
        }
    }
}

/// Displace the visual rect along one axis by `speed` in `direction`, then
/// push the footprint out of any obstacle it landed in.
///
/// Directions orthogonal to `axis` contribute no displacement but still run
/// the resolution pass, so a prior correction on the other axis is honored.
pub fn step_axis(
    visual: &mut Rect,
    footprint: &mut Rect,
    direction: Direction,
    speed: i32,
    axis: Axis,
    obstacles: &[Obstacle],
) -> StepOutcome {
    let (dx, dy) = direction.unit();
    let delta = match axis {
        Axis::X => speed * dx,
        Axis::Y => speed * dy,
    };
    visual.shift(axis, delta);
    footprint.anchor_midbottom(visual.midbottom());
    resolve_axis(visual, footprint, axis, obstacles)
}

/// Iteratively push `footprint` out of overlapping obstacles along `axis`,
/// re-anchoring `visual` after each correction.
///
/// Push direction compares minimum edges: a footprint starting before the
/// obstacle is pushed back flush against it, anything else is pushed
/// forward past it. The comparison is a strict less-than, so exact edge
/// alignment resolves forward, deterministically.
pub fn resolve_axis(
    visual: &mut Rect,
    footprint: &mut Rect,
    axis: Axis,
    obstacles: &[Obstacle],
) -> StepOutcome {
    let mut outcome = StepOutcome::default();
    let mut steps = 0;
    while let Some(obstacle) = obstacles.iter().find(|o| o.rect.overlaps(footprint)) {
        if steps == CoreConfig::MAX_RESOLVE_STEPS {
            outcome.capped = true;
            break;
        }
        steps += 1;
        outcome.collided = true;

        let edge = obstacle.rect.min(axis);
        if footprint.min(axis) < edge {
            footprint.set_min(axis, edge - footprint.extent(axis));
        } else {
            footprint.set_min(axis, edge + obstacle.rect.extent(axis));
        }
        visual.anchor_midbottom(footprint.midbottom());
    }
    outcome
}

/// Teleport to the opposite edge once a screen bound is crossed.
///
/// The margin keeps the sprite from flickering right on the boundary.
/// Horizontal and vertical checks are independent; both can fire in the
/// same tick. The footprint is re-anchored unconditionally.
pub fn wrap(visual: &mut Rect, footprint: &mut Rect, bounds: &Rect, margin: i32) {
    if visual.left() + margin >= bounds.right() {
        visual.set_right(bounds.left() + margin);
    } else if visual.right() - margin <= bounds.left() {
        visual.set_left(bounds.right() - margin);
    }
    if visual.top() + margin >= bounds.bottom() {
        visual.set_bottom(bounds.top() + margin);
    } else if visual.bottom() - margin <= bounds.top() {
        visual.set_top(bounds.bottom() - margin);
    }
    footprint.anchor_midbottom(visual.midbottom());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{Vec2, footprint_for};
    use crate::world::AppearanceId;

    fn actor_rects(center: Vec2) -> (Rect, Rect) {
        let visual = Rect::from_center(center, CoreConfig::SPRITE_SIZE);
        let footprint = footprint_for(&visual);
        (visual, footprint)
    }

    fn stone(x: i32, y: i32) -> Obstacle {
        Obstacle::new(Vec2::new(x, y), Vec2::new(20, 20), AppearanceId(0))
    }

    #[test]
    fn unobstructed_step_moves_one_axis_only() {
        let (mut visual, mut footprint) = actor_rects(Vec2::new(100, 100));
        let before = visual;

        let outcome = step_axis(
            &mut visual,
            &mut footprint,
            Direction::Right,
            2,
            Axis::X,
            &[],
        );
        assert!(!outcome.collided);
        assert_eq!(visual.pos.x, before.pos.x + 2);
        assert_eq!(visual.pos.y, before.pos.y);

        let outcome = step_axis(
            &mut visual,
            &mut footprint,
            Direction::Right,
            2,
            Axis::Y,
            &[],
        );
        assert!(!outcome.collided);
        assert_eq!(visual.pos.y, before.pos.y);
        assert_eq!(footprint.midbottom(), visual.midbottom());
    }

    #[test]
    fn rightward_walk_stops_flush_against_obstacle() {
        // Footprint spans x 90..110; the stone starts at 108.
        let (mut visual, mut footprint) = actor_rects(Vec2::new(100, 100));
        let obstacles = [stone(108, 100)];

        let outcome = step_axis(
            &mut visual,
            &mut footprint,
            Direction::Right,
            2,
            Axis::X,
            &obstacles,
        );
        assert!(outcome.collided);
        assert!(!outcome.capped);
        assert_eq!(footprint.right(), 108);
        assert_eq!(visual.midbottom(), footprint.midbottom());
        assert!(!obstacles[0].rect.overlaps(&footprint));
    }

    #[test]
    fn exact_edge_alignment_pushes_forward() {
        let (mut visual, mut footprint) = actor_rects(Vec2::new(0, 0));
        // Footprint min edge exactly on the obstacle's min edge.
        footprint.set_min(Axis::X, 108);
        footprint.set_min(Axis::Y, 100);
        visual.anchor_midbottom(footprint.midbottom());
        let obstacles = [stone(108, 100)];

        let outcome = resolve_axis(&mut visual, &mut footprint, Axis::X, &obstacles);
        assert!(outcome.collided);
        assert_eq!(footprint.left(), 128, "tie resolves past the obstacle");
    }

    #[test]
    fn starting_before_the_edge_pushes_back() {
        let (mut visual, mut footprint) = actor_rects(Vec2::new(0, 0));
        footprint.set_min(Axis::X, 107);
        footprint.set_min(Axis::Y, 100);
        visual.anchor_midbottom(footprint.midbottom());
        let obstacles = [stone(108, 100)];

        let outcome = resolve_axis(&mut visual, &mut footprint, Axis::X, &obstacles);
        assert!(outcome.collided);
        assert_eq!(footprint.right(), 108);
    }

    #[test]
    fn impossible_gap_reports_capped_instead_of_hanging() {
        let (mut visual, mut footprint) = actor_rects(Vec2::new(0, 0));
        // Two stones 10px apart; a 20px footprint can never fit between,
        // so every correction lands it inside the other stone.
        footprint.set_min(Axis::X, 95);
        footprint.set_min(Axis::Y, 100);
        visual.anchor_midbottom(footprint.midbottom());
        let obstacles = [stone(90, 100), stone(120, 100)];

        let outcome = resolve_axis(&mut visual, &mut footprint, Axis::X, &obstacles);
        assert!(outcome.collided);
        assert!(outcome.capped);
    }

    #[test]
    fn wrap_relocates_past_the_right_bound() {
        let bounds = Rect::new(0, 0, 640, 480);
        let (mut visual, mut footprint) = actor_rects(Vec2::new(0, 0));
        visual.set_left(635);
        wrap(&mut visual, &mut footprint, &bounds, 10);

        assert_eq!(visual.right(), 10);
        assert_eq!(footprint.midbottom(), visual.midbottom());
    }

    #[test]
    fn wrap_axes_are_independent_and_can_co_occur() {
        let bounds = Rect::new(0, 0, 640, 480);
        let (mut visual, mut footprint) = actor_rects(Vec2::new(0, 0));
        visual.set_left(635);
        visual.set_top(475);
        wrap(&mut visual, &mut footprint, &bounds, 10);

        assert_eq!(visual.right(), 10);
        assert_eq!(visual.bottom(), 10);
    }

    #[test]
    fn wrap_resyncs_footprint_even_without_wrapping() {
        let bounds = Rect::new(0, 0, 640, 480);
        let (mut visual, mut footprint) = actor_rects(Vec2::new(300, 200));
        footprint.set_min(Axis::X, 0);
        wrap(&mut visual, &mut footprint, &bounds, 10);
        assert_eq!(footprint.midbottom(), visual.midbottom());
    }
}
