//! Collision detection and response
//!
//! Each check looks at the ball before it advances. Wall and floor checks
//! are predictive (they test `pos + vel`); brick and paddle checks use the
//! current center.

use super::ball::Ball;
use super::bricks::{BrickField, HitOutcome};
use super::paddle::Paddle;
use crate::config::ArenaConfig;

/// Result of a brick check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickCollision {
    /// Index into [`BrickField::bricks`]
    pub index: usize,
    pub outcome: HitOutcome,
}

/// Result of the bottom edge check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorContact {
    /// Ball stays above the bottom edge
    Clear,
    /// Paddle was under the ball; vertical velocity flipped
    PaddleBounce,
    /// Ball got past the paddle
    Miss,
}

/// Resolve at most one brick hit at the ball's current center.
///
/// A hit always flips vertical velocity, then advances or destroys the brick.
pub fn ball_brick_collision(ball: &mut Ball, bricks: &mut BrickField) -> Option<BrickCollision> {
    let index = bricks.hit_test(ball.pos)?;
    ball.reflect_y();
    let outcome = bricks.register_hit(index)?;
    Some(BrickCollision { index, outcome })
}

/// Bounce off the left or right wall if the next step would cross it
pub fn ball_side_wall_collision(ball: &mut Ball, arena: &ArenaConfig) -> bool {
    let next_x = ball.next_pos().x;
    if next_x > arena.width - ball.radius || next_x < ball.radius {
        ball.reflect_x();
        return true;
    }
    false
}

/// Bounce off the top wall if the next step would cross it
pub fn ball_top_wall_collision(ball: &mut Ball) -> bool {
    if ball.next_pos().y < ball.radius {
        ball.reflect_y();
        return true;
    }
    false
}

/// Check the bottom edge: bounce off the paddle or report a miss
pub fn ball_floor_collision(ball: &mut Ball, paddle: &Paddle, arena: &ArenaConfig) -> FloorContact {
    if ball.next_pos().y <= arena.height - ball.radius {
        return FloorContact::Clear;
    }
    if paddle.spans(ball.pos.x) {
        ball.reflect_y();
        FloorContact::PaddleBounce
    } else {
        FloorContact::Miss
    }
}
