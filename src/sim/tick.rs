//! Simulation tick
//!
//! Advances a session by exactly one frame. Order inside a tick is fixed:
//! paddle, bricks, side walls, top wall or floor, then ball advance.

use super::bricks::HitOutcome;
use super::collision::{
    FloorContact, ball_brick_collision, ball_floor_collision, ball_side_wall_collision,
    ball_top_wall_collision,
};
use super::paddle::Intent;
use super::state::{GameEvent, GamePhase, SessionState};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Direction from held keys
    pub intent: Intent,
    /// Paddle left edge requested by the pointer this frame
    pub pointer_x: Option<f32>,
}

/// Advance the session by one tick and report what happened
pub fn tick(state: &mut SessionState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Terminal sessions wait for a restart
    if state.phase.is_terminal() {
        return events;
    }

    state.time_ticks += 1;

    // Pointer writes land before key movement
    if let Some(x) = input.pointer_x {
        state.paddle.set_absolute(x);
    }
    state.paddle.set_intent(input.intent);
    state.paddle.tick();

    if let Some(hit) = ball_brick_collision(&mut state.ball, &mut state.bricks) {
        let brick = &state.bricks.bricks[hit.index];
        let (column, row) = (brick.column, brick.row);
        match hit.outcome {
            HitOutcome::Advanced { tier } => {
                events.push(GameEvent::BrickHit { column, row, tier });
            }
            HitOutcome::Destroyed => {
                state.score += 1;
                events.push(GameEvent::BrickDestroyed { column, row });

                if state.score == state.total_bricks() {
                    log::info!("All {} bricks destroyed, session won", state.score);
                    state.phase = GamePhase::Won;
                    events.push(GameEvent::Won);
                    return events;
                }
            }
        }
    }

    if ball_side_wall_collision(&mut state.ball, &state.config.arena) {
        events.push(GameEvent::WallBounce);
    }

    if ball_top_wall_collision(&mut state.ball) {
        events.push(GameEvent::WallBounce);
    } else {
        match ball_floor_collision(&mut state.ball, &state.paddle, &state.config.arena) {
            FloorContact::Clear => {}
            FloorContact::PaddleBounce => {
                log::debug!("Paddle bounce at x={:.1}", state.ball.pos.x);
                events.push(GameEvent::PaddleBounce);
            }
            FloorContact::Miss => {
                state.lives = state.lives.saturating_sub(1);
                events.push(GameEvent::LifeLost {
                    remaining: state.lives,
                });
                if state.lives == 0 {
                    log::info!("Out of lives with score {}, session lost", state.score);
                    state.phase = GamePhase::Lost;
                    events.push(GameEvent::Lost);
                    return events;
                }
                log::info!("Ball lost, {} lives left", state.lives);
                state.reset_round();
            }
        }
    }

    state.ball.advance();

    events
}
