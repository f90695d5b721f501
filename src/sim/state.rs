//! Session state and core simulation types
//!
//! Everything a tick reads or writes lives in [`SessionState`]. Nothing in
//! the simulation is global; a fresh session is a fresh value.

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::bricks::BrickField;
use super::paddle::Paddle;
use crate::config::GameConfig;
use crate::consts::{GAME_OVER_MESSAGE, WIN_MESSAGE};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Every brick destroyed (terminal)
    Won,
    /// Out of lives (terminal)
    Lost,
}

impl GamePhase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::Playing)
    }

    /// Message for the end-of-game notifier
    pub fn message(&self) -> Option<&'static str> {
        match self {
            GamePhase::Playing => None,
            GamePhase::Won => Some(WIN_MESSAGE),
            GamePhase::Lost => Some(GAME_OVER_MESSAGE),
        }
    }
}

/// Things that happened during a tick, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Brick survived the hit and moved up a color tier
    BrickHit { column: u32, row: u32, tier: u8 },
    /// Brick destroyed; score went up by one
    BrickDestroyed { column: u32, row: u32 },
    WallBounce,
    PaddleBounce,
    /// Ball missed the paddle
    LifeLost { remaining: u32 },
    Won,
    Lost,
}

/// Complete state of one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub config: GameConfig,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickField,
    pub score: u32,
    pub lives: u32,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl SessionState {
    /// Start a session: fresh grid, zero score, full lives
    pub fn new(config: GameConfig) -> Self {
        let bricks = config.grid.generate(config.last_tier());
        Self {
            ball: Ball::new(&config),
            paddle: Paddle::new(&config),
            bricks,
            score: 0,
            lives: config.lives,
            phase: GamePhase::Playing,
            time_ticks: 0,
            config,
        }
    }

    /// Score that wins the session
    pub fn total_bricks(&self) -> u32 {
        self.config.total_bricks()
    }

    /// Re-center ball and paddle after a lost life. Score, lives and bricks stay.
    pub fn reset_round(&mut self) {
        self.ball.reset_to_start(&self.config);
        self.paddle.recenter();
    }

    /// Phase implied by score, lives and the brick field alone
    pub fn derived_phase(&self) -> GamePhase {
        if self.score >= self.total_bricks() && self.bricks.all_destroyed() {
            GamePhase::Won
        } else if self.lives == 0 {
            GamePhase::Lost
        } else {
            GamePhase::Playing
        }
    }
}
