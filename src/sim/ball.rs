//! The ball: constant-speed motion with axis reflections

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Create a ball at its round-start position
    pub fn new(config: &GameConfig) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: config.ball.radius,
        };
        ball.reset_to_start(config);
        ball
    }

    /// Move by one tick of velocity
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Position after the next advance
    #[inline]
    pub fn next_pos(&self) -> Vec2 {
        self.pos + self.vel
    }

    #[inline]
    pub fn reflect_x(&mut self) {
        self.vel.x = -self.vel.x;
    }

    #[inline]
    pub fn reflect_y(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Re-center horizontally near the bottom and restore the start velocity
    pub fn reset_to_start(&mut self, config: &GameConfig) {
        self.pos = Vec2::new(
            config.arena.width / 2.0,
            config.arena.height - config.ball.start_offset,
        );
        self.vel = config.ball.start_velocity;
    }
}
