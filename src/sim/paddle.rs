//! Player paddle

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Horizontal movement intent from held keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Intent {
    Left,
    Right,
    #[default]
    None,
}

/// The player's paddle. Moves horizontally along the bottom edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    pub width: f32,
    pub height: f32,
    /// Distance moved per tick along the intent
    pub step: f32,
    /// Largest allowed `x` (arena width minus paddle width)
    pub max_x: f32,
    pub intent: Intent,
}

impl Paddle {
    /// Create a centered paddle
    pub fn new(config: &GameConfig) -> Self {
        let mut paddle = Self {
            x: 0.0,
            width: config.paddle.width,
            height: config.paddle.height,
            step: config.paddle.step,
            max_x: (config.arena.width - config.paddle.width).max(0.0),
            intent: Intent::None,
        };
        paddle.recenter();
        paddle
    }

    pub fn recenter(&mut self) {
        self.x = self.max_x / 2.0;
    }

    pub fn set_intent(&mut self, intent: Intent) {
        self.intent = intent;
    }

    /// Place the left edge directly (pointer control), clamped to the arena
    pub fn set_absolute(&mut self, x: f32) {
        self.x = x.clamp(0.0, self.max_x);
    }

    /// Apply one tick of intent-driven movement
    pub fn tick(&mut self) {
        let delta = match self.intent {
            Intent::Left => -self.step,
            Intent::Right => self.step,
            Intent::None => return,
        };
        self.x = (self.x + delta).clamp(0.0, self.max_x);
    }

    /// True if `x` lies strictly inside the paddle's horizontal span
    #[inline]
    pub fn spans(&self, x: f32) -> bool {
        x > self.x && x < self.x + self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_centered() {
        let paddle = Paddle::new(&GameConfig::default());
        assert_eq!(paddle.x, 202.5);
        assert_eq!(paddle.max_x, 405.0);
    }

    #[test]
    fn test_tick_moves_by_step_and_clamps() {
        let mut paddle = Paddle::new(&GameConfig::default());
        paddle.set_intent(Intent::Right);
        paddle.tick();
        assert_eq!(paddle.x, 209.5);

        for _ in 0..100 {
            paddle.tick();
        }
        assert_eq!(paddle.x, paddle.max_x);

        paddle.set_intent(Intent::Left);
        for _ in 0..100 {
            paddle.tick();
        }
        assert_eq!(paddle.x, 0.0);

        paddle.set_intent(Intent::None);
        paddle.tick();
        assert_eq!(paddle.x, 0.0);
    }

    #[test]
    fn test_set_absolute_clamps() {
        let mut paddle = Paddle::new(&GameConfig::default());
        paddle.set_absolute(-20.0);
        assert_eq!(paddle.x, 0.0);
        paddle.set_absolute(1000.0);
        assert_eq!(paddle.x, 405.0);
        paddle.set_absolute(100.0);
        assert_eq!(paddle.x, 100.0);
    }

    #[test]
    fn test_spans_is_strict() {
        let mut paddle = Paddle::new(&GameConfig::default());
        paddle.set_absolute(100.0);
        assert!(paddle.spans(140.0));
        assert!(!paddle.spans(100.0));
        assert!(!paddle.spans(175.0));
    }
}
