//! Game configuration
//!
//! Every tunable of a session lives here. Defaults reproduce the classic
//! 480x320 board; a JSON document can override any subset of fields.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::GridLayout;

/// Errors raised while loading or validating a [`GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be positive")]
    NonPositive { field: &'static str },
    #[error("brick grid needs at least one column and one row")]
    EmptyGrid,
    #[error("brick grid of {columns}x{rows} is too large")]
    GridTooLarge { columns: u32, rows: u32 },
    #[error("brick palette must contain at least one color")]
    EmptyPalette,
    #[error("paddle width {paddle} exceeds arena width {arena}")]
    PaddleTooWide { paddle: f32, arena: f32 },
    #[error("a session needs at least one life")]
    NoLives,
}

/// Playfield bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleConfig {
    pub width: f32,
    pub height: f32,
    /// Distance moved per tick while a direction key is held
    pub step: f32,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            step: PADDLE_STEP,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    /// Velocity restored at every round start
    pub start_velocity: Vec2,
    /// Start height above the bottom edge
    pub start_offset: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            start_velocity: Vec2::new(BALL_START_DX, BALL_START_DY),
            start_offset: BALL_START_OFFSET,
        }
    }
}

/// Complete session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub arena: ArenaConfig,
    pub paddle: PaddleConfig,
    pub ball: BallConfig,
    pub grid: GridLayout,
    /// Lives at session start
    pub lives: u32,
    /// Brick fill colors, indexed by color tier
    pub palette: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena: ArenaConfig::default(),
            paddle: PaddleConfig::default(),
            ball: BallConfig::default(),
            grid: GridLayout::default(),
            lives: START_LIVES,
            palette: BRICK_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl GameConfig {
    /// Parse a JSON document and validate the result
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Check startup preconditions. The simulation assumes a valid config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("arena.width", self.arena.width),
            ("arena.height", self.arena.height),
            ("paddle.width", self.paddle.width),
            ("paddle.height", self.paddle.height),
            ("paddle.step", self.paddle.step),
            ("ball.radius", self.ball.radius),
            ("grid.brick_width", self.grid.brick_width),
            ("grid.brick_height", self.grid.brick_height),
        ];
        if let Some((field, _)) = positive.iter().find(|(_, v)| !(*v > 0.0)) {
            return Err(ConfigError::NonPositive { field: *field });
        }
        if self.grid.columns == 0 || self.grid.rows == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.grid.columns.checked_mul(self.grid.rows).is_none() {
            return Err(ConfigError::GridTooLarge {
                columns: self.grid.columns,
                rows: self.grid.rows,
            });
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.paddle.width > self.arena.width {
            return Err(ConfigError::PaddleTooWide {
                paddle: self.paddle.width,
                arena: self.arena.width,
            });
        }
        if self.lives == 0 {
            return Err(ConfigError::NoLives);
        }
        Ok(())
    }

    /// Score needed to win: one point per brick
    pub fn total_bricks(&self) -> u32 {
        self.grid.columns * self.grid.rows
    }

    /// Index of the final color tier
    pub fn last_tier(&self) -> u8 {
        self.palette.len().saturating_sub(1).min(u8::MAX as usize) as u8
    }

    /// Fill color for a color tier
    pub fn tier_color(&self, tier: u8) -> &str {
        self.palette
            .get(tier as usize)
            .or(self.palette.last())
            .map(String::as_str)
            .unwrap_or(ACCENT_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.total_bricks(), 15);
        assert_eq!(config.last_tier(), 2);
        assert_eq!(config.tier_color(0), "#D85959");
        assert_eq!(config.tier_color(2), "#3A37CD");
    }

    #[test]
    fn test_partial_json_overrides_defaults() {
        let config = GameConfig::from_json(r#"{ "lives": 5, "grid": { "rows": 2 } }"#).unwrap();
        assert_eq!(config.lives, 5);
        assert_eq!(config.grid.rows, 2);
        assert_eq!(config.grid.columns, BRICK_COLUMNS);
        assert_eq!(config.arena.width, ARENA_WIDTH);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let err = GameConfig::from_json(r#"{ "grid": { "columns": 0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyGrid));

        let err = GameConfig::from_json(r#"{ "grid": { "columns": 70000, "rows": 70000 } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::GridTooLarge {
                columns: 70000,
                rows: 70000
            }
        ));

        let err = GameConfig::from_json(r#"{ "palette": [] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyPalette));

        let err = GameConfig::from_json(r#"{ "ball": { "radius": -1.0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NonPositive { field: "ball.radius" }));

        let err = GameConfig::from_json(r#"{ "paddle": { "width": 900.0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::PaddleTooWide { .. }));

        let err = GameConfig::from_json(r#"{ "lives": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NoLives));

        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_json_roundtrip_keeps_values() {
        let mut config = GameConfig::default();
        config.paddle.step = 9.0;
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }
}
