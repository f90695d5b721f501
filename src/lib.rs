//! Brick Breaker - A canvas Breakout game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddle, bricks, collisions, game state)
//! - `game`: Frame driver (input sampling, tick, render, end-of-game restart)
//! - `renderer`: Frame description consumed by a drawing backend
//! - `platform`: Browser/native platform glue
//! - `config`: Data-driven game configuration

pub mod config;
pub mod demo;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use game::{Game, Notifier};
pub use renderer::Renderer;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 480.0;
    pub const ARENA_HEIGHT: f32 = 320.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 75.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Distance moved per tick while a direction key is held
    pub const PADDLE_STEP: f32 = 7.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Ball starts this far above the bottom edge
    pub const BALL_START_OFFSET: f32 = 30.0;
    pub const BALL_START_DX: f32 = 3.0;
    pub const BALL_START_DY: f32 = -3.0;

    /// Brick grid defaults
    pub const BRICK_COLUMNS: u32 = 5;
    pub const BRICK_ROWS: u32 = 3;
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 30.0;
    pub const BRICK_OFFSET_LEFT: f32 = 30.0;

    /// Brick colors by tier. A brick hit at the last tier is destroyed.
    pub const BRICK_PALETTE: [&str; 3] = ["#D85959", "#58E475", "#3A37CD"];

    /// Ball, paddle and HUD color
    pub const ACCENT_COLOR: &str = "#0095DD";

    pub const START_LIVES: u32 = 3;

    /// End-of-game messages
    pub const GAME_OVER_MESSAGE: &str = "Game Over";
    pub const WIN_MESSAGE: &str = "YOU WIN, CONGRATULATIONS!";
}
