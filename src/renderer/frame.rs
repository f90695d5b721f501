//! Frame description for 2D backends

use glam::Vec2;

use crate::consts::ACCENT_COLOR;
use crate::sim::SessionState;

/// HUD font (CSS font shorthand)
pub const HUD_FONT: &str = "16px Arial";
/// HUD baseline and insets
const HUD_BASELINE: f32 = 20.0;
const SCORE_INSET: f32 = 8.0;
const LIVES_INSET: f32 = 65.0;

/// A single 2D drawing primitive. Colors are CSS color strings.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole surface
    Clear { width: f32, height: f32 },
    Rect {
        pos: Vec2,
        size: Vec2,
        color: String,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: String,
    },
    Text {
        text: String,
        pos: Vec2,
        font: &'static str,
        color: String,
    },
}

pub fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}

pub fn lives_text(lives: u32) -> String {
    format!("Lives: {}", lives)
}

/// Describe a frame: clear, alive bricks, ball, paddle, score, lives
pub fn draw_list(state: &SessionState) -> Vec<DrawCommand> {
    let arena = state.config.arena;
    let mut commands = Vec::with_capacity(state.bricks.bricks.len() + 5);

    commands.push(DrawCommand::Clear {
        width: arena.width,
        height: arena.height,
    });

    for brick in state.bricks.bricks.iter().filter(|b| b.is_alive()) {
        commands.push(DrawCommand::Rect {
            pos: brick.pos,
            size: state.bricks.brick_size,
            color: state.config.tier_color(brick.tier).to_string(),
        });
    }

    commands.push(DrawCommand::Circle {
        center: state.ball.pos,
        radius: state.ball.radius,
        color: ACCENT_COLOR.to_string(),
    });

    let paddle = &state.paddle;
    commands.push(DrawCommand::Rect {
        pos: Vec2::new(paddle.x, arena.height - paddle.height),
        size: Vec2::new(paddle.width, paddle.height),
        color: ACCENT_COLOR.to_string(),
    });

    commands.push(DrawCommand::Text {
        text: score_text(state.score),
        pos: Vec2::new(SCORE_INSET, HUD_BASELINE),
        font: HUD_FONT,
        color: ACCENT_COLOR.to_string(),
    });
    commands.push(DrawCommand::Text {
        text: lives_text(state.lives),
        pos: Vec2::new(arena.width - LIVES_INSET, HUD_BASELINE),
        font: HUD_FONT,
        color: ACCENT_COLOR.to_string(),
    });

    commands
}
