//! Browser backend: 2D canvas painting and alert notifications

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::game::Notifier;
use crate::renderer::{DrawCommand, Renderer, draw_list};
use crate::sim::SessionState;

/// Paints frames onto a canvas 2D context
pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn paint(&self, command: &DrawCommand) {
        let ctx = &self.ctx;
        match command {
            DrawCommand::Clear { width, height } => {
                ctx.clear_rect(0.0, 0.0, *width as f64, *height as f64);
            }
            DrawCommand::Rect { pos, size, color } => {
                ctx.begin_path();
                ctx.rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
                ctx.set_fill_style_str(color);
                ctx.fill();
                ctx.close_path();
            }
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => {
                ctx.begin_path();
                if let Err(e) = ctx.arc(
                    center.x as f64,
                    center.y as f64,
                    *radius as f64,
                    0.0,
                    PI * 2.0,
                ) {
                    log::warn!("arc failed: {:?}", e);
                }
                ctx.set_fill_style_str(color);
                ctx.fill();
                ctx.close_path();
            }
            DrawCommand::Text {
                text,
                pos,
                font,
                color,
            } => {
                ctx.set_font(font);
                ctx.set_fill_style_str(color);
                if let Err(e) = ctx.fill_text(text, pos.x as f64, pos.y as f64) {
                    log::warn!("fill_text failed: {:?}", e);
                }
            }
        }
    }
}

impl Renderer for CanvasPainter {
    fn render(&mut self, state: &SessionState) {
        for command in draw_list(state) {
            self.paint(&command);
        }
    }
}

/// Shows the end-of-game message with `window.alert`
#[derive(Debug, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&mut self, message: &str) {
        log::info!("{}", message);
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}
