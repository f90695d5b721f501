//! Rendering module
//!
//! The simulation never draws. Each frame is described as a list of draw
//! commands that a backend (canvas, headless) paints or ignores.

pub mod frame;

pub use frame::{DrawCommand, draw_list};

use crate::sim::SessionState;

/// Consumes a state snapshot once per frame
pub trait Renderer {
    fn render(&mut self, state: &SessionState);
}

/// Renderer that draws nothing (headless runs, tests)
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames: u64,
}

impl Renderer for NullRenderer {
    fn render(&mut self, _state: &SessionState) {
        self.frames += 1;
    }
}
