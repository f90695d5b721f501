//! Input event queue
//!
//! Platform handlers push events as they arrive; the simulation samples the
//! queue once per tick, so input timing never interleaves with a tick.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::paddle::Intent;
use super::tick::TickInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// Discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown(Direction),
    KeyUp(Direction),
    /// Pointer at arena x; the paddle centers on it
    PointerMove(f32),
}

#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: VecDeque<InputEvent>,
    left_held: bool,
    right_held: bool,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Forget pending events and held keys (session restart)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Drain pending events into the input for one tick.
    ///
    /// `paddle_width` converts a pointer position into the paddle's left edge.
    /// The last pointer event of the frame wins.
    pub fn sample(&mut self, paddle_width: f32) -> TickInput {
        let mut pointer_x = None;
        for event in self.pending.drain(..) {
            match event {
                InputEvent::KeyDown(Direction::Left) => self.left_held = true,
                InputEvent::KeyDown(Direction::Right) => self.right_held = true,
                InputEvent::KeyUp(Direction::Left) => self.left_held = false,
                InputEvent::KeyUp(Direction::Right) => self.right_held = false,
                InputEvent::PointerMove(x) => pointer_x = Some(x - paddle_width / 2.0),
            }
        }

        let intent = match (self.left_held, self.right_held) {
            (true, false) => Intent::Left,
            (false, true) => Intent::Right,
            _ => Intent::None,
        };

        TickInput { intent, pointer_x }
    }
}
