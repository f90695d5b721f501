//! Raw input translation

use crate::sim::{Direction, InputEvent};

/// Map a DOM `KeyboardEvent.key` value to a paddle direction
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "Right" | "ArrowRight" => Some(Direction::Right),
        "Left" | "ArrowLeft" => Some(Direction::Left),
        _ => None,
    }
}

pub fn key_down(key: &str) -> Option<InputEvent> {
    direction_for_key(key).map(InputEvent::KeyDown)
}

pub fn key_up(key: &str) -> Option<InputEvent> {
    direction_for_key(key).map(InputEvent::KeyUp)
}

/// Pointer at canvas-relative `x`. Positions outside the arena are ignored.
pub fn pointer_move(relative_x: f32, arena_width: f32) -> Option<InputEvent> {
    (relative_x > 0.0 && relative_x < arena_width).then_some(InputEvent::PointerMove(relative_x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(key_down("ArrowRight"), Some(InputEvent::KeyDown(Direction::Right)));
        assert_eq!(key_down("Right"), Some(InputEvent::KeyDown(Direction::Right)));
        assert_eq!(key_up("Left"), Some(InputEvent::KeyUp(Direction::Left)));
        assert_eq!(key_up("ArrowLeft"), Some(InputEvent::KeyUp(Direction::Left)));
        assert_eq!(key_down(" "), None);
        assert_eq!(key_down("ArrowUp"), None);
    }

    #[test]
    fn test_pointer_outside_arena_ignored() {
        assert_eq!(pointer_move(100.0, 480.0), Some(InputEvent::PointerMove(100.0)));
        assert_eq!(pointer_move(0.0, 480.0), None);
        assert_eq!(pointer_move(480.0, 480.0), None);
        assert_eq!(pointer_move(-5.0, 480.0), None);
    }
}
