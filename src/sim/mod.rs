//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Stable iteration order (column-major brick scan)
//! - No rendering or platform dependencies

pub mod ball;
pub mod bricks;
pub mod collision;
pub mod grid;
pub mod input;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use bricks::{Brick, BrickField, BrickStatus, HitOutcome};
pub use collision::{BrickCollision, FloorContact};
pub use grid::GridLayout;
pub use input::{Direction, InputEvent, InputQueue};
pub use paddle::{Intent, Paddle};
pub use state::{GameEvent, GamePhase, SessionState};
pub use tick::{TickInput, tick};
