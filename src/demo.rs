//! Autopilot for the native headless runner
//!
//! Tracks the ball with the pointer, adding seeded random jitter so runs
//! differ between seeds but replay exactly for the same seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{InputEvent, SessionState};

pub struct Autopilot {
    rng: Pcg32,
    /// Jitter bound as a fraction of half the paddle width.
    /// Below 1.0 the paddle is always under the ball.
    accuracy: f32,
}

impl Autopilot {
    pub fn new(seed: u64, accuracy: f32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            accuracy: accuracy.max(0.0),
        }
    }

    /// Pointer event for the coming frame
    pub fn steer(&mut self, state: &SessionState) -> InputEvent {
        let reach = state.paddle.width / 2.0 * self.accuracy;
        let jitter = if reach > 0.0 {
            self.rng.random_range(-reach..=reach)
        } else {
            0.0
        };
        InputEvent::PointerMove(state.ball.pos.x + jitter)
    }
}
