//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Key names and pointer coordinates
//! - Canvas drawing and end-of-game alerts (browser only)

pub mod keys;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use keys::{key_down, key_up, pointer_move};
