//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and keeps the set
//! of held keys that the game loop polls once per frame (including terminals
//! without key-release events).

pub mod held;
pub mod map;

pub use tetris_classic_types as types;

pub use held::{HeldKeys, ACTION_ORDER, DEFAULT_KEY_RELEASE_TIMEOUT_MS};
pub use map::{action_for_key, handle_key_event, should_quit};
