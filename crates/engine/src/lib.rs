//! Session driver - the per-frame glue between input, gravity and the board.
//!
//! A [`Game`] owns one [`Board`](tetris_classic_core::Board) for the whole
//! session. The outer loop feeds it the actions of the keys held this frame
//! plus the current clock, and asks it once per frame for the session status.

pub mod game;
pub mod timer;

pub use tetris_classic_core as core;
pub use tetris_classic_types as types;

pub use game::Game;
pub use timer::FallTimer;
