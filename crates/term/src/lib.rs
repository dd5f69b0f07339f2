//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders a
//! board snapshot into a simple framebuffer that is then flushed to a
//! terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Provide a rendering pipeline that feels closer to a game renderer
//! - Allow precise control over aspect ratio (2 chars wide per board cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetris_classic_core as core;
pub use tetris_classic_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Origin, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
