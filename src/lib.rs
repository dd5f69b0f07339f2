//! Classic falling-block game (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so the binary, tests and
//! benches can write `tetris_classic::{core, engine, input, term, types}`.
//! Process-level concerns (environment configuration and file logging) live
//! here rather than in the pure crates.

pub mod config;
pub mod logging;

pub use tetris_classic_core as core;
pub use tetris_classic_engine as engine;
pub use tetris_classic_input as input;
pub use tetris_classic_term as term;
pub use tetris_classic_types as types;

pub use config::AppConfig;
