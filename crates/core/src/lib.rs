//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules and the board state.
//! It has **no dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: randomness is injected, so a scripted source replays a game exactly
//! - **Testable**: every rule is reachable from plain unit tests
//! - **Portable**: the same board drives the terminal game and headless tests
//!
//! # Module Structure
//!
//! - [`board`]: the grid with collision detection, locking and line clearing
//! - [`piece`]: tetromino with its four precomputed rotation states
//! - [`rng`]: [`RandomSource`] plus a seeded LCG and a scripted sequence
//! - [`snapshot`]: read-only copy of the board for renderers
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: shape and colour are each drawn uniformly, shape first
//! - **Plain rotation**: clockwise only, reverted wholesale on collision (no wall kicks)
//! - **Instant lock**: a piece that cannot fall locks on the same drop
//! - **Flat scoring**: 100 points per scoring clear pass, independent of rows removed
//!
//! # Example
//!
//! ```
//! use tetris_classic_core::{Board, SequenceRng};
//! use tetris_classic_types::GameConfig;
//!
//! // Always hand out the O piece.
//! let mut board = Board::new(GameConfig::default(), SequenceRng::constant(4));
//!
//! board.move_piece(-1);
//! board.rotate_piece();
//! board.drop_piece();
//!
//! assert_eq!(board.current_piece().y, 1);
//! assert_eq!(board.score(), 0);
//! ```

pub mod board;
pub mod piece;
pub mod rng;
pub mod snapshot;

pub use tetris_classic_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, DropOutcome};
pub use piece::{Piece, ROTATION_STATES};
pub use rng::{RandomSource, SequenceRng, SimpleRng};
pub use snapshot::{GameSnapshot, PieceSnapshot};
