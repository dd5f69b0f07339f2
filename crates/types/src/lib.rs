//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, session driver, terminal rendering).
//!
//! # Board Dimensions
//!
//! The playfield is derived from a 800x600 reference window split into
//! 20-pixel blocks:
//!
//! - **Columns**: 40 (indexed 0-39)
//! - **Rows**: 30 (indexed 0-29)
//! - **Spawn position**: (`columns / 2 - 2`, 0)
//! - **Preview area**: 6 extra block columns right of the board
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FALL_INTERVAL_MS` | 500 | Forced gravity drop interval |
//! | `FRAMES_PER_SECOND` | 10 | Frame cap of the main loop |
//! | `GAME_OVER_DELAY_MS` | 3000 | How long the game-over screen stays up |
//!
//! # Configuration
//!
//! Grid size, shape templates, colour palette and scoring live in an
//! immutable [`GameConfig`] passed to the board at construction.

use std::fmt;

/// Reference window dimensions (pixels) and block size.
pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const BLOCK_DIMENSION: u32 = 20;

/// Title of the game window (terminal title).
pub const WINDOW_TITLE: &str = "Tetris";

/// Default board dimensions (blocks).
pub const COLUMNS: usize = (WINDOW_WIDTH / BLOCK_DIMENSION) as usize;
pub const ROWS: usize = (WINDOW_HEIGHT / BLOCK_DIMENSION) as usize;

/// Width of the next-piece preview area, in blocks.
pub const PREVIEW_COLUMNS: usize = 6;

/// Game timing constants (in milliseconds)
pub const FALL_INTERVAL_MS: u64 = 500;
pub const FRAMES_PER_SECOND: u32 = 10;
pub const GAME_OVER_DELAY_MS: u64 = 3000;

/// Points awarded per scoring line-clear event.
pub const SCORE_PER_CLEAR: u32 = 100;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const GRAY: Rgb = Rgb::new(200, 200, 200);
pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const GREEN: Rgb = Rgb::new(0, 255, 0);
pub const BLUE: Rgb = Rgb::new(0, 0, 255);
pub const CYAN: Rgb = Rgb::new(0, 255, 255);
pub const MAGENTA: Rgb = Rgb::new(255, 0, 255);
pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
pub const BEIGE: Rgb = Rgb::new(245, 245, 220);

/// Colours a freshly generated piece may take.
pub const PIECE_PALETTE: [Rgb; 6] = [CYAN, BLUE, MAGENTA, YELLOW, GREEN, RED];

/// Cell on the board (None = empty background, Some = locked block colour)
pub type Cell = Option<Rgb>;

/// Row-major boolean occupancy matrix of a piece.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl ShapeMatrix {
    /// Build a matrix from rows of 0/1 values.
    ///
    /// Short rows are padded with empty cells up to the widest row.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let cols = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        let mut cells = vec![false; rows.len() * cols];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                cells[y * cols + x] = v != 0;
            }
        }
        Self {
            rows: rows.len(),
            cols,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Occupancy at (x, y); out of range reads as empty.
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.cols && y < self.rows && self.cells[y * self.cols + x]
    }

    /// Occupied cells as (x, y) offsets, row by row.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, filled)| **filled)
            .map(move |(i, _)| (i % self.cols, i / self.cols))
    }

    /// Rotate 90 degrees clockwise: `out[i][j] = in[rows - 1 - j][i]`.
    ///
    /// The result has `cols` rows and `rows` columns.
    pub fn rotate_cw(&self) -> Self {
        let rows = self.cols;
        let cols = self.rows;
        let mut cells = vec![false; rows * cols];
        for i in 0..rows {
            for j in 0..cols {
                cells[i * cols + j] = self.get(i, self.rows - 1 - j);
            }
        }
        Self { rows, cols, cells }
    }
}

/// A named shape the generator can pick from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeTemplate {
    pub name: char,
    pub matrix: ShapeMatrix,
}

impl ShapeTemplate {
    pub fn new(name: char, rows: &[&[u8]]) -> Self {
        Self {
            name,
            matrix: ShapeMatrix::from_rows(rows),
        }
    }
}

/// The seven tetromino templates in generator order: I, T, L, J, O, S, Z.
pub fn standard_shapes() -> Vec<ShapeTemplate> {
    vec![
        ShapeTemplate::new('I', &[&[1, 1, 1, 1]]),
        ShapeTemplate::new('T', &[&[1, 1, 1], &[0, 1, 0]]),
        ShapeTemplate::new('L', &[&[1, 1, 1], &[1, 0, 0]]),
        ShapeTemplate::new('J', &[&[1, 1, 1], &[0, 0, 1]]),
        ShapeTemplate::new('O', &[&[1, 1], &[1, 1]]),
        ShapeTemplate::new('S', &[&[0, 1, 1], &[1, 1, 0]]),
        ShapeTemplate::new('Z', &[&[1, 1, 0], &[0, 1, 1]]),
    ]
}

/// When a clear pass earns points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClearScoring {
    /// Once per lock that removes at least one row.
    #[default]
    OnClear,
    /// Once per lock, whether or not any row was removed.
    EveryLock,
}

/// Immutable rules of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub columns: usize,
    pub rows: usize,
    pub shapes: Vec<ShapeTemplate>,
    pub palette: Vec<Rgb>,
    pub score_per_clear: u32,
    pub clear_scoring: ClearScoring,
}

impl GameConfig {
    /// Column where new pieces spawn.
    pub fn spawn_column(&self) -> i32 {
        (self.columns / 2) as i32 - 2
    }

    pub fn with_size(mut self, columns: usize, rows: usize) -> Self {
        self.columns = columns;
        self.rows = rows;
        self
    }

    pub fn with_shapes(mut self, shapes: Vec<ShapeTemplate>) -> Self {
        self.shapes = shapes;
        self
    }

    pub fn with_palette(mut self, palette: Vec<Rgb>) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_clear_scoring(mut self, clear_scoring: ClearScoring) -> Self {
        self.clear_scoring = clear_scoring;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: COLUMNS,
            rows: ROWS,
            shapes: standard_shapes(),
            palette: PIECE_PALETTE.to_vec(),
            score_per_clear: SCORE_PER_CLEAR,
            clear_scoring: ClearScoring::OnClear,
        }
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
}

impl GameAction {
    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
        }
    }
}

/// Session state machine. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    GameOver,
}

/// Language of the on-screen labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    /// Parse locale from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Some(Locale::En),
            "ru" | "russian" => Some(Locale::Ru),
            _ => None,
        }
    }

    pub fn score_label(&self) -> &'static str {
        match self {
            Locale::En => "SCORE",
            Locale::Ru => "Счет",
        }
    }

    pub fn game_over_text(&self) -> &'static str {
        match self {
            Locale::En => "GAME OVER",
            Locale::Ru => "Игра окончена",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => f.write_str("en"),
            Locale::Ru => f.write_str("ru"),
        }
    }
}
