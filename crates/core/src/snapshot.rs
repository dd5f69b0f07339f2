use crate::piece::Piece;
use crate::types::{Cell, Rgb};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PieceSnapshot {
    /// Occupied cells; absolute board positions for the active piece,
    /// matrix-local offsets for the preview.
    pub cells: Vec<(i32, i32)>,
    pub color: Rgb,
    pub kind: char,
}

impl PieceSnapshot {
    pub fn absolute(piece: &Piece) -> Self {
        Self {
            cells: piece.cells().collect(),
            color: piece.color(),
            kind: piece.kind(),
        }
    }

    pub fn local(piece: &Piece) -> Self {
        Self {
            cells: piece
                .matrix()
                .occupied()
                .map(|(x, y)| (x as i32, y as i32))
                .collect(),
            color: piece.color(),
            kind: piece.kind(),
        }
    }
}

/// Read-only view of a board, handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub columns: usize,
    pub rows: usize,
    /// Row-major, `rows * columns` cells.
    pub grid: Vec<Cell>,
    pub current: PieceSnapshot,
    pub next: PieceSnapshot,
    pub score: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        if x >= self.columns || y >= self.rows {
            return None;
        }
        self.grid[y * self.columns + x]
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}
