//! Piece module - a falling tetromino and its rotation states
//!
//! All four orientations are computed once at construction by repeatedly
//! rotating the template 90 degrees clockwise. Rotating simply advances an
//! index into that table, so state 3 rotates back into state 0.

use crate::types::{Rgb, ShapeMatrix, ShapeTemplate};

/// Number of precomputed orientations per piece.
pub const ROTATION_STATES: usize = 4;

/// Active or upcoming falling piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: char,
    states: [ShapeMatrix; ROTATION_STATES],
    rotation: usize,
    pub x: i32,
    pub y: i32,
    color: Rgb,
}

impl Piece {
    /// Create a piece with its top-left matrix cell at (x, y).
    pub fn new(x: i32, y: i32, template: &ShapeTemplate, color: Rgb) -> Self {
        let r0 = template.matrix.clone();
        let r1 = r0.rotate_cw();
        let r2 = r1.rotate_cw();
        let r3 = r2.rotate_cw();
        Self {
            kind: template.name,
            states: [r0, r1, r2, r3],
            rotation: 0,
            x,
            y,
            color,
        }
    }

    /// Advance to the next clockwise orientation. Legality is the caller's problem.
    pub fn rotate(&mut self) {
        self.rotation = (self.rotation + 1) % ROTATION_STATES;
    }

    /// Matrix of the active orientation
    pub fn matrix(&self) -> &ShapeMatrix {
        &self.states[self.rotation]
    }

    /// Matrix of an arbitrary orientation (index taken modulo 4)
    pub fn state(&self, rotation: usize) -> &ShapeMatrix {
        &self.states[rotation % ROTATION_STATES]
    }

    pub fn rotation(&self) -> usize {
        self.rotation
    }

    pub fn kind(&self) -> char {
        self.kind
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Absolute board positions of the occupied cells, shifted by (dx, dy).
    pub fn cells_at(&self, dx: i32, dy: i32) -> impl Iterator<Item = (i32, i32)> + '_ {
        let (px, py) = (self.x + dx, self.y + dy);
        self.matrix()
            .occupied()
            .map(move |(x, y)| (px + x as i32, py + y as i32))
    }

    /// Absolute board positions of the occupied cells.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.cells_at(0, 0)
    }
}
