//! Board module - owns the grid, the falling pieces and the score
//!
//! The grid is `columns x rows` cells where each cell is empty or holds the
//! colour of a locked block. Uses a flat array in row-major order.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//! New pieces spawn at (`columns / 2 - 2`, 0).

use log::{debug, info};

use crate::piece::Piece;
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{Cell, ClearScoring, GameConfig};

/// What a single `drop_piece` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved one row down.
    Fell,
    /// The piece could not fall and was locked into the grid.
    Locked { rows_cleared: usize },
    /// The game is over; nothing happened.
    Ignored,
}

/// Calculate flat index from (x, y) coordinates
#[inline(always)]
fn index(columns: usize, rows: usize, x: i32, y: i32) -> Option<usize> {
    if x < 0 || y < 0 || x as usize >= columns || y as usize >= rows {
        return None;
    }
    Some((y as usize) * columns + (x as usize))
}

fn spawn_piece<R: RandomSource>(config: &GameConfig, rng: &mut R) -> Piece {
    let template = &config.shapes[rng.next_index(config.shapes.len())];
    let color = config.palette[rng.next_index(config.palette.len())];
    Piece::new(config.spawn_column(), 0, template, color)
}

/// The game board: grid, active and next piece, score and game-over flag.
#[derive(Debug, Clone)]
pub struct Board<R = SimpleRng> {
    config: GameConfig,
    /// Flat array of cells, row-major order (y * columns + x)
    cells: Vec<Cell>,
    current: Piece,
    next: Piece,
    score: u32,
    game_over: bool,
    rng: R,
}

impl<R: RandomSource> Board<R> {
    /// Create a board with an empty grid and two freshly generated pieces.
    ///
    /// # Panics
    ///
    /// Panics if `config` has no shapes or an empty palette.
    pub fn new(config: GameConfig, mut rng: R) -> Self {
        let current = spawn_piece(&config, &mut rng);
        let next = spawn_piece(&config, &mut rng);
        let cells = vec![None; config.columns * config.rows];
        let mut board = Self {
            config,
            cells,
            current,
            next,
            score: 0,
            game_over: false,
            rng,
        };
        // Only possible on a board too small for the first piece.
        if board.collides(0, 0) {
            info!("first piece does not fit, game over before start");
            board.game_over = true;
        }
        board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn width(&self) -> usize {
        self.config.columns
    }

    pub fn height(&self) -> usize {
        self.config.rows
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn current_piece(&self) -> &Piece {
        &self.current
    }

    /// Mutable access to the falling piece, for scripted setups.
    pub fn current_piece_mut(&mut self) -> &mut Piece {
        &mut self.current
    }

    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        index(self.config.columns, self.config.rows, x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match index(self.config.columns, self.config.rows, x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_valid(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.config.rows {
            return false;
        }
        let start = y * self.config.columns;
        let end = start + self.config.columns;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Whether the current piece, shifted by (dx, dy), leaves the board or
    /// overlaps a locked cell.
    pub fn collides(&self, dx: i32, dy: i32) -> bool {
        self.current
            .cells_at(dx, dy)
            .any(|(x, y)| !self.is_valid(x, y))
    }

    /// Shift the current piece horizontally by `dx` if the target is free.
    ///
    /// Returns true if the piece moved.
    pub fn move_piece(&mut self, dx: i32) -> bool {
        if self.game_over || dx == 0 || self.collides(dx, 0) {
            return false;
        }
        self.current.x += dx;
        true
    }

    /// Move the current piece down one row, or lock it if it cannot fall.
    pub fn drop_piece(&mut self) -> DropOutcome {
        if self.game_over {
            return DropOutcome::Ignored;
        }
        if !self.collides(0, 1) {
            self.current.y += 1;
            return DropOutcome::Fell;
        }
        let rows_cleared = self.lock_piece();
        DropOutcome::Locked { rows_cleared }
    }

    /// Rotate the current piece clockwise, undoing the turn if it collides.
    ///
    /// Returns true if the new orientation was kept.
    pub fn rotate_piece(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.current.rotate();
        if self.collides(0, 0) {
            // Three more quarter turns bring the piece back where it was.
            for _ in 0..3 {
                self.current.rotate();
            }
            return false;
        }
        true
    }

    /// Commit the current piece into the grid, clear full rows and bring in
    /// the next piece. Sets the game-over flag if the new piece cannot spawn.
    ///
    /// Returns the number of rows cleared.
    pub fn lock_piece(&mut self) -> usize {
        if self.game_over {
            return 0;
        }

        let color = self.current.color();
        let (columns, rows) = (self.config.columns, self.config.rows);
        for (x, y) in self.current.cells() {
            if let Some(idx) = index(columns, rows, x, y) {
                self.cells[idx] = Some(color);
            }
        }
        debug!(
            "locked {} at ({}, {}) rotation {}",
            self.current.kind(),
            self.current.x,
            self.current.y,
            self.current.rotation()
        );

        let rows_cleared = self.clear_filled_lines();

        let fresh = self.generate_new_piece();
        self.current = std::mem::replace(&mut self.next, fresh);

        if self.collides(0, 0) {
            info!("spawn blocked for {}, game over with score {}", self.current.kind(), self.score);
            self.game_over = true;
        }

        rows_cleared
    }

    /// Remove every full row, shifting the rows above down and refilling the
    /// top with empty rows. Uses a two-pointer pass from the bottom.
    ///
    /// Awards `score_per_clear` once per call according to the configured
    /// [`ClearScoring`], never once per row. With the default
    /// [`ClearScoring::OnClear`] a pass that removes nothing scores nothing;
    /// [`ClearScoring::EveryLock`] awards the bonus on every call, even when
    /// no row was full. Returns the number of rows removed.
    pub fn clear_filled_lines(&mut self) -> usize {
        let width = self.config.columns;
        let height = self.config.rows;
        let mut cleared = 0;
        let mut write_y = height;

        for read_y in (0..height).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells.copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_y * width].fill(None);

        let award = match self.config.clear_scoring {
            ClearScoring::OnClear => cleared > 0,
            ClearScoring::EveryLock => true,
        };
        if award {
            self.score = self.score.saturating_add(self.config.score_per_clear);
        }
        if cleared > 0 {
            debug!("cleared {} row(s), score {}", cleared, self.score);
        }

        cleared
    }

    /// Build a piece at the spawn position with a random shape and colour.
    ///
    /// The shape is drawn before the colour.
    pub fn generate_new_piece(&mut self) -> Piece {
        spawn_piece(&self.config, &mut self.rng)
    }

    /// Copy out everything a renderer needs.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            columns: self.config.columns,
            rows: self.config.rows,
            grid: self.cells.clone(),
            current: PieceSnapshot::absolute(&self.current),
            next: PieceSnapshot::local(&self.next),
            score: self.score,
            game_over: self.game_over,
        }
    }
}
