//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, in board blocks: the grid sits at block (0, 0), the next-piece
//! preview starts at block (`columns + 1`, 1), and the scene is
//! `columns + PREVIEW_COLUMNS` blocks wide. The whole scene is centred in the
//! viewport and clipped when the terminal is too small.

use crate::core::{GameSnapshot, PieceSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Locale, BEIGE, BLACK, GRAY, PREVIEW_COLUMNS, WHITE};

const BLOCK_GLYPH: char = '█';
const EMPTY_GLYPH: char = '·';

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Top-left terminal position of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    pub x: u16,
    pub y: u16,
}

/// A lightweight terminal renderer for the game.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    locale: Locale,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            locale: Locale::default(),
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            locale: Locale::default(),
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Terminal size needed to show a `columns x rows` board plus preview.
    pub fn required_size(&self, columns: usize, rows: usize) -> (u16, u16) {
        let w = ((columns + PREVIEW_COLUMNS) as u16).saturating_mul(self.cell_w);
        let h = (rows as u16).saturating_mul(self.cell_h);
        (w, h)
    }

    /// Where the scene lands inside `viewport`.
    pub fn origin(&self, snap: &GameSnapshot, viewport: Viewport) -> Origin {
        let (w, h) = self.required_size(snap.columns, snap.rows);
        Origin {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
        }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(WHITE, BLACK).into_cell(' '));

        let origin = self.origin(snap, viewport);
        self.draw_grid(fb, snap, origin);
        self.draw_piece(fb, snap, origin);
        self.draw_next_piece(fb, snap, origin);
        self.draw_score(fb, snap, origin);
        if snap.game_over {
            self.draw_game_over(fb, snap, origin);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Every grid cell gets an outline glyph; locked cells are filled.
    fn draw_grid(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, origin: Origin) {
        let outline = CellStyle::new(GRAY, BLACK).dim();
        for y in 0..snap.rows {
            for x in 0..snap.columns {
                match snap.cell(x, y) {
                    Some(color) => self.fill_block(fb, origin, x as u16, y as u16, BLOCK_GLYPH, block_style(color)),
                    None => self.fill_block(fb, origin, x as u16, y as u16, EMPTY_GLYPH, outline),
                }
            }
        }
    }

    fn draw_piece(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, origin: Origin) {
        let PieceSnapshot { cells, color, .. } = &snap.current;
        for &(x, y) in cells {
            if x >= 0 && y >= 0 && (x as usize) < snap.columns && (y as usize) < snap.rows {
                self.fill_block(fb, origin, x as u16, y as u16, BLOCK_GLYPH, block_style(*color));
            }
        }
    }

    fn draw_next_piece(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, origin: Origin) {
        let PieceSnapshot { cells, color, .. } = &snap.next;
        let base_x = snap.columns as u16 + 1;
        for &(x, y) in cells {
            if x < 0 || y < 0 {
                continue;
            }
            self.fill_block(fb, origin, base_x + x as u16, 1 + y as u16, BLOCK_GLYPH, block_style(*color));
        }
    }

    fn draw_score(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, origin: Origin) {
        let text = format!("{}: {}", self.locale.score_label(), snap.score);
        let style = CellStyle::new(WHITE, BLACK).bold();
        fb.put_str(origin.x.saturating_add(1), origin.y, &text, style);
    }

    /// Centred on the board, an eighth of the board height above the middle.
    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, origin: Origin) {
        let text = self.locale.game_over_text();
        let text_w = text.chars().count() as u16;
        let board_w = (snap.columns as u16).saturating_mul(self.cell_w);
        let board_h = (snap.rows as u16).saturating_mul(self.cell_h);
        let x = origin.x + board_w.saturating_sub(text_w) / 2;
        let y = origin.y + (board_h / 2).saturating_sub(board_h / 8);
        let style = CellStyle::new(BEIGE, BLACK).bold();
        fb.put_str(x, y, text, style);
    }

    fn fill_block(
        &self,
        fb: &mut FrameBuffer,
        origin: Origin,
        block_x: u16,
        block_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = origin.x.saturating_add(block_x.saturating_mul(self.cell_w));
        let py = origin.y.saturating_add(block_y.saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }
}

fn block_style(color: Rgb) -> CellStyle {
    CellStyle::new(color, BLACK).bold()
}
