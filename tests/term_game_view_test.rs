use tetris_classic::core::{Board, GameSnapshot, SequenceRng};
use tetris_classic::term::{GameView, Origin, Viewport};
use tetris_classic::types::{GameConfig, Locale, BEIGE, GREEN, RED};

const O: usize = 4;

fn o_board(columns: usize, rows: usize) -> Board<SequenceRng> {
    Board::new(
        GameConfig::default().with_size(columns, rows),
        SequenceRng::constant(O),
    )
}

/// Render with a viewport that exactly fits the scene, so the origin is (0, 0).
fn render_exact(view: &GameView, snap: &GameSnapshot) -> tetris_classic::term::FrameBuffer {
    let (w, h) = view.required_size(snap.columns, snap.rows);
    view.render(snap, Viewport::new(w, h))
}

fn text_at(fb: &tetris_classic::term::FrameBuffer, x: u16, y: u16, len: usize) -> String {
    fb.row_text(y).chars().skip(x as usize).take(len).collect()
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut board = o_board(10, 8);
    board.set(0, 7, Some(RED));
    let view = GameView::default();
    let fb = render_exact(&view, &board.snapshot());

    let left = fb.get(0, 7).unwrap();
    let right = fb.get(1, 7).unwrap();
    assert_eq!(left.ch, '█');
    assert_eq!(right.ch, '█');
    assert_eq!(left.style.fg, RED);
    assert_eq!(fb.get(2, 7).unwrap().ch, '·');
}

#[test]
fn term_view_draws_current_piece_in_its_color() {
    let board = o_board(10, 8);
    let view = GameView::default();
    let fb = render_exact(&view, &board.snapshot());

    // O at block (3, 0): row 1 is free of the score label.
    for x in 6..10 {
        let cell = fb.get(x, 1).unwrap();
        assert_eq!(cell.ch, '█', "column {}", x);
        assert_eq!(cell.style.fg, GREEN);
    }
    assert_eq!(fb.get(5, 1).unwrap().ch, '·');
    assert_eq!(fb.get(10, 1).unwrap().ch, '·');
}

#[test]
fn term_view_draws_next_piece_right_of_board() {
    let board = o_board(10, 8);
    let view = GameView::default();
    let fb = render_exact(&view, &board.snapshot());

    // Preview starts at block (columns + 1, 1) = terminal (22, 1).
    for y in 1..3 {
        for x in 22..26 {
            assert_eq!(fb.get(x, y).unwrap().ch, '█', "({}, {})", x, y);
        }
    }
    assert_eq!(fb.get(20, 1).unwrap().ch, ' ');
    assert_eq!(fb.get(21, 1).unwrap().ch, ' ');
    assert_eq!(fb.get(22, 0).unwrap().ch, ' ');
    assert_eq!(fb.get(22, 3).unwrap().ch, ' ');
}

#[test]
fn term_view_shows_score_top_left() {
    let mut snap = o_board(10, 8).snapshot();
    snap.score = 300;
    let view = GameView::default();
    let fb = render_exact(&view, &snap);

    assert_eq!(text_at(&fb, 1, 0, 10), "SCORE: 300");
    assert!(fb.get(1, 0).unwrap().style.bold);
}

#[test]
fn term_view_localises_labels() {
    let mut snap = o_board(10, 8).snapshot();
    snap.game_over = true;
    let view = GameView::default().with_locale(Locale::Ru);
    let fb = render_exact(&view, &snap);

    assert_eq!(text_at(&fb, 1, 0, 7), "Счет: 0");
    // 13 characters centred on a 20-column board, at row 8/2 - 8/8.
    assert_eq!(text_at(&fb, 3, 3, 13), "Игра окончена");
}

#[test]
fn term_view_game_over_text_is_centred_above_middle() {
    let mut snap = o_board(10, 8).snapshot();
    assert!(!snap.game_over);
    let view = GameView::default();
    let before = render_exact(&view, &snap);
    assert!(!before.row_text(3).contains("GAME OVER"));

    snap.game_over = true;
    let fb = render_exact(&view, &snap);
    assert_eq!(text_at(&fb, 5, 3, 9), "GAME OVER");
    assert_eq!(fb.get(5, 3).unwrap().style.fg, BEIGE);
}

#[test]
fn term_view_game_over_after_spawn_collision() {
    let mut board = o_board(40, 30);
    board.lock_piece();
    assert!(board.is_game_over());
    let view = GameView::default();
    let fb = render_exact(&view, &board.snapshot());

    // Board is 80 columns wide; row 30/2 - 30/8 = 12.
    assert_eq!(text_at(&fb, 35, 12, 9), "GAME OVER");
}

#[test]
fn term_view_centres_scene_in_large_viewport() {
    let snap = o_board(10, 8).snapshot();
    let view = GameView::default();
    let vp = Viewport::new(40, 12);
    assert_eq!(view.origin(&snap, vp), Origin { x: 4, y: 2 });

    let mut snap = snap;
    snap.grid[7 * 10] = Some(RED);
    let fb = view.render(&snap, vp);
    assert_eq!(fb.get(4, 9).unwrap().ch, '█');
    assert_eq!(fb.get(3, 9).unwrap().ch, ' ');
}
