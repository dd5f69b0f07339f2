use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_classic::core::{Board, SimpleRng};
use tetris_classic::engine::Game;
use tetris_classic::term::{FrameBuffer, GameView, Viewport};
use tetris_classic::types::{GameAction, GameConfig, RED};

fn fresh_board() -> Board {
    Board::new(GameConfig::default(), SimpleRng::new(12345))
}

fn bench_frame(c: &mut Criterion) {
    let mut game = Game::new(fresh_board(), 500, 0);
    let mut now = 0;

    c.bench_function("game_frame_100ms", |b| {
        b.iter(|| {
            now += 100;
            game.frame(black_box(&[GameAction::MoveLeft]), now);
            if game.board().is_game_over() {
                game = Game::new(fresh_board(), 500, now);
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = fresh_board();
            // Fill bottom 4 rows
            for y in 26..30 {
                for x in 0..40 {
                    board.set(x, y, Some(RED));
                }
            }
            board.clear_filled_lines()
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut board = fresh_board();

    c.bench_function("spawn_piece", |b| b.iter(|| board.generate_new_piece()));
}

fn bench_move(c: &mut Criterion) {
    let mut board = fresh_board();
    let mut dx = 1;

    c.bench_function("move_piece", |b| {
        b.iter(|| {
            if !board.move_piece(black_box(dx)) {
                dx = -dx;
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut board = fresh_board();
    board.current_piece_mut().y = 10;

    c.bench_function("rotate_piece", |b| b.iter(|| board.rotate_piece()));
}

fn bench_render(c: &mut Criterion) {
    let snap = fresh_board().snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    c.bench_function("render_snapshot_92x30", |b| {
        b.iter(|| view.render_into(black_box(&snap), Viewport::new(92, 30), &mut fb))
    });
}

criterion_group!(
    benches,
    bench_frame,
    bench_line_clear,
    bench_piece_spawn,
    bench_move,
    bench_rotate,
    bench_render
);
criterion_main!(benches);
