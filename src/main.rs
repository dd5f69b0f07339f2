//! Terminal falling-block game (default binary).
//!
//! One synchronous loop: apply the held keys and gravity, render, run the
//! end-of-frame status step, then spend the rest of the frame budget
//! collecting input. Quitting restores the terminal; game over shows the
//! final screen for a few seconds first.

use std::thread;
use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use tetris_classic::core::{Board, SimpleRng};
use tetris_classic::engine::Game;
use tetris_classic::input::{should_quit, HeldKeys};
use tetris_classic::logging;
use tetris_classic::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tetris_classic::types::{GameStatus, WINDOW_TITLE};
use tetris_classic::AppConfig;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    config.validate()?;
    logging::init_log(config.log_level, &config.log_path)?;
    for entry in &config.ignored {
        warn!("ignoring unparseable setting {}", entry);
    }

    let mut term = TerminalRenderer::new();
    term.enter(WINDOW_TITLE)?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Whether the loop should keep going after input was pumped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    let seed = config.seed.unwrap_or_else(rand::random);
    info!("seed {}, locale {}", seed, config.locale);

    let board = Board::new(config.game_config(), SimpleRng::new(seed));
    let mut game = Game::new(board, config.fall_interval_ms, now_ms());

    let view = GameView::default().with_locale(config.locale);
    let mut held = if term.reports_key_releases() {
        HeldKeys::with_release_timeout(None)
    } else {
        HeldKeys::with_release_timeout(Some(config.key_release_timeout_ms()))
    };
    let mut fb = FrameBuffer::new(0, 0);
    let frame_budget = config.frame_duration();

    loop {
        let frame_start = Instant::now();

        let actions = held.actions(now_ms());
        game.frame(&actions, now_ms());

        draw(term, &view, &game, &mut fb)?;

        if game.update_status() == GameStatus::GameOver {
            draw(term, &view, &game, &mut fb)?;
            thread::sleep(config.game_over_delay());
            return Ok(());
        }

        if pump_input(term, &mut held, &now_ms, frame_start + frame_budget)? == Flow::Quit {
            info!("quit requested, score {}", game.board().score());
            return Ok(());
        }
    }
}

fn draw(
    term: &mut TerminalRenderer,
    view: &GameView,
    game: &Game,
    fb: &mut FrameBuffer,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((92, 30));
    view.render_into(&game.board().snapshot(), Viewport::new(w, h), fb);
    term.draw_swap(fb)
}

/// Read terminal events until `deadline`, updating the held-key set.
fn pump_input(
    term: &mut TerminalRenderer,
    held: &mut HeldKeys,
    now_ms: &impl Fn() -> u64,
    deadline: Instant,
) -> Result<Flow> {
    loop {
        let timeout = deadline.saturating_duration_since(Instant::now());
        if !event::poll(timeout)? {
            return Ok(Flow::Continue);
        }
        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Release && should_quit(key) {
                    return Ok(Flow::Quit);
                }
                held.handle_key_event(key, now_ms());
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}
