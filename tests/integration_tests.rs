//! Integration tests for the frame loop: held keys, gravity and status

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use tetris_classic::core::{Board, SequenceRng, SimpleRng};
use tetris_classic::engine::Game;
use tetris_classic::input::{should_quit, HeldKeys};
use tetris_classic::types::{GameAction, GameConfig, GameStatus};
use tetris_classic::AppConfig;

const O: usize = 4;

fn o_game(columns: usize, rows: usize) -> Game<SequenceRng> {
    let board = Board::new(
        GameConfig::default().with_size(columns, rows),
        SequenceRng::constant(O),
    );
    Game::new(board, 500, 0)
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn release(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
}

#[test]
fn test_game_lifecycle() {
    let board = Board::new(GameConfig::default(), SimpleRng::new(12345));
    let mut game = Game::new(board, 500, 0);
    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(game.board().score(), 0);

    let mut now = 0;
    while game.update_status() == GameStatus::Playing {
        now += 100;
        game.frame(&[], now);
        assert!(game.frames() < 10_000, "game never ended");
    }
    assert!(game.board().is_game_over());

    // Nothing moves once the game is over.
    let before = game.board().snapshot();
    game.frame(&[GameAction::MoveLeft, GameAction::Rotate], now + 1000);
    assert_eq!(game.update_status(), GameStatus::GameOver);
    assert_eq!(game.board().snapshot(), before);
}

#[test]
fn test_actions_apply_in_order_given() {
    let mut game = o_game(10, 20);
    game.frame(&[GameAction::MoveLeft, GameAction::MoveLeft], 10);
    assert_eq!(game.board().current_piece().x, 1);

    game.frame(&[GameAction::MoveRight, GameAction::SoftDrop], 20);
    assert_eq!(game.board().current_piece().x, 2);
    assert_eq!(game.board().current_piece().y, 1);
}

#[test]
fn test_gravity_fires_after_interval() {
    let mut game = o_game(10, 20);
    assert!(!game.frame(&[], 100));
    assert!(!game.frame(&[], 500));
    assert_eq!(game.board().current_piece().y, 0);

    assert!(game.frame(&[], 501));
    assert_eq!(game.board().current_piece().y, 1);
    assert_eq!(game.fall_timer().last_fall_ms(), 501);

    assert!(!game.frame(&[], 900));
    assert!(game.frame(&[], 1002));
    assert_eq!(game.board().current_piece().y, 2);
}

#[test]
fn test_status_step_drops_every_frame() {
    let mut game = o_game(10, 20);
    game.frame(&[], 10);
    assert_eq!(game.update_status(), GameStatus::Playing);
    assert_eq!(game.board().current_piece().y, 1);
    game.frame(&[], 20);
    game.update_status();
    assert_eq!(game.board().current_piece().y, 2);
}

#[test]
fn test_held_keys_repeat_every_frame() {
    let mut held = HeldKeys::with_release_timeout(None);
    let mut game = o_game(10, 20);

    held.handle_key_event(press(KeyCode::Left), 0);
    for t in 1..=3 {
        let actions = held.actions(t * 10);
        game.frame(&actions, t * 10);
    }
    assert_eq!(game.board().current_piece().x, 0);

    held.handle_key_event(release(KeyCode::Left), 40);
    assert!(held.actions(50).is_empty());
}

#[test]
fn test_held_keys_yield_fixed_order() {
    let mut held = HeldKeys::with_release_timeout(None);
    held.handle_key_event(press(KeyCode::Up), 0);
    held.handle_key_event(press(KeyCode::Down), 0);
    held.handle_key_event(press(KeyCode::Right), 0);
    held.handle_key_event(press(KeyCode::Left), 0);

    let actions = held.actions(0);
    assert_eq!(
        actions.as_slice(),
        &[
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::Rotate,
        ]
    );
}

#[test]
fn test_tap_without_release_event_expires() {
    let mut held = HeldKeys::with_release_timeout(Some(150));
    held.handle_key_event(press(KeyCode::Right), 0);
    assert_eq!(held.actions(100).as_slice(), &[GameAction::MoveRight]);

    // Terminal auto-repeat keeps the key alive.
    held.handle_key_event(
        KeyEvent::new_with_kind(KeyCode::Right, KeyModifiers::NONE, KeyEventKind::Repeat),
        140,
    );
    assert_eq!(held.actions(250).as_slice(), &[GameAction::MoveRight]);
    assert!(held.actions(300).is_empty());
}

#[test]
fn test_tap_moves_one_column_across_frames() {
    let config = AppConfig::default();
    let mut held = HeldKeys::with_release_timeout(Some(config.key_release_timeout_ms()));
    let mut game = o_game(10, 20);

    // Key down at t=60 with no release event; frames sample at 100 and 200.
    held.handle_key_event(press(KeyCode::Right), 60);
    for now in [100, 200, 300] {
        let actions = held.actions(now);
        game.frame(&actions, now);
    }
    assert_eq!(game.board().current_piece().x, 4);
}

#[test]
fn test_unmapped_keys_are_ignored() {
    let mut held = HeldKeys::new();
    assert_eq!(held.handle_key_event(press(KeyCode::Char('x')), 0), None);
    assert_eq!(held.handle_key_event(press(KeyCode::Enter), 0), None);
    assert!(held.actions(0).is_empty());
}

#[test]
fn test_quit_keys() {
    assert!(should_quit(press(KeyCode::Char('q'))));
    assert!(should_quit(press(KeyCode::Char('Q'))));
    assert!(should_quit(press(KeyCode::Esc)));
    assert!(should_quit(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL
    )));
    assert!(!should_quit(press(KeyCode::Char('c'))));
    assert!(!should_quit(press(KeyCode::Left)));
}

#[test]
fn test_holding_down_stacks_to_game_over() {
    let mut held = HeldKeys::with_release_timeout(None);
    let mut game = o_game(4, 6);
    held.handle_key_event(press(KeyCode::Down), 0);

    let mut now = 0;
    let status = loop {
        now += 100;
        let actions = held.actions(now);
        game.frame(&actions, now);
        let status = game.update_status();
        if status == GameStatus::GameOver || now > 100_000 {
            break status;
        }
    };
    assert_eq!(status, GameStatus::GameOver);
    // O pieces never complete a row on a board with two free columns.
    assert_eq!(game.board().score(), 0);
}
