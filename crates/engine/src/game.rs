//! Game session - applies held actions, gravity and the per-frame status step.

use log::{debug, info};

use crate::core::{Board, DropOutcome, RandomSource, SimpleRng};
use crate::timer::FallTimer;
use crate::types::{GameAction, GameStatus};

/// One play session. Not resumable once over; start a new `Game` instead.
#[derive(Debug, Clone)]
pub struct Game<R = SimpleRng> {
    board: Board<R>,
    fall: FallTimer,
    frames: u64,
    /// Set once the game-over transition has been reported.
    announced: bool,
}

impl<R: RandomSource> Game<R> {
    /// Start a session; the gravity interval is measured from `now_ms`.
    pub fn new(board: Board<R>, fall_interval_ms: u64, now_ms: u64) -> Self {
        info!(
            "session start: {}x{} board, fall every {}ms",
            board.width(),
            board.height(),
            fall_interval_ms
        );
        Self {
            board,
            fall: FallTimer::new(fall_interval_ms, now_ms),
            frames: 0,
            announced: false,
        }
    }

    pub fn board(&self) -> &Board<R> {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board<R> {
        &mut self.board
    }

    pub fn fall_timer(&self) -> &FallTimer {
        &self.fall
    }

    /// Frames processed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn status(&self) -> GameStatus {
        if self.board.is_game_over() {
            GameStatus::GameOver
        } else {
            GameStatus::Playing
        }
    }

    /// Apply one action to the board.
    ///
    /// Returns true if the board changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.board.move_piece(-1),
            GameAction::MoveRight => self.board.move_piece(1),
            GameAction::SoftDrop => {
                // The zero-offset move never shifts the piece; kept for parity
                // with the down key's move-then-drop sequence.
                self.board.move_piece(0);
                let outcome = self.board.drop_piece();
                self.log_drop("soft drop", outcome);
                outcome != DropOutcome::Ignored
            }
            GameAction::Rotate => self.board.rotate_piece(),
        }
    }

    /// Run the input and gravity half of a frame.
    ///
    /// `actions` are applied in the order given, then the gravity timer is
    /// checked. Returns true if gravity fired this frame.
    pub fn frame(&mut self, actions: &[GameAction], now_ms: u64) -> bool {
        self.frames += 1;
        for &action in actions {
            self.apply_action(action);
        }
        if self.fall.poll(now_ms) {
            let outcome = self.board.drop_piece();
            self.log_drop("gravity", outcome);
            return true;
        }
        false
    }

    /// End-of-frame step: while playing, the piece drops one more row.
    ///
    /// Returns the status after the step. Once `GameOver` is returned the
    /// board is never touched again.
    pub fn update_status(&mut self) -> GameStatus {
        if self.status() == GameStatus::Playing {
            let outcome = self.board.drop_piece();
            self.log_drop("frame step", outcome);
        }
        let status = self.status();
        if status == GameStatus::GameOver && !self.announced {
            self.announced = true;
            info!(
                "game over after {} frames, score {}",
                self.frames,
                self.board.score()
            );
        }
        status
    }

    fn log_drop(&self, source: &str, outcome: DropOutcome) {
        if let DropOutcome::Locked { rows_cleared } = outcome {
            debug!(
                "{}: piece locked, {} row(s) cleared, score {}",
                source,
                rows_cleared,
                self.board.score()
            );
        }
    }
}
