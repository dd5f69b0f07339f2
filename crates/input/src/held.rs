//! Held-key set polled once per frame.
//!
//! Every action whose key is down is returned on every frame, so a held key
//! repeats at the frame rate. Terminals that never send key-release events
//! are handled with a timeout: a key that has not been pressed or
//! auto-repeated within `release_timeout_ms` counts as released.

use arrayvec::ArrayVec;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::map::action_for_key;
use crate::types::GameAction;

/// Per-frame application order: Left, Right, Down, Up.
pub const ACTION_ORDER: [GameAction; 4] = [
    GameAction::MoveLeft,
    GameAction::MoveRight,
    GameAction::SoftDrop,
    GameAction::Rotate,
];

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state. One frame at the default 10 fps.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 100;

fn slot(action: GameAction) -> usize {
    match action {
        GameAction::MoveLeft => 0,
        GameAction::MoveRight => 1,
        GameAction::SoftDrop => 2,
        GameAction::Rotate => 3,
    }
}

/// Set of currently held game keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeldKeys {
    /// Time of the last press/repeat per action slot; `None` when released.
    last_seen_ms: [Option<u64>; 4],
    release_timeout_ms: Option<u64>,
}

impl HeldKeys {
    /// Held keys that auto-release after the default timeout.
    pub fn new() -> Self {
        Self::with_release_timeout(Some(DEFAULT_KEY_RELEASE_TIMEOUT_MS))
    }

    /// `None` disables auto-release; use it when the terminal reports releases.
    pub fn with_release_timeout(release_timeout_ms: Option<u64>) -> Self {
        Self {
            last_seen_ms: [None; 4],
            release_timeout_ms,
        }
    }

    pub fn release_timeout_ms(&self) -> Option<u64> {
        self.release_timeout_ms
    }

    pub fn press(&mut self, action: GameAction, now_ms: u64) {
        self.last_seen_ms[slot(action)] = Some(now_ms);
    }

    pub fn release(&mut self, action: GameAction) {
        self.last_seen_ms[slot(action)] = None;
    }

    /// Feed a key event. Returns the action it affected, if any.
    pub fn handle_key_event(&mut self, key: KeyEvent, now_ms: u64) -> Option<GameAction> {
        self.handle_key(key.code, key.kind, now_ms)
    }

    pub fn handle_key(&mut self, code: KeyCode, kind: KeyEventKind, now_ms: u64) -> Option<GameAction> {
        let action = action_for_key(code)?;
        match kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.press(action, now_ms),
            KeyEventKind::Release => self.release(action),
        }
        Some(action)
    }

    pub fn is_held(&self, action: GameAction) -> bool {
        self.last_seen_ms[slot(action)].is_some()
    }

    /// Drop keys whose last press is older than the release timeout.
    pub fn expire(&mut self, now_ms: u64) {
        let Some(timeout) = self.release_timeout_ms else {
            return;
        };
        for seen in self.last_seen_ms.iter_mut() {
            if let Some(t) = *seen {
                if now_ms.saturating_sub(t) > timeout {
                    *seen = None;
                }
            }
        }
    }

    /// Actions to apply this frame, in [`ACTION_ORDER`].
    pub fn actions(&mut self, now_ms: u64) -> ArrayVec<GameAction, 4> {
        self.expire(now_ms);
        ACTION_ORDER
            .iter()
            .copied()
            .filter(|&a| self.is_held(a))
            .collect()
    }

    pub fn reset(&mut self) {
        self.last_seen_ms = [None; 4];
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}
