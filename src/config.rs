//! Process configuration read from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TETRIS_SEED` | random | Seed of the piece generator |
//! | `TETRIS_LANG` | `en` | Label language (`en`, `ru`) |
//! | `TETRIS_FALL_MS` | 500 | Forced gravity interval |
//! | `TETRIS_FPS` | 10 | Frame cap |
//! | `TETRIS_COLUMNS` / `TETRIS_ROWS` | 40 / 30 | Board size in blocks |
//! | `TETRIS_KEY_RELEASE_MS` | 100 | Auto-release for terminals without key-up events, capped at one frame |
//! | `TETRIS_SCORE_EVERY_LOCK` | off | Award the clear bonus on every lock |
//! | `TETRIS_LOG_PATH` | `tetris-classic.log` | Log file |
//! | `TETRIS_LOG_LEVEL` | `info` | `off`, `error`, `warn`, `info`, `debug`, `trace` |
//!
//! Unparseable values fall back to their default and are remembered in
//! [`AppConfig::ignored`] so they can be logged once logging is up.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Result};
use log::LevelFilter;

use crate::input::DEFAULT_KEY_RELEASE_TIMEOUT_MS;
use crate::types::{
    ClearScoring, GameConfig, Locale, COLUMNS, FALL_INTERVAL_MS, FRAMES_PER_SECOND,
    GAME_OVER_DELAY_MS, ROWS,
};

pub const DEFAULT_LOG_PATH: &str = "tetris-classic.log";

/// Smallest board that still fits every standard shape in every orientation.
const MIN_BOARD_SIDE: usize = 4;

/// Largest board side; keeps the drawn scene inside `u16` terminal coordinates.
pub const MAX_BOARD_SIDE: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: Option<u32>,
    pub locale: Locale,
    pub fall_interval_ms: u64,
    pub frames_per_second: u32,
    pub columns: usize,
    pub rows: usize,
    pub key_release_timeout_ms: u64,
    pub clear_scoring: ClearScoring,
    pub game_over_delay_ms: u64,
    pub log_path: String,
    pub log_level: LevelFilter,
    /// `NAME=value` pairs that could not be parsed and were replaced by defaults.
    pub ignored: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            locale: Locale::En,
            fall_interval_ms: FALL_INTERVAL_MS,
            frames_per_second: FRAMES_PER_SECOND,
            columns: COLUMNS,
            rows: ROWS,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            clear_scoring: ClearScoring::OnClear,
            game_over_delay_ms: GAME_OVER_DELAY_MS,
            log_path: DEFAULT_LOG_PATH.to_string(),
            log_level: LevelFilter::Info,
            ignored: Vec::new(),
        }
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let mut ignored = Vec::new();

        if let Some(seed) = read(&lookup, &mut ignored, "TETRIS_SEED", |v| v.parse().ok()) {
            config.seed = Some(seed);
        }
        if let Some(locale) = read(&lookup, &mut ignored, "TETRIS_LANG", Locale::from_str) {
            config.locale = locale;
        }
        if let Some(ms) = read(&lookup, &mut ignored, "TETRIS_FALL_MS", |v| v.parse().ok()) {
            config.fall_interval_ms = ms;
        }
        if let Some(fps) = read(&lookup, &mut ignored, "TETRIS_FPS", |v| v.parse().ok()) {
            config.frames_per_second = fps;
        }
        if let Some(columns) = read(&lookup, &mut ignored, "TETRIS_COLUMNS", |v| v.parse().ok()) {
            config.columns = columns;
        }
        if let Some(rows) = read(&lookup, &mut ignored, "TETRIS_ROWS", |v| v.parse().ok()) {
            config.rows = rows;
        }
        if let Some(ms) = read(&lookup, &mut ignored, "TETRIS_KEY_RELEASE_MS", |v| v.parse().ok()) {
            config.key_release_timeout_ms = ms;
        }
        if let Some(every) = read(&lookup, &mut ignored, "TETRIS_SCORE_EVERY_LOCK", parse_flag) {
            config.clear_scoring = if every {
                ClearScoring::EveryLock
            } else {
                ClearScoring::OnClear
            };
        }
        if let Some(level) = read(&lookup, &mut ignored, "TETRIS_LOG_LEVEL", |v| {
            LevelFilter::from_str(v).ok()
        }) {
            config.log_level = level;
        }
        if let Some(path) = lookup("TETRIS_LOG_PATH").filter(|p| !p.trim().is_empty()) {
            config.log_path = path;
        }

        config.ignored = ignored;
        config
    }

    /// Reject settings the game cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.columns < MIN_BOARD_SIDE || self.rows < MIN_BOARD_SIDE {
            bail!(
                "board must be at least {}x{} blocks, got {}x{}",
                MIN_BOARD_SIDE,
                MIN_BOARD_SIDE,
                self.columns,
                self.rows
            );
        }
        if self.columns > MAX_BOARD_SIDE || self.rows > MAX_BOARD_SIDE {
            bail!(
                "board must be at most {}x{} blocks, got {}x{}",
                MAX_BOARD_SIDE,
                MAX_BOARD_SIDE,
                self.columns,
                self.rows
            );
        }
        if self.fall_interval_ms == 0 {
            bail!("fall interval must be positive");
        }
        if self.frames_per_second == 0 {
            bail!("frame rate must be positive");
        }
        Ok(())
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::default()
            .with_size(self.columns, self.rows)
            .with_clear_scoring(self.clear_scoring)
    }

    /// Time budget of one frame.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.frames_per_second.max(1)))
    }

    /// Auto-release timeout for held keys, never longer than one frame so a
    /// tap without a release event is applied on a single frame only.
    pub fn key_release_timeout_ms(&self) -> u64 {
        let frame_ms = self.frame_duration().as_millis() as u64;
        self.key_release_timeout_ms.min(frame_ms)
    }

    pub fn game_over_delay(&self) -> Duration {
        Duration::from_millis(self.game_over_delay_ms)
    }
}

/// Look up `name` and parse its trimmed value, recording it in `ignored` if
/// parsing fails.
fn read<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    ignored: &mut Vec<String>,
    name: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    let raw = lookup(name)?;
    let value = parse(raw.trim());
    if value.is_none() {
        ignored.push(format!("{}={}", name, raw));
    }
    value
}
