//! File logging for the game binary.
//!
//! stdout is the game screen, so log records go to a file through
//! [log4rs](https://docs.rs/log4rs).

use anyhow::{anyhow, Result};
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

pub const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}";

/// Build the log4rs configuration: one file appender filtered at `level`.
pub fn build_config(level: LevelFilter, file_path: &str) -> Result<Config> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(file_path)
        .map_err(|e| anyhow!("log: cannot open {}: {}", file_path, e))?;
    Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))
        .map_err(|e| anyhow!("log: invalid config: {}", e))
}

/// Install the global logger. `LevelFilter::Off` skips logging entirely and
/// creates no file.
pub fn init_log(level: LevelFilter, file_path: &str) -> Result<()> {
    if level == LevelFilter::Off {
        return Ok(());
    }
    let config = build_config(level, file_path)?;
    log4rs::init_config(config).map_err(|e| anyhow!("log: init failed: {}", e))?;
    Ok(())
}
