use crate::error::LoggingError;
use chrono::Local;
use log::{Level, Metadata, Record};
use once_cell::sync::OnceCell;
use std::fs::{OpenOptions, create_dir_all};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const LOG_FILE: &str = "log.txt";

#[derive(Debug)]
struct SimpleLogger {
    log_path: PathBuf,
    level: Level,
}

static LOGGER: OnceCell<SimpleLogger> = OnceCell::new();

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let log_entry = format!(
                "[{}] {} - {}\n",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            );
            let log_file = self.log_path.join(LOG_FILE);

            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(log_file) {
                let _ = file.write_all(log_entry.as_bytes());
            }
        }
    }

    fn flush(&self) {}
}

// Default log location: ~/deadlight/data
pub fn default_log_dir() -> Result<PathBuf, LoggingError> {
    let home = dir::home_dir().ok_or(LoggingError::NoHomeDirectory)?;
    Ok(home.join("deadlight").join("data"))
}

pub fn init(debug_mode: bool) -> Result<(), LoggingError> {
    let level = if debug_mode { Level::Debug } else { Level::Info };
    init_at(&default_log_dir()?, level)
}

// Install the file logger writing to `log_dir/log.txt`. Only the first call wins.
pub fn init_at(log_dir: &Path, level: Level) -> Result<(), LoggingError> {
    create_dir_all(log_dir)?;

    let logger = LOGGER.get_or_init(|| SimpleLogger {
        log_path: log_dir.to_path_buf(),
        level,
    });

    log::set_logger(logger)?;
    log::set_max_level(level.to_level_filter());
    Ok(())
}
