use crate::chronometer::Chronometer;
use log::{Level, LevelFilter, SetLoggerError};
use std::fmt::Display;

/// Installs the global logger. Output goes to stderr, stdout carries the codec output.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .try_init()
}

/// Tags each message with the time since the logger was created.
#[derive(Clone, Copy)]
pub struct Logger {
    chronometer: Chronometer,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            chronometer: Chronometer::new(),
        }
    }

    pub fn log(&self, level: Level, value: impl Display) {
        log::log!(level, "{} ({} elapsed)", value, self.chronometer.elapsed());
    }

    pub fn debug(&self, value: impl Display) {
        self.log(Level::Debug, value);
    }

    pub fn info(&self, value: impl Display) {
        self.log(Level::Info, value);
    }

    pub fn warn(&self, value: impl Display) {
        self.log(Level::Warn, value);
    }
}
