/// Logging context passed explicitly to each pipeline component.
use log::{Level, LevelFilter};
use std::fmt;

/// Forwards messages to the `log` facade under a component target,
/// filtered by a per-component level.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    target: &'static str,
    level: LevelFilter,
}

impl Reporter {
    pub fn new(target: &'static str, level: LevelFilter) -> Self {
        Self { target, level }
    }

    /// Reporter that drops everything. Used by tests and library callers
    /// that do not want log output.
    pub fn silent() -> Self {
        Self::new("portrait_tool", LevelFilter::Off)
    }

    /// Same level, different component target.
    pub fn for_component(&self, target: &'static str) -> Self {
        Self {
            target,
            level: self.level,
        }
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn enabled(&self, level: Level) -> bool {
        level <= self.level
    }

    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if self.enabled(level) {
            log::log!(target: self.target, level, "{}", args);
        }
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args);
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }
}
