//! Tag-based console logging for the fetcher plugins
//!
//! Provides a small structured logging API:
//! - Standard levels (Error/Warning/Info/Debug)
//! - Per-subsystem tags for filtering and colored output
//! - Debug output gated behind an explicit runtime switch
//!
//! Call `logger::init(LoggerConfig { .. })` once at startup; all functions
//! fall back to sane defaults when init was never called.

use std::io::{self, Write};

use chrono::Utc;
use colored::*;
use once_cell::sync::OnceCell;

/// Subsystem tags used across the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTag {
    Fetcher,
    Registry,
    Price,
}

impl LogTag {
    pub fn label(&self) -> &'static str {
        match self {
            LogTag::Fetcher => "FETCHER",
            LogTag::Registry => "REGISTRY",
            LogTag::Price => "PRICE",
        }
    }

    fn colored_label(&self) -> ColoredString {
        match self {
            LogTag::Fetcher => self.label().magenta().bold(),
            LogTag::Registry => self.label().blue().bold(),
            LogTag::Price => self.label().cyan().bold(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Debug,
}

impl LogLevel {
    fn prefix(&self) -> ColoredString {
        match self {
            LogLevel::Error => "ERROR".red().bold(),
            LogLevel::Warning => "WARN".yellow().bold(),
            LogLevel::Info => "INFO".green(),
            LogLevel::Debug => "DEBUG".dimmed(),
        }
    }
}

/// Runtime logger configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggerConfig {
    /// Show DEBUG level output
    pub debug: bool,
    /// Suppress everything below WARNING
    pub quiet: bool,
}

static CONFIG: OnceCell<LoggerConfig> = OnceCell::new();

/// Initialize the logger. Later calls are ignored.
pub fn init(config: LoggerConfig) {
    let _ = CONFIG.set(config);
}

fn config() -> LoggerConfig {
    CONFIG.get().copied().unwrap_or_default()
}

/// Log at ERROR level (always shown)
pub fn error(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level (shown unless filtered by the host)
pub fn warning(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level (standard operations, hidden by `quiet`)
pub fn info(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level (only shown when `debug` is enabled)
pub fn debug(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Debug, message);
}

fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    let config = config();
    match level {
        LogLevel::Debug if !config.debug => return,
        LogLevel::Info if config.quiet => return,
        _ => {}
    }

    let timestamp = Utc::now().format("%H:%M:%S%.3f");
    println!(
        "{} {} {} {}",
        level.prefix(),
        tag.colored_label(),
        format!("[{}]", timestamp).dimmed(),
        message
    );
    io::stdout().flush().ok();
}
