//! Structured logging contract.

use std::borrow::Cow;
use std::fmt;

/// Severity of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Something failed.
    Error,
    /// Something looks wrong but processing continues.
    Warning,
    /// Normal operation.
    Info,
    /// Diagnostics.
    Debug,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogLevel::Error => "error",
            LogLevel::Warning => "warning",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        })
    }
}

/// A structured log record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Severity.
    pub level: LogLevel,
    /// Subsystem that produced the record (e.g. `"network"`).
    pub category: Cow<'static, str>,
    /// Human-readable message.
    pub message: String,
}

impl LogRecord {
    /// Create a record.
    pub fn new(
        level: LogLevel,
        category: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level,
            category: category.into(),
            message: message.into(),
        }
    }

    /// An [`LogLevel::Error`] record.
    pub fn error(category: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self::new(LogLevel::Error, category, message)
    }

    /// A [`LogLevel::Warning`] record.
    pub fn warning(category: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self::new(LogLevel::Warning, category, message)
    }

    /// An [`LogLevel::Info`] record.
    pub fn info(category: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self::new(LogLevel::Info, category, message)
    }

    /// A [`LogLevel::Debug`] record.
    pub fn debug(category: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self::new(LogLevel::Debug, category, message)
    }
}

/// Structured logging sink.
pub trait Logger: Send + Sync {
    /// Emit one record.
    fn log(&self, record: &LogRecord);
}
