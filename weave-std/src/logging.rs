//! Logging capability implementations.
//!
//! - [`LoggerProxy`] - The decorator every logger passes through on its way
//!   into the container
//! - [`TracingLogger`] - Default sink backed by `tracing`
//! - [`SilentLogger`] - Discards everything

use std::sync::Arc;
use weave_core::contracts::{LogRecord, Logger};
use weave_core::DependencyLoggingCondition;

/// Decorates a logger with the container's logging switch.
///
/// The switch is read through `dependencies` on every call, so toggling it on
/// the container takes effect immediately for every holder of the proxy.
pub struct LoggerProxy<D> {
    logger: Arc<dyn Logger>,
    dependencies: D,
}

impl<D> LoggerProxy<D> {
    /// Wrap `logger`, consulting `dependencies` for the logging switch.
    pub fn new(logger: Arc<dyn Logger>, dependencies: D) -> Self {
        Self {
            logger,
            dependencies,
        }
    }

    /// The undecorated logger.
    pub fn inner(&self) -> &Arc<dyn Logger> {
        &self.logger
    }
}

impl<D> Logger for LoggerProxy<D>
where
    D: DependencyLoggingCondition + Send + Sync,
{
    /// Forwards `record` when the switch is on.
    ///
    /// # Panics
    ///
    /// Panics if the switch itself panics. The container's resolver does so
    /// only while construction is still in progress; once the container is
    /// dropped it reports logging as disabled and records are discarded.
    fn log(&self, record: &LogRecord) {
        if self.dependencies.is_logging_enabled() {
            self.logger.log(record);
        }
    }
}

/// A logger that forwards records to `tracing`.
///
/// Without the `tracing` feature this logger is silent.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, record: &LogRecord) {
        #[cfg(feature = "tracing")]
        {
            use weave_core::contracts::LogLevel;

            let category = record.category.as_ref();
            match record.level {
                LogLevel::Error => tracing::error!(category, "{}", record.message),
                LogLevel::Warning => tracing::warn!(category, "{}", record.message),
                LogLevel::Info => tracing::info!(category, "{}", record.message),
                LogLevel::Debug => tracing::debug!(category, "{}", record.message),
            }
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = record; // Suppress unused warning
        }
    }
}

/// A logger that discards every record.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentLogger;

impl Logger for SilentLogger {
    fn log(&self, _record: &LogRecord) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingLogger;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct Switch(AtomicBool);

    impl DependencyLoggingCondition for Switch {
        fn is_logging_enabled(&self) -> bool {
            self.0.load(Ordering::SeqCst)
        }
    }

    #[test]
    fn test_proxy_respects_switch_at_call_time() {
        let recorder = RecordingLogger::new();
        let switch = Arc::new(Switch(AtomicBool::new(true)));
        let proxy = LoggerProxy::new(Arc::new(recorder.clone()), Arc::clone(&switch));

        proxy.log(&LogRecord::info("test", "first"));
        switch.0.store(false, Ordering::SeqCst);
        proxy.log(&LogRecord::info("test", "dropped"));
        switch.0.store(true, Ordering::SeqCst);
        proxy.log(&LogRecord::info("test", "third"));

        let messages: Vec<_> = recorder.records().into_iter().map(|r| r.message).collect();
        assert_eq!(messages, vec!["first", "third"]);
    }

    #[test]
    fn test_tracing_logger_accepts_all_levels() {
        let logger = TracingLogger;
        logger.log(&LogRecord::error("test", "e"));
        logger.log(&LogRecord::warning("test", "w"));
        logger.log(&LogRecord::info("test", "i"));
        logger.log(&LogRecord::debug("test", "d"));
    }
}
