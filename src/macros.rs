//! Logging macros for ergonomic log message formatting.
//!
//! The level macros take a logger followed by `format!`-style arguments and
//! forward them to the matching `*_fmt` method, so the message is only
//! rendered when the record passes the level gate.
//!
//! # Examples
//!
//! ```
//! use rust_leveled_logger::prelude::*;
//! use rust_leveled_logger::{info, sprint};
//!
//! let logger = Logger::builder().appender(MemoryAppender::new()).build().unwrap();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // Print-style concatenation of values
//! logger.info(sprint!("port=", port, " ready=", true));
//! ```

/// Log a message with automatic formatting at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Logger::builder().build().unwrap();
/// use rust_leveled_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_fmt($level, format_args!($($arg)+))
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $logger.trace_fmt(format_args!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug_fmt(format_args!($($arg)+))
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Logger::builder().build().unwrap();
/// use rust_leveled_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info_fmt(format_args!($($arg)+))
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn_fmt(format_args!($($arg)+))
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error_fmt(format_args!($($arg)+))
    };
}

/// Log a panic-level message, then unwind with the rendered message.
///
/// # Examples
///
/// ```should_panic
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Logger::builder().build().unwrap();
/// use rust_leveled_logger::panic_log;
/// panic_log!(logger, "invariant broken: {} < {}", 3, 2);
/// ```
#[macro_export]
macro_rules! panic_log {
    ($logger:expr, $($arg:tt)+) => {
        $logger.panic_fmt(format_args!($($arg)+))
    };
}

/// Log a fatal-level message, then exit the process with status 1.
///
/// # Examples
///
/// ```no_run
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Logger::builder().build().unwrap();
/// use rust_leveled_logger::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal_fmt(format_args!($($arg)+))
    };
}

/// Concatenate the `Display` output of each value, with no separator.
///
/// ```
/// use rust_leveled_logger::sprint;
///
/// assert_eq!(sprint!("a", 1, 'b', 2.5).to_string(), "a1b2.5");
/// ```
#[macro_export]
macro_rules! sprint {
    ($($value:expr),+ $(,)?) => {
        $crate::Concat(&[$(&$value as &dyn ::std::fmt::Display),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::appenders::MemoryAppender;
    use crate::core::{LogFlags, LogLevel, Logger};
    use std::panic::AssertUnwindSafe;

    fn capture(level: LogLevel) -> (Logger, MemoryAppender) {
        let buffer = MemoryAppender::new();
        let logger = Logger::builder()
            .flags(LogFlags::empty())
            .min_level(level)
            .appender(buffer.clone())
            .build()
            .unwrap();
        (logger, buffer)
    }

    #[test]
    fn test_log_macro() {
        let (logger, buffer) = capture(LogLevel::Info);
        log!(logger, LogLevel::Info, "Test message");
        log!(logger, LogLevel::Debug, "Hidden: {}", 1);
        log!(logger, LogLevel::Warn, "Formatted: {}", 42);
        assert_eq!(buffer.lines(), vec!["[INFO] Test message", "[WARN] Formatted: 42"]);
    }

    #[test]
    fn test_level_macros() {
        let (logger, buffer) = capture(LogLevel::Trace);
        trace!(logger, "Value: {}", 10);
        debug!(logger, "Count: {}", 5);
        info!(logger, "Items: {}", 100);
        warn!(logger, "Retry {} of {}", 1, 3);
        error!(logger, "Code: {}", 500);

        assert_eq!(
            buffer.lines(),
            vec![
                "[TRACE] Value: 10",
                "[DEBUG] Count: 5",
                "[INFO] Items: 100",
                "[WARN] Retry 1 of 3",
                "[ERROR] Code: 500",
            ]
        );
    }

    #[test]
    fn test_macro_reports_call_site() {
        let buffer = MemoryAppender::new();
        let logger = Logger::builder()
            .flags(LogFlags::TIME | LogFlags::SHORT_FILE)
            .appender(buffer.clone())
            .build()
            .unwrap();

        let line = line!() + 1;
        info!(logger, "located");
        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with(&format!(" macros.rs:{} located", line)), "{}", lines[0]);
    }

    #[test]
    fn test_panic_log_macro() {
        let (logger, buffer) = capture(LogLevel::Trace);
        let result = std::panic::catch_unwind(AssertUnwindSafe(|| {
            panic_log!(logger, "Critical failure: {}", "system");
        }));
        assert!(result.is_err());
        assert_eq!(buffer.lines(), vec!["[PANIC] Critical failure: system"]);
    }

    #[test]
    fn test_sprint_macro() {
        let (logger, buffer) = capture(LogLevel::Info);
        let user = "ana";
        logger.info(sprint!("user=", user, " attempts=", 3));
        assert_eq!(buffer.lines(), vec!["[INFO] user=ana attempts=3"]);
    }
}
