//! Main logger implementation

use super::{
    appender::Appender,
    error::{LoggerError, Result},
    flags::LogFlags,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    record::{Record, RecordFormatter},
};
use crate::appenders::ConsoleAppender;
use parking_lot::Mutex;
use std::any::Any;
use std::fmt;
use std::panic::{AssertUnwindSafe, Location};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Exit status used when a `Fatal` record terminates the process
pub const FATAL_EXIT_CODE: i32 = 1;

/// Callback invoked with the appender name and the error whenever an
/// appender fails to accept a record
pub type WriteErrorCallback = Arc<dyn Fn(&str, &LoggerError) + Send + Sync>;

/// A leveled logger writing every record to all of its appenders.
///
/// Flags, minimum level, and appenders are fixed once the logger is built.
/// A single lock is held while one record is written to every appender, so
/// concurrent callers never interleave bytes and all appenders see records
/// in the same order.
///
/// # Example
///
/// ```
/// use rust_leveled_logger::prelude::*;
///
/// let buffer = MemoryAppender::new();
/// let logger = Logger::builder()
///     .flags(LogFlags::empty())
///     .min_level(LogLevel::Warn)
///     .appender(buffer.clone())
///     .build()
///     .unwrap();
///
/// logger.info("not shown");
/// logger.warn("disk at 91%");
/// assert_eq!(buffer.contents(), "[WARN] disk at 91%\n");
/// ```
pub struct Logger {
    formatter: RecordFormatter,
    threshold: u8,
    appenders: Mutex<Vec<Box<dyn Appender>>>,
    metrics: LoggerMetrics,
    on_write_error: Option<WriteErrorCallback>,
    /// Set after the first unreported appender failure was announced on stderr
    failure_announced: AtomicBool,
}

impl Logger {
    /// Create a logger from its three fixed parts.
    ///
    /// # Errors
    ///
    /// `LoggerError::InvalidConfiguration` if `flags` contains both
    /// `LONG_FILE` and `SHORT_FILE`.
    pub fn new(flags: LogFlags, level: LogLevel, appenders: Vec<Box<dyn Appender>>) -> Result<Self> {
        Self::from_parts(flags, level.value(), appenders, None)
    }

    fn from_parts(
        flags: LogFlags,
        threshold: u8,
        appenders: Vec<Box<dyn Appender>>,
        on_write_error: Option<WriteErrorCallback>,
    ) -> Result<Self> {
        flags.validate()?;
        Ok(Self::assemble(flags, threshold, appenders, on_write_error))
    }

    /// Logger with `STD_FLAGS`, `Info` level and a stderr appender
    pub fn standard() -> Self {
        Self::assemble(
            LogFlags::STD_FLAGS,
            LogLevel::Info.value(),
            vec![Box::new(ConsoleAppender::stderr())],
            None,
        )
    }

    fn assemble(
        flags: LogFlags,
        threshold: u8,
        appenders: Vec<Box<dyn Appender>>,
        on_write_error: Option<WriteErrorCallback>,
    ) -> Self {
        Self {
            formatter: RecordFormatter::new(flags),
            threshold,
            appenders: Mutex::new(appenders),
            metrics: LoggerMetrics::new(),
            on_write_error,
            failure_announced: AtomicBool::new(false),
        }
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use rust_leveled_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .flags(LogFlags::STD_FLAGS | LogFlags::SHORT_FILE)
    ///     .min_level(LogLevel::Debug)
    ///     .appender(ConsoleAppender::stderr())
    ///     .build()
    ///     .unwrap();
    /// assert!(logger.is_enabled(LogLevel::Debug));
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn flags(&self) -> LogFlags {
        self.formatter.flags()
    }

    /// Minimum severity value that is written. Records with a value equal
    /// or higher are logged.
    pub fn level(&self) -> u8 {
        self.threshold
    }

    /// Whether a record at `level` passes the level gate
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level.value() >= self.threshold
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn appender_count(&self) -> usize {
        self.appenders.lock().len()
    }

    /// Flush every appender, in order.
    ///
    /// All appenders are flushed even if an earlier one fails; the first
    /// error is returned.
    pub fn flush(&self) -> Result<()> {
        let mut appenders = self.appenders.lock();
        let mut first_error = None;
        for appender in appenders.iter_mut() {
            if let Err(e) = appender.flush() {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Log `message` at `level`.
    ///
    /// `Panic` and `Fatal` escalate after writing, exactly like
    /// [`Logger::panic`] and [`Logger::fatal`].
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        self.dispatch(level, Location::caller(), format_args!("{}", message));
    }

    /// Log pre-built format arguments at `level`. The message is only
    /// rendered if the record passes the level gate.
    #[track_caller]
    pub fn log_fmt(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.dispatch(level, Location::caller(), args);
    }

    /// Lowest level, for variable values during development
    #[inline]
    #[track_caller]
    pub fn trace(&self, message: impl fmt::Display) {
        self.log(LogLevel::Trace, message);
    }

    /// Anything too verbose for `info`
    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(LogLevel::Debug, message);
    }

    /// Regular operation
    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.log(LogLevel::Error, message);
    }

    /// Log at `Panic` level, then unwind with the message as a `String`
    /// payload. Unwinds even when the level gate suppresses the record.
    #[track_caller]
    pub fn panic(&self, message: impl fmt::Display) -> ! {
        self.escalate_panic(Location::caller(), format_args!("{}", message))
    }

    /// Log at `Fatal` level, flush every appender, then exit the process
    /// with status 1. Exits even when the level gate suppresses the record.
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        self.escalate_fatal(Location::caller(), format_args!("{}", message))
    }

    #[inline]
    #[track_caller]
    pub fn trace_fmt(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Trace, args);
    }

    #[inline]
    #[track_caller]
    pub fn debug_fmt(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Debug, args);
    }

    #[inline]
    #[track_caller]
    pub fn info_fmt(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Info, args);
    }

    #[inline]
    #[track_caller]
    pub fn warn_fmt(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Warn, args);
    }

    #[inline]
    #[track_caller]
    pub fn error_fmt(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Error, args);
    }

    #[track_caller]
    pub fn panic_fmt(&self, args: fmt::Arguments<'_>) -> ! {
        self.escalate_panic(Location::caller(), args)
    }

    #[track_caller]
    pub fn fatal_fmt(&self, args: fmt::Arguments<'_>) -> ! {
        self.escalate_fatal(Location::caller(), args)
    }

    #[track_caller]
    fn dispatch(&self, level: LogLevel, location: &'static Location<'static>, args: fmt::Arguments<'_>) {
        match level {
            LogLevel::Panic => self.escalate_panic(location, args),
            LogLevel::Fatal => self.escalate_fatal(location, args),
            _ => {
                if self.gate(level) {
                    self.emit(level, location, &fmt::format(args));
                }
            }
        }
    }

    #[track_caller]
    fn escalate_panic(&self, location: &'static Location<'static>, args: fmt::Arguments<'_>) -> ! {
        let message = fmt::format(args);
        if self.gate(LogLevel::Panic) {
            self.emit(LogLevel::Panic, location, &message);
        }
        std::panic::panic_any(message)
    }

    fn escalate_fatal(&self, location: &'static Location<'static>, args: fmt::Arguments<'_>) -> ! {
        if self.gate(LogLevel::Fatal) {
            self.emit(LogLevel::Fatal, location, &fmt::format(args));
        }
        // process::exit runs no destructors, so buffered appenders are
        // flushed here or never.
        self.flush_quietly();
        std::process::exit(FATAL_EXIT_CODE)
    }

    /// Level gate. Reads only immutable state, so no lock is taken.
    #[inline]
    fn gate(&self, level: LogLevel) -> bool {
        if self.is_enabled(level) {
            true
        } else {
            self.metrics.record_filtered();
            false
        }
    }

    fn emit(&self, level: LogLevel, location: &'static Location<'static>, message: &str) {
        let record = Record::new(level, message).with_location(location);
        match self.formatter.format(&record) {
            Ok(bytes) => self.fan_out(&bytes),
            Err(e) => self.report_write_error("formatter", &e),
        }
    }

    /// Write one formatted record to every appender, in registration order,
    /// under the logger lock.
    ///
    /// Each appender is isolated: an error or a panic in one of them does not
    /// keep the record from the others. Failures are reported after the lock
    /// is released so a callback may log through this same logger.
    fn fan_out(&self, bytes: &[u8]) {
        let mut failures: Vec<(String, LoggerError)> = Vec::new();

        {
            let mut appenders = self.appenders.lock();
            for appender in appenders.iter_mut() {
                let append_result =
                    std::panic::catch_unwind(AssertUnwindSafe(|| appender.append(bytes)));

                match append_result {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => failures.push((appender.name().to_string(), e)),
                    Err(panic_info) => {
                        let name = appender.name().to_string();
                        let error = LoggerError::appender_panicked(&name, panic_message(&*panic_info));
                        failures.push((name, error));
                    }
                }
            }
        }

        self.metrics.record_written();
        if !failures.is_empty() {
            self.metrics.record_failed_record();
            for (name, error) in &failures {
                self.report_write_error(name, error);
            }
        }
    }

    fn report_write_error(&self, appender: &str, error: &LoggerError) {
        self.metrics.record_write_failure();

        if let Some(ref callback) = self.on_write_error {
            callback(appender, error);
        } else if !self.failure_announced.swap(true, Ordering::Relaxed) {
            eprintln!(
                "[LOGGER WARNING] Appender '{}' failed: {}. \
                 Further failures are only counted in the logger metrics.",
                appender, error
            );
        }
    }

    fn flush_quietly(&self) {
        let mut appenders = self.appenders.lock();
        for appender in appenders.iter_mut() {
            let _ = std::panic::catch_unwind(AssertUnwindSafe(|| appender.flush()));
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Logger");
        debug
            .field("flags", &self.flags())
            .field("level", &self.threshold);
        match self.appenders.try_lock() {
            Some(appenders) => {
                let names: Vec<&str> = appenders.iter().map(|a| a.name()).collect();
                debug.field("appenders", &names)
            }
            None => debug.field("appenders", &"<locked>"),
        };
        debug.finish_non_exhaustive()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_leveled_logger::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder()
///     .flags(LogFlags::STD_FLAGS)
///     .flag(LogFlags::PID)
///     .min_level(LogLevel::Debug)
///     .appender(ConsoleAppender::stderr())
///     .on_write_error(Arc::new(|appender, err| {
///         eprintln!("ALERT: {} failed: {}", appender, err);
///     }))
///     .build()
///     .unwrap();
/// assert_eq!(logger.flags(), LogFlags::DATE | LogFlags::TIME | LogFlags::PID);
/// ```
pub struct LoggerBuilder {
    flags: LogFlags,
    threshold: u8,
    appenders: Vec<Box<dyn Appender>>,
    on_write_error: Option<WriteErrorCallback>,
}

impl LoggerBuilder {
    /// Create a new builder with `STD_FLAGS`, `Info` level and no appenders
    pub fn new() -> Self {
        Self {
            flags: LogFlags::STD_FLAGS,
            threshold: LogLevel::Info.value(),
            appenders: Vec::new(),
            on_write_error: None,
        }
    }

    /// Replace the header flags
    #[must_use = "builder methods return a new value"]
    pub fn flags(mut self, flags: LogFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Add flags to the current set
    #[must_use = "builder methods return a new value"]
    pub fn flag(mut self, flag: LogFlags) -> Self {
        self.flags |= flag;
        self
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.threshold = level.value();
        self
    }

    /// Set the minimum level as a raw value on the severity scale, for
    /// thresholds between the named levels (e.g. `35` logs `Warn` and up)
    #[must_use = "builder methods return a new value"]
    pub fn min_level_value(mut self, value: u8) -> Self {
        self.threshold = value;
        self
    }

    /// Add an appender. Appenders are written in the order they are added.
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Box::new(appender));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn boxed_appender(mut self, appender: Box<dyn Appender>) -> Self {
        self.appenders.push(appender);
        self
    }

    /// Set a callback for appender failures
    ///
    /// Without a callback, the first failure is announced once on stderr and
    /// every failure is counted in [`LoggerMetrics::write_failures`].
    #[must_use = "builder methods return a new value"]
    pub fn on_write_error(mut self, callback: WriteErrorCallback) -> Self {
        self.on_write_error = Some(callback);
        self
    }

    /// Build the Logger
    ///
    /// # Errors
    ///
    /// `LoggerError::InvalidConfiguration` if both `LONG_FILE` and
    /// `SHORT_FILE` are set.
    pub fn build(self) -> Result<Logger> {
        Logger::from_parts(self.flags, self.threshold, self.appenders, self.on_write_error)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
