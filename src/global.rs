//! Process-wide default logger
//!
//! One shared [`Logger`] for code that does not want to pass a logger
//! around. It is created on first use with [`crate::LogFlags::STD_FLAGS`],
//! [`LogLevel::Info`] and a stderr appender, unless [`init_default`] installed
//! a different one before that.
//!
//! Every function here forwards unchanged to the same method of the shared
//! instance, so caller locations still point at the application code.
//!
//! ```no_run
//! use rust_leveled_logger::global;
//!
//! global::info("service started");
//! global::warn_fmt(format_args!("{} retries left", 2));
//! ```

use crate::core::{LogLevel, Logger, LoggerError, Result};
use std::fmt;
use std::sync::OnceLock;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The shared logger, created on first call
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(Logger::standard)
}

/// Install `logger` as the shared logger.
///
/// # Errors
///
/// `LoggerError::DefaultAlreadyInitialized` if the shared logger already
/// exists, either from an earlier call or from first use.
pub fn init_default(logger: Logger) -> Result<()> {
    DEFAULT_LOGGER
        .set(logger)
        .map_err(|_| LoggerError::DefaultAlreadyInitialized)
}

#[track_caller]
pub fn log(level: LogLevel, message: impl fmt::Display) {
    default_logger().log(level, message);
}

#[track_caller]
pub fn trace(message: impl fmt::Display) {
    default_logger().trace(message);
}

#[track_caller]
pub fn debug(message: impl fmt::Display) {
    default_logger().debug(message);
}

#[track_caller]
pub fn info(message: impl fmt::Display) {
    default_logger().info(message);
}

#[track_caller]
pub fn warn(message: impl fmt::Display) {
    default_logger().warn(message);
}

#[track_caller]
pub fn error(message: impl fmt::Display) {
    default_logger().error(message);
}

#[track_caller]
pub fn panic(message: impl fmt::Display) -> ! {
    default_logger().panic(message)
}

#[track_caller]
pub fn fatal(message: impl fmt::Display) -> ! {
    default_logger().fatal(message)
}

#[track_caller]
pub fn trace_fmt(args: fmt::Arguments<'_>) {
    default_logger().trace_fmt(args);
}

#[track_caller]
pub fn debug_fmt(args: fmt::Arguments<'_>) {
    default_logger().debug_fmt(args);
}

#[track_caller]
pub fn info_fmt(args: fmt::Arguments<'_>) {
    default_logger().info_fmt(args);
}

#[track_caller]
pub fn warn_fmt(args: fmt::Arguments<'_>) {
    default_logger().warn_fmt(args);
}

#[track_caller]
pub fn error_fmt(args: fmt::Arguments<'_>) {
    default_logger().error_fmt(args);
}

#[track_caller]
pub fn panic_fmt(args: fmt::Arguments<'_>) -> ! {
    default_logger().panic_fmt(args)
}

#[track_caller]
pub fn fatal_fmt(args: fmt::Arguments<'_>) -> ! {
    default_logger().fatal_fmt(args)
}
