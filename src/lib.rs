//! # Rust Leveled Logger
//!
//! A leveled logger that writes each record to several outputs at once.
//!
//! ## Features
//!
//! - **Line headers**: date, time, microseconds, caller file and line, and
//!   process id, each switched on by a [`LogFlags`] bit
//! - **Seven levels**: `TRACE` to `FATAL`, where `PANIC` unwinds and `FATAL`
//!   exits the process after logging
//! - **Multiple Appenders**: console, file, any `io::Write`, in-memory
//! - **Thread Safe**: every record reaches every appender whole and in the
//!   same order
//!
//! ```
//! use rust_leveled_logger::prelude::*;
//!
//! let audit = MemoryAppender::new();
//! let logger = Logger::new(
//!     LogFlags::empty(),
//!     LogLevel::Warn,
//!     vec![Box::new(ConsoleAppender::stderr()), Box::new(audit.clone())],
//! )
//! .unwrap();
//!
//! logger.info("x");
//! logger.warn("y");
//! assert_eq!(audit.contents(), "[WARN] y\n");
//! ```

pub mod appenders;
pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, MemoryAppender, WriterAppender};
    pub use crate::core::{
        Appender, Concat, LogFlags, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        LoggerMetrics, Result,
    };
}

pub use appenders::{ConsoleAppender, ConsoleTarget, FileAppender, MemoryAppender, WriterAppender};
pub use core::{
    write_header, Appender, Concat, LogFlags, LogLevel, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, LoggerMetrics, OutputConfig, Record, RecordFormatter, Result, WriteErrorCallback,
    FATAL_EXIT_CODE,
};
