//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod flags;
pub mod header;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod record;

pub use appender::Appender;
pub use config::{LoggerConfig, OutputConfig};
pub use error::{LoggerError, Result};
pub use flags::LogFlags;
pub use header::write_header;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, WriteErrorCallback, FATAL_EXIT_CODE};
pub use metrics::LoggerMetrics;
pub use record::{Concat, Record, RecordFormatter};
