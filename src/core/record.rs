//! Log record and line formatting

use super::error::Result;
use super::flags::LogFlags;
use super::header::write_header;
use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use std::fmt;
use std::panic::Location;

/// One log call, captured at the moment it passed the level gate
#[derive(Debug, Clone)]
pub struct Record<'a> {
    pub level: LogLevel,
    pub message: &'a str,
    pub timestamp: DateTime<Local>,
    pub location: Option<&'static Location<'static>>,
}

impl<'a> Record<'a> {
    pub fn new(level: LogLevel, message: &'a str) -> Self {
        Self {
            level,
            message,
            timestamp: Local::now(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: &'static Location<'static>) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Turns records into the exact bytes handed to every appender
#[derive(Debug, Clone, Copy)]
pub struct RecordFormatter {
    flags: LogFlags,
    pid: u32,
}

impl RecordFormatter {
    pub fn new(flags: LogFlags) -> Self {
        Self::with_pid(flags, std::process::id())
    }

    pub fn with_pid(flags: LogFlags, pid: u32) -> Self {
        Self { flags, pid }
    }

    pub fn flags(&self) -> LogFlags {
        self.flags
    }

    /// Header, message, and a single trailing newline.
    ///
    /// A message that already ends in `\n` is not given a second one.
    ///
    /// # Errors
    ///
    /// `LoggerError::FormatError` if the header could not be rendered.
    pub fn format(&self, record: &Record<'_>) -> Result<Vec<u8>> {
        let mut line = String::with_capacity(64 + record.message.len());
        write_header(
            &mut line,
            self.flags,
            record.level,
            &record.timestamp,
            record.location,
            self.pid,
        )?;
        line.push_str(record.message);
        if !record.message.ends_with('\n') {
            line.push('\n');
        }
        Ok(line.into_bytes())
    }
}

/// Print-style message body: each value's `Display` output, concatenated
/// in order with no separator.
///
/// ```
/// use rust_leveled_logger::Concat;
///
/// let count = 3;
/// assert_eq!(Concat(&[&"retry ", &count, &'/', &5]).to_string(), "retry 3/5");
/// ```
pub struct Concat<'a>(pub &'a [&'a dyn fmt::Display]);

impl fmt::Display for Concat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.0 {
            value.fmt(f)?;
        }
        Ok(())
    }
}
