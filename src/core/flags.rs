//! Header formatting options
//!
//! Each option is an independent bit. Combine them with `|`:
//!
//! ```
//! use rust_leveled_logger::LogFlags;
//!
//! let flags = LogFlags::DATE | LogFlags::TIME | LogFlags::PID;
//! assert!(flags.contains(LogFlags::TIME));
//! assert!(!flags.contains(LogFlags::UTC));
//! ```
//!
//! `DATE | TIME` produces `[INFO] 1970-01-01 00:00:00 message`, while
//! `DATE | TIME | MICROSECONDS | LONG_FILE | PID` produces
//! `[INFO] 1970-01-01 00:00:00.123456 /path/to/src/main.rs:23 PID1234 message`.
//!
//! Caller location and `PID` are only written when `DATE` or `TIME` is set
//! as well: `SHORT_FILE | PID` alone produces `[INFO] message`.

use super::error::{LoggerError, Result};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not, Sub};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LogFlags(u8);

impl LogFlags {
    /// Date in the local time zone: `2009-01-23`
    pub const DATE: LogFlags = LogFlags(1 << 0);
    /// Time in the local time zone: `01:23:23`
    pub const TIME: LogFlags = LogFlags(1 << 1);
    /// Microsecond count after the seconds: `01:23:23.123123`, `01:23:23.05`
    /// for 5µs. Only shown together with `TIME`.
    pub const MICROSECONDS: LogFlags = LogFlags(1 << 2);
    /// Full file path and line number: `/a/b/c/d.rs:23`
    pub const LONG_FILE: LogFlags = LogFlags(1 << 3);
    /// Final file name element and line number: `d.rs:23`
    pub const SHORT_FILE: LogFlags = LogFlags(1 << 4);
    /// Id of the process emitting the record: `PID1234`
    pub const PID: LogFlags = LogFlags(1 << 5);
    /// Render `DATE` and `TIME` in UTC instead of the local time zone
    pub const UTC: LogFlags = LogFlags(1 << 6);
    /// Initial flags of the default logger
    pub const STD_FLAGS: LogFlags = LogFlags(Self::DATE.0 | Self::TIME.0);

    const NAMED: [(&'static str, LogFlags); 7] = [
        ("date", Self::DATE),
        ("time", Self::TIME),
        ("microseconds", Self::MICROSECONDS),
        ("long_file", Self::LONG_FILE),
        ("short_file", Self::SHORT_FILE),
        ("pid", Self::PID),
        ("utc", Self::UTC),
    ];

    const ALL_BITS: u8 = 0b0111_1111;

    #[inline]
    pub const fn empty() -> Self {
        LogFlags(0)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Build flags from raw bits, dropping any bit that names no option
    #[inline]
    pub const fn from_bits_truncate(bits: u8) -> Self {
        LogFlags(bits & Self::ALL_BITS)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every bit of `other` is set
    #[inline]
    pub const fn contains(self, other: LogFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if any bit of `other` is set
    #[inline]
    pub const fn intersects(self, other: LogFlags) -> bool {
        self.0 & other.0 != 0
    }

    /// Reject combinations a logger cannot render.
    ///
    /// # Errors
    ///
    /// `LoggerError::InvalidConfiguration` when both `LONG_FILE` and
    /// `SHORT_FILE` are set.
    pub fn validate(self) -> Result<()> {
        if self.contains(Self::LONG_FILE | Self::SHORT_FILE) {
            return Err(LoggerError::config(
                "LogFlags",
                "LONG_FILE and SHORT_FILE can not be both set",
            ));
        }
        Ok(())
    }

    /// Names of the options that are set, in bit order
    pub fn names(self) -> Vec<&'static str> {
        Self::NAMED
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
            .collect()
    }
}

impl BitOr for LogFlags {
    type Output = LogFlags;

    fn bitor(self, rhs: LogFlags) -> LogFlags {
        LogFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for LogFlags {
    fn bitor_assign(&mut self, rhs: LogFlags) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for LogFlags {
    type Output = LogFlags;

    fn bitand(self, rhs: LogFlags) -> LogFlags {
        LogFlags(self.0 & rhs.0)
    }
}

impl Sub for LogFlags {
    type Output = LogFlags;

    fn sub(self, rhs: LogFlags) -> LogFlags {
        LogFlags(self.0 & !rhs.0)
    }
}

impl Not for LogFlags {
    type Output = LogFlags;

    fn not(self) -> LogFlags {
        LogFlags(!self.0 & Self::ALL_BITS)
    }
}

impl fmt::Display for LogFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("(none)");
        }
        f.write_str(&self.names().join("|"))
    }
}

/// Parses a single option name (`"date"`, `"short_file"`, ...) or the
/// `"std"` preset. Case-insensitive; `-` is accepted in place of `_`.
impl FromStr for LogFlags {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        if normalized == "std" || normalized == "std_flags" {
            return Ok(Self::STD_FLAGS);
        }
        Self::NAMED
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|(_, flag)| *flag)
            .ok_or_else(|| LoggerError::config("LogFlags", format!("unknown flag '{}'", s)))
    }
}

impl<'a> FromIterator<&'a str> for LogFlags {
    /// Unknown names are ignored; use `LogFlags::from_str` to reject them
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter()
            .filter_map(|name| name.parse::<LogFlags>().ok())
            .fold(LogFlags::empty(), |acc, flag| acc | flag)
    }
}
