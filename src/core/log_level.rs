//! Log level definitions
//!
//! Levels sit on a scale spaced by 10 so that intermediate thresholds can be
//! configured without renumbering the named levels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Default)]
#[repr(u8)]
pub enum LogLevel {
    Trace = 10,
    Debug = 20,
    #[default]
    Info = 30,
    Warn = 40,
    Error = 50,
    Panic = 60,
    Fatal = 70,
}

impl LogLevel {
    /// Every level, lowest first.
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Panic,
        LogLevel::Fatal,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Panic => "PANIC",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// Numeric position of this level on the severity scale
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "PANIC" => Ok(LogLevel::Panic),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, String> {
        LogLevel::ALL
            .into_iter()
            .find(|level| level.value() == value)
            .ok_or_else(|| format!("No log level with value {}", value))
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_is_spaced_by_ten() {
        let values: Vec<u8> = LogLevel::ALL.iter().map(|l| l.value()).collect();
        assert_eq!(values, vec![10, 20, 30, 40, 50, 60, 70]);
    }

    #[test]
    fn test_ordering_follows_value() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Error < LogLevel::Panic);
        assert!(LogLevel::Panic < LogLevel::Fatal);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("Panic".parse::<LogLevel>(), Ok(LogLevel::Panic));
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_try_from_value() {
        assert_eq!(LogLevel::try_from(40), Ok(LogLevel::Warn));
        assert!(LogLevel::try_from(45).is_err());
    }
}
