//! Declarative logger configuration
//!
//! Lets an application describe its logger in a JSON document instead of
//! code:
//!
//! ```
//! use rust_leveled_logger::LoggerConfig;
//!
//! let config = LoggerConfig::from_json(r#"{
//!     "flags": ["std", "short_file", "pid"],
//!     "level": "warn",
//!     "outputs": [{ "type": "stderr" }]
//! }"#).unwrap();
//!
//! let logger = config.build().unwrap();
//! assert_eq!(logger.appender_count(), 1);
//! ```

use super::error::{LoggerError, Result};
use super::flags::LogFlags;
use super::log_level::LogLevel;
use super::logger::{Logger, LoggerBuilder};
use crate::appenders::{ConsoleAppender, FileAppender};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Flag names (`date`, `time`, `microseconds`, `long_file`,
    /// `short_file`, `pid`, `utc`) or the `std` preset
    pub flags: Vec<String>,

    /// Minimum level name, e.g. `"info"`
    pub level: String,

    /// Raw threshold on the severity scale; overrides `level` when set
    pub level_value: Option<u8>,

    /// Outputs in write order
    pub outputs: Vec<OutputConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OutputConfig {
    Stderr,
    Stdout,
    File {
        path: PathBuf,
        #[serde(default = "default_append")]
        append: bool,
        #[serde(default)]
        flush_each_record: bool,
    },
}

fn default_append() -> bool {
    true
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            flags: vec!["std".to_string()],
            level: LogLevel::Info.to_str().to_lowercase(),
            level_value: None,
            outputs: vec![OutputConfig::Stderr],
        }
    }
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger configuration",
                format!("cannot read '{}'", path.display()),
                e,
            )
        })?;
        Self::from_json(&json)
    }

    /// Combined flags. Unknown names are an error.
    pub fn log_flags(&self) -> Result<LogFlags> {
        self.flags.iter().try_fold(LogFlags::empty(), |acc, name| {
            Ok(acc | name.parse::<LogFlags>()?)
        })
    }

    /// Threshold on the severity scale
    pub fn threshold(&self) -> Result<u8> {
        match self.level_value {
            Some(value) => Ok(value),
            None => self
                .level
                .parse::<LogLevel>()
                .map(LogLevel::value)
                .map_err(|message| LoggerError::config("LoggerConfig.level", message)),
        }
    }

    /// Builder with flags, level, and freshly opened outputs
    pub fn builder(&self) -> Result<LoggerBuilder> {
        let mut builder = Logger::builder()
            .flags(self.log_flags()?)
            .min_level_value(self.threshold()?);

        for output in &self.outputs {
            builder = match output {
                OutputConfig::Stderr => builder.appender(ConsoleAppender::stderr()),
                OutputConfig::Stdout => builder.appender(ConsoleAppender::stdout()),
                OutputConfig::File {
                    path,
                    append,
                    flush_each_record,
                } => {
                    let appender = if *append {
                        FileAppender::new(path)?
                    } else {
                        FileAppender::truncate(path)?
                    };
                    builder.appender(appender.with_flush_each_record(*flush_each_record))
                }
            };
        }

        Ok(builder)
    }

    pub fn build(&self) -> Result<Logger> {
        self.builder()?.build()
    }
}
