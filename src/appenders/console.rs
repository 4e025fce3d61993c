//! Console appender implementation

use crate::core::{Appender, Result};
use std::io::{self, Write};

/// Standard stream a [`ConsoleAppender`] writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleTarget {
    #[default]
    Stderr,
    Stdout,
}

pub struct ConsoleAppender {
    target: ConsoleTarget,
}

impl ConsoleAppender {
    /// Console appender on standard error, the stream the default logger uses
    pub fn new() -> Self {
        Self::with_target(ConsoleTarget::Stderr)
    }

    pub fn stderr() -> Self {
        Self::with_target(ConsoleTarget::Stderr)
    }

    pub fn stdout() -> Self {
        Self::with_target(ConsoleTarget::Stdout)
    }

    pub fn with_target(target: ConsoleTarget) -> Self {
        Self { target }
    }

    pub fn target(&self) -> ConsoleTarget {
        self.target
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, record: &[u8]) -> Result<()> {
        // Locking the stream keeps the record contiguous even next to
        // unrelated println!/eprintln! output from other threads.
        match self.target {
            ConsoleTarget::Stderr => io::stderr().lock().write_all(record)?,
            ConsoleTarget::Stdout => io::stdout().lock().write_all(record)?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match self.target {
            ConsoleTarget::Stderr => io::stderr().flush()?,
            ConsoleTarget::Stdout => io::stdout().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.target {
            ConsoleTarget::Stderr => "stderr",
            ConsoleTarget::Stdout => "stdout",
        }
    }
}
