//! Appender trait for log output destinations
//!
//! An appender receives the fully formatted bytes of one record at a time,
//! header and trailing newline included. The logger serializes all calls, so
//! implementations need no locking of their own.

use super::error::Result;

pub trait Appender: Send {
    fn append(&mut self, record: &[u8]) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
