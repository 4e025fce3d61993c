//! In-memory appender
//!
//! Clones share one buffer: hand a clone to the logger and keep another to
//! read what was written.

use crate::core::{Appender, Result};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct MemoryAppender {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw bytes written so far
    pub fn bytes(&self) -> Vec<u8> {
        self.buffer.lock().clone()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Written records, one per line, without their terminators
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    /// Remove and return everything written so far
    pub fn take(&self) -> Vec<u8> {
        std::mem::take(&mut *self.buffer.lock())
    }
}

impl Appender for MemoryAppender {
    fn append(&mut self, record: &[u8]) -> Result<()> {
        self.buffer.lock().extend_from_slice(record);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_buffer() {
        let reader = MemoryAppender::new();
        let mut writer = reader.clone();

        writer.append(b"[INFO] one\n").unwrap();
        writer.append(b"[INFO] two\n").unwrap();

        assert_eq!(reader.lines(), vec!["[INFO] one", "[INFO] two"]);
        assert_eq!(reader.len(), 22);
    }

    #[test]
    fn test_take_empties_buffer() {
        let reader = MemoryAppender::new();
        let mut writer = reader.clone();
        writer.append(b"x\n").unwrap();

        assert_eq!(reader.take(), b"x\n");
        assert!(reader.is_empty());
    }
}
