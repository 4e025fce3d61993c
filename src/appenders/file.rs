//! File appender implementation

use crate::core::{Appender, LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct FileAppender {
    writer: BufWriter<File>,
    path: PathBuf,
    flush_each_record: bool,
}

impl FileAppender {
    /// Open `path` for appending, creating it if needed
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open(path, true)
    }

    /// Open `path`, discarding any previous content
    pub fn truncate(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open(path, false)
    }

    fn open(path: impl Into<PathBuf>, append: bool) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(append)
            .truncate(!append)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;

        Ok(Self {
            writer: BufWriter::new(file),
            path,
            flush_each_record: false,
        })
    }

    /// Flush after every record instead of relying on the buffer and `Drop`
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rust_leveled_logger::appenders::FileAppender;
    ///
    /// let appender = FileAppender::new("/var/log/app.log")
    ///     .unwrap()
    ///     .with_flush_each_record(true);
    /// ```
    #[must_use]
    pub fn with_flush_each_record(mut self, enabled: bool) -> Self {
        self.flush_each_record = enabled;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Appender for FileAppender {
    fn append(&mut self, record: &[u8]) -> Result<()> {
        self.writer.write_all(record)?;
        if self.flush_each_record {
            self.writer.flush()?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
