//! Appender over any `std::io::Write`

use crate::core::{Appender, Result};
use std::io::Write;

/// Adapts any byte stream (a socket, a pipe, a `Vec<u8>`, a locked file
/// handle) into an appender.
///
/// # Example
///
/// ```
/// use rust_leveled_logger::appenders::WriterAppender;
/// use rust_leveled_logger::Appender;
///
/// let mut appender = WriterAppender::new("pipe", Vec::new());
/// appender.append(b"[INFO] hello\n").unwrap();
/// assert_eq!(appender.into_inner(), b"[INFO] hello\n");
/// ```
pub struct WriterAppender<W: Write + Send> {
    name: String,
    writer: W,
}

impl<W: Write + Send> WriterAppender<W> {
    pub fn new(name: impl Into<String>, writer: W) -> Self {
        Self {
            name: name.into(),
            writer,
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Appender for WriterAppender<W> {
    fn append(&mut self, record: &[u8]) -> Result<()> {
        self.writer.write_all(record)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;
    use std::io;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writes_whole_record() {
        let mut appender = WriterAppender::new("vec", Vec::new());
        appender.append(b"[DEBUG] a\n").unwrap();
        appender.append(b"[DEBUG] b\n").unwrap();
        assert_eq!(appender.get_ref().as_slice(), b"[DEBUG] a\n[DEBUG] b\n");
        assert_eq!(appender.name(), "vec");
    }

    #[test]
    fn test_io_errors_are_returned() {
        let mut appender = WriterAppender::new("pipe", BrokenPipe);
        let err = appender.append(b"[ERROR] lost\n").unwrap_err();
        assert!(matches!(err, LoggerError::IoError(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    }
}
