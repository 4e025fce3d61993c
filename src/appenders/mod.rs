//! Appender implementations

pub mod console;
pub mod file;
pub mod memory;
pub mod writer;

pub use console::{ConsoleAppender, ConsoleTarget};
pub use file::FileAppender;
pub use memory::MemoryAppender;
pub use writer::WriterAppender;

// Re-export the trait next to its implementations
pub use crate::core::Appender;
