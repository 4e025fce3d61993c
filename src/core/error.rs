//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// A record header could not be rendered
    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),

    /// JSON configuration error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// An appender panicked while writing or flushing
    #[error("Appender '{name}' panicked: {message}")]
    AppenderPanicked { name: String, message: String },

    /// The process-wide default logger was already created
    #[error("Default logger already initialized")]
    DefaultAlreadyInitialized,

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create an appender panic error
    pub fn appender_panicked(name: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::AppenderPanicked {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("LogFlags", "conflicting options");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::appender_panicked("memory", "boom");
        assert!(matches!(err, LoggerError::AppenderPanicked { .. }));

        let err = LoggerError::from(std::fmt::Error);
        assert!(matches!(err, LoggerError::FormatError(_)));
        assert!(err.to_string().starts_with("Format error: "));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::config("LogFlags", "LONG_FILE and SHORT_FILE can not be both set");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for LogFlags: LONG_FILE and SHORT_FILE can not be both set"
        );

        let err = LoggerError::appender_panicked("console", "stream closed");
        assert_eq!(err.to_string(), "Appender 'console' panicked: stream closed");

        assert_eq!(
            LoggerError::DefaultAlreadyInitialized.to_string(),
            "Default logger already initialized"
        );
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("opening log file", "cannot open for append", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("opening log file"));
        assert!(err.to_string().contains("cannot open for append"));
    }
}
