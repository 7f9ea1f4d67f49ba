use thiserror::Error;

/// Unified error type for verfile operations
#[derive(Error, Debug)]
pub enum VerfileError {
    #[error("Version format error: {0}")]
    Format(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in verfile
pub type Result<T> = std::result::Result<T, VerfileError>;

impl VerfileError {
    /// Create a format error with context
    pub fn format(msg: impl Into<String>) -> Self {
        VerfileError::Format(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VerfileError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VerfileError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: VerfileError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(VerfileError::format("test")
            .to_string()
            .starts_with("Version format error"));
        assert!(VerfileError::config("test")
            .to_string()
            .starts_with("Configuration error"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (VerfileError::format("x"), "Version format error"),
            (VerfileError::config("x"), "Configuration error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
