//! Error types for undermark
//!
//! Inline parsing and rendering never fail; these errors only come from
//! reading input, loading configuration and serializing node dumps.

use thiserror::Error;

/// Main error type for undermark operations
#[derive(Error, Debug)]
pub enum UndermarkError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error while dumping parsed blocks
    #[error("Serialization error: {0}")]
    Serialize(String),
}

/// Result type alias for undermark operations
pub type Result<T> = std::result::Result<T, UndermarkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        fn open() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing.md"))?;
            Ok(())
        }

        let err = open().unwrap_err();
        assert!(matches!(err, UndermarkError::Io(_)));
        assert_eq!(err.to_string(), "IO error: missing.md");
    }

    #[test]
    fn test_config_error_display() {
        let err = UndermarkError::Config("bad key".into());
        assert_eq!(err.to_string(), "Configuration error: bad key");
    }
}
