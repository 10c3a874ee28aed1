//! Error types and handling for the `Outfind` application
//!
//! The recommendation core never fails; these errors belong to the
//! collaborator side (configuration, vision replies, wardrobe files).

use thiserror::Error;

/// Main error type for the `Outfind` application
#[derive(Error, Debug)]
pub enum OutfindError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Vision classifier replied with something that is not a JSON record
    #[error("Vision reply error: {message}")]
    Vision { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// JSON (de)serialization errors
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl OutfindError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new vision reply error
    pub fn vision<S: Into<String>>(message: S) -> Self {
        Self::Vision {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            OutfindError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            OutfindError::Vision { .. } => {
                "The clothing classifier did not answer in JSON format. Please try another photo."
                    .to_string()
            }
            OutfindError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            OutfindError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            OutfindError::Json { .. } => {
                "Wardrobe data is not valid JSON. You may need to restore a backup.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = OutfindError::config("bad level");
        assert!(matches!(config_err, OutfindError::Config { .. }));

        let vision_err = OutfindError::vision("no braces");
        assert!(matches!(vision_err, OutfindError::Vision { .. }));

        let validation_err = OutfindError::validation("unknown category");
        assert!(matches!(validation_err, OutfindError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = OutfindError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let vision_err = OutfindError::vision("test");
        assert!(vision_err.user_message().contains("JSON format"));

        let validation_err = OutfindError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: OutfindError = io_err.into();
        assert!(matches!(err, OutfindError::Io { .. }));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: OutfindError = json_err.into();
        assert!(matches!(err, OutfindError::Json { .. }));
    }
}
