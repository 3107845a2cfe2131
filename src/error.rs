//! Error types for the TextMatch client
//!
//! This module defines all error types used throughout the application,
//! providing clear error messages and proper error propagation.
//!
//! Error variants use `#[source]` to preserve error chains for better
//! observability and debugging.

use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for the TextMatch client
#[derive(Debug, Error)]
pub enum TextMatchError {
    /// The detection endpoint could not be reached (DNS failure, refused
    /// connection, transport-layer timeout).
    /// Preserves the underlying error source for full error chain transparency
    #[error("Failed to reach the detection service: {0}")]
    TransportError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The detection endpoint answered with a non-success HTTP status
    #[error("Detection service returned HTTP status {status}")]
    ProtocolError {
        /// HTTP status code returned by the endpoint
        status: u16,
    },

    /// A success response carried a body that does not match the wire contract.
    /// Preserves the underlying error source for full error chain transparency
    #[error("Detection service returned an unrecognized response: {0}")]
    MalformedResponse(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Configuration error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// GUI error
    /// Preserves the underlying error source for full error chain transparency
    #[error("GUI error: {0}")]
    GuiError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for TextMatch operations
pub type Result<T> = std::result::Result<T, TextMatchError>;

/// Convert an error to a user-friendly message
///
/// This function takes a `TextMatchError` and returns a message suitable
/// for displaying to end users in the window or in error dialogs.
pub fn get_user_friendly_error(error: &TextMatchError) -> String {
    match error {
        TextMatchError::TransportError(_) => "Could not reach the detection service.\n\n\
             Please check:\n\
             - Your network connection\n\
             - That the TextMatch service is running\n\
             - The configured endpoint URL"
            .to_string(),
        TextMatchError::ProtocolError { status } => {
            format!(
                "The detection service reported an error (HTTP {status}).\n\n\
                 The service may be overloaded or misconfigured.\n\
                 Try submitting your text again in a moment."
            )
        }
        TextMatchError::MalformedResponse(_) => "The detection service sent a response \
             this client does not understand.\n\n\
             The service may be running an incompatible version.\n\
             Please update both the client and the service."
            .to_string(),
        TextMatchError::ConfigError(_) => "Failed to load or save configuration.\n\n\
             Your settings may not persist.\n\
             Check that you have write permissions to:\n\
             %APPDATA%\\TextMatch"
            .to_string(),
        TextMatchError::GuiError(_) => "Failed to initialize the user interface.\n\n\
             Please ensure your graphics drivers are up to date."
            .to_string(),
        TextMatchError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
        TextMatchError::JsonError(e) => {
            format!(
                "Configuration file is corrupted:\n\n{e}\n\n\
                 The application will use default settings."
            )
        }
    }
}
