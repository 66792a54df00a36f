use std::path::PathBuf;
use thiserror::Error;

/// The main error type for AdGuard Home operations.
///
/// This enum represents all possible errors that can occur while
/// talking to an AdGuard Home server or launching the local service,
/// including transport, decoding, validation, and process failures.
#[derive(Error, Debug)]
pub enum AdGuardError {
    /// Represents a network-level failure (DNS resolution, connection
    /// refused, timeout) while executing a request
    ///
    /// # Fields
    /// * `source` - The underlying transport error
    #[error("Transport error: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// Represents a response with any status code other than 200
    ///
    /// # Fields
    /// * `status` - The status code the server returned
    #[error("Unexpected status code: {status}")]
    UnexpectedStatus { status: u16 },

    /// Represents a response body that could not be decoded as JSON
    ///
    /// # Fields
    /// * `source` - The underlying deserialization error
    #[error("Failed to decode response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// Represents a request body that could not be encoded as JSON
    ///
    /// # Fields
    /// * `source` - The underlying serialization error
    #[error("Failed to encode request body: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },

    /// Represents a missing directory required to launch the service
    ///
    /// # Fields
    /// * `path` - The directory that does not exist
    #[error("Directory {} does not exist", .path.display())]
    MissingDirectory { path: PathBuf },

    /// Represents a failure to spawn the service process itself
    ///
    /// In-process failures of the service after a successful spawn are
    /// not reported here; they are surfaced asynchronously through the
    /// launcher's exit channel and log events.
    ///
    /// # Fields
    /// * `source` - The underlying I/O error
    #[error("Failed to launch service process: {source}")]
    Launch {
        #[source]
        source: std::io::Error,
    },

    /// Represents validation failures with detailed context
    ///
    /// # Fields
    /// * `source` - The underlying validation error
    #[error("Validation error: {source}")]
    Validation {
        #[source]
        source: ValidationError,
    },
}

impl From<ValidationError> for AdGuardError {
    fn from(error: ValidationError) -> Self {
        AdGuardError::Validation { source: error }
    }
}

/// Specialized error type for validation failures.
///
/// This enum provides detailed context about why a validation
/// failed, including field-specific errors and format violations.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    ///
    /// # Fields
    /// * `0` - Description of the format violation
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    ///
    /// # Fields
    /// * `0` - Description of the constraint violation
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Type alias for Results that may fail with an AdGuardError
pub type AdGuardResult<T> = Result<T, AdGuardError>;
