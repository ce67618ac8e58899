//! Error types for ociurl
//!
//! Every parse operation returns one of these errors. They carry a
//! human-readable message and, where an underlying parser rejected the
//! input, that parser's error as the source.

use thiserror::Error;


/// Main error type for artifact URL parsing
#[derive(Error, Debug)]
pub enum OciUrlError {
    /// The input is not a well-formed `oci://` artifact URL
    #[error("Invalid URL: {message}")]
    InvalidUrl {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The reference parsed but does not carry a content digest
    #[error("Invalid digest: {message}")]
    InvalidDigest {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A bare registry reference was rejected by the reference grammar
    #[error("Invalid reference: {message}")]
    InvalidReference {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for ociurl operations
pub type Result<T> = std::result::Result<T, OciUrlError>;

impl OciUrlError {
    /// Creates a new invalid URL error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libociurl::error::OciUrlError;
    ///
    /// let err = OciUrlError::invalid_url("missing scheme");
    /// assert!(matches!(err, OciUrlError::InvalidUrl { .. }));
    /// ```
    pub fn invalid_url<S: Into<String>>(message: S) -> Self {
        Self::InvalidUrl {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new invalid URL error with a source error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libociurl::error::OciUrlError;
    /// use std::io;
    ///
    /// let cause = io::Error::new(io::ErrorKind::InvalidInput, "bad grammar");
    /// let err = OciUrlError::invalid_url_with_source("'oci://x' invalid URL", cause);
    /// assert!(matches!(err, OciUrlError::InvalidUrl { .. }));
    /// ```
    pub fn invalid_url_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::InvalidUrl {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new invalid digest error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libociurl::error::OciUrlError;
    ///
    /// let err = OciUrlError::invalid_digest("reference has no digest");
    /// assert!(matches!(err, OciUrlError::InvalidDigest { .. }));
    /// ```
    pub fn invalid_digest<S: Into<String>>(message: S) -> Self {
        Self::InvalidDigest {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new invalid digest error with a source error.
    pub fn invalid_digest_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::InvalidDigest {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new invalid reference error with a source error.
    pub fn invalid_reference_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::InvalidReference {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns the message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidUrl { message, .. }
            | Self::InvalidDigest { message, .. }
            | Self::InvalidReference { message, .. } => message,
        }
    }
}
