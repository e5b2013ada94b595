//! Error types for libecr
//!
//! Every failure the adapter can report is one of a small set of variants.
//! Remote failures keep the transport error as their `source`, so callers can
//! walk the full cause chain down to the service's own message.

use std::fmt;
use thiserror::Error;


/// Boxed error type used for causes coming from outside the crate.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Why an authorization token could not be turned into a credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// The token was not valid base64, or did not decode to UTF-8.
    Encoding,
    /// The decoded token was not of the form `username:password`.
    Malformed,
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encoding => write!(f, "encoding"),
            Self::Malformed => write!(f, "malformed"),
        }
    }
}

/// Main error type for libecr operations
#[derive(Error, Debug)]
pub enum EcrError {
    /// The transport call itself failed (network, credentials, throttling, API error)
    #[error("failed to {operation}{}", context_suffix(.context))]
    RemoteCallFailed {
        operation: String,
        context: Option<String>,
        #[source]
        source: BoxError,
    },

    /// The remote API answered, but with nothing usable in it
    #[error("no {what} found")]
    EmptyResponse { what: String },

    /// The authorization payload could not be decoded
    #[error("{}", decode_message(.kind, .detail))]
    Decode {
        kind: DecodeErrorKind,
        detail: Option<String>,
        #[source]
        source: Option<BoxError>,
    },

    /// Configuration errors (invalid config file, bad setting values)
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<String>,
        #[source]
        source: Option<BoxError>,
    },
}

fn context_suffix(context: &Option<String>) -> String {
    context
        .as_deref()
        .map(|c| format!(" of {c}"))
        .unwrap_or_default()
}

fn decode_message(kind: &DecodeErrorKind, detail: &Option<String>) -> String {
    match (kind, detail) {
        (DecodeErrorKind::Malformed, Some(detail)) => {
            format!("authorization data must be user:pass. got: {detail:?}")
        }
        (DecodeErrorKind::Malformed, None) => "authorization data must be user:pass".to_string(),
        (DecodeErrorKind::Encoding, _) => "failed to decode authorization data".to_string(),
    }
}

/// Result type alias for libecr operations
pub type Result<T> = std::result::Result<T, EcrError>;

impl EcrError {
    /// Creates a remote call error for an operation with no extra context.
    ///
    /// # Examples
    ///
    /// ```
    /// use libecr::error::EcrError;
    /// use std::io;
    ///
    /// let io_err = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
    /// let err = EcrError::remote("retrieve repositories", io_err);
    /// assert_eq!(err.to_string(), "failed to retrieve repositories");
    /// ```
    pub fn remote<S, E>(operation: S, source: E) -> Self
    where
        S: Into<String>,
        E: Into<BoxError>,
    {
        Self::RemoteCallFailed {
            operation: operation.into(),
            context: None,
            source: source.into(),
        }
    }

    /// Creates a remote call error that names what was being queried.
    ///
    /// # Examples
    ///
    /// ```
    /// use libecr::error::EcrError;
    /// use std::io;
    ///
    /// let io_err = io::Error::new(io::ErrorKind::Other, "RepositoryNotFoundException");
    /// let err = EcrError::remote_with_context("retrieve images", "foo", io_err);
    /// assert_eq!(err.to_string(), "failed to retrieve images of foo");
    /// ```
    pub fn remote_with_context<S, C, E>(operation: S, context: C, source: E) -> Self
    where
        S: Into<String>,
        C: Into<String>,
        E: Into<BoxError>,
    {
        Self::RemoteCallFailed {
            operation: operation.into(),
            context: Some(context.into()),
            source: source.into(),
        }
    }

    /// Creates an empty response error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libecr::error::EcrError;
    ///
    /// let err = EcrError::empty_response("authorization data");
    /// assert_eq!(err.to_string(), "no authorization data found");
    /// ```
    pub fn empty_response<S: Into<String>>(what: S) -> Self {
        Self::EmptyResponse { what: what.into() }
    }

    /// Creates an encoding error for a token that is not valid base64 or UTF-8.
    pub fn encoding<E: Into<BoxError>>(source: E) -> Self {
        Self::Decode {
            kind: DecodeErrorKind::Encoding,
            detail: None,
            source: Some(source.into()),
        }
    }

    /// Creates a malformed-payload error carrying the decoded value verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use libecr::error::{DecodeErrorKind, EcrError};
    ///
    /// let err = EcrError::malformed("nocolon");
    /// assert_eq!(err.decode_kind(), Some(DecodeErrorKind::Malformed));
    /// assert!(err.to_string().contains("nocolon"));
    /// ```
    pub fn malformed<S: Into<String>>(detail: S) -> Self {
        Self::Decode {
            kind: DecodeErrorKind::Malformed,
            detail: Some(detail.into()),
            source: None,
        }
    }

    /// Creates a new configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libecr::error::EcrError;
    ///
    /// let err = EcrError::config("invalid config file", Some("/path/to/config.toml"));
    /// assert!(matches!(err, EcrError::Config { .. }));
    /// ```
    pub fn config<S: Into<String>>(message: S, path: Option<S>) -> Self {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: None,
        }
    }

    /// Creates a new configuration error with a source error.
    pub fn config_with_source<S, E>(message: S, path: Option<S>, source: E) -> Self
    where
        S: Into<String>,
        E: Into<BoxError>,
    {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: Some(source.into()),
        }
    }

    /// Returns the decode failure kind, if this is a decode error.
    pub fn decode_kind(&self) -> Option<DecodeErrorKind> {
        match self {
            Self::Decode { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Returns `true` if the remote call itself failed.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::RemoteCallFailed { .. })
    }
}
