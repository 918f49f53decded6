//! Error types for the notary API client and the contact form.
//!
//! # Design
//! `ApiError` is what `NotaryClient::parse_*` and the transport layer produce.
//! It never reaches presentation code: `ApiService` folds it into an
//! `ApiFailure` carrying a short user-facing message. `ValidationError` and
//! `SubmitError` cover the checks a form makes before anything is sent.

use std::time::Duration;

use thiserror::Error;

use crate::form::Field;

/// Failure to complete an HTTP round-trip at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// No response arrived within the client's fixed timeout.
    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// The connection could not be established (DNS, refused, unreachable).
    #[error("connection failed: {0}")]
    Connect(String),

    /// Any other transport-level failure, e.g. a body that could not be read.
    #[error("request failed: {0}")]
    Other(String),
}

/// Errors produced while building requests, executing them, or parsing
/// responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    ///
    /// `detail` holds the server-supplied `detail` field when the body
    /// carried one.
    #[error("HTTP {status}: {body}")]
    Http {
        status: u16,
        detail: Option<String>,
        body: String,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ApiError {
    /// Server-supplied error detail, if the failure came with one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Http { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// A draft that would be blocked by the form's native input checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(Field),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("unknown service type '{0}'")]
    UnknownServiceType(String),

    #[error("unknown document type '{0}'")]
    UnknownDocumentType(String),

    #[error("'{0}' is not a calendar date (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

/// Reasons a submission never left the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("a submission is already in progress")]
    InFlight,
}

/// Startup-time configuration problems.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingBackendUrl(&'static str),

    #[error("backend URL '{0}' must start with http:// or https://")]
    InvalidBackendUrl(String),
}
