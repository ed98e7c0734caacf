//! Error types for Weave.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`WiringError`] - Container construction and deferred-handle errors
//! - [`NetworkError`] - Errors reported by a network client
//! - [`RepositoryError`] - Errors from repository and image access
//! - [`DecodingError`] - Errors from component decoding
//! - [`OpenError`] - Errors from opening external URLs

use crate::capability::CapabilitySet;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while wiring a container.
#[derive(Error, Debug)]
pub enum WiringError {
    /// Mandatory capabilities had neither an override nor a default.
    #[error("missing mandatory capabilities: {0}")]
    MissingCapabilities(CapabilitySet),

    /// The deferred container handle was read before construction finished.
    #[error("dependency container read before construction completed")]
    Unbound,

    /// The deferred container handle outlived its container.
    #[error("dependency container has been released")]
    Released,

    /// The deferred container handle was bound twice.
    #[error("dependency resolver is already bound to a container")]
    AlreadyBound,
}

/// Errors reported by a network client.
#[derive(Error, Debug)]
pub enum NetworkError {
    /// The request never produced a response.
    #[error("request to {0} failed")]
    Unreachable(String),

    /// The server answered with a non-success status.
    #[error("unexpected status code {0}")]
    Status(u16),

    /// A client-specific failure.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors from repository and image access.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// No network client is configured.
    #[error("no network client configured")]
    NetworkClientMissing,

    /// The path could not be turned into a URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// The network client failed.
    #[error("network error: {0}")]
    Network(#[from] NetworkError),
}

/// Errors from component decoding.
#[derive(Error, Debug)]
pub enum DecodingError {
    /// No decoder is registered for this component type.
    #[error("unknown component type: {0}")]
    UnknownType(String),

    /// The payload did not match the registered type.
    #[error("malformed payload for {type_name}: {reason}")]
    Malformed {
        /// The component type being decoded.
        type_name: String,
        /// Why decoding failed.
        reason: String,
    },
}

/// Errors from opening external URLs.
#[derive(Error, Debug)]
pub enum OpenError {
    /// The string is not an absolute URL.
    #[error("not an absolute url: {0}")]
    InvalidUrl(String),

    /// Nothing is able to open the URL.
    #[error("no handler can open {0}")]
    Unsupported(String),
}

impl From<BoxError> for NetworkError {
    fn from(err: BoxError) -> Self {
        NetworkError::Custom(err)
    }
}
