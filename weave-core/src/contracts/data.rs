//! Data access contracts: decoding, URLs, transport, caching and storage.

use crate::error::{DecodingError, NetworkError, RepositoryError};
use serde_json::Value;
use std::any::Any;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

/// A decoding function registered for one component type.
pub type DecodeFn =
    Arc<dyn Fn(&[u8]) -> Result<Box<dyn Any + Send + Sync>, DecodingError> + Send + Sync>;

/// Component type registry and decoding.
pub trait ComponentDecoding: Send + Sync {
    /// Register (or replace) the decoder for a component type.
    fn register(&self, type_name: &str, decode: DecodeFn);

    /// Whether a decoder is registered for `type_name`.
    fn is_registered(&self, type_name: &str) -> bool;

    /// Decode `data` as a component of type `type_name`.
    fn decode(
        &self,
        type_name: &str,
        data: &[u8],
    ) -> Result<Box<dyn Any + Send + Sync>, DecodingError>;
}

/// Resolution of paths into absolute URLs.
pub trait UrlBuilding: Send + Sync {
    /// The base URL relative paths are resolved against.
    fn base_url(&self) -> Option<&str>;

    /// Build an absolute URL for `path`, or `None` if it cannot be formed.
    fn build(&self, path: &str) -> Option<String>;
}

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    /// `GET`
    #[default]
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

/// A request handed to the network client.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Request {
    /// Absolute URL.
    pub url: String,
    /// Method.
    pub method: HttpMethod,
    /// Header pairs, in order.
    pub headers: Vec<(String, String)>,
    /// Optional body.
    pub body: Option<Vec<u8>>,
}

impl Request {
    /// A `GET` request for `url`.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Add a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// A response from the network client.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Response {
    /// Status code.
    pub status: u16,
    /// Body bytes.
    pub data: Vec<u8>,
}

impl Response {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Network transport.
///
/// Calls are synchronous from the container's point of view; an
/// implementation is free to drive its own runtime internally.
pub trait NetworkClient: Send + Sync {
    /// Execute `request`.
    fn execute(&self, request: &Request) -> Result<Response, NetworkError>;
}

/// Response caching keyed by URL.
pub trait CacheManager: Send + Sync {
    /// Cached bytes for `key`.
    fn get(&self, key: &str) -> Option<Vec<u8>>;

    /// Store bytes for `key`.
    fn insert(&self, key: &str, data: Vec<u8>);
}

/// Remote component and image data access.
pub trait Repository: Send + Sync {
    /// Fetch the serialized component tree at `path`.
    fn fetch_component(&self, path: &str) -> Result<Vec<u8>, RepositoryError>;

    /// Fetch image bytes at `path`.
    fn fetch_image(&self, path: &str) -> Result<Vec<u8>, RepositoryError>;
}

/// Image loading.
pub trait ImageDownloader: Send + Sync {
    /// Download the image at `url`.
    fn fetch_image(&self, url: &str) -> Result<Vec<u8>, RepositoryError>;
}

/// Ahead-of-time fetching of screens.
pub trait PrefetchHelping: Send + Sync {
    /// Fetch `path` now and keep the result for a later [`take`](Self::take).
    fn prefetch(&self, path: &str);

    /// Whether a prefetched result is waiting for `path`.
    fn is_prefetched(&self, path: &str) -> bool;

    /// Remove and return the prefetched bytes for `path`.
    fn take(&self, path: &str) -> Option<Vec<u8>>;
}

/// Bundled resource lookup.
pub trait AppBundle: Send + Sync {
    /// Location of the resource `name`, if it exists.
    fn resource(&self, name: &str) -> Option<PathBuf>;
}

/// Form data persistence, grouped by form.
pub trait FormDataStore: Send + Sync {
    /// Store one field of a group.
    fn save(&self, group: &str, key: &str, value: Value);

    /// All fields stored for `group`.
    fn read(&self, group: &str) -> Option<BTreeMap<String, Value>>;

    /// Forget `group`.
    fn clear(&self, group: &str);
}
