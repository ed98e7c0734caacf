//! The dependency container.
//!
//! [`Dependencies`] owns one instance of every capability. It is built by
//! [`DependenciesBuilder`], which falls back to the `weave-std` defaults for
//! mandatory capabilities left unset and fails with
//! [`WiringError::MissingCapabilities`](weave_core::WiringError) otherwise.
//!
//! Capabilities that read their siblings (the default repository reads the
//! network client, the logger proxy reads the logging switch, ...) are built
//! against a [`Resolver`] rather than the container itself. The resolver is
//! bound once construction completes, so those capabilities always see the
//! current instance of every sibling, including replacements made later with
//! the `replace_*` methods.
//!
//! ```rust,ignore
//! use weave::prelude::*;
//!
//! let deps = DependenciesBuilder::new()
//!     .with_network_client(Arc::new(HttpClient::default()))
//!     .build()?;
//!
//! deps.repository().fetch_component("/home")?;
//! deps.replace_network_client(None);
//! ```

mod builder;
mod dependencies;
mod resolver;
mod slot;

pub use builder::DependenciesBuilder;
pub use dependencies::Dependencies;
pub use resolver::Resolver;
