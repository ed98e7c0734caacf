//! # weave-core
//!
//! Capability contracts and model types for the Weave dependency container.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! capability implementations that don't need the container itself.
//!
//! # Layers
//!
//! ## Contracts ([`contracts`])
//!
//! One small trait per capability (decoding, networking, logging, analytics,
//! ...). Each contract is independently substitutable; nothing in this crate
//! knows which implementation sits behind it.
//!
//! ## Facets ([`DependencyLogger`], [`DependencyNetworkClient`], ...)
//!
//! One accessor trait per capability. A type that can hand out a logger
//! implements [`DependencyLogger`], and so on. [`Capabilities`] is the
//! aggregate of every facet and is implemented automatically for any type that
//! provides them all.
//!
//! Default implementations are generic over the facets they actually read, so
//! they can be built against a deferred handle before the container exists.
//!
//! ## Interaction model ([`Effect`], [`Action`], [`ExecutionContext`])
//!
//! The vocabulary a trigger uses when an interaction fires: an ordered list of
//! effects, an origin element and the context that executes actions.
//!
//! # Error Types
//!
//! - [`WiringError`] - Container construction and resolver errors
//! - [`NetworkError`], [`RepositoryError`], [`DecodingError`] - Capability errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod action;
mod capability;
pub mod contracts;
mod context;
mod effect;
mod element;
mod error;
mod facet;

// Re-exports
pub use action::Action;
pub use capability::{Capability, CapabilitySet};
pub use context::{ExecutionContext, ON_PRESS};
pub use effect::{Effect, EffectKind};
pub use element::{ElementId, OriginProvider};
pub use error::{BoxError, DecodingError, NetworkError, OpenError, RepositoryError, WiringError};
pub use facet::{
    Capabilities, DependencyAnalytics, DependencyAppBundle, DependencyCacheManager,
    DependencyDecoder, DependencyDeepLinkHandler, DependencyFormDataStore, DependencyGlobalContext,
    DependencyImageDownloader, DependencyLocalFormHandler, DependencyLogger,
    DependencyLoggingCondition, DependencyNavigation, DependencyNetworkClient,
    DependencyOperationsProvider, DependencyPrefetching, DependencyRenderer,
    DependencyRepository, DependencyStyleConfigurator, DependencyTheme, DependencyUrlBuilder,
    DependencyUrlOpener, DependencyValidatorProvider, DependencyViewConfigurator,
    DependencyWindowManager,
};
pub use serde_json::Value;
