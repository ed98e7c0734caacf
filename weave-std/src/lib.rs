//! # weave-std
//!
//! Standard implementations for the Weave dependency container.
//!
//! This crate provides:
//! - **Defaults**: one implementation per mandatory capability ([`defaults`])
//! - **Logging**: the [`LoggerProxy`](logging::LoggerProxy) decorator and a
//!   `tracing`-backed logger
//! - **Analytics**: the adapter from the legacy [`Analytics`](weave_core::contracts::Analytics)
//!   shape onto the unified provider
//! - **Testing**: recording doubles for capabilities and execution contexts
//!
//! Defaults that need sibling capabilities are generic over the facets they
//! read, so they can be constructed against a deferred handle before the
//! container exists.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use weave_core;

// Modules
pub mod analytics;
pub mod defaults;
pub mod logging;
pub mod testing;
