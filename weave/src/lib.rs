//! # weave - Capability Container and Interaction Dispatch
//!
//! `weave` wires the capabilities a server-driven UI runtime depends on
//! (decoding, networking, navigation, logging, analytics, ...) into a single
//! container, and dispatches the effects bound to UI interactions.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use weave::prelude::*;
//!
//! // Defaults for everything, plus a network client
//! let deps = DependenciesBuilder::new()
//!     .with_network_client(Arc::new(HttpClient::default()))
//!     .with_legacy_analytics(Arc::new(MyAnalytics))
//!     .build()?;
//!
//! // Bind a tap to an action and an analytics event
//! let trigger = Trigger::bind(
//!     vec![Effect::invoke(Navigate::to("/cart")), Effect::notify(click)],
//!     element_id,
//!     &controller,
//! );
//! trigger.fire();
//! ```
//!
//! ## Crates
//!
//! - `weave-core`: contracts, facet traits and the interaction model
//! - `weave-std`: default capabilities, the logging decorator, testing doubles
//! - `weave`: the container ([`Dependencies`]) and the dispatcher ([`Trigger`])

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub mod container;
pub mod dispatch;

pub use container::{Dependencies, DependenciesBuilder, Resolver};
pub use dispatch::{
    DeliveryReport, DeliveryStrategy, DispatchOutcome, EffectOutcome, SequentialDelivery,
    SkipReason, Trigger,
};

pub use weave_core::{
    // Interaction model
    Action,
    // Errors
    BoxError,
    // Facets
    Capabilities,
    // Capability model
    Capability,
    CapabilitySet,
    DecodingError,
    DependencyAnalytics,
    DependencyAppBundle,
    DependencyCacheManager,
    DependencyDecoder,
    DependencyDeepLinkHandler,
    DependencyFormDataStore,
    DependencyGlobalContext,
    DependencyImageDownloader,
    DependencyLocalFormHandler,
    DependencyLogger,
    DependencyLoggingCondition,
    DependencyNavigation,
    DependencyNetworkClient,
    DependencyOperationsProvider,
    DependencyPrefetching,
    DependencyRenderer,
    DependencyRepository,
    DependencyStyleConfigurator,
    DependencyTheme,
    DependencyUrlBuilder,
    DependencyUrlOpener,
    DependencyValidatorProvider,
    DependencyViewConfigurator,
    DependencyWindowManager,
    Effect,
    EffectKind,
    ElementId,
    ExecutionContext,
    NetworkError,
    ON_PRESS,
    OpenError,
    OriginProvider,
    RepositoryError,
    Value,
    WiringError,
};

/// Capability contracts.
pub mod contracts {
    #![allow(clippy::wildcard_imports)]
    pub use weave_core::contracts::*;
}

/// Default capability implementations.
pub mod defaults {
    #![allow(clippy::wildcard_imports)]
    pub use weave_std::defaults::*;
}

/// Logging capability implementations.
pub mod logging {
    pub use weave_std::logging::{LoggerProxy, SilentLogger, TracingLogger};
}

/// Analytics adapters.
pub mod analytics {
    pub use weave_std::analytics::LegacyAnalyticsAdapter;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use weave_std::testing::*;
}

/// Prelude module - common imports for Weave.
///
/// # Usage
///
/// ```rust,ignore
/// use weave::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Interaction model
        Action,
        // Facets
        Capabilities,
        CapabilitySet,
        // Container
        Dependencies,
        DependenciesBuilder,
        DependencyAnalytics,
        DependencyLogger,
        DependencyLoggingCondition,
        DependencyNetworkClient,
        DependencyRepository,
        // Dispatch
        DispatchOutcome,
        Effect,
        ElementId,
        ExecutionContext,
        OriginProvider,
        Resolver,
        Trigger,
        // Errors
        WiringError,
    };
    pub use std::sync::Arc;
}
