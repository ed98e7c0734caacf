//! Capability contracts.
//!
//! Each capability is a small trait with no knowledge of the container. The
//! container stores them as `Arc<dyn Trait>`, so every contract is
//! `Send + Sync`.

mod analytics;
mod data;
mod logging;
mod operations;
mod ui;

pub use analytics::{Analytics, AnalyticsClick, AnalyticsProvider, AnalyticsRecord, AnalyticsScreen};
pub use data::{
    AppBundle, CacheManager, ComponentDecoding, DecodeFn, FormDataStore, HttpMethod,
    ImageDownloader, NetworkClient, PrefetchHelping, Repository, Request, Response, UrlBuilding,
};
pub use logging::{LogLevel, LogRecord, Logger};
pub use operations::{GlobalContext, Operation, OperationsProvider};
pub use ui::{
    DeepLinkHandler, LocalFormHandler, Navigation, NavigationRequest, Renderer, RendererFactory,
    StyleConfigurator, StyleConfiguratorFactory, Theme, UrlOpener, Validator, ValidatorProvider,
    ViewConfigurator, ViewConfiguratorFactory, WindowManager,
};
