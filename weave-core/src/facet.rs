//! Per-capability accessor traits.
//!
//! Every capability has a facet trait with a single accessor. Implementations
//! that need sibling capabilities declare exactly the facets they read, e.g.
//! `D: DependencyRepository + DependencyLogger`, instead of depending on the
//! whole container.

use crate::contracts::{
    AnalyticsProvider, AppBundle, CacheManager, ComponentDecoding, DeepLinkHandler, FormDataStore,
    GlobalContext, ImageDownloader, LocalFormHandler, Logger, Navigation, NetworkClient,
    OperationsProvider, PrefetchHelping, RendererFactory, Repository, StyleConfiguratorFactory,
    Theme, UrlBuilding, UrlOpener, ValidatorProvider, ViewConfiguratorFactory, WindowManager,
};
use std::sync::Arc;

macro_rules! facets {
    ($( $(#[$meta:meta])* $facet:ident :: $method:ident -> $ret:ty; )*) => {
        $(
            $(#[$meta])*
            pub trait $facet {
                $(#[$meta])*
                fn $method(&self) -> $ret;
            }

            impl<T: $facet + ?Sized> $facet for Arc<T> {
                fn $method(&self) -> $ret {
                    (**self).$method()
                }
            }
        )*

        /// Every facet at once.
        ///
        /// Implemented automatically for any type that provides all facets.
        pub trait Capabilities: $( $facet + )* Send + Sync {}

        impl<T> Capabilities for T where T: $( $facet + )* Send + Sync {}
    };
}

facets! {
    /// Component decoder.
    DependencyDecoder::decoder -> Arc<dyn ComponentDecoding>;
    /// URL builder.
    DependencyUrlBuilder::url_builder -> Arc<dyn UrlBuilding>;
    /// Bundled resources.
    DependencyAppBundle::app_bundle -> Arc<dyn AppBundle>;
    /// Theme.
    DependencyTheme::theme -> Arc<dyn Theme>;
    /// Navigation.
    DependencyNavigation::navigation -> Arc<dyn Navigation>;
    /// Prefetch helper.
    DependencyPrefetching::prefetch_helper -> Arc<dyn PrefetchHelping>;
    /// Repository.
    DependencyRepository::repository -> Arc<dyn Repository>;
    /// Image downloader.
    DependencyImageDownloader::image_downloader -> Arc<dyn ImageDownloader>;
    /// Logger, as decorated by the container.
    DependencyLogger::logger -> Arc<dyn Logger>;
    /// Window manager.
    DependencyWindowManager::window_manager -> Arc<dyn WindowManager>;
    /// URL opener.
    DependencyUrlOpener::opener -> Arc<dyn UrlOpener>;
    /// Form data store.
    DependencyFormDataStore::form_data_store -> Arc<dyn FormDataStore>;
    /// Global context.
    DependencyGlobalContext::global_context -> Arc<dyn GlobalContext>;
    /// Operations provider.
    DependencyOperationsProvider::operations_provider -> Arc<dyn OperationsProvider>;
    /// Renderer factory.
    DependencyRenderer::renderer -> Arc<dyn RendererFactory>;
    /// Style configurator factory.
    DependencyStyleConfigurator::style_configurator -> Arc<dyn StyleConfiguratorFactory>;
    /// View configurator factory.
    DependencyViewConfigurator::view_configurator -> Arc<dyn ViewConfiguratorFactory>;
    /// Network client, if configured.
    DependencyNetworkClient::network_client -> Option<Arc<dyn NetworkClient>>;
    /// Validator provider, if configured.
    DependencyValidatorProvider::validator_provider -> Option<Arc<dyn ValidatorProvider>>;
    /// Deep link handler, if configured.
    DependencyDeepLinkHandler::deep_link_handler -> Option<Arc<dyn DeepLinkHandler>>;
    /// Local form handler, if configured.
    DependencyLocalFormHandler::local_form_handler -> Option<Arc<dyn LocalFormHandler>>;
    /// Cache manager, if configured.
    DependencyCacheManager::cache_manager -> Option<Arc<dyn CacheManager>>;
    /// Analytics provider, if configured.
    DependencyAnalytics::analytics -> Option<Arc<dyn AnalyticsProvider>>;
    /// Whether the logging decorator forwards records.
    DependencyLoggingCondition::is_logging_enabled -> bool;
}
