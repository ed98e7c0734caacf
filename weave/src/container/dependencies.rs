//! The dependency container.

use super::resolver::Resolver;
use super::slot::{DecoratedSlot, OptionalSlot, Slot};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use weave_core::contracts::{
    Analytics, AnalyticsProvider, AppBundle, CacheManager, ComponentDecoding, DeepLinkHandler,
    FormDataStore, GlobalContext, ImageDownloader, LocalFormHandler, Logger, Navigation,
    NetworkClient, OperationsProvider, PrefetchHelping, RendererFactory, Repository,
    StyleConfiguratorFactory, Theme, UrlBuilding, UrlOpener, ValidatorProvider,
    ViewConfiguratorFactory, WindowManager,
};
use weave_core::{
    Capability, CapabilitySet, DependencyAnalytics, DependencyAppBundle, DependencyCacheManager,
    DependencyDecoder, DependencyDeepLinkHandler, DependencyFormDataStore, DependencyGlobalContext,
    DependencyImageDownloader, DependencyLocalFormHandler, DependencyLogger,
    DependencyLoggingCondition, DependencyNavigation, DependencyNetworkClient,
    DependencyOperationsProvider, DependencyPrefetching, DependencyRenderer,
    DependencyRepository, DependencyStyleConfigurator, DependencyTheme, DependencyUrlBuilder,
    DependencyUrlOpener, DependencyValidatorProvider, DependencyViewConfigurator,
    DependencyWindowManager, WiringError,
};
use weave_std::analytics::LegacyAnalyticsAdapter;

/// Owns one instance of every capability for the lifetime of the UI.
///
/// Built by [`DependenciesBuilder`](super::DependenciesBuilder) and shared as
/// `Arc<Dependencies>`. Every accessor returns the same instance across reads
/// until the owner replaces it with one of the `replace_*` methods; the swap
/// is atomic and visible to every capability that reads its siblings through
/// the container's [`Resolver`].
///
/// Accessors come from the facet traits in [`weave_core`]
/// ([`DependencyLogger::logger`], [`DependencyNetworkClient::network_client`],
/// ...), so `Dependencies` satisfies [`Capabilities`](weave_core::Capabilities).
pub struct Dependencies {
    pub(super) decoder: Slot<dyn ComponentDecoding>,
    pub(super) url_builder: Slot<dyn UrlBuilding>,
    pub(super) app_bundle: Slot<dyn AppBundle>,
    pub(super) theme: Slot<dyn Theme>,
    pub(super) navigation: Slot<dyn Navigation>,
    pub(super) prefetch_helper: Slot<dyn PrefetchHelping>,
    pub(super) repository: Slot<dyn Repository>,
    pub(super) image_downloader: Slot<dyn ImageDownloader>,
    pub(super) logger: DecoratedSlot<dyn Logger>,
    pub(super) window_manager: Slot<dyn WindowManager>,
    pub(super) opener: Slot<dyn UrlOpener>,
    pub(super) form_data_store: Slot<dyn FormDataStore>,
    pub(super) global_context: Slot<dyn GlobalContext>,
    pub(super) operations_provider: Slot<dyn OperationsProvider>,
    pub(super) renderer: Slot<dyn RendererFactory>,
    pub(super) style_configurator: Slot<dyn StyleConfiguratorFactory>,
    pub(super) view_configurator: Slot<dyn ViewConfiguratorFactory>,

    pub(super) network_client: OptionalSlot<dyn NetworkClient>,
    pub(super) validator_provider: OptionalSlot<dyn ValidatorProvider>,
    pub(super) deep_link_handler: OptionalSlot<dyn DeepLinkHandler>,
    pub(super) local_form_handler: OptionalSlot<dyn LocalFormHandler>,
    pub(super) cache_manager: OptionalSlot<dyn CacheManager>,
    pub(super) analytics: OptionalSlot<dyn AnalyticsProvider>,

    pub(super) logging_enabled: AtomicBool,
    pub(super) resolver: Resolver,
}

macro_rules! mandatory_capabilities {
    ($( $(#[$meta:meta])* $field:ident: $facet:ident, $replace:ident => $contract:ident; )*) => {
        $(
            impl $facet for Dependencies {
                fn $field(&self) -> Arc<dyn $contract> {
                    self.$field.get()
                }
            }

            impl $facet for Resolver {
                fn $field(&self) -> Arc<dyn $contract> {
                    self.container().$field()
                }
            }
        )*

        impl Dependencies {
            $(
                $(#[$meta])*
                pub fn $replace(&self, value: Arc<dyn $contract>) {
                    self.$field.replace(value);
                }
            )*
        }
    };
}

macro_rules! optional_capabilities {
    ($( $field:ident: $facet:ident, $replace:ident => $contract:ident as $capability:ident; )*) => {
        $(
            impl $facet for Dependencies {
                fn $field(&self) -> Option<Arc<dyn $contract>> {
                    self.$field.get()
                }
            }

            impl $facet for Resolver {
                fn $field(&self) -> Option<Arc<dyn $contract>> {
                    self.container().$field()
                }
            }
        )*

        impl Dependencies {
            $(
                #[doc = concat!("Replace or clear the `", stringify!($field), "` capability.")]
                pub fn $replace(&self, value: Option<Arc<dyn $contract>>) {
                    self.$field.replace(value);
                }
            )*

            /// The capabilities currently holding a value.
            ///
            /// Mandatory capabilities are always present.
            pub fn configured(&self) -> CapabilitySet {
                let mut set = CapabilitySet::MANDATORY;
                $(
                    if self.$field.is_set() {
                        set |= Capability::$capability.flag();
                    }
                )*
                set
            }
        }
    };
}

mandatory_capabilities! {
    /// Replace the component decoder.
    decoder: DependencyDecoder, replace_decoder => ComponentDecoding;
    /// Replace the URL builder.
    url_builder: DependencyUrlBuilder, replace_url_builder => UrlBuilding;
    /// Replace the resource bundle.
    app_bundle: DependencyAppBundle, replace_app_bundle => AppBundle;
    /// Replace the theme.
    theme: DependencyTheme, replace_theme => Theme;
    /// Replace the navigation capability.
    navigation: DependencyNavigation, replace_navigation => Navigation;
    /// Replace the prefetch helper.
    prefetch_helper: DependencyPrefetching, replace_prefetch_helper => PrefetchHelping;
    /// Replace the repository.
    repository: DependencyRepository, replace_repository => Repository;
    /// Replace the image downloader.
    image_downloader: DependencyImageDownloader, replace_image_downloader => ImageDownloader;
    /// Replace the logger.
    ///
    /// The new logger is wrapped in the same logging decorator as the one it
    /// replaces before it is stored, so it keeps honouring
    /// [`set_logging_enabled`](Dependencies::set_logging_enabled).
    logger: DependencyLogger, replace_logger => Logger;
    /// Replace the window manager.
    window_manager: DependencyWindowManager, replace_window_manager => WindowManager;
    /// Replace the URL opener.
    opener: DependencyUrlOpener, replace_opener => UrlOpener;
    /// Replace the form data store.
    form_data_store: DependencyFormDataStore, replace_form_data_store => FormDataStore;
    /// Replace the global context.
    global_context: DependencyGlobalContext, replace_global_context => GlobalContext;
    /// Replace the operations provider.
    operations_provider: DependencyOperationsProvider, replace_operations_provider => OperationsProvider;
    /// Replace the renderer factory.
    renderer: DependencyRenderer, replace_renderer => RendererFactory;
    /// Replace the style configurator factory.
    style_configurator: DependencyStyleConfigurator, replace_style_configurator => StyleConfiguratorFactory;
    /// Replace the view configurator factory.
    view_configurator: DependencyViewConfigurator, replace_view_configurator => ViewConfiguratorFactory;
}

optional_capabilities! {
    network_client: DependencyNetworkClient, replace_network_client => NetworkClient as NetworkClient;
    validator_provider: DependencyValidatorProvider, replace_validator_provider => ValidatorProvider as ValidatorProvider;
    deep_link_handler: DependencyDeepLinkHandler, replace_deep_link_handler => DeepLinkHandler as DeepLinkHandler;
    local_form_handler: DependencyLocalFormHandler, replace_local_form_handler => LocalFormHandler as LocalFormHandler;
    cache_manager: DependencyCacheManager, replace_cache_manager => CacheManager as CacheManager;
    analytics: DependencyAnalytics, replace_analytics => AnalyticsProvider as Analytics;
}

impl DependencyLoggingCondition for Dependencies {
    fn is_logging_enabled(&self) -> bool {
        self.logging_enabled.load(Ordering::Acquire)
    }
}

// A logger outliving its container goes quiet instead of panicking.
impl DependencyLoggingCondition for Resolver {
    fn is_logging_enabled(&self) -> bool {
        match self.try_container() {
            Ok(container) => container.is_logging_enabled(),
            Err(WiringError::Released) => false,
            Err(_) => self.container().is_logging_enabled(),
        }
    }
}

impl Dependencies {
    /// Turn the logging decorator on or off for every holder of the logger.
    pub fn set_logging_enabled(&self, enabled: bool) {
        self.logging_enabled.store(enabled, Ordering::Release);
    }

    /// Replace the analytics capability with a legacy sink, adapted onto
    /// [`AnalyticsProvider`].
    pub fn replace_legacy_analytics(&self, legacy: Arc<dyn Analytics>) {
        self.replace_analytics(Some(Arc::new(LegacyAnalyticsAdapter::new(legacy))));
    }

    /// A handle onto this container for capabilities built after construction.
    pub fn resolver(&self) -> Resolver {
        self.resolver.clone()
    }

    /// Whether `capability` currently holds a value.
    pub fn is_configured(&self, capability: Capability) -> bool {
        self.configured().contains(capability.flag())
    }
}

impl fmt::Debug for Dependencies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dependencies")
            .field("configured", &format_args!("{}", self.configured()))
            .field("logging_enabled", &self.is_logging_enabled())
            .finish_non_exhaustive()
    }
}
