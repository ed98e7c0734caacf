//! Construction of the dependency container.

use super::dependencies::Dependencies;
use super::resolver::Resolver;
use super::slot::{DecoratedSlot, OptionalSlot, Slot};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use weave_core::contracts::{
    Analytics, AnalyticsProvider, AppBundle, CacheManager, ComponentDecoding, DeepLinkHandler,
    FormDataStore, GlobalContext, ImageDownloader, LocalFormHandler, Logger, Navigation,
    NetworkClient, OperationsProvider, PrefetchHelping, RendererFactory, Repository,
    StyleConfiguratorFactory, Theme, UrlBuilding, UrlOpener, ValidatorProvider,
    ViewConfiguratorFactory, WindowManager,
};
use weave_core::{Capability, CapabilitySet, WiringError};
use weave_std::analytics::LegacyAnalyticsAdapter;
use weave_std::defaults::{
    AppTheme, ComponentDecoder, DefaultGlobalContext, DefaultImageDownloader, DefaultOperations,
    DefaultRenderer, DefaultRepository, DefaultStyleConfigurator, DefaultUrlOpener,
    DefaultViewConfigurator, DefaultWindowManager, InMemoryFormDataStore, MainBundle, Navigator,
    PrefetchHelper, UrlBuilder,
};
use weave_std::logging::{LoggerProxy, TracingLogger};

/// Deferred construction of one capability.
///
/// Runs during [`DependenciesBuilder::build`] with the container's resolver,
/// which is not yet bound at that point.
type Provider<T> = Box<dyn FnOnce(&Resolver) -> Arc<T> + Send>;

macro_rules! builder {
    (
        mandatory { $( $m_field:ident: $m_contract:ident as $m_cap:ident, $m_with:ident, $m_factory:ident; )* }
        optional { $( $o_field:ident: $o_contract:ident as $o_cap:ident, $o_with:ident, $o_factory:ident; )* }
    ) => {
        /// Builder for [`Dependencies`].
        ///
        /// Every capability can be supplied either as a ready instance
        /// (`with_*`) or as a factory receiving the container's [`Resolver`]
        /// (`with_*_factory`), for implementations that read sibling
        /// capabilities. Factories must only store the resolver; reading
        /// through it before [`build`](Self::build) returns panics.
        ///
        /// # Example
        ///
        /// ```rust,ignore
        /// let deps = DependenciesBuilder::new()
        ///     .with_network_client(Arc::new(HttpClient::default()))
        ///     .with_logger(Arc::new(RecordingLogger::new()))
        ///     .with_repository_factory(|resolver| Arc::new(DefaultRepository::new(resolver.clone())))
        ///     .build()?;
        /// ```
        pub struct DependenciesBuilder {
            use_defaults: bool,
            logging_enabled: bool,
            base_url: Option<String>,
            $( $m_field: Option<Provider<dyn $m_contract>>, )*
            $( $o_field: Option<Provider<dyn $o_contract>>, )*
        }

        impl DependenciesBuilder {
            fn empty(use_defaults: bool) -> Self {
                Self {
                    use_defaults,
                    logging_enabled: true,
                    base_url: None,
                    $( $m_field: None, )*
                    $( $o_field: None, )*
                }
            }

            $(
                #[doc = concat!("Use `value` as the `", stringify!($m_field), "` capability.")]
                pub fn $m_with(mut self, value: Arc<dyn $m_contract>) -> Self {
                    self.$m_field = Some(Box::new(move |_| value));
                    self
                }

                #[doc = concat!("Build the `", stringify!($m_field), "` capability against the container's resolver.")]
                pub fn $m_factory(
                    mut self,
                    factory: impl FnOnce(&Resolver) -> Arc<dyn $m_contract> + Send + 'static,
                ) -> Self {
                    self.$m_field = Some(Box::new(factory));
                    self
                }
            )*

            $(
                #[doc = concat!("Use `value` as the `", stringify!($o_field), "` capability.")]
                pub fn $o_with(mut self, value: Arc<dyn $o_contract>) -> Self {
                    self.$o_field = Some(Box::new(move |_| value));
                    self
                }

                #[doc = concat!("Build the `", stringify!($o_field), "` capability against the container's resolver.")]
                pub fn $o_factory(
                    mut self,
                    factory: impl FnOnce(&Resolver) -> Arc<dyn $o_contract> + Send + 'static,
                ) -> Self {
                    self.$o_field = Some(Box::new(factory));
                    self
                }
            )*

            /// Mandatory capabilities that `build` could not resolve.
            pub fn missing(&self) -> CapabilitySet {
                if self.use_defaults {
                    return CapabilitySet::empty();
                }
                let mut missing = CapabilitySet::empty();
                $(
                    if self.$m_field.is_none() {
                        missing |= Capability::$m_cap.flag();
                    }
                )*
                missing
            }

            /// Capabilities that were supplied explicitly.
            pub fn supplied(&self) -> CapabilitySet {
                let mut supplied = CapabilitySet::empty();
                $(
                    if self.$m_field.is_some() {
                        supplied |= Capability::$m_cap.flag();
                    }
                )*
                $(
                    if self.$o_field.is_some() {
                        supplied |= Capability::$o_cap.flag();
                    }
                )*
                supplied
            }

            fn supplied_fmt(&self) -> String {
                self.supplied().to_string()
            }
        }
    };
}

builder! {
    mandatory {
        decoder: ComponentDecoding as Decoder, with_decoder, with_decoder_factory;
        url_builder: UrlBuilding as UrlBuilder, with_url_builder, with_url_builder_factory;
        app_bundle: AppBundle as AppBundle, with_app_bundle, with_app_bundle_factory;
        theme: Theme as Theme, with_theme, with_theme_factory;
        navigation: Navigation as Navigation, with_navigation, with_navigation_factory;
        prefetch_helper: PrefetchHelping as Prefetching, with_prefetch_helper, with_prefetch_helper_factory;
        repository: Repository as Repository, with_repository, with_repository_factory;
        image_downloader: ImageDownloader as ImageDownloader, with_image_downloader, with_image_downloader_factory;
        logger: Logger as Logger, with_logger, with_logger_factory;
        window_manager: WindowManager as WindowManager, with_window_manager, with_window_manager_factory;
        opener: UrlOpener as UrlOpener, with_opener, with_opener_factory;
        form_data_store: FormDataStore as FormDataStore, with_form_data_store, with_form_data_store_factory;
        global_context: GlobalContext as GlobalContext, with_global_context, with_global_context_factory;
        operations_provider: OperationsProvider as OperationsProvider, with_operations_provider, with_operations_provider_factory;
        renderer: RendererFactory as Renderer, with_renderer, with_renderer_factory;
        style_configurator: StyleConfiguratorFactory as StyleConfigurator, with_style_configurator, with_style_configurator_factory;
        view_configurator: ViewConfiguratorFactory as ViewConfigurator, with_view_configurator, with_view_configurator_factory;
    }
    optional {
        network_client: NetworkClient as NetworkClient, with_network_client, with_network_client_factory;
        validator_provider: ValidatorProvider as ValidatorProvider, with_validator_provider, with_validator_provider_factory;
        deep_link_handler: DeepLinkHandler as DeepLinkHandler, with_deep_link_handler, with_deep_link_handler_factory;
        local_form_handler: LocalFormHandler as LocalFormHandler, with_local_form_handler, with_local_form_handler_factory;
        cache_manager: CacheManager as CacheManager, with_cache_manager, with_cache_manager_factory;
        analytics: AnalyticsProvider as Analytics, with_analytics, with_analytics_factory;
    }
}

fn provide<T: ?Sized>(
    provider: Option<Provider<T>>,
    resolver: &Resolver,
    default: impl FnOnce(&Resolver) -> Arc<T>,
) -> Arc<T> {
    match provider {
        Some(provider) => provider(resolver),
        None => default(resolver),
    }
}

fn provide_optional<T: ?Sized>(provider: Option<Provider<T>>, resolver: &Resolver) -> Option<Arc<T>> {
    provider.map(|provider| provider(resolver))
}

impl DependenciesBuilder {
    /// A builder that falls back to the `weave-std` default for every
    /// mandatory capability left unset.
    pub fn new() -> Self {
        Self::empty(true)
    }

    /// A builder with no fallbacks; every mandatory capability must be
    /// supplied or [`build`](Self::build) fails.
    pub fn without_defaults() -> Self {
        Self::empty(false)
    }

    /// Initial state of the logging switch. Defaults to `true`.
    pub fn with_logging_enabled(mut self, enabled: bool) -> Self {
        self.logging_enabled = enabled;
        self
    }

    /// Base URL for the default URL builder.
    ///
    /// Ignored when a URL builder is supplied explicitly.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Use a legacy analytics sink, adapted onto [`AnalyticsProvider`].
    pub fn with_legacy_analytics(self, legacy: Arc<dyn Analytics>) -> Self {
        self.with_analytics(Arc::new(LegacyAnalyticsAdapter::new(legacy)))
    }

    /// Construct the container.
    ///
    /// Capabilities are built in declaration order against an unbound
    /// [`Resolver`], which is bound to the finished container as the last
    /// step. Fails with [`WiringError::MissingCapabilities`] naming every
    /// unresolved mandatory capability; in that case nothing is constructed.
    pub fn build(self) -> Result<Arc<Dependencies>, WiringError> {
        let missing = self.missing();
        if !missing.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!(%missing, "dependency container is missing mandatory capabilities");
            return Err(WiringError::MissingCapabilities(missing));
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(supplied = %self.supplied_fmt(), "building dependency container");

        let resolver = Resolver::new();
        let r = &resolver;
        let base_url = self.base_url;

        let logger = provide(self.logger, r, |_| Arc::new(TracingLogger));
        let proxy_resolver = resolver.clone();
        let logger = DecoratedSlot::new(logger, move |inner| {
            Arc::new(LoggerProxy::new(inner, proxy_resolver.clone())) as Arc<dyn Logger>
        });

        let dependencies = Arc::new(Dependencies {
            decoder: Slot::new(provide(self.decoder, r, |_| {
                Arc::new(ComponentDecoder::new())
            })),
            url_builder: Slot::new(provide(self.url_builder, r, |_| match base_url {
                Some(base_url) => Arc::new(UrlBuilder::with_base_url(base_url)),
                None => Arc::new(UrlBuilder::new()),
            })),
            app_bundle: Slot::new(provide(self.app_bundle, r, |_| {
                Arc::new(MainBundle::default())
            })),
            theme: Slot::new(provide(self.theme, r, |_| Arc::new(AppTheme::new()))),
            navigation: Slot::new(provide(self.navigation, r, |_| Arc::new(Navigator::new()))),
            prefetch_helper: Slot::new(provide(self.prefetch_helper, r, |r| {
                Arc::new(PrefetchHelper::new(r.clone()))
            })),
            repository: Slot::new(provide(self.repository, r, |r| {
                Arc::new(DefaultRepository::new(r.clone()))
            })),
            image_downloader: Slot::new(provide(self.image_downloader, r, |r| {
                Arc::new(DefaultImageDownloader::new(r.clone()))
            })),
            logger,
            window_manager: Slot::new(provide(self.window_manager, r, |_| {
                Arc::new(DefaultWindowManager::new())
            })),
            opener: Slot::new(provide(self.opener, r, |r| {
                Arc::new(DefaultUrlOpener::new(r.clone()))
            })),
            form_data_store: Slot::new(provide(self.form_data_store, r, |_| {
                Arc::new(InMemoryFormDataStore::new())
            })),
            global_context: Slot::new(provide(self.global_context, r, |_| {
                Arc::new(DefaultGlobalContext::new())
            })),
            operations_provider: Slot::new(provide(self.operations_provider, r, |r| {
                Arc::new(DefaultOperations::new(r.clone()))
            })),
            renderer: Slot::new(provide(self.renderer, r, |_| {
                Arc::new(DefaultRenderer::default())
            })),
            style_configurator: Slot::new(provide(self.style_configurator, r, |r| {
                Arc::new(DefaultStyleConfigurator::new(r.clone()))
            })),
            view_configurator: Slot::new(provide(self.view_configurator, r, |_| {
                Arc::new(DefaultViewConfigurator)
            })),

            network_client: OptionalSlot::new(provide_optional(self.network_client, r)),
            validator_provider: OptionalSlot::new(provide_optional(self.validator_provider, r)),
            deep_link_handler: OptionalSlot::new(provide_optional(self.deep_link_handler, r)),
            local_form_handler: OptionalSlot::new(provide_optional(self.local_form_handler, r)),
            cache_manager: OptionalSlot::new(provide_optional(self.cache_manager, r)),
            analytics: OptionalSlot::new(provide_optional(self.analytics, r)),

            logging_enabled: AtomicBool::new(self.logging_enabled),
            resolver: resolver.clone(),
        });

        resolver.bind(&dependencies)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(configured = %dependencies.configured(), "dependency container ready");

        Ok(dependencies)
    }
}

impl Default for DependenciesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DependenciesBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesBuilder")
            .field("use_defaults", &self.use_defaults)
            .field("logging_enabled", &self.logging_enabled)
            .field("supplied", &self.supplied_fmt())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weave_core::contracts::LogRecord;
    use weave_core::{
        DependencyAnalytics, DependencyLogger, DependencyLoggingCondition, DependencyNetworkClient,
        DependencyRepository,
    };
    use weave_std::testing::{RecordingLogger, StubNetworkClient};

    struct Fixed(Vec<u8>);

    impl Repository for Fixed {
        fn fetch_component(&self, _path: &str) -> Result<Vec<u8>, weave_core::RepositoryError> {
            Ok(self.0.clone())
        }

        fn fetch_image(&self, _path: &str) -> Result<Vec<u8>, weave_core::RepositoryError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_defaults_fill_every_mandatory_capability() {
        let deps = DependenciesBuilder::new().build().unwrap();
        assert_eq!(deps.configured(), CapabilitySet::MANDATORY);
        assert!(deps.network_client().is_none());
        assert!(deps.analytics().is_none());
        assert!(deps.is_logging_enabled());
    }

    #[test]
    fn test_without_defaults_reports_every_missing_capability() {
        let builder = DependenciesBuilder::without_defaults()
            .with_repository(Arc::new(Fixed(vec![])))
            .with_logger(Arc::new(RecordingLogger::new()));

        let expected = CapabilitySet::MANDATORY
            - Capability::Repository.flag()
            - Capability::Logger.flag();
        assert_eq!(builder.missing(), expected);

        match builder.build() {
            Err(WiringError::MissingCapabilities(missing)) => assert_eq!(missing, expected),
            other => panic!("expected missing capabilities, got {other:?}"),
        }
    }

    #[test]
    fn test_supplied_instance_is_returned_as_is() {
        let repository: Arc<dyn Repository> = Arc::new(Fixed(b"ok".to_vec()));
        let deps = DependenciesBuilder::new()
            .with_repository(Arc::clone(&repository))
            .build()
            .unwrap();

        assert!(Arc::ptr_eq(&deps.repository(), &repository));
        assert!(Arc::ptr_eq(&deps.repository(), &deps.repository()));
    }

    #[test]
    fn test_supplied_tracks_explicit_capabilities() {
        let builder = DependenciesBuilder::new()
            .with_network_client(Arc::new(StubNetworkClient::new()))
            .with_logger(Arc::new(RecordingLogger::new()));

        assert_eq!(
            builder.supplied(),
            Capability::NetworkClient.flag() | Capability::Logger.flag()
        );
        assert!(builder.missing().is_empty());
    }

    #[test]
    fn test_logger_is_wrapped_in_proxy() {
        let recorder = RecordingLogger::new();
        let deps = DependenciesBuilder::new()
            .with_logger(Arc::new(recorder.clone()))
            .with_logging_enabled(false)
            .build()
            .unwrap();

        deps.logger().log(&LogRecord::info("test", "dropped"));
        assert!(recorder.records().is_empty());

        deps.set_logging_enabled(true);
        deps.logger().log(&LogRecord::info("test", "kept"));
        assert_eq!(recorder.messages(), vec!["kept"]);
    }

    #[test]
    fn test_factory_receives_unbound_resolver() {
        let deps = DependenciesBuilder::new()
            .with_repository_factory(|resolver| {
                assert!(matches!(resolver.try_container(), Err(WiringError::Unbound)));
                Arc::new(Fixed(vec![]))
            })
            .build()
            .unwrap();

        assert!(deps.resolver().is_bound());
    }

    #[test]
    #[should_panic(expected = "before construction completed")]
    fn test_factory_reading_container_during_construction_panics() {
        let _ = DependenciesBuilder::new()
            .with_repository_factory(|resolver| {
                let _eager = resolver.network_client();
                Arc::new(Fixed(vec![]))
            })
            .build();
    }

    #[test]
    fn test_base_url_feeds_default_url_builder() {
        let deps = DependenciesBuilder::new()
            .with_base_url("https://example.com")
            .build()
            .unwrap();

        assert_eq!(
            weave_core::DependencyUrlBuilder::url_builder(&deps)
                .build("/home")
                .as_deref(),
            Some("https://example.com/home")
        );
    }
}
