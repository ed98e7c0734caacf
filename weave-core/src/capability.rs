//! The closed set of capabilities a container provides.

use std::fmt;

/// A named capability.
///
/// The set is closed: every container provides exactly these slots. Mandatory
/// capabilities always hold a value once the container is built; optional ones
/// may legitimately be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    /// Component type registry and decoding.
    Decoder,
    /// Resolution of relative paths against a base URL.
    UrlBuilder,
    /// Bundled resource lookup.
    AppBundle,
    /// Named styles.
    Theme,
    /// Screen navigation.
    Navigation,
    /// Ahead-of-time fetching of screens.
    Prefetching,
    /// Remote component and image data access.
    Repository,
    /// Image loading.
    ImageDownloader,
    /// Structured logging, always wrapped by the logging decorator.
    Logger,
    /// Top-level window tracking.
    WindowManager,
    /// Opening external URLs.
    UrlOpener,
    /// Form data persistence.
    FormDataStore,
    /// Application-wide shared context values.
    GlobalContext,
    /// Named operation lookup and evaluation.
    OperationsProvider,
    /// Per-screen renderer factory.
    Renderer,
    /// Per-element style configurator factory.
    StyleConfigurator,
    /// Per-element view configurator factory.
    ViewConfigurator,
    /// Network transport.
    NetworkClient,
    /// Named input validators.
    ValidatorProvider,
    /// Deep link resolution.
    DeepLinkHandler,
    /// Local handling of form submissions.
    LocalFormHandler,
    /// Response caching.
    CacheManager,
    /// Analytics notifications.
    Analytics,
}

impl Capability {
    /// Every capability, in declaration order.
    pub const ALL: [Capability; 23] = [
        Capability::Decoder,
        Capability::UrlBuilder,
        Capability::AppBundle,
        Capability::Theme,
        Capability::Navigation,
        Capability::Prefetching,
        Capability::Repository,
        Capability::ImageDownloader,
        Capability::Logger,
        Capability::WindowManager,
        Capability::UrlOpener,
        Capability::FormDataStore,
        Capability::GlobalContext,
        Capability::OperationsProvider,
        Capability::Renderer,
        Capability::StyleConfigurator,
        Capability::ViewConfigurator,
        Capability::NetworkClient,
        Capability::ValidatorProvider,
        Capability::DeepLinkHandler,
        Capability::LocalFormHandler,
        Capability::CacheManager,
        Capability::Analytics,
    ];

    /// Stable snake_case name of the capability.
    pub const fn name(self) -> &'static str {
        match self {
            Capability::Decoder => "decoder",
            Capability::UrlBuilder => "url_builder",
            Capability::AppBundle => "app_bundle",
            Capability::Theme => "theme",
            Capability::Navigation => "navigation",
            Capability::Prefetching => "prefetch_helper",
            Capability::Repository => "repository",
            Capability::ImageDownloader => "image_downloader",
            Capability::Logger => "logger",
            Capability::WindowManager => "window_manager",
            Capability::UrlOpener => "opener",
            Capability::FormDataStore => "form_data_store",
            Capability::GlobalContext => "global_context",
            Capability::OperationsProvider => "operations_provider",
            Capability::Renderer => "renderer",
            Capability::StyleConfigurator => "style_configurator",
            Capability::ViewConfigurator => "view_configurator",
            Capability::NetworkClient => "network_client",
            Capability::ValidatorProvider => "validator_provider",
            Capability::DeepLinkHandler => "deep_link_handler",
            Capability::LocalFormHandler => "local_form_handler",
            Capability::CacheManager => "cache_manager",
            Capability::Analytics => "analytics",
        }
    }

    /// Whether the container refuses to build without this capability.
    pub const fn is_mandatory(self) -> bool {
        self.flag().intersects(CapabilitySet::MANDATORY)
    }

    /// The single-capability set for this capability.
    pub const fn flag(self) -> CapabilitySet {
        match self {
            Capability::Decoder => CapabilitySet::DECODER,
            Capability::UrlBuilder => CapabilitySet::URL_BUILDER,
            Capability::AppBundle => CapabilitySet::APP_BUNDLE,
            Capability::Theme => CapabilitySet::THEME,
            Capability::Navigation => CapabilitySet::NAVIGATION,
            Capability::Prefetching => CapabilitySet::PREFETCHING,
            Capability::Repository => CapabilitySet::REPOSITORY,
            Capability::ImageDownloader => CapabilitySet::IMAGE_DOWNLOADER,
            Capability::Logger => CapabilitySet::LOGGER,
            Capability::WindowManager => CapabilitySet::WINDOW_MANAGER,
            Capability::UrlOpener => CapabilitySet::URL_OPENER,
            Capability::FormDataStore => CapabilitySet::FORM_DATA_STORE,
            Capability::GlobalContext => CapabilitySet::GLOBAL_CONTEXT,
            Capability::OperationsProvider => CapabilitySet::OPERATIONS_PROVIDER,
            Capability::Renderer => CapabilitySet::RENDERER,
            Capability::StyleConfigurator => CapabilitySet::STYLE_CONFIGURATOR,
            Capability::ViewConfigurator => CapabilitySet::VIEW_CONFIGURATOR,
            Capability::NetworkClient => CapabilitySet::NETWORK_CLIENT,
            Capability::ValidatorProvider => CapabilitySet::VALIDATOR_PROVIDER,
            Capability::DeepLinkHandler => CapabilitySet::DEEP_LINK_HANDLER,
            Capability::LocalFormHandler => CapabilitySet::LOCAL_FORM_HANDLER,
            Capability::CacheManager => CapabilitySet::CACHE_MANAGER,
            Capability::Analytics => CapabilitySet::ANALYTICS,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags::bitflags! {
    /// A set of capabilities.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CapabilitySet: u32 {
        /// [`Capability::Decoder`]
        const DECODER = 1 << 0;
        /// [`Capability::UrlBuilder`]
        const URL_BUILDER = 1 << 1;
        /// [`Capability::AppBundle`]
        const APP_BUNDLE = 1 << 2;
        /// [`Capability::Theme`]
        const THEME = 1 << 3;
        /// [`Capability::Navigation`]
        const NAVIGATION = 1 << 4;
        /// [`Capability::Prefetching`]
        const PREFETCHING = 1 << 5;
        /// [`Capability::Repository`]
        const REPOSITORY = 1 << 6;
        /// [`Capability::ImageDownloader`]
        const IMAGE_DOWNLOADER = 1 << 7;
        /// [`Capability::Logger`]
        const LOGGER = 1 << 8;
        /// [`Capability::WindowManager`]
        const WINDOW_MANAGER = 1 << 9;
        /// [`Capability::UrlOpener`]
        const URL_OPENER = 1 << 10;
        /// [`Capability::FormDataStore`]
        const FORM_DATA_STORE = 1 << 11;
        /// [`Capability::GlobalContext`]
        const GLOBAL_CONTEXT = 1 << 12;
        /// [`Capability::OperationsProvider`]
        const OPERATIONS_PROVIDER = 1 << 13;
        /// [`Capability::Renderer`]
        const RENDERER = 1 << 14;
        /// [`Capability::StyleConfigurator`]
        const STYLE_CONFIGURATOR = 1 << 15;
        /// [`Capability::ViewConfigurator`]
        const VIEW_CONFIGURATOR = 1 << 16;
        /// [`Capability::NetworkClient`]
        const NETWORK_CLIENT = 1 << 17;
        /// [`Capability::ValidatorProvider`]
        const VALIDATOR_PROVIDER = 1 << 18;
        /// [`Capability::DeepLinkHandler`]
        const DEEP_LINK_HANDLER = 1 << 19;
        /// [`Capability::LocalFormHandler`]
        const LOCAL_FORM_HANDLER = 1 << 20;
        /// [`Capability::CacheManager`]
        const CACHE_MANAGER = 1 << 21;
        /// [`Capability::Analytics`]
        const ANALYTICS = 1 << 22;
    }
}

impl CapabilitySet {
    /// Capabilities the container cannot be built without.
    pub const MANDATORY: Self = Self::from_bits_retain((1 << 17) - 1);

    /// Capabilities whose absence is a valid state.
    pub const OPTIONAL: Self = Self::NETWORK_CLIENT
        .union(Self::VALIDATOR_PROVIDER)
        .union(Self::DEEP_LINK_HANDLER)
        .union(Self::LOCAL_FORM_HANDLER)
        .union(Self::CACHE_MANAGER)
        .union(Self::ANALYTICS);

    /// Iterate the capabilities in this set, in declaration order.
    pub fn capabilities(self) -> impl Iterator<Item = Capability> {
        Capability::ALL
            .into_iter()
            .filter(move |capability| self.contains(capability.flag()))
    }
}

impl From<Capability> for CapabilitySet {
    fn from(capability: Capability) -> Self {
        capability.flag()
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        iter.into_iter()
            .fold(CapabilitySet::empty(), |set, capability| set | capability.flag())
    }
}

impl fmt::Display for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for capability in self.capabilities() {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(capability.name())?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mandatory_and_optional_partition_all() {
        assert!(CapabilitySet::MANDATORY.intersection(CapabilitySet::OPTIONAL).is_empty());
        assert_eq!(
            CapabilitySet::MANDATORY | CapabilitySet::OPTIONAL,
            CapabilitySet::all()
        );
    }

    #[test]
    fn test_flags_match_declaration_order() {
        for (index, capability) in Capability::ALL.into_iter().enumerate() {
            assert_eq!(capability.flag().bits(), 1 << index);
        }
    }

    #[test]
    fn test_mandatory_predicate() {
        assert!(Capability::Logger.is_mandatory());
        assert!(Capability::ViewConfigurator.is_mandatory());
        assert!(!Capability::NetworkClient.is_mandatory());
        assert!(!Capability::Analytics.is_mandatory());
        assert_eq!(
            Capability::ALL.iter().filter(|c| c.is_mandatory()).count(),
            17
        );
    }

    #[test]
    fn test_display_lists_names() {
        let set: CapabilitySet = [Capability::Logger, Capability::Decoder].into_iter().collect();
        assert_eq!(set.to_string(), "decoder, logger");
        assert_eq!(CapabilitySet::empty().to_string(), "");
    }
}
