//! UI defaults: theme, windows, URL opening and per-element factories.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use weave_core::contracts::{
    LogRecord, Renderer, RendererFactory, StyleConfigurator, StyleConfiguratorFactory, Theme,
    UrlOpener, ViewConfigurator, ViewConfiguratorFactory, WindowManager,
};
use weave_core::{DependencyLogger, DependencyTheme, ElementId, OpenError};

/// A style application function.
pub type StyleFn = Arc<dyn Fn(ElementId) + Send + Sync>;

/// A theme made of named style functions.
#[derive(Default)]
pub struct AppTheme {
    styles: HashMap<String, StyleFn>,
}

impl AppTheme {
    /// A theme with no styles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named style.
    pub fn with_style(
        mut self,
        id: impl Into<String>,
        style: impl Fn(ElementId) + Send + Sync + 'static,
    ) -> Self {
        self.styles.insert(id.into(), Arc::new(style));
        self
    }
}

impl fmt::Debug for AppTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppTheme")
            .field("styles", &self.styles.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Theme for AppTheme {
    fn has_style(&self, id: &str) -> bool {
        self.styles.contains_key(id)
    }

    fn apply(&self, id: &str, element: ElementId) -> bool {
        match self.styles.get(id) {
            Some(style) => {
                style(element);
                true
            }
            None => false,
        }
    }
}

/// Tracks the element presented on top.
#[derive(Debug, Default)]
pub struct DefaultWindowManager {
    top: Mutex<Option<ElementId>>,
}

impl DefaultWindowManager {
    /// Create a window manager with nothing presented.
    pub fn new() -> Self {
        Self::default()
    }
}

impl WindowManager for DefaultWindowManager {
    fn top_element(&self) -> Option<ElementId> {
        *self.top.lock()
    }

    fn set_top_element(&self, element: Option<ElementId>) {
        *self.top.lock() = element;
    }
}

type OpenFn = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Validates URLs and hands them to a platform handler, logging failures.
pub struct DefaultUrlOpener<D> {
    dependencies: D,
    handler: Option<OpenFn>,
}

impl<D> DefaultUrlOpener<D> {
    /// An opener with no platform handler; every open is reported unsupported.
    pub fn new(dependencies: D) -> Self {
        Self {
            dependencies,
            handler: None,
        }
    }

    /// Use `handler` to open URLs; it returns whether the URL was opened.
    pub fn with_handler(mut self, handler: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }
}

fn has_scheme(url: &str) -> bool {
    url.split_once(':').is_some_and(|(scheme, rest)| {
        !rest.is_empty()
            && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

impl<D> UrlOpener for DefaultUrlOpener<D>
where
    D: DependencyLogger + Send + Sync,
{
    fn try_open(&self, url: &str) -> Result<(), OpenError> {
        let logger = self.dependencies.logger();
        if !has_scheme(url) {
            logger.log(&LogRecord::error("opener", format!("invalid url: {url}")));
            return Err(OpenError::InvalidUrl(url.to_owned()));
        }
        match &self.handler {
            Some(open) if open(url) => Ok(()),
            _ => {
                logger.log(&LogRecord::warning("opener", format!("could not open {url}")));
                Err(OpenError::Unsupported(url.to_owned()))
            }
        }
    }
}

/// Allocates element identities for rendered components.
///
/// All renderers produced by one factory share the identity counter.
#[derive(Debug, Clone)]
pub struct DefaultRenderer {
    next: Arc<AtomicU64>,
}

impl DefaultRenderer {
    /// Identities start at `first`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: Arc::new(AtomicU64::new(first)),
        }
    }
}

impl Default for DefaultRenderer {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

struct ScreenRenderer {
    screen: ElementId,
    next: Arc<AtomicU64>,
}

impl Renderer for ScreenRenderer {
    fn screen(&self) -> ElementId {
        self.screen
    }

    fn render(&self, _component_type: &str) -> ElementId {
        ElementId::new(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl RendererFactory for DefaultRenderer {
    fn renderer(&self, screen: ElementId) -> Box<dyn Renderer> {
        Box::new(ScreenRenderer {
            screen,
            next: Arc::clone(&self.next),
        })
    }
}

/// Applies theme styles, reading the theme from the container at call time.
pub struct DefaultStyleConfigurator<D> {
    dependencies: D,
}

impl<D> DefaultStyleConfigurator<D> {
    /// Create a factory reading the theme from `dependencies`.
    pub fn new(dependencies: D) -> Self {
        Self { dependencies }
    }
}

struct ThemedStyle<D> {
    element: ElementId,
    dependencies: D,
}

impl<D> StyleConfigurator for ThemedStyle<D>
where
    D: DependencyTheme + Send,
{
    fn element(&self) -> ElementId {
        self.element
    }

    fn apply_style(&mut self, style_id: &str) -> bool {
        self.dependencies.theme().apply(style_id, self.element)
    }
}

impl<D> StyleConfiguratorFactory for DefaultStyleConfigurator<D>
where
    D: DependencyTheme + Clone + Send + Sync + 'static,
{
    fn style(&self, element: ElementId) -> Box<dyn StyleConfigurator> {
        Box::new(ThemedStyle {
            element,
            dependencies: self.dependencies.clone(),
        })
    }
}

/// Produces plain view configurators holding per-element properties.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultViewConfigurator;

struct ElementView {
    element: ElementId,
    accessibility: Option<String>,
}

impl ViewConfigurator for ElementView {
    fn element(&self) -> ElementId {
        self.element
    }

    fn set_accessibility(&mut self, label: Option<String>) {
        self.accessibility = label;
    }

    fn accessibility(&self) -> Option<&str> {
        self.accessibility.as_deref()
    }
}

impl ViewConfiguratorFactory for DefaultViewConfigurator {
    fn view_configurator(&self, element: ElementId) -> Box<dyn ViewConfigurator> {
        Box::new(ElementView {
            element,
            accessibility: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingLogger;
    use std::sync::atomic::AtomicUsize;
    use weave_core::contracts::Logger;

    #[derive(Clone)]
    struct Deps {
        theme: Arc<AppTheme>,
        logger: RecordingLogger,
    }

    impl DependencyTheme for Deps {
        fn theme(&self) -> Arc<dyn Theme> {
            self.theme.clone()
        }
    }

    impl DependencyLogger for Deps {
        fn logger(&self) -> Arc<dyn Logger> {
            Arc::new(self.logger.clone())
        }
    }

    fn deps(theme: AppTheme) -> Deps {
        Deps {
            theme: Arc::new(theme),
            logger: RecordingLogger::new(),
        }
    }

    #[test]
    fn test_theme_applies_known_styles() {
        let applied = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&applied);
        let theme = AppTheme::new().with_style("title", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(theme.apply("title", ElementId::new(1)));
        assert!(!theme.apply("body", ElementId::new(1)));
        assert_eq!(applied.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_style_configurator_reads_theme() {
        let factory = DefaultStyleConfigurator::new(deps(AppTheme::new().with_style("x", |_| {})));
        let mut style = factory.style(ElementId::new(9));
        assert_eq!(style.element(), ElementId::new(9));
        assert!(style.apply_style("x"));
        assert!(!style.apply_style("y"));
    }

    #[test]
    fn test_opener_rejects_invalid_and_unhandled_urls() {
        let deps = deps(AppTheme::new());
        let opener = DefaultUrlOpener::new(deps.clone());
        assert!(matches!(opener.try_open("not a url"), Err(OpenError::InvalidUrl(_))));
        assert!(matches!(
            opener.try_open("https://example.com"),
            Err(OpenError::Unsupported(_))
        ));
        assert_eq!(deps.logger.records().len(), 2);

        let opener = DefaultUrlOpener::new(deps).with_handler(|url| url.starts_with("https:"));
        assert!(opener.try_open("https://example.com").is_ok());
        assert!(opener.try_open("tel:123").is_err());
    }

    #[test]
    fn test_renderers_share_identity_counter() {
        let factory = DefaultRenderer::starting_at(100);
        let first = factory.renderer(ElementId::new(1));
        let second = factory.renderer(ElementId::new(2));
        assert_eq!(first.render("text"), ElementId::new(100));
        assert_eq!(second.render("button"), ElementId::new(101));
        assert_eq!(second.screen(), ElementId::new(2));
    }

    #[test]
    fn test_view_configurator_holds_accessibility() {
        let mut view = DefaultViewConfigurator.view_configurator(ElementId::new(3));
        assert_eq!(view.accessibility(), None);
        view.set_accessibility(Some("Buy".into()));
        assert_eq!(view.accessibility(), Some("Buy"));
    }
}
