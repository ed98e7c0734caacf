//! UI-facing contracts: navigation, styling, windows and per-element factories.

use crate::element::ElementId;
use crate::error::{BoxError, OpenError};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationRequest {
    /// Push a route on top of the current stack.
    Push(String),
    /// Pop the top route.
    Pop,
    /// Pop everything above the root route.
    PopToRoot,
    /// Replace the whole stack with a single route.
    Reset(String),
}

/// Screen navigation.
pub trait Navigation: Send + Sync {
    /// Perform `request`, optionally on behalf of an element.
    fn navigate(&self, request: &NavigationRequest, origin: Option<ElementId>);

    /// The route on top of the stack.
    fn current_route(&self) -> Option<String>;
}

/// Named styles.
pub trait Theme: Send + Sync {
    /// Whether a style named `id` exists.
    fn has_style(&self, id: &str) -> bool;

    /// Apply style `id` to `element`; `false` if no such style exists.
    fn apply(&self, id: &str, element: ElementId) -> bool;
}

/// Top-level window tracking.
pub trait WindowManager: Send + Sync {
    /// The element currently presented on top.
    fn top_element(&self) -> Option<ElementId>;

    /// Record the element presented on top.
    fn set_top_element(&self, element: Option<ElementId>);
}

/// Opening external URLs.
pub trait UrlOpener: Send + Sync {
    /// Try to open `url` outside the application.
    fn try_open(&self, url: &str) -> Result<(), OpenError>;
}

/// A single input validator.
pub trait Validator: Send + Sync {
    /// Whether `input` is acceptable.
    fn is_valid(&self, input: &Value) -> bool;
}

/// Named input validators.
pub trait ValidatorProvider: Send + Sync {
    /// The validator registered under `name`.
    fn validator(&self, name: &str) -> Option<Arc<dyn Validator>>;
}

/// Deep link resolution.
pub trait DeepLinkHandler: Send + Sync {
    /// Handle a deep link to `path` with query `data`.
    fn handle(&self, path: &str, data: &BTreeMap<String, String>) -> Result<(), BoxError>;
}

/// Local handling of form submissions.
pub trait LocalFormHandler: Send + Sync {
    /// Handle the submission of form `name`.
    fn submit(&self, name: &str, data: &BTreeMap<String, Value>) -> Result<Value, BoxError>;
}

/// Turns component types into live elements for one screen.
pub trait Renderer: Send {
    /// The screen this renderer draws into.
    fn screen(&self) -> ElementId;

    /// Create an element for a component of type `component_type`.
    fn render(&self, component_type: &str) -> ElementId;
}

/// Per-screen renderer factory.
pub trait RendererFactory: Send + Sync {
    /// Create a renderer for `screen`.
    fn renderer(&self, screen: ElementId) -> Box<dyn Renderer>;
}

/// Applies styles to one element.
pub trait StyleConfigurator: Send {
    /// The configured element.
    fn element(&self) -> ElementId;

    /// Apply the named style; `false` if it does not exist.
    fn apply_style(&mut self, style_id: &str) -> bool;
}

/// Per-element style configurator factory.
pub trait StyleConfiguratorFactory: Send + Sync {
    /// Create a style configurator for `element`.
    fn style(&self, element: ElementId) -> Box<dyn StyleConfigurator>;
}

/// Configures non-style view properties of one element.
pub trait ViewConfigurator: Send {
    /// The configured element.
    fn element(&self) -> ElementId;

    /// Set the accessibility label.
    fn set_accessibility(&mut self, label: Option<String>);

    /// The current accessibility label.
    fn accessibility(&self) -> Option<&str>;
}

/// Per-element view configurator factory.
pub trait ViewConfiguratorFactory: Send + Sync {
    /// Create a view configurator for `element`.
    fn view_configurator(&self, element: ElementId) -> Box<dyn ViewConfigurator>;
}

impl<F> RendererFactory for F
where
    F: Fn(ElementId) -> Box<dyn Renderer> + Send + Sync,
{
    fn renderer(&self, screen: ElementId) -> Box<dyn Renderer> {
        (self)(screen)
    }
}

impl<F> StyleConfiguratorFactory for F
where
    F: Fn(ElementId) -> Box<dyn StyleConfigurator> + Send + Sync,
{
    fn style(&self, element: ElementId) -> Box<dyn StyleConfigurator> {
        (self)(element)
    }
}

impl<F> ViewConfiguratorFactory for F
where
    F: Fn(ElementId) -> Box<dyn ViewConfigurator> + Send + Sync,
{
    fn view_configurator(&self, element: ElementId) -> Box<dyn ViewConfigurator> {
        (self)(element)
    }
}
