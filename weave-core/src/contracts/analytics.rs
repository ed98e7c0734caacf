//! Analytics contracts.
//!
//! [`AnalyticsProvider`] is the single notification surface the container
//! exposes. The older three-method [`Analytics`] shape is still accepted and is
//! adapted onto the provider.

/// A screen appearance or disappearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsScreen {
    /// Screen identifier (usually its URL or route).
    pub name: String,
}

impl AnalyticsScreen {
    /// Create a screen event.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A click on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsClick {
    /// Event category.
    pub category: String,
    /// Optional label.
    pub label: Option<String>,
    /// Optional value.
    pub value: Option<String>,
}

impl AnalyticsClick {
    /// A click in `category` with no label or value.
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            label: None,
            value: None,
        }
    }

    /// Set the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// A structured analytics event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsRecord {
    /// A screen became visible.
    ScreenAppeared(AnalyticsScreen),
    /// A screen stopped being visible.
    ScreenDisappeared(AnalyticsScreen),
    /// An element was clicked.
    Click(AnalyticsClick),
}

impl From<AnalyticsClick> for AnalyticsRecord {
    fn from(click: AnalyticsClick) -> Self {
        AnalyticsRecord::Click(click)
    }
}

/// The analytics capability.
///
/// Delivery is fire-and-forget: failures are the provider's own concern and
/// never reach the caller.
pub trait AnalyticsProvider: Send + Sync {
    /// Report one event.
    fn record(&self, record: &AnalyticsRecord);
}

/// Legacy single-sink analytics shape.
pub trait Analytics: Send + Sync {
    /// A screen became visible.
    fn track_event_on_screen_appeared(&self, event: &AnalyticsScreen);

    /// A screen stopped being visible.
    fn track_event_on_screen_disappeared(&self, event: &AnalyticsScreen);

    /// An element was clicked.
    fn track_event_on_click(&self, event: &AnalyticsClick);
}
