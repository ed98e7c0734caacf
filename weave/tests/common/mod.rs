#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use weave::contracts::{AnalyticsClick, AnalyticsProvider, AnalyticsRecord, AnalyticsScreen};
use weave::testing::{Journal, RecordingContext};
use weave::{Action, Dependencies, DependenciesBuilder};

// ============================================================================
// Test Actions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Navigate {
    pub route: String,
}

impl Navigate {
    pub fn to(route: &str) -> Self {
        Self {
            route: route.to_owned(),
        }
    }
}

impl Action for Navigate {
    fn name(&self) -> &str {
        "navigate"
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub message: String,
}

impl Action for Alert {
    fn name(&self) -> &str {
        "alert"
    }
}

// ============================================================================
// Test Capabilities
// ============================================================================

pub struct CountingAnalytics {
    pub count: Arc<AtomicUsize>,
}

impl CountingAnalytics {
    pub fn new() -> (Self, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        (
            Self {
                count: Arc::clone(&count),
            },
            count,
        )
    }
}

impl AnalyticsProvider for CountingAnalytics {
    fn record(&self, _record: &AnalyticsRecord) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn click(category: &str) -> AnalyticsRecord {
    AnalyticsRecord::Click(AnalyticsClick::new(category))
}

pub fn screen(name: &str) -> AnalyticsRecord {
    AnalyticsRecord::ScreenAppeared(AnalyticsScreen::new(name))
}

/// A context over a default container, journaling into `journal`.
pub fn context_with(deps: Arc<Dependencies>, journal: &Journal) -> Arc<RecordingContext<Dependencies>> {
    Arc::new(RecordingContext::new(deps, journal.clone()))
}

pub fn default_dependencies() -> Arc<Dependencies> {
    DependenciesBuilder::new().build().unwrap()
}
