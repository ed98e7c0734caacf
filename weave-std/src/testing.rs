//! Testing utilities for Weave.
//!
//! This module provides recording doubles for capabilities and execution
//! contexts, so wiring and dispatch can be verified without a real UI.
//!
//! # Features
//!
//! - [`Journal`]: A shared, ordered log of everything the doubles observed
//! - [`RecordingLogger`], [`RecordingAnalytics`], [`RecordingLegacyAnalytics`]:
//!   Capability doubles that record their calls
//! - [`RecordingContext`]: An execution context that records executed actions
//! - [`MountPoint`]: An origin provider that can be attached and detached
//! - [`StubNetworkClient`], [`MemoryCache`]: Canned transport and cache

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use weave_core::contracts::{
    Analytics, AnalyticsClick, AnalyticsProvider, AnalyticsRecord, AnalyticsScreen, CacheManager,
    LogRecord, Logger, NetworkClient, Request, Response,
};
use weave_core::{Action, Capabilities, ElementId, ExecutionContext, NetworkError, OriginProvider};

// ============================================================================
// Journal
// ============================================================================

/// One observation recorded in a [`Journal`].
#[derive(Debug, Clone, PartialEq)]
pub enum JournalEntry {
    /// An execution context ran an action.
    Executed {
        /// [`Action::name`] of the executed action.
        action: String,
        /// Trigger phase.
        phase: String,
        /// Origin element.
        origin: ElementId,
    },
    /// An analytics provider received a record.
    Recorded(AnalyticsRecord),
}

/// A shared, ordered log that several doubles can write to.
///
/// Cloning a journal yields a handle onto the same entries, which is how tests
/// observe the relative order of actions and analytics notifications.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Arc<Mutex<Vec<JournalEntry>>>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn push(&self, entry: JournalEntry) {
        self.entries.lock().push(entry);
    }

    /// A snapshot of all entries.
    pub fn entries(&self) -> Vec<JournalEntry> {
        self.entries.lock().clone()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Forget all entries.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

// ============================================================================
// Capability doubles
// ============================================================================

/// A logger that records every record it receives.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingLogger::new();
/// deps.replace_logger(Arc::new(recorder.clone()));
///
/// deps.logger().log(&LogRecord::info("test", "hello"));
/// assert_eq!(recorder.records().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingLogger {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl RecordingLogger {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A snapshot of the recorded records.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// The recorded messages.
    pub fn messages(&self) -> Vec<String> {
        self.records.lock().iter().map(|r| r.message.clone()).collect()
    }

    /// Forget all records.
    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Logger for RecordingLogger {
    fn log(&self, record: &LogRecord) {
        self.records.lock().push(record.clone());
    }
}

/// An analytics provider that writes every record to a [`Journal`].
#[derive(Debug, Clone, Default)]
pub struct RecordingAnalytics {
    journal: Journal,
}

impl RecordingAnalytics {
    /// Record into a private journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record into `journal`.
    pub fn with_journal(journal: Journal) -> Self {
        Self { journal }
    }

    /// The records received, in order.
    pub fn records(&self) -> Vec<AnalyticsRecord> {
        self.journal
            .entries()
            .into_iter()
            .filter_map(|entry| match entry {
                JournalEntry::Recorded(record) => Some(record),
                JournalEntry::Executed { .. } => None,
            })
            .collect()
    }
}

impl AnalyticsProvider for RecordingAnalytics {
    fn record(&self, record: &AnalyticsRecord) {
        self.journal.push(JournalEntry::Recorded(record.clone()));
    }
}

/// A call received by [`RecordingLegacyAnalytics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegacyCall {
    /// `track_event_on_screen_appeared`
    ScreenAppeared(String),
    /// `track_event_on_screen_disappeared`
    ScreenDisappeared(String),
    /// `track_event_on_click`
    Click(AnalyticsClick),
}

/// A legacy analytics sink that records its calls.
#[derive(Debug, Clone, Default)]
pub struct RecordingLegacyAnalytics {
    calls: Arc<Mutex<Vec<LegacyCall>>>,
}

impl RecordingLegacyAnalytics {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A snapshot of the recorded calls.
    pub fn calls(&self) -> Vec<LegacyCall> {
        self.calls.lock().clone()
    }
}

impl Analytics for RecordingLegacyAnalytics {
    fn track_event_on_screen_appeared(&self, event: &AnalyticsScreen) {
        self.calls
            .lock()
            .push(LegacyCall::ScreenAppeared(event.name.clone()));
    }

    fn track_event_on_screen_disappeared(&self, event: &AnalyticsScreen) {
        self.calls
            .lock()
            .push(LegacyCall::ScreenDisappeared(event.name.clone()));
    }

    fn track_event_on_click(&self, event: &AnalyticsClick) {
        self.calls.lock().push(LegacyCall::Click(event.clone()));
    }
}

/// A network client answering from a fixed URL → response table.
///
/// Unknown URLs fail with [`NetworkError::Unreachable`]. Every requested URL is
/// recorded.
#[derive(Debug, Clone, Default)]
pub struct StubNetworkClient {
    responses: Arc<Mutex<HashMap<String, Response>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubNetworkClient {
    /// A client with no canned responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with `response`.
    pub fn with_response(self, url: impl Into<String>, response: Response) -> Self {
        self.responses.lock().insert(url.into(), response);
        self
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }
}

impl NetworkClient for StubNetworkClient {
    fn execute(&self, request: &Request) -> Result<Response, NetworkError> {
        self.requests.lock().push(request.url.clone());
        self.responses
            .lock()
            .get(&request.url)
            .cloned()
            .ok_or_else(|| NetworkError::Unreachable(request.url.clone()))
    }
}

/// A cache manager backed by a map.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl CacheManager for MemoryCache {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.lock().get(key).cloned()
    }

    fn insert(&self, key: &str, data: Vec<u8>) {
        self.entries.lock().insert(key.to_owned(), data);
    }
}

// ============================================================================
// Interaction doubles
// ============================================================================

/// An execution context that journals every action it executes.
pub struct RecordingContext<D> {
    dependencies: Arc<D>,
    journal: Journal,
}

impl<D> RecordingContext<D> {
    /// A context over `dependencies`, writing to `journal`.
    pub fn new(dependencies: Arc<D>, journal: Journal) -> Self {
        Self {
            dependencies,
            journal,
        }
    }

    /// The journal this context writes to.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Names of the executed actions, in order.
    pub fn executed(&self) -> Vec<String> {
        self.journal
            .entries()
            .into_iter()
            .filter_map(|entry| match entry {
                JournalEntry::Executed { action, .. } => Some(action),
                JournalEntry::Recorded(_) => None,
            })
            .collect()
    }
}

impl<D: Capabilities> ExecutionContext for RecordingContext<D> {
    fn execute(&self, actions: &[Arc<dyn Action>], phase: &str, origin: ElementId) {
        for action in actions {
            self.journal.push(JournalEntry::Executed {
                action: action.name().to_owned(),
                phase: phase.to_owned(),
                origin,
            });
        }
    }

    fn dependencies(&self) -> &dyn Capabilities {
        &*self.dependencies
    }
}

/// An origin provider standing in for an element that can be mounted and
/// unmounted.
///
/// Clones share the attachment state.
#[derive(Debug, Clone, Default)]
pub struct MountPoint {
    element: Arc<Mutex<Option<ElementId>>>,
}

impl MountPoint {
    /// A mount point with nothing attached.
    pub fn detached() -> Self {
        Self::default()
    }

    /// A mount point with `element` attached.
    pub fn attached(element: ElementId) -> Self {
        let mount = Self::default();
        mount.attach(element);
        mount
    }

    /// Attach `element`.
    pub fn attach(&self, element: ElementId) {
        *self.element.lock() = Some(element);
    }

    /// Detach whatever is attached.
    pub fn detach(&self) {
        *self.element.lock() = None;
    }
}

impl OriginProvider for MountPoint {
    fn origin(&self) -> Option<ElementId> {
        *self.element.lock()
    }
}
