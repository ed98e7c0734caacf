//! Adapter from the legacy analytics shape onto [`AnalyticsProvider`].

use std::sync::Arc;
use weave_core::contracts::{Analytics, AnalyticsProvider, AnalyticsRecord};

/// Presents a legacy [`Analytics`] sink as an [`AnalyticsProvider`].
pub struct LegacyAnalyticsAdapter<A: ?Sized> {
    legacy: Arc<A>,
}

impl<A: ?Sized> LegacyAnalyticsAdapter<A> {
    /// Wrap a legacy sink.
    pub fn new(legacy: Arc<A>) -> Self {
        Self { legacy }
    }

    /// The wrapped sink.
    pub fn legacy(&self) -> &Arc<A> {
        &self.legacy
    }
}

impl<A: Analytics + ?Sized> AnalyticsProvider for LegacyAnalyticsAdapter<A> {
    fn record(&self, record: &AnalyticsRecord) {
        match record {
            AnalyticsRecord::ScreenAppeared(screen) => {
                self.legacy.track_event_on_screen_appeared(screen)
            }
            AnalyticsRecord::ScreenDisappeared(screen) => {
                self.legacy.track_event_on_screen_disappeared(screen)
            }
            AnalyticsRecord::Click(click) => self.legacy.track_event_on_click(click),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{LegacyCall, RecordingLegacyAnalytics};
    use weave_core::contracts::{AnalyticsClick, AnalyticsScreen};

    #[test]
    fn test_each_record_maps_to_its_legacy_method() {
        let legacy = RecordingLegacyAnalytics::new();
        let adapter = LegacyAnalyticsAdapter::new(Arc::new(legacy.clone()));

        adapter.record(&AnalyticsRecord::ScreenAppeared(AnalyticsScreen::new("home")));
        adapter.record(&AnalyticsRecord::Click(AnalyticsClick::new("cta").with_label("buy")));
        adapter.record(&AnalyticsRecord::ScreenDisappeared(AnalyticsScreen::new("home")));

        assert_eq!(
            legacy.calls(),
            vec![
                LegacyCall::ScreenAppeared("home".into()),
                LegacyCall::Click(AnalyticsClick::new("cta").with_label("buy")),
                LegacyCall::ScreenDisappeared("home".into()),
            ]
        );
    }
}
