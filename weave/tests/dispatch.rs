use std::sync::Arc;
use std::sync::atomic::Ordering;
use weave::testing::{Journal, JournalEntry, MountPoint, RecordingAnalytics};
use weave::{
    DependenciesBuilder, DispatchOutcome, Effect, EffectOutcome, ElementId, SkipReason, Trigger,
};

mod common;
use common::{Alert, CountingAnalytics, Navigate, click, context_with, default_dependencies, screen};

#[test]
fn test_invoke_then_notify_runs_in_order_once_each() {
    let journal = Journal::new();
    let deps = DependenciesBuilder::new()
        .with_analytics(Arc::new(RecordingAnalytics::with_journal(journal.clone())))
        .build()
        .unwrap();
    let controller = context_with(deps, &journal);
    let origin = ElementId::new(42);

    let trigger = Trigger::bind(
        vec![Effect::invoke(Navigate::to("/cart")), Effect::Notify(click("cart"))],
        origin,
        &controller,
    );

    let outcome = trigger.fire();
    let report = outcome.report().unwrap();
    assert_eq!(report.invoked(), 1);
    assert_eq!(report.notified(), 1);
    assert_eq!(
        journal.entries(),
        vec![
            JournalEntry::Executed {
                action: "navigate".into(),
                phase: "onPress".into(),
                origin,
            },
            JournalEntry::Recorded(click("cart")),
        ]
    );
}

#[test]
fn test_released_context_runs_nothing() {
    let journal = Journal::new();
    let (analytics, count) = CountingAnalytics::new();
    let deps = DependenciesBuilder::new()
        .with_analytics(Arc::new(analytics))
        .build()
        .unwrap();
    let controller = context_with(deps, &journal);

    let trigger = Trigger::bind(
        vec![Effect::invoke(Navigate::to("/cart")), Effect::Notify(click("cart"))],
        ElementId::new(1),
        &controller,
    );
    drop(controller);

    assert!(trigger.fire().is_released());
    assert!(journal.is_empty());
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn test_notify_without_analytics_completes_silently() {
    let journal = Journal::new();
    let controller = context_with(default_dependencies(), &journal);

    let trigger = Trigger::bind(vec![Effect::Notify(screen("home"))], ElementId::new(1), &controller);

    match trigger.fire() {
        DispatchOutcome::Delivered(report) => assert_eq!(
            report.outcomes(),
            &[EffectOutcome::Skipped(SkipReason::NoAnalytics)]
        ),
        DispatchOutcome::Released => panic!("context is alive"),
    }
    assert!(journal.is_empty());
}

#[test]
fn test_detached_origin_skips_only_that_effect() {
    let journal = Journal::new();
    let deps = DependenciesBuilder::new()
        .with_analytics(Arc::new(RecordingAnalytics::with_journal(journal.clone())))
        .build()
        .unwrap();
    let controller = context_with(deps, &journal);
    let mount = MountPoint::detached();

    let trigger = Trigger::bind(
        vec![
            Effect::invoke(Alert {
                message: "hi".into(),
            }),
            Effect::Notify(click("alert")),
        ],
        mount.clone(),
        &controller,
    );

    let outcome = trigger.fire();
    assert_eq!(
        outcome.report().unwrap().outcomes(),
        &[
            EffectOutcome::Skipped(SkipReason::Detached),
            EffectOutcome::Notified,
        ]
    );
    assert_eq!(journal.entries(), vec![JournalEntry::Recorded(click("alert"))]);
}

#[test]
fn test_analytics_replaced_after_binding_is_used() {
    let journal = Journal::new();
    let deps = default_dependencies();
    let controller = context_with(Arc::clone(&deps), &journal);
    let trigger = Trigger::bind(vec![Effect::Notify(screen("home"))], ElementId::new(1), &controller);

    let (analytics, count) = CountingAnalytics::new();
    deps.replace_analytics(Some(Arc::new(analytics)));
    trigger.fire();
    trigger.fire();

    // No deduplication across fires.
    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[test]
fn test_actions_keep_their_concrete_type() {
    let effect = Effect::invoke(Navigate::to("/cart"));
    let Effect::Invoke(action) = effect else {
        panic!("expected an invoke effect");
    };

    assert!(action.is::<Navigate>());
    assert_eq!(
        action.downcast_ref::<Navigate>().map(|n| n.route.as_str()),
        Some("/cart")
    );
    assert!(action.downcast_ref::<Alert>().is_none());
}

#[test]
fn test_trigger_phase_is_forwarded() {
    let journal = Journal::new();
    let controller = context_with(default_dependencies(), &journal);
    let trigger = Trigger::bind(
        vec![Effect::invoke(Navigate::to("/a")), Effect::invoke(Navigate::to("/b"))],
        ElementId::new(5),
        &controller,
    )
    .with_phase("onFocus");

    trigger.fire();
    assert_eq!(controller.executed(), vec!["navigate", "navigate"]);
    assert!(journal.entries().iter().all(|entry| matches!(
        entry,
        JournalEntry::Executed { phase, .. } if phase == "onFocus"
    )));
}
