//! Effect delivery.

use std::fmt;
use weave_core::{Effect, ExecutionContext, OriginProvider};

/// Why an effect was not carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The origin element was not attached when the effect ran.
    Detached,
    /// No analytics provider was configured.
    NoAnalytics,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Detached => f.write_str("origin detached"),
            SkipReason::NoAnalytics => f.write_str("analytics not configured"),
        }
    }
}

/// What happened to a single effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectOutcome {
    /// The action was handed to the execution context.
    Invoked,
    /// The record was handed to the analytics provider.
    Notified,
    /// The effect was skipped.
    Skipped(SkipReason),
}

/// Per-effect outcomes of one delivery, in effect order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    outcomes: Vec<EffectOutcome>,
}

impl DeliveryReport {
    /// An empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the outcome of the next effect.
    pub fn record(&mut self, outcome: EffectOutcome) {
        self.outcomes.push(outcome);
    }

    /// All outcomes, in effect order.
    pub fn outcomes(&self) -> &[EffectOutcome] {
        &self.outcomes
    }

    /// Number of actions handed to the execution context.
    pub fn invoked(&self) -> usize {
        self.count(|o| matches!(o, EffectOutcome::Invoked))
    }

    /// Number of records handed to the analytics provider.
    pub fn notified(&self) -> usize {
        self.count(|o| matches!(o, EffectOutcome::Notified))
    }

    /// Number of skipped effects.
    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, EffectOutcome::Skipped(_)))
    }

    fn count(&self, predicate: impl Fn(&EffectOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| predicate(o)).count()
    }
}

/// Everything an effect needs to run: the live context, the origin and the
/// trigger phase.
pub struct Delivery<'a, C: ?Sized> {
    context: &'a C,
    origin: &'a dyn OriginProvider,
    phase: &'a str,
}

impl<'a, C> Delivery<'a, C>
where
    C: ExecutionContext + ?Sized,
{
    /// Bundle a delivery target.
    pub fn new(context: &'a C, origin: &'a dyn OriginProvider, phase: &'a str) -> Self {
        Self {
            context,
            origin,
            phase,
        }
    }

    /// The trigger phase.
    pub fn phase(&self) -> &str {
        self.phase
    }

    /// Run a single effect.
    ///
    /// The origin is resolved at this point, not when the trigger fired, and
    /// analytics is resolved through the context's dependencies, so a
    /// provider replaced on the container is picked up.
    pub fn run(&self, effect: &Effect) -> EffectOutcome {
        match effect {
            Effect::Invoke(action) => match self.origin.origin() {
                Some(origin) => {
                    self.context
                        .execute(std::slice::from_ref(action), self.phase, origin);
                    EffectOutcome::Invoked
                }
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(action = action.name(), "origin detached, skipping action");
                    EffectOutcome::Skipped(SkipReason::Detached)
                }
            },
            Effect::Notify(record) => match self.context.dependencies().analytics() {
                Some(analytics) => {
                    analytics.record(record);
                    EffectOutcome::Notified
                }
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(?record, "analytics not configured, skipping record");
                    EffectOutcome::Skipped(SkipReason::NoAnalytics)
                }
            },
        }
    }
}

/// Strategy for delivering a trigger's effects.
pub trait DeliveryStrategy: Send + Sync {
    /// Deliver `effects` to `delivery`, reporting the outcome of each.
    fn deliver<'e, C, I>(&self, delivery: &Delivery<'_, C>, effects: I) -> DeliveryReport
    where
        C: ExecutionContext + ?Sized,
        I: Iterator<Item = &'e Effect>;
}

/// Runs effects one by one, in declaration order.
///
/// A skipped effect never stops the effects after it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialDelivery;

impl DeliveryStrategy for SequentialDelivery {
    fn deliver<'e, C, I>(&self, delivery: &Delivery<'_, C>, effects: I) -> DeliveryReport
    where
        C: ExecutionContext + ?Sized,
        I: Iterator<Item = &'e Effect>,
    {
        let mut report = DeliveryReport::new();
        for effect in effects {
            report.record(delivery.run(effect));
        }
        report
    }
}
