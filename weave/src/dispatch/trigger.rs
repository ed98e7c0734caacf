//! Interaction bindings.

use super::delivery::{Delivery, DeliveryReport, DeliveryStrategy, SequentialDelivery};
use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, Weak};
use weave_core::{Effect, ExecutionContext, ON_PRESS, OriginProvider};

/// Result of firing a [`Trigger`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The execution context was gone; nothing ran.
    Released,
    /// The effects were delivered.
    Delivered(DeliveryReport),
}

impl DispatchOutcome {
    /// The delivery report, if the effects were delivered.
    pub fn report(&self) -> Option<&DeliveryReport> {
        match self {
            DispatchOutcome::Released => None,
            DispatchOutcome::Delivered(report) => Some(report),
        }
    }

    /// Whether the context was gone when the trigger fired.
    pub fn is_released(&self) -> bool {
        matches!(self, DispatchOutcome::Released)
    }
}

/// Binds one UI interaction to an ordered list of effects.
///
/// A trigger is created per element at render time and dropped with the
/// element. It holds its execution context weakly and never keeps it alive;
/// once the context is dropped, [`fire`](Trigger::fire) is a no-op.
///
/// # Example
///
/// ```rust,ignore
/// let trigger = Trigger::bind(
///     vec![Effect::invoke(Navigate::to("/cart")), Effect::notify(click)],
///     mount_point.clone(),
///     &controller,
/// );
///
/// // on tap
/// trigger.fire();
/// ```
pub struct Trigger<C: ?Sized, S = SequentialDelivery> {
    effects: Arc<[Effect]>,
    origin: Box<dyn OriginProvider>,
    phase: Cow<'static, str>,
    context: Weak<C>,
    strategy: S,
}

impl<C> Trigger<C>
where
    C: ExecutionContext + ?Sized,
{
    /// Bind `effects` to `context`, resolving the origin through `origin`.
    ///
    /// The phase defaults to [`ON_PRESS`].
    pub fn bind(
        effects: impl Into<Arc<[Effect]>>,
        origin: impl OriginProvider + 'static,
        context: &Arc<C>,
    ) -> Self {
        Self {
            effects: effects.into(),
            origin: Box::new(origin),
            phase: Cow::Borrowed(ON_PRESS),
            context: Arc::downgrade(context),
            strategy: SequentialDelivery,
        }
    }
}

impl<C: ?Sized, S> Trigger<C, S> {
    /// Use `phase` as the trigger phase name.
    pub fn with_phase(mut self, phase: impl Into<Cow<'static, str>>) -> Self {
        self.phase = phase.into();
        self
    }

    /// Deliver effects with `strategy`.
    pub fn with_strategy<S2>(self, strategy: S2) -> Trigger<C, S2> {
        Trigger {
            effects: self.effects,
            origin: self.origin,
            phase: self.phase,
            context: self.context,
            strategy,
        }
    }

    /// The bound effects, in delivery order.
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// The trigger phase name.
    pub fn phase(&self) -> &str {
        &self.phase
    }

    /// Whether the execution context is still alive.
    pub fn is_live(&self) -> bool {
        self.context.strong_count() > 0
    }
}

impl<C, S> Trigger<C, S>
where
    C: ExecutionContext + ?Sized,
    S: DeliveryStrategy,
{
    /// Run the bound effects against the execution context.
    ///
    /// Returns [`DispatchOutcome::Released`] without running anything if the
    /// context has been dropped. Otherwise every effect is delivered, in
    /// order; effects that cannot run (detached origin, no analytics) are
    /// skipped individually.
    pub fn fire(&self) -> DispatchOutcome {
        let Some(context) = self.context.upgrade() else {
            #[cfg(feature = "tracing")]
            tracing::debug!(phase = %self.phase, "execution context released, trigger ignored");
            return DispatchOutcome::Released;
        };

        let delivery = Delivery::new(&*context, &*self.origin, &self.phase);
        let report = self.strategy.deliver(&delivery, self.effects.iter());

        #[cfg(feature = "tracing")]
        tracing::trace!(
            phase = %self.phase,
            invoked = report.invoked(),
            notified = report.notified(),
            skipped = report.skipped(),
            "trigger fired"
        );

        DispatchOutcome::Delivered(report)
    }
}

impl<C: ?Sized, S: fmt::Debug> fmt::Debug for Trigger<C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trigger")
            .field("effects", &self.effects)
            .field("phase", &self.phase)
            .field("live", &self.is_live())
            .field("strategy", &self.strategy)
            .finish_non_exhaustive()
    }
}
