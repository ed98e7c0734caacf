//! Effects run when a trigger fires.

use crate::action::Action;
use crate::contracts::AnalyticsRecord;
use std::sync::Arc;

/// One unit of work performed when a trigger fires.
#[derive(Debug, Clone)]
pub enum Effect {
    /// Execute an action through the trigger's execution context.
    Invoke(Arc<dyn Action>),
    /// Report an event to the analytics capability, if one is configured.
    Notify(AnalyticsRecord),
}

/// Discriminant of an [`Effect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// [`Effect::Invoke`]
    Invoke,
    /// [`Effect::Notify`]
    Notify,
}

impl Effect {
    /// An [`Effect::Invoke`] for `action`.
    pub fn invoke<A: Action>(action: A) -> Self {
        Effect::Invoke(Arc::new(action))
    }

    /// An [`Effect::Notify`] for `record`.
    pub fn notify(record: impl Into<AnalyticsRecord>) -> Self {
        Effect::Notify(record.into())
    }

    /// The kind of this effect.
    pub fn kind(&self) -> EffectKind {
        match self {
            Effect::Invoke(_) => EffectKind::Invoke,
            Effect::Notify(_) => EffectKind::Notify,
        }
    }
}

impl From<AnalyticsRecord> for Effect {
    fn from(record: AnalyticsRecord) -> Self {
        Effect::Notify(record)
    }
}
