//! Event dispatch.
//!
//! A [`Trigger`] binds one UI interaction to an ordered list of
//! [`Effect`](weave_core::Effect)s. Firing it runs the effects in declaration
//! order against the execution context that owns the screen:
//!
//! - `Invoke(action)` resolves the origin element and hands the action to
//!   [`ExecutionContext::execute`](weave_core::ExecutionContext::execute).
//! - `Notify(record)` hands the record to the analytics capability of the
//!   context's dependencies.
//!
//! Neither failure mode is an error. A detached origin or a missing analytics
//! provider skips that effect only, and a released context turns the whole
//! firing into a no-op.

mod delivery;
mod trigger;

pub use delivery::{
    Delivery, DeliveryReport, DeliveryStrategy, EffectOutcome, SequentialDelivery, SkipReason,
};
pub use trigger::{DispatchOutcome, Trigger};
