//! The execution side of an interaction.

use crate::action::Action;
use crate::element::ElementId;
use crate::facet::Capabilities;
use std::sync::Arc;

/// Trigger phase name used for tap interactions.
pub const ON_PRESS: &str = "onPress";

/// The controller that owns a rendered screen and executes its actions.
///
/// Triggers hold their context weakly; when the context is gone, firing the
/// trigger does nothing.
pub trait ExecutionContext: Send + Sync {
    /// Execute `actions` for the trigger `phase`, originating at `origin`.
    fn execute(&self, actions: &[Arc<dyn Action>], phase: &str, origin: ElementId);

    /// The capabilities available to this context.
    fn dependencies(&self) -> &dyn Capabilities;
}
