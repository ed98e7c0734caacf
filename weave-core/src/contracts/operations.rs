//! Custom operations and the application-wide context.

use serde_json::Value;
use std::sync::Arc;

/// A named operation over dynamic arguments.
pub type Operation = Arc<dyn Fn(&[Value]) -> Value + Send + Sync>;

/// Named operation lookup and evaluation.
pub trait OperationsProvider: Send + Sync {
    /// Register (or replace) an operation.
    fn register(&self, name: &str, operation: Operation);

    /// Whether an operation named `name` exists.
    fn is_registered(&self, name: &str) -> bool;

    /// Evaluate `name` with `args`; `None` if no such operation exists.
    fn evaluate(&self, name: &str, args: &[Value]) -> Option<Value>;
}

/// Application-wide shared context values.
///
/// Paths are dot-separated; `None` addresses the root value.
pub trait GlobalContext: Send + Sync {
    /// Read the value at `path` ([`Value::Null`] when unset).
    fn get(&self, path: Option<&str>) -> Value;

    /// Write `value` at `path`.
    fn set(&self, value: Value, path: Option<&str>);

    /// Reset the value at `path`.
    fn clear(&self, path: Option<&str>);
}
