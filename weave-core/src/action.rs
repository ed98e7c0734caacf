//! Application-defined actions.

use std::any::Any;
use std::fmt::Debug;

/// An application-defined action executed by an
/// [`ExecutionContext`](crate::ExecutionContext).
///
/// The core never interprets actions; it only routes them. Use
/// [`downcast_ref`](dyn Action::downcast_ref) on the executing side to recover
/// the concrete type.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug)]
/// struct SetField { key: String, value: String }
///
/// impl Action for SetField {
///     fn name(&self) -> &str { "setField" }
/// }
/// ```
pub trait Action: AsAny + Debug + Send + Sync {
    /// A short name for diagnostics.
    fn name(&self) -> &str;
}

/// Upcast to [`Any`], implemented for every `'static` type.
#[doc(hidden)]
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl dyn Action {
    /// Recover the concrete action type.
    pub fn downcast_ref<T: Action>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Whether the action is of type `T`.
    pub fn is<T: Action>(&self) -> bool {
        self.downcast_ref::<T>().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Alert(&'static str);

    impl Action for Alert {
        fn name(&self) -> &str {
            "alert"
        }
    }

    #[derive(Debug)]
    struct Noop;

    impl Action for Noop {
        fn name(&self) -> &str {
            "noop"
        }
    }

    #[test]
    fn test_downcast_recovers_concrete_type() {
        let action: Box<dyn Action> = Box::new(Alert("hi"));
        assert_eq!(action.downcast_ref::<Alert>().map(|a| a.0), Some("hi"));
        assert!(!action.is::<Noop>());
    }
}
