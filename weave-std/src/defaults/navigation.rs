//! Default navigation stack.

use parking_lot::Mutex;
use weave_core::ElementId;
use weave_core::contracts::{Navigation, NavigationRequest};

/// An in-memory route stack.
#[derive(Debug, Default)]
pub struct Navigator {
    stack: Mutex<Vec<String>>,
}

impl Navigator {
    /// An empty navigator.
    pub fn new() -> Self {
        Self::default()
    }

    /// A navigator starting at `route`.
    pub fn with_root(route: impl Into<String>) -> Self {
        Self {
            stack: Mutex::new(vec![route.into()]),
        }
    }

    /// The whole stack, bottom first.
    pub fn routes(&self) -> Vec<String> {
        self.stack.lock().clone()
    }
}

impl Navigation for Navigator {
    fn navigate(&self, request: &NavigationRequest, _origin: Option<ElementId>) {
        let mut stack = self.stack.lock();
        match request {
            NavigationRequest::Push(route) => stack.push(route.clone()),
            NavigationRequest::Pop => {
                stack.pop();
            }
            NavigationRequest::PopToRoot => stack.truncate(1),
            NavigationRequest::Reset(route) => {
                stack.clear();
                stack.push(route.clone());
            }
        }
    }

    fn current_route(&self) -> Option<String> {
        self.stack.lock().last().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_operations() {
        let navigator = Navigator::with_root("/home");
        navigator.navigate(&NavigationRequest::Push("/a".into()), None);
        navigator.navigate(&NavigationRequest::Push("/b".into()), None);
        assert_eq!(navigator.current_route().as_deref(), Some("/b"));

        navigator.navigate(&NavigationRequest::Pop, None);
        assert_eq!(navigator.current_route().as_deref(), Some("/a"));

        navigator.navigate(&NavigationRequest::PopToRoot, None);
        assert_eq!(navigator.routes(), vec!["/home".to_owned()]);

        navigator.navigate(&NavigationRequest::Reset("/login".into()), None);
        assert_eq!(navigator.routes(), vec!["/login".to_owned()]);
    }
}
