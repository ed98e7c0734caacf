//! UI element identity and origin resolution.

use std::fmt;

/// Opaque identity of a live UI element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    /// Wrap a raw identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw identifier.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Resolves the element an interaction originated from.
///
/// Returns `None` while the element is not attached; a trigger treats that as
/// "skip the effects that need an origin", never as an error.
pub trait OriginProvider: Send + Sync {
    /// The currently attached element, if any.
    fn origin(&self) -> Option<ElementId>;
}

impl<F> OriginProvider for F
where
    F: Fn() -> Option<ElementId> + Send + Sync,
{
    fn origin(&self) -> Option<ElementId> {
        (self)()
    }
}

impl OriginProvider for ElementId {
    fn origin(&self) -> Option<ElementId> {
        Some(*self)
    }
}
