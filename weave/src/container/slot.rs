//! Capability slots.
//!
//! A slot owns the current instance of one capability. Reads are lock-free
//! loads; replacement is a single atomic store, so every reader that goes
//! through the slot sees the new instance on its next access.

use arc_swap::{ArcSwap, ArcSwapOption};
use std::sync::Arc;

/// Slot for a mandatory capability.
pub(crate) struct Slot<T: ?Sized> {
    // `ArcSwap` needs a sized pointee, hence the extra indirection.
    cell: ArcSwap<Arc<T>>,
}

impl<T: ?Sized> Slot<T> {
    pub(crate) fn new(value: Arc<T>) -> Self {
        Self {
            cell: ArcSwap::from_pointee(value),
        }
    }

    pub(crate) fn get(&self) -> Arc<T> {
        Arc::clone(&**self.cell.load())
    }

    pub(crate) fn replace(&self, value: Arc<T>) {
        self.cell.store(Arc::new(value));
    }
}

/// Slot for an optional capability.
pub(crate) struct OptionalSlot<T: ?Sized> {
    cell: ArcSwapOption<Arc<T>>,
}

impl<T: ?Sized> OptionalSlot<T> {
    pub(crate) fn new(value: Option<Arc<T>>) -> Self {
        Self {
            cell: ArcSwapOption::new(value.map(Arc::new)),
        }
    }

    pub(crate) fn get(&self) -> Option<Arc<T>> {
        self.cell.load().as_deref().cloned()
    }

    pub(crate) fn is_set(&self) -> bool {
        self.cell.load().is_some()
    }

    pub(crate) fn replace(&self, value: Option<Arc<T>>) {
        self.cell.store(value.map(Arc::new));
    }
}

type Decorator<T> = Box<dyn Fn(Arc<T>) -> Arc<T> + Send + Sync>;

/// Slot whose every write passes through a fixed decorator before storage.
///
/// The decorator is applied on construction and on each [`replace`], so a
/// replacement is decorated exactly like the initial value.
///
/// [`replace`]: DecoratedSlot::replace
pub(crate) struct DecoratedSlot<T: ?Sized> {
    slot: Slot<T>,
    decorate: Decorator<T>,
}

impl<T: ?Sized> DecoratedSlot<T> {
    pub(crate) fn new(
        value: Arc<T>,
        decorate: impl Fn(Arc<T>) -> Arc<T> + Send + Sync + 'static,
    ) -> Self {
        Self {
            slot: Slot::new(decorate(value)),
            decorate: Box::new(decorate),
        }
    }

    pub(crate) fn get(&self) -> Arc<T> {
        self.slot.get()
    }

    pub(crate) fn replace(&self, value: Arc<T>) {
        self.slot.replace((self.decorate)(value));
    }
}
