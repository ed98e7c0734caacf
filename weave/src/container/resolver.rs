//! The deferred container handle.
//!
//! Some capabilities need a view of the container to work, but they are built
//! while the container itself is still being assembled. They receive a
//! [`Resolver`] instead: a handle that is bound to the finished container as
//! the very last step of construction.
//!
//! Reading through an unbound resolver is a programming error. It panics
//! instead of handing out an empty or default value, so an initialization
//! order bug surfaces at its source rather than as corrupted state later.

use super::Dependencies;
use std::fmt;
use std::sync::{Arc, OnceLock, Weak};
use weave_core::WiringError;

/// A cloneable handle that resolves to the dependency container once bound.
///
/// The container is held weakly, so capabilities that keep a resolver do not
/// keep their own container alive.
///
/// `Resolver` implements every facet trait by forwarding to the bound
/// container, which lets defaults be written against the facets they need:
///
/// ```rust,ignore
/// let repository = DefaultRepository::new(resolver.clone());
/// // later, after binding:
/// repository.fetch_component("/home")?; // reads network_client() through the container
/// ```
#[derive(Clone, Default)]
pub struct Resolver {
    cell: Arc<OnceLock<Weak<Dependencies>>>,
}

impl Resolver {
    /// Create an unbound resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind this resolver (and every clone of it) to `container`.
    pub(crate) fn bind(&self, container: &Arc<Dependencies>) -> Result<(), WiringError> {
        self.cell
            .set(Arc::downgrade(container))
            .map_err(|_already| WiringError::AlreadyBound)
    }

    /// Whether construction has completed.
    pub fn is_bound(&self) -> bool {
        self.cell.get().is_some()
    }

    /// The bound container, or why it is not available.
    pub fn try_container(&self) -> Result<Arc<Dependencies>, WiringError> {
        let container = self.cell.get().ok_or(WiringError::Unbound)?;
        container.upgrade().ok_or(WiringError::Released)
    }

    /// The bound container.
    ///
    /// # Panics
    ///
    /// Panics if called before the container finished construction (e.g. from
    /// inside a capability's own constructor), or after the container has been
    /// dropped.
    pub fn container(&self) -> Arc<Dependencies> {
        match self.try_container() {
            Ok(container) => container,
            Err(e) => panic!("{e}: capabilities must only read the container lazily"),
        }
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.try_container() {
            Ok(_) => "bound",
            Err(WiringError::Unbound) => "unbound",
            Err(_) => "released",
        };
        f.debug_struct("Resolver").field("state", &state).finish()
    }
}
