use std::any::Any;
use std::sync::Arc;

/// Opaque handle to the host-supplied process state.
/// The registry stores and returns it without interpreting the contents;
/// identity is pointer identity, so clones compare equal to their source.
#[derive(Clone)]
pub struct ProcessContext {
    inner: Arc<dyn Any + Send + Sync>,
}

impl ProcessContext {
    /// Wrap host state in a handle. The host runtime constructs this once
    /// at startup and hands it to the registry.
    pub fn new<T: Any + Send + Sync>(state: T) -> Self {
        Self { inner: Arc::new(state) }
    }

    /// Recover the concrete host state. Only the host knows `T`; the
    /// registry never calls this.
    pub fn downcast_ref<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Referential equality: true iff both handles point at the same state.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for ProcessContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Contents are opaque; show only the identity.
        f.debug_struct("ProcessContext")
            .field("ptr", &Arc::as_ptr(&self.inner))
            .finish()
    }
}
