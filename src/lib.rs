pub mod errors;
pub mod context;
pub mod registry;  // the write-once process-global cell

use errors::Result;

pub use context::ProcessContext;
pub use errors::RegistryError;
pub use registry::{current, on_process_start, try_current};

/// Fallible view of the boundary accessor for callers that prefer a
/// `Result` over the fatal fault of [`registry::current`].
pub fn current_checked() -> Result<&'static ProcessContext> {
    registry::try_current().ok_or(RegistryError::Uninitialized)
}
