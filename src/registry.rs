use std::sync::OnceLock;

use tracing::debug;

use crate::context::ProcessContext;
use crate::errors::{RegistryError, Result};

/// The process-global cell. Two states: unset until the host runtime calls
/// `on_process_start`, then set for the remainder of the process. `OnceLock`
/// gives the write-once guarantee; reads after the set are lock-free.
static CONTEXT: OnceLock<ProcessContext> = OnceLock::new();

/// Startup hook. The host runtime calls this exactly once, before any other
/// component runs; it is the registry's only mutation point for the life of
/// the process. A second call is a protocol violation by the caller: the
/// stored handle is left untouched and `AlreadyInitialized` is returned.
pub fn on_process_start(ctx: ProcessContext) -> Result<()> {
    CONTEXT
        .set(ctx)
        .map_err(|_| RegistryError::AlreadyInitialized)?;
    debug!("process context initialized");
    Ok(())
}

/// The stored handle, or `None` before startup has completed. Most call
/// sites want `current`; this is for code that can genuinely run pre-init.
pub fn try_current() -> Option<&'static ProcessContext> {
    CONTEXT.get()
}

/// The stored handle. Non-blocking and safe to call from any thread.
///
/// Panics if called before `on_process_start` has completed — the registry
/// has no valid value to substitute, and returning a default would be
/// silently wrong. A pre-init read is a programming error, not a
/// recoverable condition.
pub fn current() -> &'static ProcessContext {
    try_current().expect("process context not initialized: on_process_start must run first")
}
