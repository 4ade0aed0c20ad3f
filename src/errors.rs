use thiserror::Error; // Import the `Error` derive macro from the `thiserror` crate

// Define an enum to represent registry contract violations
#[derive(Debug, Error)] // Automatically implement `Debug` and `Error` traits for the enum
pub enum RegistryError {
    // Variant for a second call to the startup hook; the stored handle is untouched
    #[error("process context already initialized")] // Custom error message formatting for this variant
    AlreadyInitialized,

    // Variant for a read attempted before the startup hook has completed
    #[error("process context not initialized")] // Custom error message formatting for this variant
    Uninitialized,
}

// Type alias for results that use `RegistryError` as the error type
pub type Result<T> = std::result::Result<T, RegistryError>;
