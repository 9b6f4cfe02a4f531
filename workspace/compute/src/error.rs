use thiserror::Error;

/// Error types for the projection engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComputeError {
    /// A step of the projection left the representable decimal range
    #[error("Arithmetic overflow while computing {0}")]
    Overflow(&'static str),
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
