//! Error types for core module
//!
//! Provides custom error types for core functionality, currently the
//! persisted wallet-address record.

use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Persistence file I/O error
    #[error("persistence I/O error: {0}")]
    PersistenceIo(#[from] std::io::Error),

    /// Persistence serialization/deserialization error
    #[error("persistence serialization error: {0}")]
    PersistenceSerialization(#[from] serde_json::Error),
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
