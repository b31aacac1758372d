use thiserror::Error;

/// Central error type for the phone book application
#[derive(Error, Debug)]
pub enum PhoneBookError {
    // ============================================================================
    // Storage Errors
    // ============================================================================
    #[error("Failed to load from storage: {0}")]
    StorageLoadFailed(String),

    #[error("Failed to save to storage: {0}")]
    StorageSaveFailed(String),

    // ============================================================================
    // Repository Errors
    // ============================================================================
    #[error("Invalid record position {position}: directory holds {len} records")]
    InvalidPosition { position: usize, len: usize },

    #[error("Unknown search field: {0}")]
    UnknownSearchField(String),

    // ============================================================================
    // Generic/System Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// Implement conversion to String for display in the console loop
impl From<PhoneBookError> for String {
    fn from(error: PhoneBookError) -> Self {
        error.to_string()
    }
}

// Helper type alias for Results
pub type PhoneBookResult<T> = Result<T, PhoneBookError>;
