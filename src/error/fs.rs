//! File system errors

use super::HarvestError;

/// Creates a path not found error
pub fn not_found(path: impl Into<String>) -> HarvestError {
    HarvestError::FileNotFound { path: path.into() }
}

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> HarvestError {
    HarvestError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> HarvestError {
    HarvestError::IoError {
        message: message.into(),
    }
}
