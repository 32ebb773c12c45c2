//! Descriptor output errors

use super::HarvestError;

/// Creates a render failed error
pub fn render_failed(reason: impl Into<String>) -> HarvestError {
    HarvestError::RenderFailed {
        reason: reason.into(),
    }
}

/// Creates an output write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> HarvestError {
    HarvestError::OutputWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
