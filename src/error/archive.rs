//! Chart archive errors

use super::HarvestError;

/// Creates an archive extraction failed error
pub fn extract_failed(path: impl Into<String>, reason: impl Into<String>) -> HarvestError {
    HarvestError::ArchiveExtractFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an error for an archive without the expected chart folder
pub fn chart_dir_missing(chart_name: impl Into<String>, path: impl Into<String>) -> HarvestError {
    HarvestError::ChartDirMissing {
        chart_name: chart_name.into(),
        path: path.into(),
    }
}
