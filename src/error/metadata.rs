//! Chart metadata errors

use super::HarvestError;

/// Creates a Chart.yaml missing error
pub fn chart_file_missing(path: impl Into<String>) -> HarvestError {
    HarvestError::ChartFileMissing { path: path.into() }
}

/// Creates a Chart.yaml parse failed error
pub fn chart_file_parse_failed(path: impl Into<String>, reason: impl Into<String>) -> HarvestError {
    HarvestError::ChartFileParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an error for a chart with neither `version` nor `appVersion`
pub fn version_unresolved(name: impl Into<String>) -> HarvestError {
    HarvestError::VersionUnresolved { name: name.into() }
}

/// Creates a templates directory missing error
pub fn templates_missing(path: impl Into<String>) -> HarvestError {
    HarvestError::TemplatesMissing { path: path.into() }
}

/// Creates an empty component name error
pub fn component_name_missing() -> HarvestError {
    HarvestError::ComponentNameMissing
}
