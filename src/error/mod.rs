//! Error types and handling for chart-harvest
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`fs`]: File system errors (path cannot be stat'ed, read or written)
//! - [`archive`]: Chart archive extraction errors
//! - [`metadata`]: `Chart.yaml`, version resolution and template tree errors
//! - [`output`]: Descriptor rendering and writing errors

pub mod archive;
pub mod fs;
pub mod metadata;
pub mod output;

pub use archive::{chart_dir_missing, extract_failed};
pub use fs::{io_error, not_found as file_not_found, read_failed as file_read_failed};
pub use metadata::{
    chart_file_missing, chart_file_parse_failed, component_name_missing, templates_missing,
    version_unresolved,
};
pub use output::{render_failed, write_failed as output_write_failed};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for chart harvesting operations
#[derive(Error, Diagnostic, Debug)]
pub enum HarvestError {
    // File system errors
    #[error("Path not found: {path}")]
    #[diagnostic(
        code(chart_harvest::fs::not_found),
        help("Pass an existing chart directory or chart archive with --input")
    )]
    FileNotFound { path: String },

    #[error("Failed to read {path}: {reason}")]
    #[diagnostic(code(chart_harvest::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(chart_harvest::fs::io_error))]
    IoError { message: String },

    // Archive errors
    #[error("Failed to extract archive {path}: {reason}")]
    #[diagnostic(
        code(chart_harvest::archive::extract_failed),
        help("Chart archives must be tar files, optionally gzip or zstd compressed")
    )]
    ArchiveExtractFailed { path: String, reason: String },

    #[error("Chart folder '{chart_name}' not found in archive {path}")]
    #[diagnostic(
        code(chart_harvest::archive::chart_dir_missing),
        help("Use --chart-name to name the top-level folder inside the archive")
    )]
    ChartDirMissing { chart_name: String, path: String },

    // Metadata errors
    #[error("Chart.yaml not found at {path}")]
    #[diagnostic(code(chart_harvest::metadata::chart_file_missing))]
    ChartFileMissing { path: String },

    #[error("Failed to parse Chart.yaml at {path}: {reason}")]
    #[diagnostic(code(chart_harvest::metadata::chart_file_parse_failed))]
    ChartFileParseFailed { path: String, reason: String },

    #[error("Could not determine chart version for '{name}'")]
    #[diagnostic(
        code(chart_harvest::metadata::version_unresolved),
        help("Set either 'version' or 'appVersion' in Chart.yaml")
    )]
    VersionUnresolved { name: String },

    #[error("Templates directory not found at {path}")]
    #[diagnostic(code(chart_harvest::metadata::templates_missing))]
    TemplatesMissing { path: String },

    #[error("Component name must not be empty")]
    #[diagnostic(
        code(chart_harvest::metadata::component_name_missing),
        help("Pass a component name with --component, e.g. github.com/acme/my-component")
    )]
    ComponentNameMissing,

    // Output errors
    #[error("Failed to render component descriptor: {reason}")]
    #[diagnostic(code(chart_harvest::output::render_failed))]
    RenderFailed { reason: String },

    #[error("Failed to write component descriptor to {path}: {reason}")]
    #[diagnostic(code(chart_harvest::output::write_failed))]
    OutputWriteFailed { path: String, reason: String },
}

impl HarvestError {
    /// Whether this error belongs to the metadata domain (Chart.yaml,
    /// version resolution or missing templates).
    pub fn is_metadata(&self) -> bool {
        matches!(
            self,
            Self::ChartFileMissing { .. }
                | Self::ChartFileParseFailed { .. }
                | Self::VersionUnresolved { .. }
                | Self::TemplatesMissing { .. }
                | Self::ComponentNameMissing
        )
    }

    /// Whether this error belongs to the archive domain.
    pub fn is_archive(&self) -> bool {
        matches!(
            self,
            Self::ArchiveExtractFailed { .. } | Self::ChartDirMissing { .. }
        )
    }

    /// Whether this error is a plain IO failure.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound { .. } | Self::FileReadFailed { .. } | Self::IoError { .. }
        )
    }
}

impl From<std::io::Error> for HarvestError {
    fn from(err: std::io::Error) -> Self {
        HarvestError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<walkdir::Error> for HarvestError {
    fn from(err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "unknown".to_string());
        HarvestError::FileReadFailed {
            path,
            reason: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for HarvestError {
    fn from(err: serde_yaml::Error) -> Self {
        HarvestError::RenderFailed {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for HarvestError {
    fn from(err: serde_json::Error) -> Self {
        HarvestError::RenderFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, HarvestError>;
