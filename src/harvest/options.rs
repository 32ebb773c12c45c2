//! Immutable request parameters for a harvesting run.

use std::path::PathBuf;

/// Where to find the chart, and how it is named inside an archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceOptions {
    /// Chart directory or chart archive
    pub location: PathBuf,

    /// Top-level folder inside an archive; defaults to the archive name minus its extension
    pub chart_name: Option<String>,
}

impl ResourceOptions {
    pub fn new(location: impl Into<PathBuf>) -> Self {
        Self {
            location: location.into(),
            chart_name: None,
        }
    }

    #[must_use]
    pub fn with_chart_name(mut self, chart_name: impl Into<String>) -> Self {
        self.chart_name = Some(chart_name.into());
        self
    }

    /// The location exactly as the caller gave it, for recording in the descriptor.
    pub fn location_string(&self) -> String {
        self.location.display().to_string()
    }
}

/// Everything one `harvest` call needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestOptions {
    pub resource: ResourceOptions,

    /// Scan templates for images after reading the chart metadata
    pub include_images: bool,
}

impl HarvestOptions {
    pub fn new(resource: ResourceOptions) -> Self {
        Self {
            resource,
            include_images: true,
        }
    }

    #[must_use]
    pub fn skip_images(mut self) -> Self {
        self.include_images = false;
        self
    }
}
