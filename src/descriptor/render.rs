//! Rendering of component constructor documents.

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tracing::info;

use super::ComponentConstructor;
use crate::error::{Result, output_write_failed};

/// Serialization format of the generated document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl OutputFormat {
    /// File name used when writing the document into an output directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Yaml => "component-constructor.yaml",
            Self::Json => "component-constructor.json",
        }
    }
}

/// Render the document in the requested format.
pub fn render(constructor: &ComponentConstructor, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => Ok(serde_yaml::to_string(constructor)?),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(constructor)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Write an already rendered document into `dir`, creating the directory if needed.
pub fn write_to_dir(content: &str, dir: &Path, format: OutputFormat) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .map_err(|e| output_write_failed(dir.display().to_string(), e.to_string()))?;
    let target = dir.join(format.file_name());
    fs::write(&target, content)
        .map_err(|e| output_write_failed(target.display().to_string(), e.to_string()))?;
    info!(path = %target.display(), "wrote component constructor");
    Ok(target)
}
