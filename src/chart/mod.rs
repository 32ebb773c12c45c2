//! Chart metadata (Chart.yaml) extraction
//!
//! Only `name`, `version` and `appVersion` are read; every other key is ignored.

use std::fs;
use std::path::Path;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::error::{Result, chart_file_missing, chart_file_parse_failed, version_unresolved};

/// Manifest file expected at the chart root
pub const CHART_FILE: &str = "Chart.yaml";

/// The parts of Chart.yaml this tool cares about
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartFile {
    #[serde(default, deserialize_with = "scalar_string")]
    pub name: String,

    #[serde(default, deserialize_with = "scalar_string")]
    pub version: String,

    #[serde(default, deserialize_with = "scalar_string")]
    pub app_version: String,
}

/// Accept any YAML scalar as a string: charts often carry unquoted `appVersion: 1.16`.
fn scalar_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_yaml::Value::deserialize(deserializer)? {
        serde_yaml::Value::Null => Ok(String::new()),
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        other => Err(D::Error::custom(format!(
            "expected a scalar value, found {other:?}"
        ))),
    }
}

impl ChartFile {
    /// Parse Chart.yaml content; `origin` names the file in error messages.
    pub fn from_yaml(yaml: &str, origin: &str) -> Result<Self> {
        let chart: Self =
            serde_yaml::from_str(yaml).map_err(|e| chart_file_parse_failed(origin, e.to_string()))?;
        if chart.name.trim().is_empty() {
            return Err(chart_file_parse_failed(origin, "missing chart 'name'"));
        }
        Ok(chart)
    }

    /// `version` if set, otherwise `appVersion`.
    pub fn resolved_version(&self) -> Result<&str> {
        [self.version.as_str(), self.app_version.as_str()]
            .into_iter()
            .find(|v| !v.is_empty())
            .ok_or_else(|| version_unresolved(&self.name))
    }
}

/// Identity of a chart after version resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartMetadata {
    pub name: String,
    pub version: String,
}

/// Read `<chart_root>/Chart.yaml` and resolve the chart's name and version.
pub fn read_chart_metadata(chart_root: &Path) -> Result<ChartMetadata> {
    let path = chart_root.join(CHART_FILE);
    let origin = path.display().to_string();
    let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => chart_file_missing(&origin),
        _ => chart_file_parse_failed(&origin, e.to_string()),
    })?;

    let chart = ChartFile::from_yaml(&content, &origin)?;
    let version = chart.resolved_version()?.to_string();
    debug!(name = %chart.name, %version, "read chart metadata");

    Ok(ChartMetadata {
        name: chart.name,
        version,
    })
}
