//! Input resolution: turn a chart directory or chart archive into a chart root.
//!
//! Directories are used as they are. Archives are unpacked into a fresh extraction
//! directory which lives exactly as long as the returned [`ChartSource`]; dropping
//! it removes the directory, whichever way the caller's operation ended.

pub mod archive;

use std::fs;
use std::path::{Component, Path, PathBuf};

use tempfile::TempDir;
use tracing::{debug, warn};

use crate::error::{Result, chart_dir_missing, file_not_found, file_read_failed};
use crate::harvest::ResourceOptions;

pub use archive::{Compression, chart_name_from_archive};

/// Owned extraction directory, removed on drop.
#[derive(Debug)]
pub struct Extraction {
    dir: Option<TempDir>,
}

impl Extraction {
    fn new(dir: TempDir) -> Self {
        Self { dir: Some(dir) }
    }
}

impl Drop for Extraction {
    fn drop(&mut self) {
        if let Some(dir) = self.dir.take() {
            let path = dir.path().display().to_string();
            match dir.close() {
                Ok(()) => debug!(%path, "removed extraction directory"),
                Err(e) => warn!(%path, error = %e, "failed to remove extraction directory"),
            }
        }
    }
}

/// A chart ready to be read, plus whatever must be cleaned up afterwards
#[derive(Debug)]
pub enum ChartSource {
    /// Chart directory passed by the caller
    Directory { root: PathBuf },

    /// Chart unpacked from an archive into `<extraction>/<chart_name>`
    Archive {
        root: PathBuf,
        chart_name: String,
        extraction: Extraction,
    },
}

impl ChartSource {
    /// Resolve `opts.location` to a chart root.
    pub fn resolve(opts: &ResourceOptions) -> Result<Self> {
        let location = opts.location.as_path();
        let origin = location.display().to_string();
        let info = fs::metadata(location).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => file_not_found(&origin),
            _ => file_read_failed(&origin, e.to_string()),
        })?;

        if info.is_dir() {
            debug!(path = %origin, "using chart directory");
            return Ok(Self::Directory {
                root: location.to_path_buf(),
            });
        }

        Self::unpack(location, opts)
    }

    fn unpack(location: &Path, opts: &ResourceOptions) -> Result<Self> {
        let chart_name = opts
            .chart_name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| chart_name_from_archive(location));
        if !is_single_component(&chart_name) {
            return Err(chart_dir_missing(
                &chart_name,
                location.display().to_string(),
            ));
        }

        let dir = crate::temp::extraction_dir()?;
        let dest = dir.path().to_path_buf();
        let extraction = Extraction::new(dir);
        archive::extract(location, &dest)?;

        let root = dest.join(&chart_name);
        if !root.is_dir() {
            return Err(chart_dir_missing(
                &chart_name,
                location.display().to_string(),
            ));
        }
        debug!(chart = %chart_name, root = %root.display(), "resolved chart archive");

        Ok(Self::Archive {
            root,
            chart_name,
            extraction,
        })
    }

    /// Directory holding Chart.yaml and templates/.
    pub fn root(&self) -> &Path {
        match self {
            Self::Directory { root } | Self::Archive { root, .. } => root,
        }
    }

    pub fn is_archive(&self) -> bool {
        matches!(self, Self::Archive { .. })
    }

    /// Chart name used to locate the chart inside an archive.
    pub fn archive_chart_name(&self) -> Option<&str> {
        match self {
            Self::Archive { chart_name, .. } => Some(chart_name),
            Self::Directory { .. } => None,
        }
    }
}

/// The chart folder must sit directly inside the extraction directory.
fn is_single_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
