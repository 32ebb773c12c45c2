//! Test fixtures for building charts and chart archives on the fly.
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, write_chart, pack_chart};
//!
//! let temp = create_temp_dir();
//! let chart = write_chart(temp.path(), "mychart", "name: mychart\nversion: 1.0.0\n", &[
//!     ("templates/deployment.yaml", "  image: nginx:1.25\n"),
//! ]);
//! let archive = pack_chart(&chart, &temp.path().join("mychart.tgz"));
//! ```

#![allow(clippy::expect_used)]

use std::fs;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use tempfile::TempDir;

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(crate::temp::temp_dir_base()).expect("Failed to create temp directory")
}

/// Write a chart directory `<parent>/<name>` with the given Chart.yaml and files.
pub fn write_chart(parent: &Path, name: &str, chart_yaml: &str, files: &[(&str, &str)]) -> PathBuf {
    let root = parent.join(name);
    fs::create_dir_all(&root).expect("Failed to create chart directory");
    fs::write(root.join("Chart.yaml"), chart_yaml).expect("Failed to write Chart.yaml");
    for (rel, content) in files {
        let path = root.join(rel);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write chart file");
    }
    root
}

/// Pack `chart_root` as a gzip-compressed tar into `archive`, with the chart
/// directory name as the single top-level folder (like `helm package`).
pub fn pack_chart(chart_root: &Path, archive: &Path) -> PathBuf {
    let name = chart_root
        .file_name()
        .expect("chart root has a directory name");
    let file = fs::File::create(archive).expect("Failed to create archive file");
    let encoder = GzEncoder::new(file, Compression::fast());
    let mut builder = tar::Builder::new(encoder);
    builder
        .append_dir_all(name, chart_root)
        .expect("Failed to append chart to archive");
    builder
        .into_inner()
        .expect("Failed to finish tar stream")
        .finish()
        .expect("Failed to finish gzip stream");
    archive.to_path_buf()
}
