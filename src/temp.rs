//! Scratch space for chart archive extraction.
//!
//! Extraction directories are always created under an absolute base, so a relative
//! TMPDIR (e.g. `TMPDIR=tmp`) never makes us unpack charts into the working tree.

use std::env;
use std::path::PathBuf;

use tempfile::TempDir;
use tracing::debug;

use crate::error::{Result, io_error};

/// Prefix of every extraction directory, visible in `ls $TMPDIR`.
pub const EXTRACTION_PREFIX: &str = "chart-harvest-";

/// Returns an absolute directory suitable for creating temporary directories.
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        #[cfg(windows)]
        {
            env::var("TEMP")
                .or_else(|_| env::var("TMP"))
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
        }
        #[cfg(not(windows))]
        {
            PathBuf::from("/tmp")
        }
    }
}

/// Create a fresh, uniquely named extraction directory.
///
/// The directory is owned by the returned guard and removed when it is dropped,
/// on success and error paths alike.
pub fn extraction_dir() -> Result<TempDir> {
    let dir = tempfile::Builder::new()
        .prefix(EXTRACTION_PREFIX)
        .tempdir_in(temp_dir_base())
        .map_err(|e| io_error(format!("could not create temp directory: {e}")))?;
    debug!(path = %dir.path().display(), "created extraction directory");
    Ok(dir)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_base_is_absolute() {
        assert!(temp_dir_base().is_absolute());
    }

    #[test]
    fn test_extraction_dirs_are_unique() {
        let a = extraction_dir().unwrap();
        let b = extraction_dir().unwrap();
        assert_ne!(a.path(), b.path());
        let name = a.path().file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with(EXTRACTION_PREFIX));
    }

    #[test]
    fn test_extraction_dir_removed_on_drop() {
        let dir = extraction_dir().unwrap();
        let path = dir.path().to_path_buf();
        assert!(path.is_dir());
        drop(dir);
        assert!(!path.exists());
    }
}
