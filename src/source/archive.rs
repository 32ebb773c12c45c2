//! Chart archive extraction (tar, optionally gzip or zstd compressed).

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use tar::Archive;
use tracing::debug;

use crate::error::{Result, extract_failed, file_read_failed};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
const ZSTD_MAGIC: [u8; 4] = [0x28, 0xb5, 0x2f, 0xfd];

/// Compression wrapped around the tar stream, detected from the leading bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    Gzip,
    Zstd,
    None,
}

impl Compression {
    pub fn detect(head: &[u8]) -> Self {
        if head.starts_with(&GZIP_MAGIC) {
            Self::Gzip
        } else if head.starts_with(&ZSTD_MAGIC) {
            Self::Zstd
        } else {
            Self::None
        }
    }
}

/// Chart name implied by an archive's file name: the name minus its last extension.
///
/// `mychart-1.0.0.tgz` gives `mychart-1.0.0`, `mychart.tar.gz` gives `mychart.tar`.
pub fn chart_name_from_archive(archive: &Path) -> String {
    archive
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Unpack `archive` into `dest`.
///
/// Entries that would land outside `dest` are rejected by the tar reader.
pub fn extract(archive: &Path, dest: &Path) -> Result<()> {
    let origin = archive.display().to_string();
    let file = File::open(archive).map_err(|e| file_read_failed(&origin, e.to_string()))?;
    let mut reader = BufReader::new(file);
    let head = reader
        .fill_buf()
        .map_err(|e| file_read_failed(&origin, e.to_string()))?;
    let compression = Compression::detect(head);
    debug!(archive = %origin, ?compression, dest = %dest.display(), "extracting chart archive");

    let stream: Box<dyn Read> = match compression {
        Compression::Gzip => Box::new(GzDecoder::new(reader)),
        Compression::Zstd => Box::new(
            zstd::Decoder::with_buffer(reader)
                .map_err(|e| extract_failed(&origin, format!("zstd init: {e}")))?,
        ),
        Compression::None => Box::new(reader),
    };

    let mut tar = Archive::new(stream);
    tar.set_preserve_permissions(false);
    tar.set_overwrite(true);
    tar.unpack(dest)
        .map_err(|e| extract_failed(&origin, e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::HarvestError;
    use crate::test_fixtures::{create_temp_dir, pack_chart, write_chart};
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn test_detect_compression() {
        assert_eq!(Compression::detect(&[0x1f, 0x8b, 0x08]), Compression::Gzip);
        assert_eq!(
            Compression::detect(&[0x28, 0xb5, 0x2f, 0xfd, 0x00]),
            Compression::Zstd
        );
        assert_eq!(Compression::detect(b"mychart/"), Compression::None);
        assert_eq!(Compression::detect(&[]), Compression::None);
    }

    #[test]
    fn test_chart_name_strips_last_extension_only() {
        assert_eq!(chart_name_from_archive(Path::new("/x/mychart.tgz")), "mychart");
        assert_eq!(
            chart_name_from_archive(Path::new("mychart-1.0.0.tgz")),
            "mychart-1.0.0"
        );
        assert_eq!(
            chart_name_from_archive(Path::new("mychart.tar.gz")),
            "mychart.tar"
        );
        assert_eq!(chart_name_from_archive(Path::new("mychart")), "mychart");
    }

    #[test]
    fn test_extract_gzip_archive() {
        let temp = create_temp_dir();
        let chart = write_chart(
            temp.path(),
            "mychart",
            "name: mychart\nversion: 1.0.0\n",
            &[("templates/deployment.yaml", "image: nginx\n")],
        );
        let archive = pack_chart(&chart, &temp.path().join("mychart.tgz"));
        let dest = temp.path().join("out");
        fs::create_dir(&dest).unwrap();

        extract(&archive, &dest).unwrap();

        assert!(dest.join("mychart/Chart.yaml").is_file());
        assert_eq!(
            fs::read_to_string(dest.join("mychart/templates/deployment.yaml")).unwrap(),
            "image: nginx\n"
        );
    }

    #[test]
    fn test_extract_plain_tar() {
        let temp = create_temp_dir();
        let chart = write_chart(temp.path(), "plain", "name: plain\nversion: 1.0.0\n", &[]);
        let archive_path = temp.path().join("plain.tar");
        {
            let file = fs::File::create(&archive_path).unwrap();
            let mut builder = tar::Builder::new(file);
            builder.append_dir_all("plain", &chart).unwrap();
            builder.finish().unwrap();
        }
        let dest = temp.path().join("out");
        fs::create_dir(&dest).unwrap();

        extract(&archive_path, &dest).unwrap();
        assert!(dest.join("plain/Chart.yaml").is_file());
    }

    #[test]
    fn test_extract_zstd_archive() {
        let temp = create_temp_dir();
        let chart = write_chart(temp.path(), "zchart", "name: zchart\nversion: 1.0.0\n", &[]);
        let archive_path = temp.path().join("zchart.tar.zst");
        {
            let file = fs::File::create(&archive_path).unwrap();
            let encoder = zstd::Encoder::new(file, 3).unwrap().auto_finish();
            let mut builder = tar::Builder::new(encoder);
            builder.append_dir_all("zchart", &chart).unwrap();
            builder.finish().unwrap();
        }
        let dest = temp.path().join("out");
        fs::create_dir(&dest).unwrap();

        extract(&archive_path, &dest).unwrap();
        assert!(dest.join("zchart/Chart.yaml").is_file());
    }

    #[test]
    fn test_extract_garbage_fails() {
        let temp = create_temp_dir();
        let archive = temp.path().join("broken.tgz");
        fs::write(&archive, [0x1f, 0x8b, 0x00, 0x01, 0x02]).unwrap();
        let dest: PathBuf = temp.path().join("out");
        fs::create_dir(&dest).unwrap();

        let err = extract(&archive, &dest).unwrap_err();
        assert!(matches!(err, HarvestError::ArchiveExtractFailed { .. }));
        assert!(err.is_archive());
    }
}
