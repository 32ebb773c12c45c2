//! Common test utilities for chart-harvest integration tests

#![allow(dead_code, clippy::expect_used)]

use std::fs;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use tempfile::TempDir;

pub const CHART_YAML: &str = "apiVersion: v2\nname: mychart\nversion: 1.2.3\nappVersion: \"9.9\"\n";

pub const DEPLOYMENT: &str = "\
apiVersion: apps/v1
kind: Deployment
metadata:
  name: {{ include \"mychart.fullname\" . }}
spec:
  template:
    spec:
      containers:
        - name: app
          image: repo/app:1.0
        - name: sidecar
          image: \"{{ .Values.sidecar.repository }}:{{ .Values.sidecar.tag }}\"
";

pub const CRONJOB: &str = "\
apiVersion: batch/v1
kind: CronJob
spec:
  jobTemplate:
    spec:
      template:
        spec:
          containers:
            - name: backup
              image: {{ .Values.backup.image }} # override per env
";

pub const TEST_POD: &str = "\
apiVersion: v1
kind: Pod
spec:
  containers:
    - name: wget
      image: busybox
";

/// A scratch area holding a chart directory and, optionally, its archive
pub struct TestChart {
    pub temp: TempDir,
    pub root: PathBuf,
}

impl TestChart {
    /// Create `mychart/` with the standard Chart.yaml and templates
    pub fn new() -> Self {
        Self::with_files(
            CHART_YAML,
            &[
                ("templates/deployment.yaml", DEPLOYMENT),
                ("templates/cronjob.yml", CRONJOB),
                ("templates/tests/test-connection.yaml", TEST_POD),
                ("templates/_helpers.tpl", "{{- define \"image\" -}}image: x{{- end }}\n"),
                ("values.yaml", "image: ignored-outside-templates\n"),
            ],
        )
    }

    /// Create `mychart/` with the given Chart.yaml and files
    pub fn with_files(chart_yaml: &str, files: &[(&str, &str)]) -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().join("mychart");
        fs::create_dir_all(&root).expect("Failed to create chart directory");
        fs::write(root.join("Chart.yaml"), chart_yaml).expect("Failed to write Chart.yaml");
        for (rel, content) in files {
            let path = root.join(rel);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("Failed to create parent directory");
            }
            fs::write(&path, content).expect("Failed to write chart file");
        }
        Self { temp, root }
    }

    /// Package the chart as `<temp>/<file_name>` (gzip tar, `mychart/` top-level folder)
    pub fn archive(&self, file_name: &str) -> PathBuf {
        let path = self.temp.path().join(file_name);
        pack(&self.root, &path);
        path
    }

    pub fn path_str(&self) -> String {
        self.root.display().to_string()
    }
}

fn pack(root: &Path, archive: &Path) {
    let file = fs::File::create(archive).expect("Failed to create archive");
    let mut builder = tar::Builder::new(GzEncoder::new(file, Compression::default()));
    builder
        .append_dir_all(root.file_name().expect("chart dir name"), root)
        .expect("Failed to append chart");
    builder
        .into_inner()
        .expect("Failed to finish tar")
        .finish()
        .expect("Failed to finish gzip");
}

/// Count `image:` lines in non-test yaml templates, computed independently of the scanner
pub fn expected_image_lines(root: &Path) -> usize {
    walkdir::WalkDir::new(root.join("templates"))
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| !e.path().to_string_lossy().contains("tests"))
        .filter(|e| {
            matches!(
                e.path().extension().and_then(|x| x.to_str()),
                Some("yaml" | "yml")
            )
        })
        .map(|e| {
            fs::read_to_string(e.path())
                .expect("readable template")
                .lines()
                .filter(|l| l.contains("image:"))
                .count()
        })
        .sum()
}
