//! Image reference scanning over a chart's templates.
//!
//! Templates are not valid YAML before rendering, so nothing here parses them.
//! Each line containing `image:` yields one [`ImageCandidate`] holding the raw text
//! after the marker. Whitespace, quotes, template expressions and trailing comments
//! are kept as found.

use std::fs;
use std::path::Path;

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::{Result, file_read_failed, templates_missing};

/// Template directory below the chart root
pub const TEMPLATES_DIR: &str = "templates";

const IMAGE_MARKER: &str = "image:";

/// Any template whose path contains this is skipped.
const EXCLUDED_PATH_PART: &str = "tests";

const TEMPLATE_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// One textual image match
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageCandidate {
    /// Base name of the template the match came from
    pub file: String,

    /// Everything after `image:` on the matching line
    pub image: String,
}

/// Scan `<chart_root>/templates` for image references, in file-name order.
pub fn scan_templates(chart_root: &Path) -> Result<Vec<ImageCandidate>> {
    let templates = chart_root.join(TEMPLATES_DIR);
    if !templates.is_dir() {
        return Err(templates_missing(templates.display().to_string()));
    }

    let mut candidates = Vec::new();
    for entry in WalkDir::new(&templates).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        // Links are not descended into, but a link to a file is read like one.
        if entry.file_type().is_dir() || !path.is_file() {
            continue;
        }

        let relative = path.strip_prefix(chart_root).unwrap_or(path);
        if is_excluded(path) {
            debug!(path = %path.display(), "skipping test template");
            continue;
        }
        if !is_template(path) {
            continue;
        }

        let content =
            fs::read(path).map_err(|e| file_read_failed(path.display().to_string(), e.to_string()))?;
        let file = entry.file_name().to_string_lossy().to_string();
        let found = scan_content(&file, &String::from_utf8_lossy(&content));
        debug!(path = %relative.display(), images = found.len(), "scanned template");
        candidates.extend(found);
    }

    info!(
        chart = %chart_root.display(),
        images = candidates.len(),
        "finished image scan"
    );
    Ok(candidates)
}

/// Find image references in one template's content.
pub fn scan_content(file: &str, content: &str) -> Vec<ImageCandidate> {
    content
        .split('\n')
        .filter_map(|line| {
            let at = line.find(IMAGE_MARKER)?;
            Some(ImageCandidate {
                file: file.to_string(),
                image: line[at + IMAGE_MARKER.len()..].to_string(),
            })
        })
        .collect()
}

/// Plain substring match on the full walked path, not path-segment aware:
/// `tests-values/`, `contests.yaml` and a chart stored below `tests/` are all skipped.
fn is_excluded(path: &Path) -> bool {
    path.to_string_lossy().contains(EXCLUDED_PATH_PART)
}

fn is_template(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| TEMPLATE_EXTENSIONS.contains(&ext))
}
