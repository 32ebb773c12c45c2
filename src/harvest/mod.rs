//! Resource assembly: chart metadata and image matches become component resources.
//!
//! The chart resource always comes first, followed by one placeholder image resource
//! per match in scan order. Resources are appended only after every step of a call
//! has succeeded, so a failed call leaves the component untouched.

pub mod options;

pub use options::{HarvestOptions, ResourceOptions};

use tracing::{debug, info};

use crate::chart::{ChartMetadata, read_chart_metadata};
use crate::descriptor::{Component, HelmInput, OciArtifactAccess, Resource};
use crate::error::Result;
use crate::scanner::{ImageCandidate, scan_templates};
use crate::source::ChartSource;

/// What a `harvest` call appended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestReport {
    pub chart_name: String,
    pub chart_version: String,
    pub images: usize,
}

/// Chart resource for `meta`, recording the caller's original location as input path.
pub fn chart_resource(meta: ChartMetadata, opts: &ResourceOptions) -> Resource {
    let input = HelmInput::new(meta.version, opts.location_string());
    Resource::helm_chart(meta.name, input)
}

/// Placeholder image resources, numbered `image0`, `image1`, … in match order.
pub fn image_resources(candidates: &[ImageCandidate]) -> Vec<Resource> {
    candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| {
            Resource::image(
                index,
                OciArtifactAccess::placeholder(&candidate.image, &candidate.file),
            )
        })
        .collect()
}

/// Append the chart resource for the chart at `opts.location`.
pub fn add_helm_resource(component: &mut Component, opts: &ResourceOptions) -> Result<()> {
    let source = ChartSource::resolve(opts)?;
    let meta = read_chart_metadata(source.root())?;
    append(component, vec![chart_resource(meta, opts)]);
    Ok(())
}

/// Append one image resource per image reference found in the chart's templates.
///
/// Returns the number of resources appended.
pub fn add_image_resources(component: &mut Component, opts: &ResourceOptions) -> Result<usize> {
    let source = ChartSource::resolve(opts)?;
    let candidates = scan_templates(source.root())?;
    let resources = image_resources(&candidates);
    let count = resources.len();
    append(component, resources);
    Ok(count)
}

/// Resolve the input once, then append the chart resource and its image resources.
pub fn harvest(component: &mut Component, opts: &HarvestOptions) -> Result<HarvestReport> {
    let source = ChartSource::resolve(&opts.resource)?;
    let meta = read_chart_metadata(source.root())?;
    let candidates = if opts.include_images {
        scan_templates(source.root())?
    } else {
        Vec::new()
    };
    drop(source);

    let report = HarvestReport {
        chart_name: meta.name.clone(),
        chart_version: meta.version.clone(),
        images: candidates.len(),
    };

    let mut resources = Vec::with_capacity(1 + candidates.len());
    resources.push(chart_resource(meta, &opts.resource));
    resources.extend(image_resources(&candidates));
    append(component, resources);

    info!(
        chart = %report.chart_name,
        version = %report.chart_version,
        images = report.images,
        "harvested chart"
    );
    Ok(report)
}

fn append(component: &mut Component, resources: Vec<Resource>) {
    for resource in resources {
        debug!(
            name = %resource.name(),
            version = %resource.version(),
            resource_type = %resource.meta.resource_type,
            "adding resource"
        );
        component.push_resource(resource);
    }
}
