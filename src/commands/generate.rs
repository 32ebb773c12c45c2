//! Generate command implementation
//!
//! Builds the immutable request records from the parsed arguments, runs the
//! harvesting pipeline and prints the resulting component constructor to stdout.

use console::Style;
use tracing::debug;

use crate::cli::GenerateArgs;
use crate::descriptor::{
    Component, ComponentConstructor, ComponentIdentity, OutputFormat, render, write_to_dir,
};
use crate::error::Result;
use crate::harvest::{self, HarvestOptions, HarvestReport, ResourceOptions};

/// Everything the generate command needs, fixed once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub identity: ComponentIdentity,
    pub harvest: HarvestOptions,
    pub output_dir: Option<std::path::PathBuf>,
    pub format: OutputFormat,
}

impl GenerateRequest {
    pub fn from_args(args: GenerateArgs) -> Result<Self> {
        let identity = ComponentIdentity::new(args.component, args.version, args.provider)?;

        let mut resource = ResourceOptions::new(args.input);
        if let Some(name) = args.chart_name {
            resource = resource.with_chart_name(name);
        }
        let mut harvest = HarvestOptions::new(resource);
        if args.skip_images {
            harvest = harvest.skip_images();
        }

        Ok(Self {
            identity,
            harvest,
            output_dir: args.output,
            format: args.format,
        })
    }
}

/// Run the pipeline and render the document; nothing is printed or written here.
pub fn generate(request: &GenerateRequest) -> Result<(String, HarvestReport)> {
    let mut component = Component::new(request.identity.clone());
    let report = harvest::harvest(&mut component, &request.harvest)?;
    let document = render(
        &ComponentConstructor::new(vec![component]),
        request.format,
    )?;
    Ok((document, report))
}

/// Run generate command
pub fn run(args: GenerateArgs, verbose: bool) -> Result<()> {
    let request = GenerateRequest::from_args(args)?;
    debug!(?request, "generate request");

    let (document, report) = generate(&request)?;

    if let Some(dir) = &request.output_dir {
        let target = write_to_dir(&document, dir, request.format)?;
        if verbose {
            eprintln!(
                "{} {}",
                Style::new().green().bold().apply_to("Wrote"),
                target.display()
            );
        }
    }

    if verbose {
        print_summary(&report);
    }

    print!("{document}");
    Ok(())
}

fn print_summary(report: &HarvestReport) {
    let label = Style::new().cyan().bold();
    eprintln!(
        "{} {} {}",
        label.apply_to("Chart:"),
        report.chart_name,
        report.chart_version
    );
    eprintln!("{} {}", label.apply_to("Images:"), report.images);
    if report.images > 0 {
        eprintln!(
            "{}",
            Style::new()
                .yellow()
                .apply_to("Replace every image placeholder with a resolved image reference.")
        );
    }
}
