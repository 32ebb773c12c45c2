use clap::Parser;
use std::path::PathBuf;

use crate::descriptor::{DEFAULT_COMPONENT_VERSION, DEFAULT_PROVIDER, OutputFormat};

/// Arguments for the generate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  From a chart directory:\n    chart-harvest generate -i ./mychart -c github.com/acme/mychart\n\n\
                  From an archive whose folder differs from the file name:\n    chart-harvest generate -i mychart-1.2.3.tgz -n mychart -c github.com/acme/mychart\n\n\
                  Chart resource only:\n    chart-harvest generate -i ./mychart -c github.com/acme/mychart --skip-images")]
pub struct GenerateArgs {
    /// Helm chart directory or chart archive (.tgz, .tar, .tar.zst)
    #[arg(long, short = 'i', env = "CHART_HARVEST_INPUT")]
    pub input: PathBuf,

    /// Folder name of the chart inside the archive (defaults to the archive name without extension)
    #[arg(long, short = 'n', env = "CHART_HARVEST_CHART_NAME")]
    pub chart_name: Option<String>,

    /// Component name, e.g. github.com/acme/mychart
    #[arg(long, short = 'c', env = "CHART_HARVEST_COMPONENT")]
    pub component: String,

    /// Component version
    #[arg(long, short = 'r', env = "CHART_HARVEST_VERSION", default_value = DEFAULT_COMPONENT_VERSION)]
    pub version: String,

    /// Component provider
    #[arg(long, short = 'p', env = "CHART_HARVEST_PROVIDER", default_value = DEFAULT_PROVIDER)]
    pub provider: String,

    /// Directory to also write the component constructor into
    #[arg(long, short = 'o', env = "CHART_HARVEST_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', env = "CHART_HARVEST_FORMAT", value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,

    /// Only add the chart resource, do not scan templates for images
    #[arg(long)]
    pub skip_images: bool,
}
