//! chart-harvest - component descriptors from Helm charts
//!
//! Derives component-descriptor resources from a Helm chart supplied as a directory
//! or as a tar archive: one local resource for the chart itself, and one placeholder
//! image resource for every `image:` line found in the chart's templates.
//!
//! ```no_run
//! use chart_harvest::descriptor::{Component, ComponentIdentity};
//! use chart_harvest::harvest::{HarvestOptions, ResourceOptions, harvest};
//!
//! # fn main() -> chart_harvest::error::Result<()> {
//! let mut component = Component::new(ComponentIdentity::with_defaults("github.com/acme/app")?);
//! harvest(&mut component, &HarvestOptions::new(ResourceOptions::new("./mychart")))?;
//! # Ok(())
//! # }
//! ```

pub mod chart;
pub mod cli;
pub mod commands;
pub mod descriptor;
pub mod error;
pub mod harvest;
pub mod logging;
pub mod scanner;
pub mod source;
pub mod temp;

#[cfg(test)]
mod test_fixtures;
