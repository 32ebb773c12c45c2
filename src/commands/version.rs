//! Version command implementation

use crate::descriptor::{DEFAULT_COMPONENT_VERSION, DEFAULT_PROVIDER, PLACEHOLDER_IMAGE_VERSION};
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("chart-harvest {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Descriptor defaults:");
    println!("  Component version: {DEFAULT_COMPONENT_VERSION}");
    println!("  Provider: {DEFAULT_PROVIDER}");
    println!("  Image placeholder version: {PLACEHOLDER_IMAGE_VERSION}");
    println!("  Build profile: {}", build_profile());

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
