//! Command implementations for the chart-harvest CLI

pub mod completions;
pub mod generate;
pub mod version;
