//! fragnav library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod fetch;
pub mod runtime;
pub mod surface;

#[cfg(test)]
pub mod test_support;

/// Where the detail view is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Detail markup replaces the main container.
    #[default]
    InPlace,
    /// Detail markup opens in an overlay panel and locks page scroll.
    Overlay,
}
