use std::fmt;

use serde::Deserialize;

use super::Config;

/// Settings for printing the quotient table.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub sink: SinkKind,
}

/// Where the table's characters go.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "clap_derive", derive(clap::ValueEnum))]
pub enum SinkKind {
    /// Standard output, one character at a time.
    #[default]
    #[serde(rename = "console")]
    #[cfg_attr(feature = "clap_derive", clap(name = "console"))]
    Console,

    /// Every character raised as a trap and serviced by the host handler.
    #[serde(rename = "trap")]
    #[cfg_attr(feature = "clap_derive", clap(name = "trap"))]
    Trap,
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkKind::Console => write!(f, "console"),
            SinkKind::Trap => write!(f, "trap"),
        }
    }
}

impl Config for RunConfig {
    const PREFIX: &'static str = "RUN";
}
