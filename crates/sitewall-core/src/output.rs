//! Output packaging mode.
//!
//! A closed enumeration consumed verbatim by the external packaging pipeline.
//! The only logic here is membership validation: an unknown value must fail
//! at configuration-load time with the offending value named.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::SitewallError;

/// Deployment packaging strategy selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum OutputMode {
    /// Framework-default output layout.
    #[default]
    Default,
    /// Self-contained server bundle.
    Standalone,
    /// Static export, no server.
    Export,
}

impl OutputMode {
    /// String form used in config files and diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputMode::Default => "default",
            OutputMode::Standalone => "standalone",
            OutputMode::Export => "export",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = SitewallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(OutputMode::Default),
            "standalone" => Ok(OutputMode::Standalone),
            "export" => Ok(OutputMode::Export),
            other => Err(SitewallError::InvalidOutputMode(format!(
                "{other} (expected default|standalone|export)"
            ))),
        }
    }
}

impl TryFrom<String> for OutputMode {
    type Error = SitewallError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
