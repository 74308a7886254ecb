use std::collections::BTreeSet;

use serde::Deserialize;
use sitewall_core::error::{Result, SitewallError};
use sitewall_core::output::OutputMode;
use sitewall_core::pattern::{Protocol, RemotePattern};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    pub version: u32,

    #[serde(default)]
    pub images: ImagesSection,

    /// Environment keys to capture at build time.
    #[serde(default)]
    pub env: Vec<String>,

    #[serde(default)]
    pub output: OutputMode,
}

impl BuildConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SitewallError::UnsupportedVersion);
        }

        self.images.validate()?;

        let mut seen = BTreeSet::new();
        for key in &self.env {
            if key.is_empty() {
                return Err(SitewallError::InvalidConfig(
                    "env keys must not be empty".into(),
                ));
            }
            if !seen.insert(key.as_str()) {
                return Err(SitewallError::InvalidConfig(format!(
                    "duplicate env key: {key}"
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ImagesSection {
    /// Ordered allowlist entries. Order never affects matching (admission is
    /// an existential OR) but is preserved so diagnostics can name an entry
    /// by index.
    #[serde(default)]
    pub remote_patterns: Vec<RemotePatternEntry>,
}

impl ImagesSection {
    /// Compile every entry, tagging failures with the entry index.
    pub fn compile(&self) -> Result<Vec<RemotePattern>> {
        let mut patterns = Vec::with_capacity(self.remote_patterns.len());
        for (i, entry) in self.remote_patterns.iter().enumerate() {
            let p = entry.compile().map_err(|e| match e {
                SitewallError::InvalidPattern(msg) => SitewallError::InvalidPattern(format!(
                    "images.remote_patterns[{i}]: {msg}"
                )),
                other => other,
            })?;
            patterns.push(p);
        }
        Ok(patterns)
    }

    pub fn validate(&self) -> Result<()> {
        self.compile().map(|_| ())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemotePatternEntry {
    pub protocol: Protocol,
    pub hostname: String,
    #[serde(default)]
    pub port: Option<String>,
    #[serde(default)]
    pub pathname: Option<String>,
}

impl RemotePatternEntry {
    /// Compile into the matcher's form.
    pub fn compile(&self) -> Result<RemotePattern> {
        RemotePattern::compile(
            self.protocol,
            &self.hostname,
            self.port.as_deref(),
            self.pathname.as_deref(),
        )
    }
}
