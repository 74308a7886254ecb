//! Build config loader (strict parsing).

pub mod schema;

use std::fs;

use sitewall_core::error::{Result, SitewallError};

pub use schema::{BuildConfig, ImagesSection, RemotePatternEntry};

pub fn load_from_file(path: &str) -> Result<BuildConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| SitewallError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<BuildConfig> {
    let cfg: BuildConfig = serde_yaml::from_str(s)
        .map_err(|e| SitewallError::InvalidConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    tracing::debug!(
        patterns = cfg.images.remote_patterns.len(),
        env_keys = cfg.env.len(),
        output = %cfg.output,
        "build config loaded"
    );
    Ok(cfg)
}
