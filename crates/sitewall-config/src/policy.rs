//! Compiled image-fetch policy.
//!
//! Construct once at build start from the raw config section, then share
//! freely: checks are `&self` with no interior mutability, so the image
//! subsystem may call [`ImagePolicy::is_allowed`] from arbitrarily many
//! concurrent requests without synchronization.

use url::Url;

use sitewall_core::error::Result;
use sitewall_core::pattern::{self, RemotePattern};

use crate::config::schema::ImagesSection;

/// Deny-by-default allowlist runtime for remote image fetches.
#[derive(Debug, Clone)]
pub struct ImagePolicy {
    patterns: Vec<RemotePattern>,
}

impl ImagePolicy {
    /// Compile the config section. Malformed entries fail here, at load
    /// time, so `is_allowed` is total.
    pub fn compile(images: &ImagesSection) -> Result<Self> {
        let patterns = images.compile()?;
        tracing::debug!(patterns = patterns.len(), "image policy compiled");
        Ok(Self { patterns })
    }

    /// Admission check for one outbound fetch. The caller owns the
    /// user-visible refusal on deny.
    pub fn is_allowed(&self, url: &Url) -> bool {
        let allowed = pattern::is_allowed(url, &self.patterns);
        if !allowed {
            tracing::debug!(%url, "remote image fetch denied");
        }
        allowed
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}
