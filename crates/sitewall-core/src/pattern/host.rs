//! Hostname pattern compilation and matching.
//!
//! Supports exact hostnames and a single wildcard as the full leftmost label
//! (`*.example.com`). Wildcards anywhere else are rejected at compile time.

use crate::error::{Result, SitewallError};

/// Compiled hostname rule. Stored lowercased; the url crate lowercases
/// candidate hosts, so matching is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostPattern {
    /// Exact hostname.
    Exact(String),
    /// Wildcard suffix, stored with its leading dot (`.example.com`).
    /// Requires at least one label before the suffix.
    Suffix(String),
}

impl HostPattern {
    /// Compile a raw hostname string.
    pub fn compile(hostname: &str) -> Result<Self> {
        if hostname.is_empty() {
            return Err(SitewallError::InvalidPattern(
                "hostname must not be empty".into(),
            ));
        }

        let hostname = hostname.to_ascii_lowercase();

        if let Some(rest) = hostname.strip_prefix("*.") {
            if rest.is_empty() {
                return Err(SitewallError::InvalidPattern(
                    "wildcard hostname needs a suffix after `*.`".into(),
                ));
            }
            if rest.contains('*') {
                return Err(SitewallError::InvalidPattern(format!(
                    "hostname {hostname} has more than one wildcard"
                )));
            }
            return Ok(HostPattern::Suffix(format!(".{rest}")));
        }

        if hostname.contains('*') {
            return Err(SitewallError::InvalidPattern(format!(
                "hostname {hostname} has a wildcard outside the leftmost label"
            )));
        }

        Ok(HostPattern::Exact(hostname))
    }

    /// Test a candidate host (already lowercased by the URL parser).
    pub fn matches(&self, host: &str) -> bool {
        match self {
            HostPattern::Exact(h) => host == h,
            // Suffix carries its leading dot, so `example.com` itself can
            // never match `*.example.com` while `a.example.com` does.
            HostPattern::Suffix(suffix) => {
                host.len() > suffix.len() && host.ends_with(suffix.as_str())
            }
        }
    }
}
