//! Remote-pattern compilation and allowlist matching.
//!
//! Patterns are compiled once at configuration-load time; matching is a pure
//! function over the compiled form and never fails. Admission is an
//! existential OR across patterns with no ranking, so an empty pattern list
//! denies everything.

pub mod host;
pub mod path;

use serde::Deserialize;
use url::Url;

use crate::error::{Result, SitewallError};

pub use host::HostPattern;
pub use path::PathGlob;

/// Scheme a pattern admits. Anything else is denied outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    /// String form used in config files and diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }

    /// Conventional default port for the scheme.
    pub fn default_port(self) -> u16 {
        match self {
            Protocol::Http => 80,
            Protocol::Https => 443,
        }
    }

    fn from_scheme(scheme: &str) -> Option<Self> {
        match scheme {
            "http" => Some(Protocol::Http),
            "https" => Some(Protocol::Https),
            _ => None,
        }
    }
}

/// Compiled allowlist entry for remote image fetches.
#[derive(Debug, Clone)]
pub struct RemotePattern {
    protocol: Protocol,
    host: HostPattern,
    port: Option<u16>,
    path: PathGlob,
}

impl RemotePattern {
    /// Compile a raw entry, validating every dimension.
    ///
    /// `port` absent means "protocol default port only"; `pathname` absent
    /// means "empty path only". All validation happens here so `matches`
    /// is total over compiled patterns.
    pub fn compile(
        protocol: Protocol,
        hostname: &str,
        port: Option<&str>,
        pathname: Option<&str>,
    ) -> Result<Self> {
        let host = HostPattern::compile(hostname)?;
        let path = PathGlob::compile(pathname)?;

        let port = match port {
            None => None,
            Some(p) => Some(p.parse::<u16>().map_err(|_| {
                SitewallError::InvalidPattern(format!("invalid port: {p}"))
            })?),
        };

        Ok(Self {
            protocol,
            host,
            port,
            path,
        })
    }

    /// Test a parsed absolute URL against this pattern.
    ///
    /// All four dimensions (protocol, host, port, path) must match. Query
    /// and fragment are ignored.
    pub fn matches(&self, url: &Url) -> bool {
        let Some(protocol) = Protocol::from_scheme(url.scheme()) else {
            return false;
        };
        if protocol != self.protocol {
            return false;
        }

        let Some(host) = url.host_str() else {
            return false;
        };
        if !self.host.matches(host) {
            return false;
        }

        // The url crate normalizes an explicit default port to absent, so
        // comparing effective ports implements "absent entry port matches
        // the default only".
        let Some(candidate_port) = url.port_or_known_default() else {
            return false;
        };
        let wanted_port = self.port.unwrap_or_else(|| self.protocol.default_port());
        if candidate_port != wanted_port {
            return false;
        }

        self.path.matches(url.path())
    }
}

/// Existential OR across patterns: admitted iff at least one matches.
pub fn is_allowed(url: &Url, patterns: &[RemotePattern]) -> bool {
    patterns.iter().any(|p| p.matches(url))
}
