//! Shared error type across sitewall crates.

use thiserror::Error;

/// Stable diagnostic codes surfaced by build tooling (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagCode {
    /// Schema or cross-field validation failure.
    InvalidConfig,
    /// Malformed remote-pattern entry.
    InvalidPattern,
    /// Output-mode value outside the closed enumeration.
    InvalidOutputMode,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal error (I/O and other infrastructure failures).
    Internal,
}

impl DiagCode {
    /// String representation used in build diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            DiagCode::InvalidConfig => "INVALID_CONFIG",
            DiagCode::InvalidPattern => "INVALID_PATTERN",
            DiagCode::InvalidOutputMode => "INVALID_OUTPUT_MODE",
            DiagCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            DiagCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SitewallError>;

/// Unified error type used by core and config.
///
/// Note what is absent: a denied allowlist match is not an error (the matcher
/// returns `false`), and a declared-but-unset environment key is not an error
/// (it resolves to an explicit `None`). Every variant here is fatal at
/// configuration-load time.
#[derive(Debug, Error)]
pub enum SitewallError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("invalid remote pattern: {0}")]
    InvalidPattern(String),
    #[error("invalid output mode: {0}")]
    InvalidOutputMode(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl SitewallError {
    /// Map internal error to a stable diagnostic code.
    pub fn code(&self) -> DiagCode {
        match self {
            SitewallError::InvalidConfig(_) => DiagCode::InvalidConfig,
            SitewallError::InvalidPattern(_) => DiagCode::InvalidPattern,
            SitewallError::InvalidOutputMode(_) => DiagCode::InvalidOutputMode,
            SitewallError::UnsupportedVersion => DiagCode::UnsupportedVersion,
            SitewallError::Internal(_) => DiagCode::Internal,
        }
    }
}
