//! Frozen per-build state.
//!
//! Resolution compiles the image policy, captures the ambient environment
//! exactly once, and freezes the output mode. The result is read-only for
//! the remainder of the build and for every artifact it produces; capture
//! strictly precedes artifact production, and policy compilation strictly
//! precedes any outbound fetch.

use sitewall_core::error::Result;
use sitewall_core::output::OutputMode;

use crate::config::BuildConfig;
use crate::env::EnvBindings;
use crate::policy::ImagePolicy;

/// Everything one build needs from the config, resolved and immutable.
#[derive(Debug)]
pub struct ResolvedBuild {
    policy: ImagePolicy,
    env: EnvBindings,
    output: OutputMode,
}

impl ResolvedBuild {
    /// Resolve against the real process environment.
    pub fn resolve(cfg: &BuildConfig) -> Result<Self> {
        Self::resolve_with_env(cfg, |key| std::env::var(key).ok())
    }

    /// Resolve with an explicit ambient lookup (tests, hermetic builds).
    pub fn resolve_with_env(
        cfg: &BuildConfig,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let policy = ImagePolicy::compile(&cfg.images)?;
        let env = EnvBindings::capture_from(&cfg.env, lookup);
        Ok(Self {
            policy,
            env,
            output: cfg.output,
        })
    }

    pub fn image_policy(&self) -> &ImagePolicy {
        &self.policy
    }

    pub fn env(&self) -> &EnvBindings {
        &self.env
    }

    pub fn output(&self) -> OutputMode {
        self.output
    }
}
