//! Build-time environment capture.
//!
//! The ambient process environment is global mutable state; it is read
//! exactly once per build, behind [`EnvBindings::capture`], and the result is
//! threaded through the build as an immutable mapping. Nothing re-reads the
//! environment after capture, so a later environment change cannot diverge
//! from what was built.

use std::collections::BTreeMap;
use std::fmt;

/// Frozen build-time environment bindings.
///
/// A declared key absent from the ambient environment is preserved as `None`
/// ("declared but absent"), distinguishable from a key that was never
/// declared. There is no mutation API.
#[derive(Clone, PartialEq, Eq)]
pub struct EnvBindings {
    values: BTreeMap<String, Option<String>>,
}

impl EnvBindings {
    /// Capture the declared keys from the real process environment.
    pub fn capture(declared: &[String]) -> Self {
        // Non-unicode values are reported by std as an error; the capture
        // boundary only promises UTF-8 strings, so they resolve as absent.
        Self::capture_from(declared, |key| std::env::var(key).ok())
    }

    /// Capture from an explicit ambient lookup (tests, hermetic builds).
    ///
    /// Each declared key is looked up exactly once; duplicates keep the
    /// first resolution.
    pub fn capture_from(declared: &[String], lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut values = BTreeMap::new();
        for key in declared {
            values.entry(key.clone()).or_insert_with(|| lookup(key));
        }
        Self { values }
    }

    /// Whether the key was declared for capture.
    pub fn is_declared(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// The binding for a declared key: `None` if undeclared, `Some(None)` if
    /// declared but absent from the ambient environment.
    pub fn binding(&self, key: &str) -> Option<Option<&str>> {
        self.values.get(key).map(|v| v.as_deref())
    }

    /// The resolved value, flattening "undeclared" and "declared but absent".
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(|v| v.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for EnvBindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Values may be credentials; never print them.
        let mut m = f.debug_map();
        for (k, v) in &self.values {
            m.entry(k, &if v.is_some() { "<set>" } else { "<absent>" });
        }
        m.finish()
    }
}
