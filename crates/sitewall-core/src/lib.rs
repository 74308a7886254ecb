//! sitewall core: build-config primitives, allowlist matching, and error types.
//!
//! This crate defines the compiled remote-pattern model, the output-mode
//! enumeration, and the error surface shared by the config loader and any
//! build tooling that consumes it. It intentionally carries no config-format
//! or runtime dependencies so it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `SitewallError`/`Result` so build
//! processes fail with a named diagnostic instead of crashing.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod output;
pub mod pattern;

/// Shared result type.
pub use error::{Result, SitewallError};
