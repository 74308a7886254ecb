//! sitewall configuration surface.
//!
//! This crate wires the strict config schema, the compiled image-fetch
//! policy, build-time environment capture, and the frozen resolved-build
//! state into a cohesive layer. It is intended to be consumed by the build
//! pipeline and by integration tests.

pub mod config;
pub mod env;
pub mod policy;
pub mod resolved;
