//! Top-level facade crate for sitewall.
//!
//! Re-exports core types and the configuration layer so users can depend on a single crate.

pub mod core {
    pub use sitewall_core::*;
}

pub mod config {
    pub use sitewall_config::*;
}
