//! Pattern validation failures must surface at compile (config-load) time.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use sitewall_core::pattern::{Protocol, RemotePattern};

fn compile_err(hostname: &str, port: Option<&str>, pathname: Option<&str>) -> String {
    let err = RemotePattern::compile(Protocol::Https, hostname, port, pathname)
        .expect_err("pattern must fail validation");
    assert_eq!(err.code().as_str(), "INVALID_PATTERN");
    err.to_string()
}

#[test]
fn empty_hostname_rejected() {
    let msg = compile_err("", None, None);
    assert!(msg.contains("hostname"), "got: {msg}");
}

#[test]
fn multiple_wildcards_rejected() {
    compile_err("*.*.example.com", None, None);
}

#[test]
fn wildcard_outside_leftmost_label_rejected() {
    compile_err("img.*.example.com", None, None);
    compile_err("*", None, None);
    compile_err("img*.example.com", None, None);
}

#[test]
fn bare_wildcard_prefix_rejected() {
    compile_err("*.", None, None);
}

#[test]
fn non_numeric_port_rejected() {
    let msg = compile_err("example.com", Some("https"), None);
    assert!(msg.contains("port"), "got: {msg}");
}

#[test]
fn out_of_range_port_rejected() {
    compile_err("example.com", Some("70000"), None);
}

#[test]
fn non_final_double_star_rejected() {
    let msg = compile_err("example.com", None, Some("/a/**/b"));
    assert!(msg.contains("**"), "got: {msg}");
}

#[test]
fn partial_segment_wildcard_rejected() {
    compile_err("example.com", None, Some("/photos/img*"));
}

#[test]
fn relative_pathname_rejected() {
    let msg = compile_err("example.com", None, Some("photos/**"));
    assert!(msg.contains('/'), "got: {msg}");
}

#[test]
fn valid_pattern_compiles() {
    RemotePattern::compile(
        Protocol::Https,
        "*.example.com",
        Some("8443"),
        Some("/photos/**"),
    )
    .expect("pattern must compile");
}
