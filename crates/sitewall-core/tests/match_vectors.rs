//! Remote-pattern match vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use url::Url;

use sitewall_core::pattern::is_allowed;

use vector_loader::{Expect, MatchVector};

fn load(name: &str) -> Vec<MatchVector> {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}

#[test]
fn match_vectors() {
    let files = ["wildcard_hosts.json", "ports.json", "path_globs.json"];

    for f in files {
        for v in load(f) {
            let pattern = v.pattern.compile();
            let url: Url = v.url.parse().expect("invalid url in test vector");

            let got = is_allowed(&url, std::slice::from_ref(&pattern));
            let want = v.expect == Expect::Allow;
            assert_eq!(got, want, "vector={} ({f})", v.description);

            // Pure function: repeated calls with identical input agree.
            let again = is_allowed(&url, std::slice::from_ref(&pattern));
            assert_eq!(got, again, "vector={} ({f}) not deterministic", v.description);
        }
    }
}

#[test]
fn empty_pattern_list_denies_everything() {
    let url: Url = "https://images.pexels.com/photos/1.jpg".parse().unwrap();
    assert!(!is_allowed(&url, &[]));
}

#[test]
fn any_matching_pattern_admits() {
    let deny = vector_loader::PatternData {
        protocol: sitewall_core::pattern::Protocol::Https,
        hostname: "other.example.com".into(),
        port: None,
        pathname: Some("/**".into()),
    }
    .compile();
    let allow = vector_loader::PatternData {
        protocol: sitewall_core::pattern::Protocol::Https,
        hostname: "images.pexels.com".into(),
        port: None,
        pathname: Some("/photos/**".into()),
    }
    .compile();

    let url: Url = "https://images.pexels.com/photos/1.jpg".parse().unwrap();
    assert!(is_allowed(&url, &[deny, allow]));
}
