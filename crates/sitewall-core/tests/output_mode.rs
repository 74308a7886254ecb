//! Output-mode membership validation.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use sitewall_core::output::OutputMode;

#[test]
fn known_modes_parse() {
    assert_eq!("default".parse::<OutputMode>().unwrap(), OutputMode::Default);
    assert_eq!(
        "standalone".parse::<OutputMode>().unwrap(),
        OutputMode::Standalone
    );
    assert_eq!("export".parse::<OutputMode>().unwrap(), OutputMode::Export);
}

#[test]
fn unknown_mode_fails_naming_the_value() {
    let err = "bogus".parse::<OutputMode>().expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_OUTPUT_MODE");
    assert!(err.to_string().contains("bogus"), "got: {err}");
}

#[test]
fn default_mode_is_default() {
    assert_eq!(OutputMode::default(), OutputMode::Default);
    assert_eq!(OutputMode::Default.as_str(), "default");
}
