//! Process-wide capability lifecycle.
//!
//! Kept to a single test: the capability is fixed once per process, and each
//! integration test file runs in its own process.

use standout_colorize::{
    capability, color_supported, gray, init_capability, palette256_supported, red, Capability,
};

#[test]
fn test_capability_is_fixed_once() {
    init_capability(Capability::BASIC).unwrap();

    assert_eq!(capability(), Capability::BASIC);
    assert!(color_supported());
    assert!(!palette256_supported());

    // Later installs are refused and report the value in place
    assert_eq!(
        init_capability(Capability::EXTENDED),
        Err(Capability::BASIC)
    );
    assert_eq!(capability(), Capability::BASIC);

    // Display and capability-dependent constructors follow the installed value
    assert_eq!(red("hi").to_string(), "\x1b[31mhi\x1b[0;39;49m");
    assert_eq!(gray("hi").fgcolor(), Some(0));
}
