// Host-side tests for DOM constants and shared tuning values.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use friction_core::*;

#[test]
fn every_style_list_ends_with_the_standard_property() {
    assert_eq!(TRANSITION_PROPERTIES.last(), Some(&"transition"));
    assert_eq!(TRANSFORM_PROPERTIES.last(), Some(&"transform"));
    assert_eq!(TRANSFORM_ORIGIN_PROPERTIES.last(), Some(&"transform-origin"));
    for prop in TRANSFORM_PROPERTIES.iter().chain(TRANSFORM_ORIGIN_PROPERTIES) {
        assert!(prop.contains("transform"), "{prop}");
    }
}

#[test]
fn touch_events_are_distinct() {
    let names = [EVENT_TOUCH_START, EVENT_TOUCH_MOVE, EVENT_TOUCH_END, EVENT_RESIZE];
    for (i, a) in names.iter().enumerate() {
        for b in &names[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn defaults_are_non_negative() {
    assert!(SAMPLE_REFRESH_MS > 0.0);
    assert!(DEFAULT_FLICK_DURATION_MS >= 0.0);
    assert!(DEFAULT_FLICK_THRESHOLD >= 0.0);
    assert!(DEFAULT_FRICTION >= 0.0);
    assert!(DEFAULT_MAX_ROTATION >= 0.0);
    assert!(DEFAULT_RETURN_DURATION_MS >= 0.0);
    // Velocity samples must be taken well inside a return animation.
    assert!(DEFAULT_RETURN_DURATION_MS > SAMPLE_REFRESH_MS);
}
