// Host-side checks on the page contract the web frontend relies on.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

fn element_ids() -> Vec<&'static str> {
    let mut ids = vec![
        CANVAS_ID,
        TITLE_UI_ID,
        NEXT_BUTTON_ID,
        CHOICE_BUTTONS_ID,
        ENDING_A_ID,
        ENDING_B_ID,
        CHOICE_A_ID,
        CHOICE_B_ID,
        OVERLAY_ID,
    ];
    ids.extend(RESTART_BUTTON_IDS);
    ids
}

#[test]
fn element_ids_are_unique_and_valid() {
    let ids = element_ids();
    for id in &ids {
        assert!(!id.is_empty());
        assert!(!id.contains(char::is_whitespace), "{id:?}");
    }
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), ids.len());
}

#[test]
fn display_styles_are_css_declarations() {
    for style in [DISPLAY_BLOCK, DISPLAY_FLEX, DISPLAY_NONE] {
        assert!(style.starts_with("display:"));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn input_tuning_is_sane() {
    assert!(WHEEL_PIXELS_PER_DOUBLING > 0.0);
    assert!(MAX_FRAME_DT_MS > 0 && MAX_FRAME_DT_MS <= 250);
}
