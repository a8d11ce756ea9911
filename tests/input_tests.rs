// Host-side tests for pointer and wheel input helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
include!("../src/input.rs");

#[test]
fn drag_reports_deltas_only_while_active() {
    let mut drag = DragState::default();
    assert_eq!(drag.drag_to(10.0, 10.0), None);

    drag.begin(100.0, 50.0);
    assert_eq!(drag.drag_to(110.0, 45.0), Some([10.0, -5.0]));
    // Deltas are relative to the previous move, not the press.
    assert_eq!(drag.drag_to(110.0, 40.0), Some([0.0, -5.0]));

    drag.end();
    assert_eq!(drag.drag_to(200.0, 200.0), None);
}

#[test]
fn wheel_down_zooms_out_and_up_zooms_in() {
    assert!(wheel_zoom_factor(120.0) > 1.0);
    assert!(wheel_zoom_factor(-120.0) < 1.0);
    assert!((wheel_zoom_factor(0.0) - 1.0).abs() < 1e-6);
}

#[test]
fn wheel_factor_is_clamped_per_event() {
    let max = wheel_zoom_factor(constants::WHEEL_PIXELS_PER_DOUBLING as f64);
    assert!((max - 2.0).abs() < 1e-5);
    assert_eq!(wheel_zoom_factor(1.0e6), max);
    assert!((wheel_zoom_factor(-1.0e6) - 0.5).abs() < 1e-5);
}

#[test]
fn focused_button_keeps_its_activation_keys() {
    // At the choice scene Enter on a focused choice must click it, not advance.
    assert_eq!(key_trigger("Enter", false, true), None);
    assert_eq!(key_trigger(" ", false, true), None);
    assert_eq!(key_trigger("Enter", false, false), Some(Trigger::Advance));
    assert_eq!(key_trigger(" ", false, false), Some(Trigger::Advance));
}

#[test]
fn other_bindings_work_with_a_button_focused() {
    assert_eq!(key_trigger("b", false, true), Some(Trigger::ChoiceB));
    assert_eq!(key_trigger("r", false, true), Some(Trigger::Restart));
    assert_eq!(key_trigger("ArrowRight", false, true), Some(Trigger::Advance));
}

#[test]
fn held_keys_do_not_repeat_triggers() {
    assert_eq!(key_trigger("n", true, false), None);
    assert_eq!(key_trigger("x", false, false), None);
}
