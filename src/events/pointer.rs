use crate::constants::*;
use crate::dom;
use crate::frame::SharedSequencer;
use crate::input::{self, DragState};
use std::cell::RefCell;
use std::rc::Rc;
use story_core::Trigger;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Buttons inside the scene panels. Each click is just a trigger; the
/// sequencer decides whether it does anything from the current scene.
pub fn wire_story_buttons(
    document: &web::Document,
    sequencer: &SharedSequencer,
) -> anyhow::Result<()> {
    let buttons = [
        (NEXT_BUTTON_ID, Trigger::Advance),
        (CHOICE_A_ID, Trigger::ChoiceA),
        (CHOICE_B_ID, Trigger::ChoiceB),
        (RESTART_BUTTON_IDS[0], Trigger::Restart),
        (RESTART_BUTTON_IDS[1], Trigger::Restart),
    ];
    for (id, trigger) in buttons {
        let seq = sequencer.clone();
        dom::add_click_listener(document, id, move || {
            let outcome = seq.borrow_mut().trigger(trigger);
            log::debug!("[ui] #{} {:?} -> {:?}", id, trigger, outcome);
        })?;
    }
    Ok(())
}

/// Drag to orbit the active scene's camera, wheel to zoom.
pub fn wire_orbit_handlers(canvas: &web::HtmlCanvasElement, sequencer: &SharedSequencer) {
    let drag = Rc::new(RefCell::new(DragState::default()));

    // pointerdown
    {
        let drag = drag.clone();
        let canvas_capture = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            drag.borrow_mut()
                .begin(ev.client_x() as f32, ev.client_y() as f32);
            _ = canvas_capture.set_pointer_capture(ev.pointer_id());
        }) as Box<dyn FnMut(_)>);
        _ = canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    // pointermove
    {
        let drag = drag.clone();
        let seq = sequencer.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let delta = drag
                .borrow_mut()
                .drag_to(ev.client_x() as f32, ev.client_y() as f32);
            if let Some([dx, dy]) = delta {
                seq.borrow_mut().orbit(dx, dy);
            }
        }) as Box<dyn FnMut(_)>);
        _ = canvas
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    // pointerup / pointercancel
    for name in ["pointerup", "pointercancel"] {
        let drag = drag.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            drag.borrow_mut().end();
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        closure.forget();
    }
    // wheel
    {
        let seq = sequencer.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            ev.prevent_default();
            seq.borrow_mut().zoom(input::wheel_zoom_factor(ev.delta_y()));
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
