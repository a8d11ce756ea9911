use crate::frame::SharedSequencer;
use crate::input;
use story_core::Trigger;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, sequencer: &SharedSequencer) {
    let on_button = ev
        .target()
        .is_some_and(|t| t.dyn_ref::<web::HtmlButtonElement>().is_some());
    let Some(trigger) = input::key_trigger(&ev.key(), ev.repeat(), on_button) else {
        return;
    };
    // Space would otherwise scroll the page.
    if trigger == Trigger::Advance {
        ev.prevent_default();
    }
    let outcome = sequencer.borrow_mut().trigger(trigger);
    log::debug!("[keys] {:?} -> {:?}", trigger, outcome);
}

pub fn wire_global_keydown(sequencer: SharedSequencer) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &sequencer);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
