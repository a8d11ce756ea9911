#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use story_core::{Presenter, Sequencer};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod presenter;
mod render;

use constants::CANVAS_ID;
use frame::SharedSequencer;
use presenter::DomPresenter;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, sequencer: &SharedSequencer) {
    let (w, h) = dom::sync_canvas_backing_size(canvas);
    sequencer.borrow_mut().resize(w, h);
    let canvas_resize = canvas.clone();
    let seq = sequencer.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_backing_size(&canvas_resize);
        seq.borrow_mut().resize(w, h);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sea-palace-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    // The module may be instantiated twice by some bundlers; only one story per page.
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = dom::required_element(&document, CANVAS_ID)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Missing scene data or page elements stop here, before anything is shown.
    let presenter = DomPresenter::new(&document)?;
    let sequencer: SharedSequencer = Rc::new(RefCell::new(Sequencer::new(
        story_core::story::sea_palace(),
        presenter,
    )?));
    {
        let mut seq = sequencer.borrow_mut();
        seq.presenter_mut().hide_all_panels();
        seq.start();
    }

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas, &sequencer);

    events::wire_story_buttons(&document, &sequencer)?;
    events::wire_global_keydown(sequencer.clone());
    events::wire_orbit_handlers(&canvas, &sequencer);

    // Scenes run (and accept input) even if the GPU never comes up.
    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        sequencer: sequencer.clone(),
        canvas: canvas.clone(),
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
