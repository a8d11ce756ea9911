use crate::constants::MAX_FRAME_DT_MS;
use crate::presenter::DomPresenter;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use story_core::Sequencer;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedSequencer = Rc<RefCell<Sequencer<DomPresenter>>>;

pub struct FrameContext<'a> {
    pub sequencer: SharedSequencer,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).min(Duration::from_millis(MAX_FRAME_DT_MS));
        self.last_instant = now;

        let mut sequencer = self.sequencer.borrow_mut();
        sequencer.tick(dt);

        // Keep WebGPU surface sized to canvas backing size
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        let Some(scene) = sequencer.active_scene() else {
            return;
        };
        gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        if let Err(e) = gpu.render(scene) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
