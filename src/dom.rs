use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up an element that the host page must provide.
pub fn required_element(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> anyhow::Result<()> {
    let el = required_element(document, element_id)?;
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    closure.forget();
    Ok(())
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
    (canvas.width(), canvas.height())
}
