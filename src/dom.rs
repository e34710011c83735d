use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Create a fixed-position, pointer-transparent canvas layer appended to the
/// document body.
pub fn create_layer_canvas(
    document: &web::Document,
    id: &str,
    z_index: i32,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas = create_canvas(document, id)?;
    let style = format!(
        "position:fixed;top:0;left:0;width:100vw;height:100vh;\
         pointer-events:none;background:transparent;z-index:{z_index};"
    );
    _ = canvas.set_attribute("style", &style);
    Ok(canvas)
}

/// Create the small accent canvas pinned to the bottom-right corner.
pub fn create_corner_canvas(
    document: &web::Document,
    id: &str,
    z_index: i32,
    width_px: u32,
    height_px: u32,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas = create_canvas(document, id)?;
    let style = format!(
        "position:fixed;bottom:20px;right:20px;width:{width_px}px;height:{height_px}px;\
         pointer-events:none;background:transparent;border-radius:15px;z-index:{z_index};"
    );
    _ = canvas.set_attribute("style", &style);
    Ok(canvas)
}

fn create_canvas(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    use wasm_bindgen::JsCast;
    let el = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas failed: {e:?}"))?;
    el.set_id(id);
    let canvas: web::HtmlCanvasElement = el
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("not a canvas: {e:?}"))?;
    if let Some(body) = document.body() {
        _ = body.append_child(&canvas);
    }
    Ok(canvas)
}

/// Keep the canvas backing store in sync with its CSS size and the device
/// pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
