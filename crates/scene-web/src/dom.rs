use scene_core::Cursor;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Convert a JS exception into an `anyhow::Error`.
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{e:?}")
}

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

pub fn set_cursor(canvas: &web::HtmlCanvasElement, cursor: Cursor) {
    let value = match cursor {
        Cursor::Interactive => "pointer",
        Cursor::Default => "auto",
    };
    let _ = canvas.style().set_property("cursor", value);
}

pub fn toggle_visible(el: &web::HtmlElement) {
    let style = el.style();
    let hidden = style
        .get_property_value("display")
        .map(|d| d == "none")
        .unwrap_or(false);
    let _ = style.set_property("display", if hidden { "" } else { "none" });
}
