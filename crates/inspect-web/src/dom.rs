use crate::present::DomOp;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn has_element(document: &web::Document, element_id: &str) -> bool {
    document.get_element_by_id(element_id).is_some()
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] no #{} to attach a click handler to", element_id);
    }
}

/// Attach `handler` to every element carrying `data-<attribute>`, passing
/// the attribute value.
pub fn add_data_click_listeners(
    document: &web::Document,
    attribute: &str,
    handler: impl Fn(String) + Clone + 'static,
) {
    let selector = format!("[data-{}]", attribute);
    let Ok(nodes) = document.query_selector_all(&selector) else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let value = el
            .get_attribute(&format!("data-{}", attribute))
            .unwrap_or_default();
        let handler = handler.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(
            Box::new(move || handler(value.clone())) as Box<dyn FnMut()>
        );
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        if canvas.width() != w_px.max(1) || canvas.height() != h_px.max(1) {
            canvas.set_width(w_px.max(1));
            canvas.set_height(h_px.max(1));
        }
    }
}

fn html_element(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn apply(document: &web::Document, op: &DomOp) {
    match op {
        DomOp::SetText { id, text } => {
            if let Some(el) = document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }
        DomOp::SetVisible { id, visible } => {
            if let Some(el) = html_element(document, id) {
                let _ = el
                    .style()
                    .set_property("display", if *visible { "" } else { "none" });
            }
        }
        DomOp::SetBorderColor { id, css } => {
            if let Some(el) = html_element(document, id) {
                let _ = el.style().set_property("border-color", css);
            }
        }
    }
}
