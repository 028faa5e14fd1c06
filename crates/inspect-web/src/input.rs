use glam::Vec2;
use web_sys as web;

/// Map client (CSS) coordinates to canvas backing-store pixels.
#[inline]
pub fn client_to_canvas_px(client: Vec2, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = client.x - rect.left() as f32;
    let y_css = client.y - rect.top() as f32;
    let w = (rect.width() as f32).max(1.0);
    let h = (rect.height() as f32).max(1.0);
    Vec2::new(
        (x_css / w) * canvas.width() as f32,
        (y_css / h) * canvas.height() as f32,
    )
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    client_to_canvas_px(Vec2::new(ev.client_x() as f32, ev.client_y() as f32), canvas)
}

#[inline]
pub fn touch_canvas_px(touch: &web::Touch, canvas: &web::HtmlCanvasElement) -> Vec2 {
    client_to_canvas_px(
        Vec2::new(touch.client_x() as f32, touch.client_y() as f32),
        canvas,
    )
}
