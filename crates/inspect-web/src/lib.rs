#![cfg(target_arch = "wasm32")]
use glam::Vec3;
use inspect_core::{
    gallery, Camera, FreeLook, InputCollector, PanelWiring, UiCommand, Viewer, ViewerConfig,
    DEFAULT_EYE_HEIGHT,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub mod bindings;
pub mod dom;
pub mod events;
pub mod frame;
pub mod input;
pub mod present;
pub mod profile;
pub mod render;

const CANVAS_ID: &str = "inspect-canvas";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("inspect-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx2d: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Keep the backing store at CSS size * devicePixelRatio.
    dom::sync_canvas_backing_size(&canvas);
    {
        let canvas_resize = canvas.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
            .ok();
        resize_closure.forget();
    }

    // Profile: touch probing plus ?profile=...&reticle=... overrides.
    let has_touch_start = js_sys::Reflect::has(&window, &JsValue::from_str("ontouchstart"))
        .unwrap_or(false);
    let caps = profile::capabilities(window.navigator().max_touch_points(), has_touch_start);
    let search = window.location().search().unwrap_or_default();
    let overrides = query_overrides(&search);
    let config = profile::resolve_config(caps, &overrides);
    log::info!("[init] touch={} overrides={:?}", caps.touch, overrides);

    let wiring = PanelWiring {
        normal: dom::has_element(&document, present::NORMAL_PANEL_ID),
        object: dom::has_element(&document, present::OBJECT_PANEL_ID),
        part_detail: dom::has_element(&document, present::PART_DETAIL_PANEL_ID),
        location: dom::has_element(&document, present::LOCATION_PANEL_ID),
    };

    let sensitivity = config.free_look_sensitivity;
    let mut viewer = Viewer::new(config, wiring);
    for spec in gallery::exhibits() {
        viewer.add_object(spec);
    }
    let look = FreeLook::new(sensitivity, viewer.flag_reader());
    let camera = Camera::looking(Vec3::new(0.0, DEFAULT_EYE_HEIGHT, 0.0), Vec3::Z);

    let input = Rc::new(RefCell::new(InputCollector::new()));
    let commands: events::CommandQueue = Rc::new(RefCell::new(Vec::new()));
    events::wire_pointer_input(&canvas, input.clone());
    events::wire_touch_input(&canvas, input.clone());
    events::wire_global_keydown(commands.clone());
    wire_buttons(&document, &commands);

    let mut frame_ctx = frame::FrameContext {
        viewer,
        look,
        camera,
        input,
        commands,
        canvas,
        document,
        ctx2d,
        last_instant: Instant::now(),
        out: Vec::new(),
    };
    frame_ctx.viewer.start(&mut frame_ctx.out);
    frame_ctx.flush();

    frame::start_loop(Rc::new(RefCell::new(frame_ctx)));
    Ok(())
}

/// Decoded `?key=value` pairs for the keys the viewer config understands.
fn query_overrides(search: &str) -> Vec<(String, String)> {
    let Ok(params) = web::UrlSearchParams::new_with_str(search) else {
        return Vec::new();
    };
    ViewerConfig::OVERRIDE_KEYS
        .iter()
        .filter_map(|key| params.get(key).map(|value| (key.to_string(), value)))
        .collect()
}

fn wire_buttons(document: &web::Document, commands: &events::CommandQueue) {
    let buttons = [
        ("object-back", UiCommand::ObjectBack),
        ("part-detail-back", UiCommand::PartDetailBack),
        ("clear-inspection", UiCommand::ClearInspection),
    ];
    for (id, command) in buttons {
        let queue = commands.clone();
        dom::add_click_listener(document, id, move || {
            queue.borrow_mut().push(command.clone());
        });
    }
    let queue = commands.clone();
    dom::add_data_click_listeners(document, "location", move |name| {
        queue.borrow_mut().push(UiCommand::ShowLocation(name));
    });
}
