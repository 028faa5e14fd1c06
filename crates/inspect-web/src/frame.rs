use crate::dom;
use crate::events::CommandQueue;
use crate::present;
use crate::render;
use inspect_core::{
    Camera, DisplayUpdate, FrameInput, FreeLook, InputCollector, Viewer, Viewport,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub viewer: Viewer,
    pub look: FreeLook,
    pub camera: Camera,
    pub input: Rc<RefCell<InputCollector>>,
    pub commands: CommandQueue,

    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub ctx2d: web::CanvasRenderingContext2d,

    pub last_instant: Instant,
    pub out: Vec<DisplayUpdate>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        dom::sync_canvas_backing_size(&self.canvas);
        let viewport = Viewport::new(self.canvas.width() as f32, self.canvas.height() as f32);
        self.camera.set_viewport(viewport);

        let snapshot = self.input.borrow_mut().take_snapshot();
        self.viewer.tick(
            FrameInput {
                input: &snapshot,
                camera: Some(&self.camera),
                viewport,
                dt,
            },
            &mut self.out,
        );

        // The viewer has already raised or lowered the inspection flag for
        // this frame, so free look sees the current state.
        if self
            .look
            .update(self.viewer.last_pointer(), self.viewer.gate(), viewport)
        {
            self.look.apply(&mut self.camera);
        }

        let commands = std::mem::take(&mut *self.commands.borrow_mut());
        for command in commands {
            self.viewer.dispatch(command, &mut self.out);
        }

        self.flush();
        render::draw(&self.ctx2d, &self.viewer, &self.camera, viewport);
    }

    /// Apply queued display updates to the DOM in order.
    pub fn flush(&mut self) {
        for update in self.out.drain(..) {
            for op in present::dom_ops(&update) {
                dom::apply(&self.document, &op);
            }
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    let Some(w) = web::window() else {
        return;
    };
    let first = tick.borrow();
    if let Some(cb) = first.as_ref() {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
