use crate::bindings;
use crate::input;
use inspect_core::{InputCollector, UiCommand};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type CommandQueue = Rc<RefCell<Vec<UiCommand>>>;

// Keyboard shortcuts feed the same queue as the panel buttons.
pub fn wire_global_keydown(commands: CommandQueue) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            if let Some(cmd) = bindings::command_for_key(&ev.key()) {
                log::debug!("[keys] {} -> {:?}", ev.key(), cmd);
                commands.borrow_mut().push(cmd);
                ev.prevent_default();
            }
        }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Mouse and pen input through pointer events. Touch pointers are skipped
/// here and handled by [`wire_touch_input`] so each contact keeps its id.
pub fn wire_pointer_input(canvas: &web::HtmlCanvasElement, collector: Rc<RefCell<InputCollector>>) {
    // pointermove
    {
        let collector = collector.clone();
        let canvas_m = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if ev.pointer_type() == "touch" {
                return;
            }
            let pos = input::pointer_canvas_px(&ev, &canvas_m);
            collector.borrow_mut().mouse_moved(pos);
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ = wnd
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // pointerdown
    {
        let collector = collector.clone();
        let canvas_d = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if ev.pointer_type() == "touch" {
                return;
            }
            let pos = input::pointer_canvas_px(&ev, &canvas_d);
            let button = bindings::mouse_button_from_dom(ev.button());
            collector.borrow_mut().mouse_button(button, true, pos);
            let _ = canvas_d.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerup: on the window so a release outside the canvas still ends the drag
    {
        let canvas_u = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if ev.pointer_type() == "touch" {
                return;
            }
            let pos = input::pointer_canvas_px(&ev, &canvas_u);
            let button = bindings::mouse_button_from_dom(ev.button());
            collector.borrow_mut().mouse_button(button, false, pos);
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ =
                wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // the secondary button is an input, not a context menu
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = canvas
            .add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[derive(Clone, Copy)]
enum TouchKind {
    Start,
    Move,
    End,
    Cancel,
}

pub fn wire_touch_input(canvas: &web::HtmlCanvasElement, collector: Rc<RefCell<InputCollector>>) {
    let kinds = [
        ("touchstart", TouchKind::Start),
        ("touchmove", TouchKind::Move),
        ("touchend", TouchKind::End),
        ("touchcancel", TouchKind::Cancel),
    ];
    for (name, kind) in kinds {
        let collector = collector.clone();
        let canvas_t = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            let touches = ev.changed_touches();
            let mut c = collector.borrow_mut();
            for i in 0..touches.length() {
                let Some(t) = touches.get(i) else {
                    continue;
                };
                let id = t.identifier() as u64;
                let pos = input::touch_canvas_px(&t, &canvas_t);
                match kind {
                    TouchKind::Start => c.touch_started(id, pos),
                    TouchKind::Move => c.touch_moved(id, pos),
                    TouchKind::End => c.touch_ended(id, pos),
                    TouchKind::Cancel => c.touch_cancelled(id, pos),
                }
            }
            // Suppress the emulated mouse events that would follow.
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
