use std::time::Instant;

use glam::{Vec2, Vec3};
use inspect_core::{
    gallery, Camera, DisplayUpdate, FrameInput, FreeLook, InputCollector, PanelWiring, UiCommand,
    Viewer, Viewport, DEFAULT_EYE_HEIGHT,
};
use winit::event::{ElementState, Event, KeyEvent, TouchPhase, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowBuilder};

mod hud;
mod keys;
mod settings;

use hud::Hud;

struct App {
    window: Window,
    viewer: Viewer,
    look: FreeLook,
    camera: Camera,
    input: InputCollector,
    viewport: Viewport,
    cursor: Vec2,
    hud: Hud,
    out: Vec<DisplayUpdate>,
    last_frame: Instant,
}

impl App {
    fn new(window: Window) -> Self {
        let config = settings::load_config(std::env::vars());
        let sensitivity = config.free_look_sensitivity;
        // Every panel is represented in the title bar.
        let mut viewer = Viewer::new(config, PanelWiring::default());
        for spec in gallery::exhibits() {
            viewer.add_object(spec);
        }
        let size = window.inner_size();
        let viewport = Viewport::new(size.width.max(1) as f32, size.height.max(1) as f32);
        let mut camera = Camera::looking(Vec3::new(0.0, DEFAULT_EYE_HEIGHT, 0.0), Vec3::Z);
        camera.set_viewport(viewport);
        let mut app = Self {
            look: FreeLook::new(sensitivity, viewer.flag_reader()),
            viewer,
            camera,
            input: InputCollector::new(),
            viewport,
            cursor: Vec2::ZERO,
            hud: Hud::new(),
            out: Vec::new(),
            last_frame: Instant::now(),
            window,
        };
        app.viewer.start(&mut app.out);
        app.flush();
        app.window.set_title(&app.hud.title());
        app
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width.max(1) as f32, height.max(1) as f32);
        self.camera.set_viewport(self.viewport);
    }

    fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;

        let snapshot = self.input.take_snapshot();
        self.viewer.tick(
            FrameInput {
                input: &snapshot,
                camera: Some(&self.camera),
                viewport: self.viewport,
                dt,
            },
            &mut self.out,
        );
        if self
            .look
            .update(self.viewer.last_pointer(), self.viewer.gate(), self.viewport)
        {
            self.look.apply(&mut self.camera);
        }
        self.flush();
    }

    fn dispatch(&mut self, command: UiCommand) {
        self.viewer.dispatch(command, &mut self.out);
        self.flush();
    }

    fn flush(&mut self) {
        let mut changed = false;
        for update in self.out.drain(..) {
            log::debug!("[display] {:?}", update);
            changed |= self.hud.apply(&update);
        }
        if changed {
            let title = self.hud.title();
            log::info!("[hud] {}", title);
            self.window.set_title(&title);
        }
    }

    fn window_event(&mut self, event: WindowEvent) {
        match event {
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                self.input.mouse_moved(self.cursor);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = match button {
                    winit::event::MouseButton::Left => inspect_core::MouseButton::Primary,
                    winit::event::MouseButton::Right => inspect_core::MouseButton::Secondary,
                    _ => inspect_core::MouseButton::Other,
                };
                self.input
                    .mouse_button(button, state == ElementState::Pressed, self.cursor);
            }
            WindowEvent::Touch(touch) => {
                let pos = Vec2::new(touch.location.x as f32, touch.location.y as f32);
                match touch.phase {
                    TouchPhase::Started => self.input.touch_started(touch.id, pos),
                    TouchPhase::Moved => self.input.touch_moved(touch.id, pos),
                    TouchPhase::Ended => self.input.touch_ended(touch.id, pos),
                    TouchPhase::Cancelled => self.input.touch_cancelled(touch.id, pos),
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                if let Some(command) = keys::command_for_key(code) {
                    self.dispatch(command);
                }
            }
            WindowEvent::RedrawRequested => self.frame(),
            _ => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("inspect-native starting");

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(hud::APP_TITLE)
        .build(&event_loop)?;
    let mut app = App::new(window);

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);
        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => elwt.exit(),
            Event::WindowEvent { event, .. } => app.window_event(event),
            Event::AboutToWait => app.window.request_redraw(),
            _ => {}
        }
    })?;
    Ok(())
}
