//! Per-frame orchestration of the interaction components.
//!
//! A frontend owns one [`Viewer`], calls [`Viewer::tick`] once per rendered
//! frame and routes button presses through [`Viewer::dispatch`]. Within a
//! frame the order is fixed: pointer unification, reticle gate, target
//! resolution, then at most one session transition. Errors from the
//! components are logged here and never leave the frame.

use crate::camera::Camera;
use crate::config::{AimMode, ViewerConfig};
use crate::detail::{DetailPointRegistry, PointId};
use crate::display::DisplayUpdate;
use crate::error::InteractionError;
use crate::flag::InspectionFlagReader;
use crate::panels::{BackAction, ObjectPanelInfo, PanelCoordinator, PanelState, PanelWiring};
use crate::pointer::{DragTracker, InputSnapshot, PointerEvent, PointerPhase, PointerUnifier};
use crate::ray::Ray;
use crate::resolver::{ResolvedTarget, TargetResolver};
use crate::reticle::{ReticleGate, Viewport};
use crate::scene::{ObjectSpec, Scene, SubjectId};
use crate::session::{InspectionSession, SessionSettings};

/// Everything a frame needs from the outside world.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput<'a> {
    pub input: &'a InputSnapshot,
    /// `None` while no camera is available; picking is suspended then.
    pub camera: Option<&'a Camera>,
    pub viewport: Viewport,
    pub dt: f32,
}

/// UI buttons, dispatched explicitly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiCommand {
    /// Context-sensitive back from whichever panel is showing.
    Back,
    /// Back button on the object panel: ends the inspection.
    ObjectBack,
    /// Back button on the part detail panel: returns to the object panel.
    PartDetailBack,
    ShowLocation(String),
    UpdateLocationText(String),
    /// Escape hatch: end everything and return to Normal.
    ClearInspection,
}

#[derive(Debug)]
pub struct Viewer {
    config: ViewerConfig,
    gate: ReticleGate,
    aim: AimMode,
    unifier: PointerUnifier,
    drag: DragTracker,
    scene: Scene,
    points: DetailPointRegistry,
    resolver: TargetResolver,
    session: InspectionSession,
    panels: PanelCoordinator,
    hovered_point: Option<PointId>,
    last_pointer: Option<PointerEvent>,
    camera_missing_reported: bool,
}

impl Viewer {
    pub fn new(config: ViewerConfig, wiring: PanelWiring) -> Self {
        let interaction = config.interaction();
        log::info!(
            "[viewer] profile={:?} reticle={:?} radius={} aim={:?}",
            config.profile,
            interaction.reticle_mode,
            config.reticle_radius,
            interaction.aim
        );
        Self {
            gate: ReticleGate::new(config.reticle()),
            aim: interaction.aim,
            unifier: PointerUnifier::new(),
            drag: DragTracker::default(),
            scene: Scene::new(),
            points: DetailPointRegistry::new(),
            resolver: TargetResolver::new(config.ray_max_distance),
            session: InspectionSession::new(SessionSettings::from(&config)),
            panels: PanelCoordinator::new(wiring),
            hovered_point: None,
            last_pointer: None,
            camera_missing_reported: false,
            config,
        }
    }

    /// Emit the initial display state: no location context, no target.
    pub fn start(&mut self, out: &mut Vec<DisplayUpdate>) {
        if let Err(e) = self.panels.show_location("", out) {
            log::error!("[viewer] {}", e);
        }
        self.resolver.clear(out);
    }

    #[inline]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }
    #[inline]
    pub fn gate(&self) -> &ReticleGate {
        &self.gate
    }
    #[inline]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }
    #[inline]
    pub fn points(&self) -> &DetailPointRegistry {
        &self.points
    }
    #[inline]
    pub fn panels(&self) -> &PanelCoordinator {
        &self.panels
    }
    #[inline]
    pub fn session(&self) -> &InspectionSession {
        &self.session
    }
    #[inline]
    pub fn resolver(&self) -> &TargetResolver {
        &self.resolver
    }
    #[inline]
    pub fn hovered_point(&self) -> Option<PointId> {
        self.hovered_point
    }

    /// This frame's unified pointer event, for collaborators such as free
    /// look that run after the viewer.
    #[inline]
    pub fn last_pointer(&self) -> Option<&PointerEvent> {
        self.last_pointer.as_ref()
    }

    pub fn flag_reader(&self) -> InspectionFlagReader {
        self.session.flag_reader()
    }

    /// Name of the object currently targeted or inspected.
    pub fn current_target_name(&self) -> Option<&str> {
        self.resolver
            .current()
            .and_then(|id| self.scene.get(id))
            .map(|o| o.name())
    }

    pub fn add_object(&mut self, spec: ObjectSpec) -> SubjectId {
        spec.spawn(&mut self.scene, &mut self.points)
    }

    /// Remove an object. Removing the object under inspection ends the
    /// session without restoring it.
    pub fn remove_object(&mut self, id: SubjectId, out: &mut Vec<DisplayUpdate>) {
        if self.session.subject() == Some(id) {
            self.session.abandon(&mut self.points, &mut self.panels, out);
            self.resolver.clear(out);
            self.drag.reset();
        } else if self.resolver.current() == Some(id) {
            self.resolver.clear(out);
        }
        if let Some(p) = self.hovered_point {
            if self.points.get(p).map(|p| p.owner()) == Some(id) {
                self.hovered_point = None;
            }
        }
        self.points.remove_owner(id);
        self.scene.remove(id);
    }

    pub fn tick(&mut self, frame: FrameInput<'_>, out: &mut Vec<DisplayUpdate>) {
        let pointer = self.unifier.resolve(frame.input);
        self.last_pointer = pointer;
        let drag = pointer.as_ref().and_then(|p| self.drag.track(p));

        let camera = match frame.camera {
            Some(c) => {
                if self.camera_missing_reported {
                    log::info!("[viewer] camera available again");
                    self.camera_missing_reported = false;
                }
                Some(c)
            }
            None => {
                if !self.camera_missing_reported {
                    self.camera_missing_reported = true;
                    log::error!(
                        "[viewer] {}; picking suspended",
                        InteractionError::ResourceUnavailable("camera")
                    );
                }
                None
            }
        };

        // A press counts as an interaction only inside the reticle gate and
        // without the secondary button held.
        let press = pointer.filter(|p| {
            p.phase == PointerPhase::Begin
                && !frame.input.mouse.secondary_down
                && self.gate.is_eligible(frame.viewport, p.position)
        });

        if self.session.is_active() {
            if let Some(delta) = drag {
                if let Err(e) = self.session.rotate(delta, frame.dt, &mut self.scene) {
                    log::warn!("[viewer] {}", e);
                }
            }
            // Detail points follow the finger or cursor in every profile,
            // and a press on one is not subject to the reticle gate.
            if let Some(camera) = camera {
                let ray = camera.screen_ray(frame.viewport, frame.input.aim_position());
                let tapped = pointer.is_some_and(|p| {
                    p.phase == PointerPhase::Begin && !frame.input.mouse.secondary_down
                });
                self.track_detail_points(&ray, tapped, out);
            }
            return;
        }

        let Some(camera) = camera else {
            return;
        };
        let ray = self.aim_ray(camera, &frame);
        let target = self.resolver.resolve(&ray, &self.scene, out);
        if let (Some(_), Some(target)) = (press, target) {
            self.interact(target, camera, out);
        }
    }

    pub fn dispatch(&mut self, command: UiCommand, out: &mut Vec<DisplayUpdate>) {
        log::debug!("[viewer] dispatch {:?}", command);
        let result = match command {
            UiCommand::Back => match self.panels.back_action() {
                BackAction::ReturnToObject => self.part_detail_back(out),
                BackAction::EndInspection => self.object_back(out),
                BackAction::Nothing => Ok(()),
            },
            UiCommand::ObjectBack => self.object_back(out),
            UiCommand::PartDetailBack => self.part_detail_back(out),
            UiCommand::ShowLocation(name) => self.panels.show_location(&name, out),
            UiCommand::UpdateLocationText(name) => self.panels.update_location_text(&name, out),
            UiCommand::ClearInspection => {
                self.clear_inspection(out);
                Ok(())
            }
        };
        if let Err(e) = result {
            log::warn!("[viewer] {}", e);
        }
    }

    /// Start inspecting `subject` as seen from `camera`.
    pub fn start_inspection(
        &mut self,
        subject: SubjectId,
        camera: &Camera,
        out: &mut Vec<DisplayUpdate>,
    ) -> Result<(), InteractionError> {
        self.session.start(
            subject,
            camera,
            &mut self.scene,
            &mut self.points,
            &mut self.panels,
            out,
        )?;
        if let Some(identity) = self.scene.get(subject).and_then(|o| o.identity()) {
            self.resolver.enter_inspection(subject, &identity, out);
        }
        Ok(())
    }

    pub fn end_inspection(&mut self, out: &mut Vec<DisplayUpdate>) -> Result<(), InteractionError> {
        self.hovered_point = None;
        self.session
            .end(&mut self.scene, &mut self.points, &mut self.panels, out)?;
        self.resolver.clear(out);
        Ok(())
    }

    /// Select a detail point and route it to the part detail panel.
    pub fn select_point(
        &mut self,
        point: PointId,
        out: &mut Vec<DisplayUpdate>,
    ) -> Result<(), InteractionError> {
        let selected = self.points.select(point, out)?;
        self.session.show_detail_point(
            selected.owner,
            selected.number,
            &selected.description,
            &mut self.panels,
            out,
        )
    }

    fn aim_ray(&self, camera: &Camera, frame: &FrameInput<'_>) -> Ray {
        match self.aim {
            AimMode::ScreenCenter => camera.center_ray(),
            AimMode::Pointer => camera.screen_ray(frame.viewport, frame.input.aim_position()),
        }
    }

    fn interact(&mut self, target: ResolvedTarget, camera: &Camera, out: &mut Vec<DisplayUpdate>) {
        if target.identity.inspectable {
            if let Err(e) = self.start_inspection(target.subject, camera, out) {
                log::warn!("[viewer] {}", e);
            }
        } else {
            let info = ObjectPanelInfo {
                name: target.identity.name,
                summary: target.identity.info_text,
            };
            if let Err(e) = self.panels.show_object(Some(info), out) {
                log::warn!("[viewer] {}", e);
            }
        }
    }

    fn track_detail_points(&mut self, ray: &Ray, pressed: bool, out: &mut Vec<DisplayUpdate>) {
        let Some(subject) = self.session.subject() else {
            return;
        };
        let picked =
            self.scene
                .pick_detail_point(subject, ray, &self.points, self.config.ray_max_distance);

        if picked != self.hovered_point {
            if let Some(prev) = self.hovered_point {
                self.points.unhover(prev, out);
            }
            if let Some(next) = picked {
                self.points.hover(next, out);
            }
            self.hovered_point = picked;
        }

        if let (true, Some(point)) = (pressed, picked) {
            if let Err(e) = self.select_point(point, out) {
                log::warn!("[viewer] {}", e);
            }
        }
    }

    fn object_back(&mut self, out: &mut Vec<DisplayUpdate>) -> Result<(), InteractionError> {
        if self.session.is_active() {
            self.end_inspection(out)
        } else {
            self.resolver.clear(out);
            self.panels.show_normal(out)
        }
    }

    fn part_detail_back(&mut self, out: &mut Vec<DisplayUpdate>) -> Result<(), InteractionError> {
        self.points.clear_selection(out);
        match self.panels.active() {
            PanelState::PartDetail => self.panels.show_object(None, out),
            _ => Ok(()),
        }
    }

    fn clear_inspection(&mut self, out: &mut Vec<DisplayUpdate>) {
        if self.session.is_active() {
            if let Err(e) = self.end_inspection(out) {
                log::warn!("[viewer] {}", e);
            }
        } else {
            self.resolver.clear(out);
            if let Err(e) = self.panels.show_normal(out) {
                log::warn!("[viewer] {}", e);
            }
        }
    }
}
