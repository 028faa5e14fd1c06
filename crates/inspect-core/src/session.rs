//! The inspection session: Idle -> Active -> Idle.
//!
//! Starting a session snapshots the subject's transform, parks its pivot in
//! front of the camera and turns it to face the viewer. While Active, drag
//! deltas rotate it about that pivot. Ending restores the snapshot verbatim.
//! There is no timeout; only an explicit end (or the subject disappearing)
//! leaves the Active state.

use crate::camera::Camera;
use crate::config::ViewerConfig;
use crate::detail::DetailPointRegistry;
use crate::display::DisplayUpdate;
use crate::error::InteractionError;
use crate::flag::{InspectionFlag, InspectionFlagReader};
use crate::panels::{ObjectPanelInfo, PanelCoordinator};
use crate::scene::{Scene, SubjectId};
use crate::transform::{look_rotation, replace_yaw, yaw_pitch_roll, Transform};
use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionSettings {
    pub inspect_distance: f32,
    pub height_offset: f32,
    /// Degrees per pixel of drag per second.
    pub rotation_speed: f32,
}

impl From<&ViewerConfig> for SessionSettings {
    fn from(config: &ViewerConfig) -> Self {
        Self {
            inspect_distance: config.inspect_distance,
            height_offset: config.inspect_height_offset,
            rotation_speed: config.rotation_speed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveInspection {
    pub subject: SubjectId,
    /// Transform at start, restored bit-for-bit on end.
    pub original: Transform,
    pub accumulated_pitch: f32,
    pub accumulated_yaw: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum SessionState {
    Idle,
    Active(ActiveInspection),
}

impl SessionState {
    fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Active(_) => "active",
        }
    }
}

/// Where the pivot should sit for an inspection seen from `camera`.
pub fn inspection_anchor(camera: &Camera, settings: &SessionSettings) -> Vec3 {
    camera.position()
        + camera.forward() * settings.inspect_distance
        + Vec3::Y * settings.height_offset
}

#[derive(Debug)]
pub struct InspectionSession {
    state: SessionState,
    flag: InspectionFlag,
    settings: SessionSettings,
}

impl InspectionSession {
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            state: SessionState::Idle,
            flag: InspectionFlag::new(),
            settings,
        }
    }

    pub fn flag_reader(&self) -> InspectionFlagReader {
        self.flag.reader()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active(_))
    }

    pub fn active(&self) -> Option<&ActiveInspection> {
        match &self.state {
            SessionState::Active(a) => Some(a),
            SessionState::Idle => None,
        }
    }

    #[inline]
    pub fn subject(&self) -> Option<SubjectId> {
        self.active().map(|a| a.subject)
    }

    pub fn start(
        &mut self,
        subject: SubjectId,
        camera: &Camera,
        scene: &mut Scene,
        points: &mut DetailPointRegistry,
        panels: &mut PanelCoordinator,
        out: &mut Vec<DisplayUpdate>,
    ) -> Result<(), InteractionError> {
        if self.is_active() {
            log::warn!("[session] start requested while already inspecting");
            return Err(self.invalid("start"));
        }
        let object = scene
            .get_mut(subject)
            .ok_or(InteractionError::UnknownSubject(subject))?;
        let Some(inspectable) = object.inspectable.as_ref() else {
            return Err(InteractionError::NotInspectable(object.name().to_string()));
        };
        let pivot_offset = inspectable.pivot_offset;
        let panel_info = ObjectPanelInfo {
            name: object.name().to_string(),
            summary: inspectable.summary.clone(),
        };
        let point_ids = inspectable.points.clone();

        let original = object.transform;
        let anchor = inspection_anchor(camera, &self.settings);

        // Move so the pivot, not the origin, lands on the anchor.
        let pivot_world = original.transform_point(pivot_offset);
        let mut placed = original;
        placed.position += anchor - pivot_world;

        // Face the camera about the vertical axis only.
        let to_camera = camera.position() - placed.position;
        placed.rotation = match look_rotation(to_camera, Vec3::Y) {
            Some(look) => replace_yaw(original.rotation, yaw_pitch_roll(look).0),
            None => {
                log::debug!("[session] camera straight above/below subject; keeping yaw");
                original.rotation
            }
        };
        // The yaw turn swings an off-axis pivot; put it back on the anchor.
        placed.position += anchor - placed.transform_point(pivot_offset);
        object.transform = placed;

        for id in point_ids.iter() {
            if let Err(e) = points.show(*id, true, out) {
                log::error!("[session] {}", e);
            }
        }

        self.flag.raise();
        self.state = SessionState::Active(ActiveInspection {
            subject,
            original,
            accumulated_pitch: 0.0,
            accumulated_yaw: 0.0,
        });
        log::info!("[session] inspecting '{}'", panel_info.name);

        if let Err(e) = panels.show_object(Some(panel_info), out) {
            log::error!("[session] {}", e);
        }
        Ok(())
    }

    /// Apply one frame of drag. Pitch turns about the subject's own right
    /// axis, yaw about world up, both through the current pivot.
    pub fn rotate(
        &mut self,
        delta: Vec2,
        dt: f32,
        scene: &mut Scene,
    ) -> Result<(), InteractionError> {
        let SessionState::Active(active) = &mut self.state else {
            return Err(InteractionError::InvalidStateTransition {
                from: "idle",
                attempted: "rotate",
            });
        };
        let object = scene
            .get_mut(active.subject)
            .ok_or(InteractionError::UnknownSubject(active.subject))?;
        let Some(pivot) = object.pivot_world() else {
            return Err(InteractionError::NotInspectable(object.name().to_string()));
        };

        let pitch = delta.y * self.settings.rotation_speed * dt;
        let yaw = -delta.x * self.settings.rotation_speed * dt;
        let right = object.transform.right();
        object.transform.rotate_around(pivot, right, pitch);
        object.transform.rotate_around(pivot, Vec3::Y, yaw);

        active.accumulated_pitch += pitch;
        active.accumulated_yaw += yaw;
        log::trace!("[session] rotate pitch={:.2} yaw={:.2}", pitch, yaw);
        Ok(())
    }

    pub fn end(
        &mut self,
        scene: &mut Scene,
        points: &mut DetailPointRegistry,
        panels: &mut PanelCoordinator,
        out: &mut Vec<DisplayUpdate>,
    ) -> Result<(), InteractionError> {
        let SessionState::Active(active) = self.state else {
            log::warn!("[session] end requested while idle");
            return Err(self.invalid("end"));
        };

        match scene.get_mut(active.subject) {
            Some(object) => {
                object.transform = active.original;
                let ids = object.point_ids().to_vec();
                for id in ids {
                    if let Err(e) = points.show(id, false, out) {
                        log::error!("[session] {}", e);
                    }
                }
                log::info!("[session] finished inspecting '{}'", object.name());
            }
            None => log::warn!("[session] subject vanished before end"),
        }

        self.finish(panels, out);
        Ok(())
    }

    /// Leave Active without restoring anything, for when the subject has
    /// been removed from the scene.
    pub fn abandon(
        &mut self,
        points: &mut DetailPointRegistry,
        panels: &mut PanelCoordinator,
        out: &mut Vec<DisplayUpdate>,
    ) {
        if let SessionState::Active(active) = self.state {
            log::info!("[session] subject {:?} removed mid-inspection", active.subject);
            points.clear_selection(out);
            self.finish(panels, out);
        }
    }

    /// Route a detail point selection to the part detail panel. Only the
    /// subject under inspection may do this.
    pub fn show_detail_point(
        &self,
        owner: SubjectId,
        number: u32,
        description: &str,
        panels: &mut PanelCoordinator,
        out: &mut Vec<DisplayUpdate>,
    ) -> Result<(), InteractionError> {
        if self.subject() != Some(owner) {
            log::error!("[session] detail point {} selected outside its inspection", number);
            return Err(InteractionError::InvalidStateTransition {
                from: self.state.name(),
                attempted: "show detail point",
            });
        }
        panels.show_part_detail(number, description, out)
    }

    fn finish(&mut self, panels: &mut PanelCoordinator, out: &mut Vec<DisplayUpdate>) {
        self.state = SessionState::Idle;
        self.flag.clear();
        if let Err(e) = panels.show_normal(out) {
            log::error!("[session] {}", e);
        }
    }

    fn invalid(&self, attempted: &'static str) -> InteractionError {
        InteractionError::InvalidStateTransition {
            from: self.state.name(),
            attempted,
        }
    }
}
