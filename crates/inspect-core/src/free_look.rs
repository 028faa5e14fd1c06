//! Drag-to-look camera control.
//!
//! This is the consumer side of the inspection flag: while an inspection is
//! running it ignores input entirely. A drag only turns the camera if the
//! press that started it was allowed by the reticle gate's rotation check.

use crate::camera::Camera;
use crate::constants::{FREE_LOOK_MOUSE_SCALE, FREE_LOOK_PITCH_LIMIT_DEG, FREE_LOOK_TOUCH_SCALE};
use crate::flag::InspectionFlagReader;
use crate::pointer::{PointerEvent, PointerPhase, PointerSource};
use crate::reticle::{ReticleGate, Viewport};
use glam::{EulerRot, Quat, Vec2, Vec3};

#[derive(Debug)]
pub struct FreeLook {
    /// Degrees about world up; 0 looks down +Z, 90 looks down +X (to the
    /// left of the starting view).
    pub yaw_deg: f32,
    /// Degrees about the camera right axis; positive looks down.
    pub pitch_deg: f32,
    sensitivity: f32,
    flag: InspectionFlagReader,
    rotating: bool,
    last: Option<Vec2>,
}

impl FreeLook {
    pub fn new(sensitivity: f32, flag: InspectionFlagReader) -> Self {
        Self {
            yaw_deg: 0.0,
            pitch_deg: 0.0,
            sensitivity,
            flag,
            rotating: false,
            last: None,
        }
    }

    /// Feed this frame's pointer event. Returns true if the view changed.
    pub fn update(
        &mut self,
        pointer: Option<&PointerEvent>,
        gate: &ReticleGate,
        viewport: Viewport,
    ) -> bool {
        if self.flag.is_inspecting() {
            self.rotating = false;
            self.last = None;
            return false;
        }
        let Some(ev) = pointer else {
            return false;
        };
        match ev.phase {
            PointerPhase::Begin => {
                self.rotating = gate.permits_rotation(viewport, ev.position);
                self.last = Some(ev.position);
                false
            }
            PointerPhase::Move => {
                let Some(prev) = self.last.replace(ev.position) else {
                    return false;
                };
                if !self.rotating {
                    return false;
                }
                let scale = match ev.source {
                    PointerSource::Touch => FREE_LOOK_TOUCH_SCALE,
                    PointerSource::Pointer => FREE_LOOK_MOUSE_SCALE,
                };
                let delta = (ev.position - prev) * self.sensitivity * scale;
                if delta == Vec2::ZERO {
                    return false;
                }
                // Screen y grows downward: dragging down looks down.
                self.yaw_deg -= delta.x;
                self.pitch_deg = (self.pitch_deg + delta.y)
                    .clamp(-FREE_LOOK_PITCH_LIMIT_DEG, FREE_LOOK_PITCH_LIMIT_DEG);
                true
            }
            PointerPhase::End | PointerPhase::Cancel => {
                self.rotating = false;
                self.last = None;
                false
            }
        }
    }

    pub fn forward(&self) -> Vec3 {
        Quat::from_euler(
            EulerRot::YXZ,
            self.yaw_deg.to_radians(),
            self.pitch_deg.to_radians(),
            0.0,
        ) * Vec3::Z
    }

    /// Point `camera` along the current view direction, keeping its eye.
    pub fn apply(&self, camera: &mut Camera) {
        camera.target = camera.eye + self.forward();
    }
}
