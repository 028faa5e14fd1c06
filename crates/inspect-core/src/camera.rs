//! Camera description and screen-to-world rays.
//!
//! The camera is owned by the frontend (usually driven by free look); the
//! core only reads its pose. All types avoid platform-specific APIs.

use crate::constants::{DEFAULT_FOVY_DEG, DEFAULT_ZFAR, DEFAULT_ZNEAR};
use crate::ray::Ray;
use crate::reticle::Viewport;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera at `eye` looking along `forward` with world +Y up.
    pub fn looking(eye: Vec3, forward: Vec3) -> Self {
        Self {
            eye,
            target: eye + forward.normalize_or_zero(),
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: DEFAULT_FOVY_DEG.to_radians(),
            znear: DEFAULT_ZNEAR,
            zfar: DEFAULT_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.aspect = viewport.aspect();
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.eye
    }

    #[inline]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }

    #[inline]
    pub fn right(&self) -> Vec3 {
        self.forward().cross(self.up).normalize_or_zero()
    }

    #[inline]
    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward())
    }

    /// Ray through the fixed reticle at the viewport centre.
    #[inline]
    pub fn center_ray(&self) -> Ray {
        Ray::new(self.eye, self.forward())
    }

    /// World-space ray through pixel `px` (origin top-left).
    pub fn screen_ray(&self, viewport: Viewport, px: Vec2) -> Ray {
        let width = viewport.width.max(1.0);
        let height = viewport.height.max(1.0);
        let ndc_x = (2.0 * px.x / width) - 1.0;
        let ndc_y = 1.0 - (2.0 * px.y / height);
        let inv = self.view_projection(viewport).inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        Ray::new(self.eye, p1 - self.eye)
    }

    /// Pixel position of a world point, or `None` when it is behind the eye.
    pub fn world_to_screen(&self, viewport: Viewport, world: Vec3) -> Option<Vec2> {
        let clip = self.view_projection(viewport) * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * viewport.width,
            (1.0 - ndc.y) * 0.5 * viewport.height,
        ))
    }

    fn view_projection(&self, viewport: Viewport) -> Mat4 {
        let aspect = viewport.width.max(1.0) / viewport.height.max(1.0);
        Mat4::perspective_rh(self.fovy_radians, aspect, self.znear, self.zfar) * self.view_matrix()
    }
}
