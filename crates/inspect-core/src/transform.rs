use glam::{EulerRot, Mat3, Quat, Vec3};

/// World placement of a scene object. Local +Z is the object's forward,
/// +X its right, +Y its up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    #[inline]
    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.position + self.rotation * local
    }

    #[inline]
    pub fn inverse_transform_point(&self, world: Vec3) -> Vec3 {
        self.rotation.inverse() * (world - self.position)
    }

    #[inline]
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Rotate by `angle_deg` about `axis` through the world point `pivot`,
    /// moving the position along with the orientation.
    pub fn rotate_around(&mut self, pivot: Vec3, axis: Vec3, angle_deg: f32) {
        let axis = axis.normalize_or_zero();
        if axis == Vec3::ZERO || angle_deg == 0.0 {
            return;
        }
        let q = Quat::from_axis_angle(axis, angle_deg.to_radians());
        self.position = pivot + q * (self.position - pivot);
        self.rotation = (q * self.rotation).normalize();
    }
}

/// Rotation whose local +Z points along `forward` with local +Y as close to
/// `up` as possible. `None` when `forward` is zero or parallel to `up`.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Option<Quat> {
    let f = forward.try_normalize()?;
    let r = up.cross(f).try_normalize()?;
    let u = f.cross(r);
    Some(Quat::from_mat3(&Mat3::from_cols(r, u, f)).normalize())
}

/// Decompose into (yaw, pitch, roll) radians: yaw about world Y applied
/// last, roll about Z applied first.
#[inline]
pub fn yaw_pitch_roll(rotation: Quat) -> (f32, f32, f32) {
    rotation.to_euler(EulerRot::YXZ)
}

/// Keep the pitch and roll of `rotation` and substitute `yaw`.
pub fn replace_yaw(rotation: Quat, yaw: f32) -> Quat {
    let (_, pitch, roll) = yaw_pitch_roll(rotation);
    Quat::from_euler(EulerRot::YXZ, yaw, pitch, roll)
}
