//! Start-up configuration.
//!
//! The deployment profile is resolved once from a capability probe and then
//! stays fixed; nothing downstream branches on the pointer type. Frontends
//! may override individual values from URL query parameters or environment
//! variables through [`ViewerConfig::apply_overrides`].

use crate::constants::{
    DEFAULT_INSPECT_DISTANCE, DEFAULT_INSPECT_HEIGHT_OFFSET, DEFAULT_RETICLE_RADIUS_PX,
    DEFAULT_ROTATION_SPEED, FREE_LOOK_SENSITIVITY, RAY_MAX_DISTANCE,
};
use crate::reticle::{ReticleConfig, ReticleMode};

/// What the platform probe found.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlatformCapabilities {
    pub web: bool,
    pub touch: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeploymentProfile {
    TouchBrowser,
    DesktopBrowser,
    NativeDesktop,
    NativeMobile,
}

/// Where picking rays are aimed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AimMode {
    /// Through the fixed reticle at the viewport centre.
    ScreenCenter,
    /// Through the live pointer position.
    Pointer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InteractionProfile {
    pub reticle_mode: ReticleMode,
    pub aim: AimMode,
}

impl DeploymentProfile {
    pub fn detect(caps: PlatformCapabilities) -> Self {
        match (caps.web, caps.touch) {
            (true, true) => DeploymentProfile::TouchBrowser,
            (true, false) => DeploymentProfile::DesktopBrowser,
            (false, true) => DeploymentProfile::NativeMobile,
            (false, false) => DeploymentProfile::NativeDesktop,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "touch-browser" | "touch" => Some(DeploymentProfile::TouchBrowser),
            "desktop-browser" | "browser" => Some(DeploymentProfile::DesktopBrowser),
            "native-desktop" | "desktop" => Some(DeploymentProfile::NativeDesktop),
            "native-mobile" | "mobile" => Some(DeploymentProfile::NativeMobile),
            _ => None,
        }
    }

    pub fn interaction(self) -> InteractionProfile {
        match self {
            DeploymentProfile::TouchBrowser => InteractionProfile {
                reticle_mode: ReticleMode::Gated,
                aim: AimMode::ScreenCenter,
            },
            DeploymentProfile::DesktopBrowser
            | DeploymentProfile::NativeDesktop
            | DeploymentProfile::NativeMobile => InteractionProfile {
                reticle_mode: ReticleMode::Free,
                aim: AimMode::Pointer,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    pub profile: DeploymentProfile,
    pub reticle_radius: f32,
    pub ray_max_distance: f32,
    pub inspect_distance: f32,
    pub inspect_height_offset: f32,
    pub rotation_speed: f32,
    pub free_look_sensitivity: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            profile: DeploymentProfile::NativeDesktop,
            reticle_radius: DEFAULT_RETICLE_RADIUS_PX,
            ray_max_distance: RAY_MAX_DISTANCE,
            inspect_distance: DEFAULT_INSPECT_DISTANCE,
            inspect_height_offset: DEFAULT_INSPECT_HEIGHT_OFFSET,
            rotation_speed: DEFAULT_ROTATION_SPEED,
            free_look_sensitivity: FREE_LOOK_SENSITIVITY,
        }
    }
}

impl ViewerConfig {
    /// Keys understood by [`ViewerConfig::apply_overrides`].
    pub const OVERRIDE_KEYS: [&'static str; 6] =
        ["profile", "reticle", "distance", "height", "speed", "sensitivity"];

    pub fn for_platform(caps: PlatformCapabilities) -> Self {
        Self {
            profile: DeploymentProfile::detect(caps),
            ..Self::default()
        }
    }

    #[inline]
    pub fn interaction(&self) -> InteractionProfile {
        self.profile.interaction()
    }

    #[inline]
    pub fn reticle(&self) -> ReticleConfig {
        ReticleConfig {
            radius: self.reticle_radius,
            mode: self.interaction().reticle_mode,
        }
    }

    /// Apply `key=value` overrides. Unknown keys are ignored; values that do
    /// not parse keep the current setting and log a warning.
    pub fn apply_overrides<'a, I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (key, value) in pairs {
            match key {
                "profile" => match DeploymentProfile::from_name(value) {
                    Some(p) => self.profile = p,
                    None => log::warn!("[config] unknown profile '{}'", value),
                },
                "reticle" => set_positive(&mut self.reticle_radius, key, value),
                "distance" => set_positive(&mut self.inspect_distance, key, value),
                "height" => set_finite(&mut self.inspect_height_offset, key, value),
                "speed" => set_positive(&mut self.rotation_speed, key, value),
                "sensitivity" => set_positive(&mut self.free_look_sensitivity, key, value),
                _ => log::debug!("[config] ignoring override '{}'", key),
            }
        }
    }
}

fn set_finite(slot: &mut f32, key: &str, value: &str) {
    match value.trim().parse::<f32>() {
        Ok(v) if v.is_finite() => *slot = v,
        _ => log::warn!("[config] bad value for {}: '{}'", key, value),
    }
}

fn set_positive(slot: &mut f32, key: &str, value: &str) {
    match value.trim().parse::<f32>() {
        Ok(v) if v.is_finite() && v > 0.0 => *slot = v,
        _ => log::warn!("[config] bad value for {}: '{}'", key, value),
    }
}
