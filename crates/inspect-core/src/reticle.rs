use glam::Vec2;

/// Viewport size in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }
}

/// Whether presses are restricted to the reticle circle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReticleMode {
    /// Only presses within the radius interact; presses outside rotate.
    Gated,
    /// Every press may interact and every press may rotate.
    Free,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReticleConfig {
    pub radius: f32,
    pub mode: ReticleMode,
}

/// Decides which presses count as interactions and which as camera rotation.
///
/// The centre is taken from the viewport every call, so a resize needs no
/// extra bookkeeping. Both checks read the same radius.
#[derive(Clone, Copy, Debug)]
pub struct ReticleGate {
    config: ReticleConfig,
}

impl ReticleGate {
    pub fn new(config: ReticleConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> ReticleConfig {
        self.config
    }

    /// True when `position` lies on or inside the reticle circle.
    #[inline]
    pub fn within_radius(&self, viewport: Viewport, position: Vec2) -> bool {
        position.distance(viewport.center()) <= self.config.radius
    }

    /// Can a press at `position` drive an interaction (picking, selection)?
    pub fn is_eligible(&self, viewport: Viewport, position: Vec2) -> bool {
        match self.config.mode {
            ReticleMode::Gated => self.within_radius(viewport, position),
            ReticleMode::Free => true,
        }
    }

    /// Can a press at `position` start a free-look rotation drag?
    pub fn permits_rotation(&self, viewport: Viewport, position: Vec2) -> bool {
        match self.config.mode {
            ReticleMode::Gated => !self.within_radius(viewport, position),
            ReticleMode::Free => true,
        }
    }
}
