//! Output side of the core: everything a frontend has to draw.
//!
//! The core never touches a UI toolkit. Components push [`DisplayUpdate`]s
//! into a caller-owned `Vec` during `tick`/`dispatch` and the frontend
//! applies them in order.

use crate::constants::{RETICLE_IDLE_COLOR, RETICLE_INSPECTING_COLOR, RETICLE_TARGET_COLOR};
use crate::detail::PointId;
use crate::panels::PanelVisibility;

pub type Rgb = [f32; 3];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReticleIndicator {
    #[default]
    NoTarget,
    TargetFound,
    Inspecting,
}

impl ReticleIndicator {
    pub fn color(self) -> Rgb {
        match self {
            ReticleIndicator::NoTarget => RETICLE_IDLE_COLOR,
            ReticleIndicator::TargetFound => RETICLE_TARGET_COLOR,
            ReticleIndicator::Inspecting => RETICLE_INSPECTING_COLOR,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TargetText {
    pub name: String,
    pub info: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DisplayUpdate {
    /// Name/info labels; `None` hides them.
    TargetText(Option<TargetText>),
    Reticle(ReticleIndicator),
    /// All four panel flags, always together.
    Panels(PanelVisibility),
    ObjectPanel { name: String, summary: String },
    PartDetail { title: String, description: String },
    LocationText(String),
    PointVisibility { point: PointId, visible: bool },
    PointColor { point: PointId, color: Rgb },
}
