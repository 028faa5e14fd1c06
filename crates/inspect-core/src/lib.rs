pub mod camera;
pub mod config;
pub mod constants;
pub mod detail;
pub mod display;
pub mod error;
pub mod flag;
pub mod free_look;
pub mod gallery;
pub mod panels;
pub mod pointer;
pub mod ray;
pub mod resolver;
pub mod reticle;
pub mod scene;
pub mod session;
pub mod transform;
pub mod viewer;

pub use camera::Camera;
pub use config::{AimMode, DeploymentProfile, InteractionProfile, PlatformCapabilities, ViewerConfig};
pub use constants::*;
pub use detail::{DetailPoint, DetailPointRegistry, PointId, PointSelection, PointVisibility, SelectedPoint};
pub use display::{DisplayUpdate, ReticleIndicator, Rgb, TargetText};
pub use error::InteractionError;
pub use flag::{InspectionFlag, InspectionFlagReader};
pub use free_look::FreeLook;
pub use panels::{BackAction, ObjectPanelInfo, PanelCoordinator, PanelState, PanelVisibility, PanelWiring};
pub use pointer::*;
pub use ray::Ray;
pub use resolver::{ResolvedTarget, TargetResolver};
pub use reticle::{ReticleConfig, ReticleGate, ReticleMode, Viewport};
pub use scene::{Collider, InspectSpec, ObjectSpec, Scene, SceneObject, SubjectId, TargetIdentity};
pub use session::{inspection_anchor, ActiveInspection, InspectionSession, SessionSettings};
pub use transform::Transform;
pub use viewer::{FrameInput, UiCommand, Viewer};
