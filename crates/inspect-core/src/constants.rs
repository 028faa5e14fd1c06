// Shared interaction tuning constants used by both web and native frontends.

// Picking
pub const RAY_MAX_DISTANCE: f32 = 100.0; // world units
pub const DETAIL_POINT_RADIUS: f32 = 0.1; // ray-sphere radius for detail point picking

// Reticle
pub const DEFAULT_RETICLE_RADIUS_PX: f32 = 50.0; // shared by the interaction and rotation gates

// Inspection placement
pub const DEFAULT_INSPECT_DISTANCE: f32 = 2.0; // in front of the camera
pub const DEFAULT_INSPECT_HEIGHT_OFFSET: f32 = 0.0;
pub const DEFAULT_ROTATION_SPEED: f32 = 100.0; // degrees per pixel-second of drag

// Drag filtering
pub const MOUSE_DRAG_MIN_PX: f32 = 1.0; // mouse moves at or below this are jitter
pub const ROTATION_MIN_DELTA_PX: f32 = 0.1; // any source

// Free look
pub const FREE_LOOK_SENSITIVITY: f32 = 2.0;
pub const FREE_LOOK_TOUCH_SCALE: f32 = 0.1;
pub const FREE_LOOK_MOUSE_SCALE: f32 = 0.1; // pixels to "mouse axis" units
pub const FREE_LOOK_PITCH_LIMIT_DEG: f32 = 89.0; // short of vertical so look_at keeps a basis

// Detail point palette
pub const POINT_NORMAL_COLOR: [f32; 3] = [1.0, 0.92, 0.016]; // yellow
pub const POINT_HOVER_COLOR: [f32; 3] = [1.0, 0.0, 0.0]; // red
pub const POINT_SELECTED_COLOR: [f32; 3] = [0.0, 1.0, 0.0]; // green

// Reticle indicator palette
pub const RETICLE_IDLE_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const RETICLE_TARGET_COLOR: [f32; 3] = [0.3, 0.9, 0.4];
pub const RETICLE_INSPECTING_COLOR: [f32; 3] = [0.3, 0.5, 0.9];

// Camera defaults
pub const DEFAULT_FOVY_DEG: f32 = 60.0;
pub const DEFAULT_ZNEAR: f32 = 0.1;
pub const DEFAULT_ZFAR: f32 = 1000.0;
pub const DEFAULT_EYE_HEIGHT: f32 = 1.6;
