use bevy::prelude::*;

/// Initial viewport camera position; the orbit controller derives its
/// starting yaw/pitch/distance from this point looking at the origin
pub const CAMERA_START: Vec3 = Vec3::new(1.0, 1.0, 11.0);

/// Vertical field of view in degrees
pub const CAMERA_FOV_DEGREES: f32 = 75.0;

pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

/// Orbit zoom limits, world units from the focus point
pub const CAMERA_MIN_DISTANCE: f32 = 2.0;
pub const CAMERA_MAX_DISTANCE: f32 = 80.0;

/// Radians of orbit per pixel of mouse drag
pub const CAMERA_ROTATE_SENSITIVITY: f32 = 0.005;

/// Easing rate for the damped follow toward the orbit target transform
pub const CAMERA_DAMPING: f32 = 12.0;

/// Cap height of the extruded title mesh, world units
pub const TITLE_SIZE: f32 = 0.5;

/// Extrusion depth of the title mesh, world units
pub const TITLE_DEPTH: f32 = 0.2;

/// Length of each origin axis drawn by the axis helper gizmo
pub const AXES_GIZMO_LENGTH: f32 = 2.0;

/// Side length of the procedurally generated fallback matcap, pixels
pub const FALLBACK_MATCAP_SIZE: u32 = 256;

pub const WINDOW_TITLE: &str = "Knot Field";
