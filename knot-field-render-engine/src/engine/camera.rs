use bevy::{
    input::mouse::{MouseMotion, MouseWheel},
    prelude::*,
};

use constants::render_settings::{
    CAMERA_DAMPING, CAMERA_MAX_DISTANCE, CAMERA_MIN_DISTANCE, CAMERA_ROTATE_SENSITIVITY,
};

/// Orbit state for the viewport camera: a spherical pose around a focus
/// point. The camera entity eases toward `target_transform` every frame,
/// which is what gives the controls their damped feel.
#[derive(Resource, Debug, Clone)]
pub struct OrbitCamera {
    pub focus_point: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl OrbitCamera {
    /// Derive the orbit pose that places the camera at `position` looking at
    /// `focus`.
    pub fn from_position(position: Vec3, focus: Vec3) -> Self {
        let offset = position - focus;
        let distance = offset.length().max(f32::EPSILON);
        Self {
            focus_point: focus,
            distance,
            yaw: offset.x.atan2(offset.z),
            pitch: -(offset.y / distance).clamp(-1.0, 1.0).asin(),
        }
    }

    /// Keep the pose inside its working band. Pitch stops short of the poles
    /// so the up vector never flips.
    pub fn clamp_pose(&mut self) {
        self.pitch = self.pitch.clamp(-1.54, 1.54);
        self.distance = self.distance.clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }

    pub fn target_transform(&self) -> Transform {
        let rotation = Quat::from_rotation_y(self.yaw) * Quat::from_rotation_x(self.pitch);
        let position = self.focus_point + rotation * Vec3::new(0.0, 0.0, self.distance);
        Transform::from_translation(position).looking_at(self.focus_point, Vec3::Y)
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            focus_point: Vec3::ZERO,
            distance: 11.0,
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

/// Left-drag orbits, the wheel zooms, and the camera transform eases toward
/// the orbit target each frame.
pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    for scroll in scroll_events.read() {
        let zoom_factor = if scroll.y > 0.0 { 0.9 } else { 1.1 };
        orbit.distance *= zoom_factor;
    }

    let total_motion: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();
    if mouse_button.pressed(MouseButton::Left) && total_motion != Vec2::ZERO {
        orbit.yaw -= total_motion.x * CAMERA_ROTATE_SENSITIVITY;
        orbit.pitch -= total_motion.y * CAMERA_ROTATE_SENSITIVITY;
    }

    orbit.clamp_pose();

    let target = orbit.target_transform();
    let lerp_speed = (CAMERA_DAMPING * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform
        .translation
        .lerp(target.translation, lerp_speed);
    camera_transform.rotation = camera_transform.rotation.slerp(target.rotation, lerp_speed);
}
