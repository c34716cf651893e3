use bevy::prelude::*;

use constants::render_settings::AXES_GIZMO_LENGTH;

/// Visibility toggle for the origin axis helper, off by default.
#[derive(Resource, Default)]
pub struct AxesHelper {
    pub visible: bool,
}

/// Draws the origin axes while the helper is toggled on.
pub fn draw_axes_gizmo(helper: Res<AxesHelper>, mut gizmos: Gizmos) {
    if helper.visible {
        gizmos.axes(Transform::IDENTITY, AXES_GIZMO_LENGTH);
    }
}
