use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

/// Asset-resolution state. Only the loading pollers are gated on `Loading`;
/// the drift pass, camera, gizmos, and UI run from the very first frame and
/// behave identically before and after every asset resolves.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States, Resource)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

// Final transition once every asset has resolved one way or the other
pub fn transition_to_running(
    progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if progress.manifest_resolved
        && progress.matcap_resolved
        && progress.knots_spawned
        && progress.title_resolved
    {
        info!("→ scene assembled, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
