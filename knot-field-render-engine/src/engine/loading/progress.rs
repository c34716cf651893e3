use bevy::prelude::*;

/// One flag per asset the scene waits on. "Resolved" means loaded OR failed
/// with a fallback in place; either way the scene keeps assembling.
#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub manifest_resolved: bool,
    pub matcap_resolved: bool,
    pub knots_spawned: bool,
    pub title_resolved: bool,
}
