use bevy::asset::LoadState;
use bevy::prelude::*;

use constants::path::{RELATIVE_MANIFEST_PATH, RELATIVE_MATCAP_PATH};

use crate::engine::assets::scene_assets::SceneAssets;
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::knots::create_knot_mesh;
use crate::engine::shaders::MatcapMaterial;

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<SceneManifest>>,
}

/// Kick off every asset request and create the shared scene handles.
pub fn start_loading(
    mut commands: Commands,
    mut manifest_loader: ResMut<ManifestLoader>,
    asset_server: Res<AssetServer>,
    mut materials: ResMut<Assets<MatcapMaterial>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    manifest_loader.handle = Some(asset_server.load(RELATIVE_MANIFEST_PATH));

    let matcap_texture: Handle<Image> = asset_server.load(RELATIVE_MATCAP_PATH);
    let matcap_material = materials.add(MatcapMaterial {
        matcap: matcap_texture.clone(),
    });
    let knot_mesh = meshes.add(create_knot_mesh());

    commands.insert_resource(SceneAssets {
        matcap_texture,
        matcap_material,
        knot_mesh,
    });
}

/// Resolve the manifest: insert it as a resource once loaded, or fall back
/// to defaults on failure so the scene always assembles.
pub fn poll_manifest(
    mut progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    manifests: Res<Assets<SceneManifest>>,
    asset_server: Res<AssetServer>,
    mut commands: Commands,
) {
    if progress.manifest_resolved {
        return;
    }
    let Some(ref handle) = manifest_loader.handle else {
        return;
    };

    if let Some(manifest) = manifests.get(handle) {
        info!(
            "✓ scene manifest loaded: \"{}\", {} knots",
            manifest.title, manifest.knot_count
        );
        commands.insert_resource(manifest.clone());
        progress.manifest_resolved = true;
    } else if let Some(LoadState::Failed(err)) = asset_server.get_load_state(handle) {
        error!("scene manifest failed to load, falling back to defaults: {err}");
        commands.insert_resource(SceneManifest::default());
        progress.manifest_resolved = true;
    }
}
