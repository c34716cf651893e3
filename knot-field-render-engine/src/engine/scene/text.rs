use std::error::Error;
use std::path::Path;

use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;
use meshtext::{MeshGenerator, MeshText, TextSection};

use constants::render_settings::{TITLE_DEPTH, TITLE_SIZE};

use crate::engine::assets::scene_assets::SceneAssets;
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::loading::progress::LoadingProgress;

/// Marker for the extruded title mesh.
#[derive(Component)]
pub struct TitleText;

/// Spawns the title once the manifest names it. A missing or unparsable
/// font is logged and skipped; the knot field and everything else in the
/// scene carries on without the title.
pub fn spawn_title_when_ready(
    mut progress: ResMut<LoadingProgress>,
    manifest: Option<Res<SceneManifest>>,
    assets: Res<SceneAssets>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut commands: Commands,
) {
    if progress.title_resolved {
        return;
    }
    let Some(manifest) = manifest else {
        return;
    };
    // One attempt only, success or not.
    progress.title_resolved = true;

    let font_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join(&manifest.font);
    let font_bytes = match std::fs::read(&font_path) {
        Ok(bytes) => bytes,
        Err(err) => {
            error!("title font {} unavailable: {err}", font_path.display());
            return;
        }
    };

    match build_title_mesh(font_bytes, &manifest.title, TITLE_SIZE, TITLE_DEPTH) {
        Ok(mesh) => {
            commands.spawn((
                TitleText,
                Mesh3d(meshes.add(mesh)),
                MeshMaterial3d(assets.matcap_material.clone()),
                Transform::default(),
            ));
            info!("✓ title mesh ready: \"{}\"", manifest.title);
        }
        Err(err) => error!("title mesh generation failed: {err}"),
    }
}

/// Extrudes `title` into a centred triangle-list mesh with flat normals.
pub fn build_title_mesh(
    font_bytes: Vec<u8>,
    title: &str,
    size: f32,
    depth: f32,
) -> Result<Mesh, Box<dyn Error>> {
    // The generator borrows the font data for its whole lifetime; the title
    // is built once per run, so leaking the buffer is the cheapest way to
    // hand it a 'static slice.
    let font_bytes: &'static [u8] = Box::leak(font_bytes.into_boxed_slice());
    let mut generator = MeshGenerator::new(font_bytes);

    let glyph_transform = Mat4::from_scale(Vec3::new(size, size, depth)).to_cols_array();
    let text: MeshText = generator
        .generate_section(title, false, Some(&glyph_transform))
        .map_err(|err| err.to_string())?;

    let mut positions: Vec<[f32; 3]> = text
        .vertices
        .chunks_exact(3)
        .map(|vertex| [vertex[0], vertex[1], vertex[2]])
        .collect();
    center_positions(&mut positions);

    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.compute_flat_normals();
    Ok(mesh)
}

/// Translates positions so the bounding-box midpoint sits on the origin.
pub fn center_positions(positions: &mut [[f32; 3]]) {
    if positions.is_empty() {
        return;
    }

    let mut min = Vec3::splat(f32::MAX);
    let mut max = Vec3::splat(f32::MIN);
    for position in positions.iter() {
        min = min.min(Vec3::from_array(*position));
        max = max.max(Vec3::from_array(*position));
    }

    let center = (min + max) * 0.5;
    for position in positions.iter_mut() {
        position[0] -= center.x;
        position[1] -= center.y;
        position[2] -= center.z;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centering_moves_the_midpoint_to_the_origin() {
        let mut positions = vec![[1.0, 2.0, 3.0], [3.0, 6.0, 5.0], [2.0, 4.0, 4.0]];

        center_positions(&mut positions);

        assert_eq!(positions[0], [-1.0, -2.0, -1.0]);
        assert_eq!(positions[1], [1.0, 2.0, 1.0]);
        assert_eq!(positions[2], [0.0, 0.0, 0.0]);
    }

    #[test]
    fn centering_an_empty_slice_is_a_no_op() {
        let mut positions: Vec<[f32; 3]> = Vec::new();
        center_positions(&mut positions);
        assert!(positions.is_empty());
    }
}
