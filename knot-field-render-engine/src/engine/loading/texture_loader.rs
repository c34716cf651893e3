use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use constants::render_settings::FALLBACK_MATCAP_SIZE;

use crate::engine::assets::scene_assets::SceneAssets;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::shaders::MatcapMaterial;

/// Track the matcap texture; on failure swap the generated fallback into
/// the shared material so every mesh still shades.
pub fn check_matcap_loading(
    mut progress: ResMut<LoadingProgress>,
    assets: Res<SceneAssets>,
    asset_server: Res<AssetServer>,
    mut images: ResMut<Assets<Image>>,
    mut materials: ResMut<Assets<MatcapMaterial>>,
) {
    if progress.matcap_resolved {
        return;
    }

    match asset_server.get_load_state(&assets.matcap_texture) {
        Some(LoadState::Loaded) => {
            info!("✓ matcap texture loaded");
            progress.matcap_resolved = true;
        }
        Some(LoadState::Failed(err)) => {
            warn!("matcap texture unavailable, shading with generated fallback: {err}");
            let fallback = images.add(fallback_matcap_image());
            if let Some(material) = materials.get_mut(&assets.matcap_material) {
                material.matcap = fallback;
            }
            progress.matcap_resolved = true;
        }
        _ => {}
    }
}

/// Stand-in for a real matcap capture: a lit hemisphere with a specular
/// highlight, sampled by view-space normal like any other matcap.
pub fn fallback_matcap_image() -> Image {
    let size = FALLBACK_MATCAP_SIZE;
    let mut data = Vec::with_capacity((size * size * 4) as usize);

    let light = Vec3::new(0.45, 0.55, 0.7).normalize();
    let base = Vec3::new(0.62, 0.65, 0.72);

    for y in 0..size {
        for x in 0..size {
            let nx = (x as f32 + 0.5) / size as f32 * 2.0 - 1.0;
            let ny = 1.0 - (y as f32 + 0.5) / size as f32 * 2.0;
            let r2 = nx * nx + ny * ny;

            let colour = if r2 >= 1.0 {
                // Outside the unit sphere; only sampled by grazing normals.
                Vec3::splat(0.05)
            } else {
                let normal = Vec3::new(nx, ny, (1.0 - r2).sqrt());
                let diffuse = normal.dot(light).max(0.0);
                let half = (light + Vec3::Z).normalize();
                let specular = normal.dot(half).max(0.0).powf(48.0);
                base * (0.2 + 0.8 * diffuse) + Vec3::splat(specular * 0.6)
            };

            data.push((colour.x.clamp(0.0, 1.0) * 255.0) as u8);
            data.push((colour.y.clamp(0.0, 1.0) * 255.0) as u8);
            data.push((colour.z.clamp(0.0, 1.0) * 255.0) as u8);
            data.push(255);
        }
    }

    Image::new(
        Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_matcap_has_expected_shape() {
        let image = fallback_matcap_image();

        assert_eq!(image.texture_descriptor.size.width, FALLBACK_MATCAP_SIZE);
        assert_eq!(image.texture_descriptor.size.height, FALLBACK_MATCAP_SIZE);
        assert_eq!(
            image.texture_descriptor.format,
            TextureFormat::Rgba8UnormSrgb
        );
        assert_eq!(
            image.data.as_ref().map(|data| data.len()),
            Some((FALLBACK_MATCAP_SIZE * FALLBACK_MATCAP_SIZE * 4) as usize)
        );
    }

    #[test]
    fn fallback_matcap_is_brightest_toward_the_light() {
        let image = fallback_matcap_image();
        let data = image.data.as_ref().unwrap();
        let size = FALLBACK_MATCAP_SIZE as usize;

        // Upper-right quadrant faces the light, lower-left faces away.
        let lit = ((size / 4) * size + size * 3 / 4) * 4;
        let shadowed = ((size * 3 / 4) * size + size / 4) * 4;
        assert!(data[lit] > data[shadowed]);
    }
}
