use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use constants::scene::{
    KNOT_MAJOR_RESOLUTION, KNOT_MINOR_RESOLUTION, KNOT_RING_RADIUS, KNOT_TUBE_RADIUS,
    SPAWN_HALF_EXTENT,
};

use crate::engine::assets::scene_assets::SceneAssets;
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::drift::DriftDynamics;
use crate::engine::loading::progress::LoadingProgress;

/// Marker for the drifting knot meshes.
#[derive(Component)]
pub struct Knot;

/// Spawn-time placement sample for one knot.
#[derive(Debug, Clone, PartialEq)]
pub struct KnotPlacement {
    pub position: Vec3,
    pub scale: f32,
    /// Initial rotation about X and Y. Overwritten by the first drift pass,
    /// kept so the field does not spawn in a uniform orientation.
    pub tilt: Vec2,
}

impl KnotPlacement {
    pub fn sample(rng: &mut impl Rng) -> Self {
        Self {
            position: Vec3::new(
                rng.gen_range(-SPAWN_HALF_EXTENT..SPAWN_HALF_EXTENT),
                rng.gen_range(-SPAWN_HALF_EXTENT..SPAWN_HALF_EXTENT),
                rng.gen_range(-SPAWN_HALF_EXTENT..SPAWN_HALF_EXTENT),
            ),
            scale: rng.gen_range(0.0..1.0),
            tilt: Vec2::new(
                rng.gen_range(0.0..std::f32::consts::PI),
                rng.gen_range(0.0..std::f32::consts::PI),
            ),
        }
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position)
            .with_rotation(Quat::from_euler(
                EulerRot::XYZ,
                self.tilt.x,
                self.tilt.y,
                0.0,
            ))
            .with_scale(Vec3::splat(self.scale))
    }
}

/// The torus mesh every knot instances.
pub fn create_knot_mesh() -> Mesh {
    Torus::new(
        KNOT_RING_RADIUS - KNOT_TUBE_RADIUS,
        KNOT_RING_RADIUS + KNOT_TUBE_RADIUS,
    )
    .mesh()
    .minor_resolution(KNOT_MINOR_RESOLUTION)
    .major_resolution(KNOT_MAJOR_RESOLUTION)
    .into()
}

/// Spawns the knot field once the manifest has resolved. Each knot shares
/// the torus mesh and matcap material and carries its own sampled placement
/// and drift dynamics; nothing despawns them for the life of the app.
pub fn spawn_knot_field_when_ready(
    mut progress: ResMut<LoadingProgress>,
    manifest: Option<Res<SceneManifest>>,
    assets: Res<SceneAssets>,
    mut commands: Commands,
) {
    if progress.knots_spawned {
        return;
    }
    let Some(manifest) = manifest else {
        return;
    };

    let mut rng = match manifest.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for _ in 0..manifest.knot_count {
        let placement = KnotPlacement::sample(&mut rng);
        commands.spawn((
            Knot,
            Mesh3d(assets.knot_mesh.clone()),
            MeshMaterial3d(assets.matcap_material.clone()),
            placement.transform(),
            DriftDynamics::sample(&mut rng),
        ));
    }

    info!("✓ knot field spawned: {} knots", manifest.knot_count);
    progress.knots_spawned = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampled_placements_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..300 {
            let placement = KnotPlacement::sample(&mut rng);
            for axis in placement.position.to_array() {
                assert!((-SPAWN_HALF_EXTENT..SPAWN_HALF_EXTENT).contains(&axis));
            }
            assert!((0.0..1.0).contains(&placement.scale));
            for tilt in placement.tilt.to_array() {
                assert!((0.0..std::f32::consts::PI).contains(&tilt));
            }
        }
    }

    #[test]
    fn placement_transform_applies_uniform_scale() {
        let placement = KnotPlacement {
            position: Vec3::new(1.0, -2.0, 3.0),
            scale: 0.25,
            tilt: Vec2::ZERO,
        };

        let transform = placement.transform();

        assert_eq!(transform.translation, placement.position);
        assert_eq!(transform.scale, Vec3::splat(0.25));
        assert_eq!(transform.rotation, Quat::IDENTITY);
    }
}
