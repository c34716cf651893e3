use bevy::prelude::*;
use rand::Rng;

use constants::scene::{DRIFT_BOUND, DRIFT_SPEED_LIMIT, ROTATION_RATE_LIMIT};

/// Fixed per-knot animation parameters, sampled once at spawn.
///
/// `rotation_rate` never changes after construction. `velocity` keeps its
/// magnitude for the knot's whole lifetime; boundary reflection only flips
/// per-axis signs.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct DriftDynamics {
    pub rotation_rate: Vec2,
    pub velocity: Vec3,
}

impl DriftDynamics {
    pub fn sample(rng: &mut impl Rng) -> Self {
        Self {
            rotation_rate: Vec2::new(
                rng.gen_range(-ROTATION_RATE_LIMIT..ROTATION_RATE_LIMIT),
                rng.gen_range(-ROTATION_RATE_LIMIT..ROTATION_RATE_LIMIT),
            ),
            velocity: Vec3::new(
                rng.gen_range(-DRIFT_SPEED_LIMIT..DRIFT_SPEED_LIMIT),
                rng.gen_range(-DRIFT_SPEED_LIMIT..DRIFT_SPEED_LIMIT),
                rng.gen_range(-DRIFT_SPEED_LIMIT..DRIFT_SPEED_LIMIT),
            ),
        }
    }
}

/// Advance one knot by one frame.
///
/// Rotation is recomputed from the absolute elapsed time, so repeat calls
/// with the same timestamp are idempotent. The position increment happens
/// before the boundary check, and the check is level-triggered: a knot that
/// stays outside the ±bound band has its velocity sign flipped again on
/// every call while it remains there.
pub fn advance(transform: &mut Transform, drift: &mut DriftDynamics, elapsed_seconds: f32) {
    transform.rotation = Quat::from_euler(
        EulerRot::XYZ,
        elapsed_seconds * drift.rotation_rate.x,
        elapsed_seconds * drift.rotation_rate.y,
        0.0,
    );

    transform.translation += drift.velocity;

    let position = transform.translation;
    if position.x >= DRIFT_BOUND || position.x <= -DRIFT_BOUND {
        drift.velocity.x = -drift.velocity.x;
    }
    if position.y >= DRIFT_BOUND || position.y <= -DRIFT_BOUND {
        drift.velocity.y = -drift.velocity.y;
    }
    if position.z >= DRIFT_BOUND || position.z <= -DRIFT_BOUND {
        drift.velocity.z = -drift.velocity.z;
    }
}

/// Per-frame pass over every drifting knot. Runs in `Update`, which bevy
/// finishes before render extraction reads the transforms for the frame.
pub fn drift_system(time: Res<Time>, mut knots: Query<(&mut Transform, &mut DriftDynamics)>) {
    let elapsed = time.elapsed_secs();
    for (mut transform, mut drift) in &mut knots {
        advance(&mut transform, &mut drift, elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn knot(position: Vec3, velocity: Vec3, rotation_rate: Vec2) -> (Transform, DriftDynamics) {
        (
            Transform::from_translation(position),
            DriftDynamics {
                rotation_rate,
                velocity,
            },
        )
    }

    #[test]
    fn rotation_is_absolute_not_accumulated() {
        let (mut transform, mut drift) = knot(Vec3::ZERO, Vec3::ZERO, Vec2::new(3.0, -1.5));

        advance(&mut transform, &mut drift, 2.0);
        let first = transform.rotation;
        advance(&mut transform, &mut drift, 2.0);

        assert_eq!(transform.rotation, first);
        assert_eq!(
            first,
            Quat::from_euler(EulerRot::XYZ, 2.0 * 3.0, 2.0 * -1.5, 0.0)
        );
    }

    #[test]
    fn position_increments_by_exactly_one_velocity_step() {
        let velocity = Vec3::new(0.01, -0.02, 0.03);
        let (mut transform, mut drift) = knot(Vec3::new(1.0, 2.0, 3.0), velocity, Vec2::ZERO);
        let before = transform.translation;

        advance(&mut transform, &mut drift, 0.5);

        assert_eq!(transform.translation, before + velocity);
    }

    #[test]
    fn crossing_the_wall_reflects_that_axis_only() {
        let (mut transform, mut drift) = knot(
            Vec3::new(9.98, 0.0, 0.0),
            Vec3::new(0.04, 0.01, 0.0),
            Vec2::ZERO,
        );

        advance(&mut transform, &mut drift, 1.0);

        // No clamping: the knot ends up past the wall, only the sign flips.
        assert!((transform.translation.x - 10.02).abs() < 1e-4);
        assert_eq!(drift.velocity.x, -0.04);
        assert_eq!(drift.velocity.y, 0.01);
        assert_eq!(drift.velocity.z, 0.0);
    }

    #[test]
    fn negative_wall_reflects_too() {
        let (mut transform, mut drift) = knot(
            Vec3::new(0.0, -9.99, 0.0),
            Vec3::new(0.0, -0.02, 0.0),
            Vec2::ZERO,
        );

        advance(&mut transform, &mut drift, 1.0);

        assert!(transform.translation.y < -10.0);
        assert_eq!(drift.velocity.y, 0.02);
    }

    #[test]
    fn parked_outside_the_band_reflips_every_frame() {
        // Level-triggered check: two calls double-negate back to the
        // original sign while the knot stays beyond the wall.
        let (mut transform, mut drift) = knot(
            Vec3::new(10.5, 0.0, 0.0),
            Vec3::new(0.001, 0.0, 0.0),
            Vec2::ZERO,
        );

        advance(&mut transform, &mut drift, 1.0);
        assert_eq!(drift.velocity.x, -0.001);

        advance(&mut transform, &mut drift, 2.0);
        assert_eq!(drift.velocity.x, 0.001);
    }

    #[test]
    fn sampled_dynamics_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..300 {
            let drift = DriftDynamics::sample(&mut rng);
            for rate in drift.rotation_rate.to_array() {
                assert!((-ROTATION_RATE_LIMIT..ROTATION_RATE_LIMIT).contains(&rate));
            }
            for speed in drift.velocity.to_array() {
                assert!((-DRIFT_SPEED_LIMIT..DRIFT_SPEED_LIMIT).contains(&speed));
            }
        }
    }

    #[test]
    fn drifts_to_the_wall_and_bounces_once() {
        // 2^-5 per step is exactly representable, so 320 steps land on the
        // wall with no float drift and the >= check fires exactly there.
        let step = 1.0 / 60.0;
        let (mut transform, mut drift) = knot(
            Vec3::ZERO,
            Vec3::new(0.03125, 0.0, 0.0),
            Vec2::new(2.0, 0.0),
        );

        for frame in 1..320 {
            advance(&mut transform, &mut drift, frame as f32 * step);
            assert_eq!(drift.velocity.x, 0.03125);
        }

        advance(&mut transform, &mut drift, 320.0 * step);

        assert_eq!(transform.translation.x, 10.0);
        assert_eq!(drift.velocity.x, -0.03125);
        assert_eq!(
            transform.rotation,
            Quat::from_euler(EulerRot::XYZ, 320.0 * step * 2.0, 0.0, 0.0)
        );

        // The next step moves back inside the band, so no further flip.
        advance(&mut transform, &mut drift, 321.0 * step);
        assert_eq!(drift.velocity.x, -0.03125);
    }
}
