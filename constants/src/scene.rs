/// Number of drifting knot meshes spawned when no manifest override is given
pub const KNOT_COUNT: usize = 300;

/// Half-extent of the cubic region knots are initially scattered over, per axis
pub const SPAWN_HALF_EXTENT: f32 = 7.5;

/// Symmetric reflecting wall for drifting knots; crossing ±bound flips the
/// velocity sign on that axis
pub const DRIFT_BOUND: f32 = 10.0;

/// Per-axis rotation rate is sampled uniformly from [-limit, limit), in rad/s
pub const ROTATION_RATE_LIMIT: f32 = 5.0;

/// Per-axis drift velocity is sampled uniformly from [-limit, limit), in
/// world units per frame
pub const DRIFT_SPEED_LIMIT: f32 = 0.04;

/// Distance from the torus centre to the centre of the tube
pub const KNOT_RING_RADIUS: f32 = 0.3;

/// Radius of the torus tube itself
pub const KNOT_TUBE_RADIUS: f32 = 0.2;

/// Segment count around the tube cross-section
pub const KNOT_MINOR_RESOLUTION: usize = 20;

/// Segment count around the ring
pub const KNOT_MAJOR_RESOLUTION: usize = 45;
