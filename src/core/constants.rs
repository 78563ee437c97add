/// Orbit and interaction tuning constants.
///
/// These express the motion model in one place: impulse scaling, the
/// per-tick decay filter, and the fixed circle the objects ride on.
// Scalar applied to raw wheel/touch pixel deltas
pub const IMPULSE_GAIN: f32 = 0.0002;

// Geometric decay applied to rotation speed once per tick
pub const SPEED_DECAY: f32 = 0.93;

// Number of objects riding the orbit circle
pub const ORBIT_COUNT: usize = 4;

// Orbit circle in the xz-plane
pub const ORBIT_CENTER_X: f32 = 2.0;
pub const ORBIT_CENTER_Z: f32 = -3.0;
pub const ORBIT_RADIUS: f32 = 3.8;

// Angular offset between consecutive objects
pub const ORBIT_PHASE_STEP: f32 = std::f32::consts::FRAC_PI_2;

// Continuous self-rotation rates (radians per second)
pub const SPIN_RATE_X: f32 = 0.1;
pub const SPIN_RATE_Y: f32 = 0.12;

// Camera nudge per unit of normalized cursor offset (units per second)
pub const PARALLAX_RATE: f32 = 2.0;
// Cap on the accumulated offset so cursor drift cannot walk the camera away
pub const PARALLAX_MAX_OFFSET: f32 = 1.5;
