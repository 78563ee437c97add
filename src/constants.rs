/// Presentation constants: camera framing, lighting, geometry detail, and
/// canvas sizing. Motion tuning lives in `core::constants`.
// Canvas backing-store pixel ratio cap
pub const PIXEL_RATIO_CAP: f64 = 2.0;

// Camera framing
pub const CAMERA_FOV_DEG: f32 = 35.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Directional light: position-style direction toward the origin
pub const LIGHT_DIR: [f32; 3] = [0.5, 1.0, 0.0];
pub const LIGHT_INTENSITY: f32 = 5.0;

// Geometry detail
pub const TORUS_RADIUS: f32 = 1.0;
pub const TORUS_TUBE: f32 = 0.4;
pub const TORUS_RADIAL_SEGMENTS: usize = 16;
pub const TORUS_TUBULAR_SEGMENTS: usize = 60;

pub const KNOT_RADIUS: f32 = 0.8;
pub const KNOT_TUBE: f32 = 0.35;
pub const KNOT_TUBULAR_SEGMENTS: usize = 100;
pub const KNOT_RADIAL_SEGMENTS: usize = 16;
pub const KNOT_P: u32 = 2;
pub const KNOT_Q: u32 = 3;

pub const POLYHEDRON_RADIUS: f32 = 1.0;

// Ambient particle field
pub const PARTICLE_SPREAD: f32 = 5.0;
pub const PARTICLE_SIZE: f32 = 0.025;
