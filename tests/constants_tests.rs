// Host-side tests for tuning constants and configuration defaults.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod config {
    include!("../src/core/config.rs");
}

use config::{InputSource, SceneConfig};
use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_constants_are_within_bounds() {
    // the decay filter must actually decay
    assert!(SPEED_DECAY > 0.0 && SPEED_DECAY < 1.0);
    assert!(IMPULSE_GAIN > 0.0);

    assert_eq!(ORBIT_COUNT, 4);
    assert!(ORBIT_RADIUS > 0.0);
    assert!((ORBIT_PHASE_STEP - std::f32::consts::FRAC_PI_2).abs() < 1e-7);

    assert!(SPIN_RATE_X > 0.0);
    assert!(SPIN_RATE_Y > 0.0);

    assert!(PARALLAX_RATE > 0.0);
    assert!(PARALLAX_MAX_OFFSET > 0.0);
}

#[test]
fn four_phases_cover_the_full_circle() {
    let total = ORBIT_PHASE_STEP * ORBIT_COUNT as f32;
    assert!((total - std::f32::consts::TAU).abs() < 1e-6);
}

#[test]
fn default_profile_is_consistent() {
    let cfg = SceneConfig::default();
    assert!(cfg.mobile_breakpoint > 0.0);
    // mobile pulls the camera back and shrinks the scene
    assert!(cfg.far_camera_z > cfg.near_camera_z);
    assert!(cfg.mobile_scale > 0.0 && cfg.mobile_scale <= 1.0);
    assert!(cfg.particles_mobile < cfg.particles_desktop);
    assert!(cfg.frame_rate_cap.is_none());
    assert!(!cfg.parallax);
    assert_eq!(cfg.input_source, InputSource::BreakpointGated);
}

#[test]
fn capped_profile_keeps_sane_intervals() {
    let cfg = SceneConfig {
        frame_rate_cap: Some(30.0),
        ..SceneConfig::default()
    };
    let interval_ms = 1000.0 / cfg.frame_rate_cap.unwrap();
    assert!(interval_ms > 16.0 && interval_ms < 100.0);
}
