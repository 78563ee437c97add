// Host-side tests for the camera math.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod camera {
    include!("../src/core/camera.rs");
}

use camera::Camera;
use glam::Vec3;

fn default_camera() -> Camera {
    Camera {
        eye: Vec3::new(0.0, 0.0, 6.0),
        target: Vec3::ZERO,
        up: Vec3::Y,
        aspect: 16.0 / 9.0,
        fovy_radians: 35.0_f32.to_radians(),
        znear: 0.1,
        zfar: 100.0,
    }
}

#[test]
fn view_matrix_places_the_target_ahead() {
    let cam = default_camera();
    let v = cam.view_matrix();

    let eye_in_view = v.transform_point3(cam.eye);
    assert!(eye_in_view.length() < 1e-5);

    // looking down -z in view space, target sits at the eye distance
    let target_in_view = v.transform_point3(cam.target);
    assert!((target_in_view.z - -6.0).abs() < 1e-4);
    assert!(target_in_view.x.abs() < 1e-5);
    assert!(target_in_view.y.abs() < 1e-5);
}

#[test]
fn projection_scales_inversely_with_aspect() {
    let mut cam = default_camera();
    let wide = cam.projection_matrix();
    cam.aspect = 1.0;
    let square = cam.projection_matrix();

    let f = 1.0 / (cam.fovy_radians / 2.0).tan();
    assert!((square.x_axis.x - f).abs() < 1e-4);
    assert!((wide.x_axis.x - f / (16.0 / 9.0)).abs() < 1e-4);
    // vertical scale is aspect-independent
    assert!((square.y_axis.y - wide.y_axis.y).abs() < 1e-6);
}

#[test]
fn points_inside_the_frustum_project_inside_clip_space() {
    let cam = default_camera();
    let vp = cam.projection_matrix() * cam.view_matrix();
    let p = vp.project_point3(Vec3::new(0.5, 0.5, 0.0));
    assert!(p.x.abs() <= 1.0);
    assert!(p.y.abs() <= 1.0);
    assert!(p.z >= 0.0 && p.z <= 1.0);
}
