// Host-side tests for the mesh and particle generators.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod mesh {
    include!("../src/core/mesh.rs");
}

use mesh::*;
use rand::SeedableRng;

fn assert_unit(n: [f32; 3]) {
    let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
    assert!((len - 1.0).abs() < 1e-4, "normal length {}", len);
}

#[test]
fn torus_has_expected_topology() {
    let m = torus(1.0, 0.4, 16, 60);
    assert_eq!(m.vertices.len(), 17 * 61);
    assert_eq!(m.indices.len(), 16 * 60 * 6);
    assert_eq!(m.index_count(), m.indices.len() as u32);
    let max = *m.indices.iter().max().unwrap();
    assert!((max as usize) < m.vertices.len());
}

#[test]
fn torus_vertices_lie_on_the_tube() {
    let radius = 1.0;
    let tube = 0.4;
    let m = torus(radius, tube, 16, 60);
    for v in &m.vertices {
        let [x, y, z] = v.position;
        let ring = (x * x + y * y).sqrt();
        assert!(
            ring >= radius - tube - 1e-4 && ring <= radius + tube + 1e-4,
            "ring distance {}",
            ring
        );
        assert!(z.abs() <= tube + 1e-4);
        assert_unit(v.normal);
    }
}

#[test]
fn torus_knot_has_expected_topology() {
    let m = torus_knot(0.8, 0.35, 100, 16, 2, 3);
    assert_eq!(m.vertices.len(), 101 * 17);
    assert_eq!(m.indices.len(), 100 * 16 * 6);
    let max = *m.indices.iter().max().unwrap();
    assert!((max as usize) < m.vertices.len());
}

#[test]
fn torus_knot_stays_bounded_with_unit_normals() {
    let m = torus_knot(0.8, 0.35, 100, 16, 2, 3);
    for v in &m.vertices {
        let [x, y, z] = v.position;
        let len = (x * x + y * y + z * z).sqrt();
        assert!(len < 2.0, "vertex escaped the knot envelope: {}", len);
        assert_unit(v.normal);
    }
}

#[test]
fn octahedron_is_flat_shaded_on_the_unit_sphere() {
    let m = octahedron(1.0);
    assert_eq!(m.vertices.len(), 8 * 3);
    assert_eq!(m.indices.len(), 8 * 3);

    for v in &m.vertices {
        let [x, y, z] = v.position;
        let len = (x * x + y * y + z * z).sqrt();
        assert!((len - 1.0).abs() < 1e-5, "corner off the sphere: {}", len);
        assert_unit(v.normal);
    }

    // one normal per face, pointing outward
    for face in m.vertices.chunks(3) {
        assert_eq!(face[0].normal, face[1].normal);
        assert_eq!(face[1].normal, face[2].normal);
        let cx = (face[0].position[0] + face[1].position[0] + face[2].position[0]) / 3.0;
        let cy = (face[0].position[1] + face[1].position[1] + face[2].position[1]) / 3.0;
        let cz = (face[0].position[2] + face[1].position[2] + face[2].position[2]) / 3.0;
        let [nx, ny, nz] = face[0].normal;
        assert!(cx * nx + cy * ny + cz * nz > 0.0, "face normal points inward");
    }
}

#[test]
fn icosahedron_is_flat_shaded_on_the_sphere() {
    let radius = 1.3;
    let m = icosahedron(radius);
    assert_eq!(m.vertices.len(), 20 * 3);
    assert_eq!(m.indices.len(), 20 * 3);

    for v in &m.vertices {
        let [x, y, z] = v.position;
        let len = (x * x + y * y + z * z).sqrt();
        assert!((len - radius).abs() < 1e-4);
        assert_unit(v.normal);
    }
    for face in m.vertices.chunks(3) {
        assert_eq!(face[0].normal, face[1].normal);
        assert_eq!(face[1].normal, face[2].normal);
        let cx = (face[0].position[0] + face[1].position[0] + face[2].position[0]) / 3.0;
        let cy = (face[0].position[1] + face[1].position[1] + face[2].position[1]) / 3.0;
        let cz = (face[0].position[2] + face[1].position[2] + face[2].position[2]) / 3.0;
        let [nx, ny, nz] = face[0].normal;
        assert!(cx * nx + cy * ny + cz * nz > 0.0, "face normal points inward");
    }
}

#[test]
fn particles_fill_the_spread_box() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let pts = particles(700, 5.0, &mut rng);
    assert_eq!(pts.len(), 700);
    for p in &pts {
        for c in p {
            assert!(*c >= -5.0 && *c <= 5.0, "coordinate out of range: {}", c);
        }
    }
}

#[test]
fn particles_are_deterministic_per_seed() {
    let mut a = rand::rngs::StdRng::seed_from_u64(42);
    let mut b = rand::rngs::StdRng::seed_from_u64(42);
    let mut c = rand::rngs::StdRng::seed_from_u64(43);
    let pa = particles(64, 5.0, &mut a);
    let pb = particles(64, 5.0, &mut b);
    let pc = particles(64, 5.0, &mut c);
    assert_eq!(pa, pb);
    assert_ne!(pa, pc);
}
