use glam::Vec3;
use std::f32::consts::TAU;

/// Interleaved vertex layout shared by every mesh pipeline.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Indexed triangle mesh ready for upload.
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// Ring torus in the xy-plane with smooth normals.
pub fn torus(radius: f32, tube: f32, radial_segments: usize, tubular_segments: usize) -> MeshData {
    let mut vertices = Vec::with_capacity((radial_segments + 1) * (tubular_segments + 1));
    let mut indices = Vec::with_capacity(radial_segments * tubular_segments * 6);

    for j in 0..=radial_segments {
        let v = j as f32 / radial_segments as f32 * TAU;
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * TAU;
            let ring = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            let pos = Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            let normal = (pos - ring).normalize();
            vertices.push(Vertex {
                position: pos.to_array(),
                normal: normal.to_array(),
            });
        }
    }

    let stride = tubular_segments as u32 + 1;
    for j in 1..=radial_segments as u32 {
        for i in 1..=tubular_segments as u32 {
            let a = stride * j + i - 1;
            let b = stride * (j - 1) + i - 1;
            let c = stride * (j - 1) + i;
            let d = stride * j + i;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    MeshData { vertices, indices }
}

// Point on the (p, q) torus knot curve at parameter u.
fn knot_point(u: f32, p: u32, q: u32, radius: f32) -> Vec3 {
    let quotient = q as f32 / p as f32 * u;
    let cs = quotient.cos();
    Vec3::new(
        radius * (2.0 + cs) * 0.5 * u.cos(),
        radius * (2.0 + cs) * 0.5 * u.sin(),
        radius * quotient.sin() * 0.5,
    )
}

/// Tube swept along a (p, q) torus knot. Frames come from finite
/// differences along the curve, which is plenty stable at these segment
/// counts.
pub fn torus_knot(
    radius: f32,
    tube: f32,
    tubular_segments: usize,
    radial_segments: usize,
    p: u32,
    q: u32,
) -> MeshData {
    let mut vertices = Vec::with_capacity((tubular_segments + 1) * (radial_segments + 1));
    let mut indices = Vec::with_capacity(tubular_segments * radial_segments * 6);

    for i in 0..=tubular_segments {
        let u = i as f32 / tubular_segments as f32 * p as f32 * TAU;
        let p1 = knot_point(u, p, q, radius);
        let p2 = knot_point(u + 0.01, p, q, radius);

        let tangent = p2 - p1;
        let bitangent = tangent.cross(p2 + p1).normalize();
        let normal = bitangent.cross(tangent).normalize();

        for j in 0..=radial_segments {
            let v = j as f32 / radial_segments as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            let pos = p1 + cx * normal + cy * bitangent;
            let n = (pos - p1).normalize();
            vertices.push(Vertex {
                position: pos.to_array(),
                normal: n.to_array(),
            });
        }
    }

    let stride = radial_segments as u32 + 1;
    for j in 1..=tubular_segments as u32 {
        for i in 1..=radial_segments as u32 {
            let a = stride * (j - 1) + i - 1;
            let b = stride * j + i - 1;
            let c = stride * j + i;
            let d = stride * (j - 1) + i;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    MeshData { vertices, indices }
}

// Flat-shaded convex polyhedron: corner positions are projected onto the
// bounding sphere and every face gets its own three vertices.
fn polyhedron(corners: &[Vec3], faces: &[[usize; 3]], radius: f32) -> MeshData {
    let mut vertices = Vec::with_capacity(faces.len() * 3);
    let mut indices = Vec::with_capacity(faces.len() * 3);

    for face in faces {
        let a = corners[face[0]].normalize() * radius;
        let b = corners[face[1]].normalize() * radius;
        let c = corners[face[2]].normalize() * radius;
        let normal = (b - a).cross(c - a).normalize();
        for pos in [a, b, c] {
            indices.push(vertices.len() as u32);
            vertices.push(Vertex {
                position: pos.to_array(),
                normal: normal.to_array(),
            });
        }
    }

    MeshData { vertices, indices }
}

pub fn octahedron(radius: f32) -> MeshData {
    let corners = [
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(-1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, -1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(0.0, 0.0, -1.0),
    ];
    let faces = [
        [0, 2, 4],
        [0, 4, 3],
        [0, 3, 5],
        [0, 5, 2],
        [1, 2, 5],
        [1, 5, 3],
        [1, 3, 4],
        [1, 4, 2],
    ];
    polyhedron(&corners, &faces, radius)
}

pub fn icosahedron(radius: f32) -> MeshData {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let corners = [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ];
    let faces = [
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];
    polyhedron(&corners, &faces, radius)
}

/// Uniformly scattered particle positions, each coordinate in
/// [-spread, spread].
pub fn particles<R: rand::Rng>(count: usize, spread: f32, rng: &mut R) -> Vec<[f32; 3]> {
    (0..count)
        .map(|_| {
            [
                (rng.gen::<f32>() - 0.5) * 2.0 * spread,
                (rng.gen::<f32>() - 0.5) * 2.0 * spread,
                (rng.gen::<f32>() - 0.5) * 2.0 * spread,
            ]
        })
        .collect()
}
