//! Procedural meshes for tests and benchmarks.
//!
//! Deterministic and resolution-configurable. Triangles are wound
//! counter-clockwise when seen from the side the surface faces.

use std::f32::consts::PI;

use crate::mesh::TriangleMesh;

/// Generates a flat quad grid in the XY plane, facing +Z.
///
/// The grid spans `[-width/2, width/2]` in X and `[-height/2, height/2]` in Y
/// at Z=0. Normals are left empty.
///
/// # Example
/// ```
/// use meshnorm::generators::quad_grid;
/// let mesh = quad_grid(2, 2, 1.0, 1.0);
/// assert_eq!(mesh.num_vertices(), 9);
/// assert_eq!(mesh.num_triangles(), 8);
/// ```
pub fn quad_grid(cols: usize, rows: usize, width: f32, height: f32) -> TriangleMesh {
    let verts_x = cols + 1;
    let verts_y = rows + 1;
    let mut mesh = TriangleMesh::with_capacity(verts_x * verts_y, cols * rows * 2);

    let half_w = width / 2.0;
    let half_h = height / 2.0;

    for j in 0..verts_y {
        for i in 0..verts_x {
            let u = i as f32 / cols.max(1) as f32;
            let v = j as f32 / rows.max(1) as f32;
            mesh.vertices.extend_from_slice(&[-half_w + u * width, half_h - v * height, 0.0]);
        }
    }

    for j in 0..rows {
        for i in 0..cols {
            let top_left = (j * verts_x + i) as u32;
            let top_right = top_left + 1;
            let bot_left = top_left + verts_x as u32;
            let bot_right = bot_left + 1;

            mesh.indices.extend_from_slice(&[top_left, bot_left, top_right]);
            mesh.indices.extend_from_slice(&[top_right, bot_left, bot_right]);
        }
    }

    mesh
}

/// Generates a UV sphere centered at the origin, facing outward.
///
/// `stacks` are latitude bands from +Y to -Y, `slices` are longitude bands.
/// Each pole is a single vertex shared by a triangle fan; the seam column is
/// duplicated.
pub fn uv_sphere(radius: f32, stacks: usize, slices: usize) -> TriangleMesh {
    let stacks = stacks.max(2);
    let slices = slices.max(3);
    let ring_len = slices + 1;
    let rings = stacks - 1;
    let mut mesh = TriangleMesh::with_capacity(2 + rings * ring_len, 2 * slices * rings);

    let top = 0u32;
    mesh.vertices.extend_from_slice(&[0.0, radius, 0.0]);
    for i in 1..stacks {
        let phi = PI * i as f32 / stacks as f32;
        let (sin_phi, cos_phi) = phi.sin_cos();
        for j in 0..=slices {
            let theta = 2.0 * PI * j as f32 / slices as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();
            mesh.vertices.extend_from_slice(&[
                radius * sin_phi * cos_theta,
                radius * cos_phi,
                radius * sin_phi * sin_theta,
            ]);
        }
    }
    let bottom = (1 + rings * ring_len) as u32;
    mesh.vertices.extend_from_slice(&[0.0, -radius, 0.0]);

    let ring = |k: usize, j: usize| (1 + k * ring_len + j) as u32;

    for j in 0..slices {
        mesh.indices.extend_from_slice(&[top, ring(0, j + 1), ring(0, j)]);
    }
    for k in 0..rings - 1 {
        for j in 0..slices {
            let a = ring(k, j);
            let b = ring(k + 1, j);
            mesh.indices.extend_from_slice(&[a, a + 1, b]);
            mesh.indices.extend_from_slice(&[a + 1, b + 1, b]);
        }
    }
    for j in 0..slices {
        let a = ring(rings - 1, j);
        mesh.indices.extend_from_slice(&[a, a + 1, bottom]);
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::NormalSettings;
    use approx::assert_relative_eq;
    use meshnorm_math::{load_vec3, Vec3f};

    #[test]
    fn test_quad_grid_counts() {
        let mesh = quad_grid(4, 3, 2.0, 1.0);
        assert_eq!(mesh.num_vertices(), 20);
        assert_eq!(mesh.num_triangles(), 24);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.num_vertices()));
    }

    #[test]
    fn test_quad_grid_faces_up() {
        let mut mesh = quad_grid(5, 5, 3.0, 2.0);
        let report = mesh.recompute_normals(&NormalSettings::default()).unwrap();
        assert_eq!(report.zero_normals, 0);
        for v in 0..mesh.num_vertices() {
            let n = load_vec3(&mesh.normals, v).unwrap();
            assert_relative_eq!(n, Vec3f::z(), epsilon = 1e-6);
        }
    }

    #[test]
    fn test_uv_sphere_counts() {
        let mesh = uv_sphere(1.0, 8, 16);
        // Two poles plus seven rings of 17
        assert_eq!(mesh.num_vertices(), 2 + 7 * 17);
        assert_eq!(mesh.num_triangles(), 2 * 16 * 7);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.num_vertices()));
    }

    #[test]
    fn test_uv_sphere_normals_point_outward() {
        let radius = 2.5;
        let mut mesh = uv_sphere(radius, 16, 32);
        let report = mesh.recompute_normals(&NormalSettings::default()).unwrap();
        assert_eq!(report.skipped_triangles, 0);
        assert_eq!(report.zero_normals, 0);

        for v in 0..mesh.num_vertices() {
            let p = load_vec3(&mesh.vertices, v).unwrap();
            let n = load_vec3(&mesh.normals, v).unwrap();
            assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-5);
            let radial = p / radius;
            assert!(
                n.dot(&radial) > 0.95,
                "vertex {} normal {:?} not radial at {:?}",
                v,
                n,
                p
            );
        }
    }
}
