//! Owned triangle mesh with flat buffers.

use crate::error::{NormalsError, Result};
use crate::normals::{compute_normals_with, NormalReport};
use crate::settings::NormalSettings;

/// Triangle mesh stored as flat buffers.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleMesh {
    /// Flat array of vertex positions: `[x0, y0, z0, x1, y1, z1, ...]` (f32).
    pub vertices: Vec<f32>,
    /// Flat array of triangle indices: `[i0, i1, i2, ...]` (u32).
    pub indices: Vec<u32>,
    /// Flat array of vertex normals: `[nx0, ny0, nz0, ...]` (f32). Same length as vertices
    /// once [`TriangleMesh::recompute_normals`] has run.
    pub normals: Vec<f32>,
}

impl TriangleMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            normals: Vec::new(),
        }
    }

    /// Create a mesh from positions and indices, with no normals yet.
    pub fn from_buffers(vertices: Vec<f32>, indices: Vec<u32>) -> Self {
        Self {
            vertices,
            indices,
            normals: Vec::new(),
        }
    }

    /// Create an empty mesh with room for `vertices` vertices and `triangles` triangles.
    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices * 3),
            indices: Vec::with_capacity(triangles * 3),
            normals: Vec::with_capacity(vertices * 3),
        }
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len() / 3
    }

    fn has_vertex_normals(&self) -> bool {
        self.normals.len() == self.vertices.len()
    }

    /// Merge another mesh into this one.
    ///
    /// Normals are concatenated only when both meshes have one per vertex;
    /// otherwise they are cleared so they cannot be read against the wrong
    /// vertices. Recompute them afterwards if the two meshes share seams.
    ///
    /// Fails without modifying `self` if a shifted index would not fit in `u32`.
    pub fn merge(&mut self, other: &TriangleMesh) -> Result<()> {
        let offset = u32::try_from(self.num_vertices()).map_err(|_| {
            NormalsError::InvalidArgument(format!(
                "vertex count {} does not fit in u32 indices",
                self.num_vertices()
            ))
        })?;
        let indices: Vec<u32> = other
            .indices
            .iter()
            .map(|&i| i.checked_add(offset))
            .collect::<Option<_>>()
            .ok_or_else(|| {
                NormalsError::InvalidArgument(format!(
                    "merged index overflows u32 at vertex offset {}",
                    offset
                ))
            })?;

        if self.has_vertex_normals() && other.has_vertex_normals() {
            self.normals.extend_from_slice(&other.normals);
        } else {
            self.normals.clear();
        }
        self.vertices.extend_from_slice(&other.vertices);
        self.indices.extend(indices);
        Ok(())
    }

    /// Recompute vertex normals from the current positions and indices.
    ///
    /// Resizes `normals` to match `vertices` before running the kernel.
    pub fn recompute_normals(&mut self, settings: &NormalSettings) -> Result<NormalReport> {
        self.normals.resize(self.vertices.len(), 0.0);
        compute_normals_with(&self.vertices, &self.indices, &mut self.normals, settings)
    }
}

impl Default for TriangleMesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_triangle() -> TriangleMesh {
        TriangleMesh::from_buffers(vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0], vec![0, 1, 2])
    }

    #[test]
    fn test_counts() {
        let mesh = make_triangle();
        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.num_triangles(), 1);
        assert!(TriangleMesh::default().vertices.is_empty());
    }

    #[test]
    fn test_recompute_sizes_normals() {
        let mut mesh = make_triangle();
        let report = mesh.recompute_normals(&NormalSettings::default()).unwrap();
        assert_eq!(mesh.normals.len(), 9);
        assert_eq!(report.vertex_count, 3);
        assert_eq!(&mesh.normals[6..9], &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_recompute_shrinks_stale_normals() {
        let mut mesh = make_triangle();
        mesh.normals = vec![1.0; 30];
        mesh.recompute_normals(&NormalSettings::default()).unwrap();
        assert_eq!(mesh.normals.len(), 9);
    }

    #[test]
    fn test_recompute_rejects_ragged_positions() {
        let mut mesh = make_triangle();
        mesh.vertices.push(4.0);
        let err = mesh.recompute_normals(&NormalSettings::default()).unwrap_err();
        assert!(matches!(err, NormalsError::InvalidArgument(_)));
    }

    #[test]
    fn test_merge_offsets_indices() {
        let mut a = make_triangle();
        let b = make_triangle();
        a.merge(&b).unwrap();
        assert_eq!(a.num_vertices(), 6);
        assert_eq!(a.indices, vec![0, 1, 2, 3, 4, 5]);

        a.recompute_normals(&NormalSettings::default()).unwrap();
        for v in 0..6 {
            assert_eq!(&a.normals[v * 3..v * 3 + 3], &[0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn test_merge_keeps_aligned_normals() {
        let mut a = make_triangle();
        let mut b = make_triangle();
        a.recompute_normals(&NormalSettings::default()).unwrap();
        b.recompute_normals(&NormalSettings::default()).unwrap();
        a.merge(&b).unwrap();
        assert_eq!(a.normals.len(), a.vertices.len());
        assert_eq!(&a.normals[15..18], &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_merge_clears_misaligned_normals() {
        // Only the second mesh has normals
        let mut a = make_triangle();
        let mut b = make_triangle();
        b.recompute_normals(&NormalSettings::default()).unwrap();
        a.merge(&b).unwrap();
        assert!(a.normals.is_empty());

        // Only the first mesh has normals
        let mut a = make_triangle();
        a.recompute_normals(&NormalSettings::default()).unwrap();
        a.merge(&make_triangle()).unwrap();
        assert!(a.normals.is_empty());
        assert_eq!(a.num_vertices(), 6);
    }

    #[test]
    fn test_merge_index_overflow_leaves_mesh_unchanged() {
        let mut a = make_triangle();
        a.recompute_normals(&NormalSettings::default()).unwrap();
        let before = a.clone();

        let b = TriangleMesh::from_buffers(vec![0.0; 9], vec![0, 1, u32::MAX]);
        let err = a.merge(&b).unwrap_err();
        assert!(matches!(err, NormalsError::InvalidArgument(_)));
        assert_eq!(a, before);
    }
}
