//! Vertex normal computation from flat triangle buffers.
//!
//! Each triangle's face normal is added to its three vertices in index-buffer
//! order, then every vertex sum is normalized. With [`FaceWeighting::Area`]
//! the face normals are not normalized first, so larger triangles carry more
//! weight.

use meshnorm_math::{
    add_vec3, face_normal, load_vec3, normalize_or_zero, store_vec3, FLOATS_PER_VERTEX,
    INDICES_PER_TRIANGLE,
};
use serde::{Deserialize, Serialize};

use crate::error::{NormalsError, Result};
use crate::settings::{FaceWeighting, NormalSettings};

/// Validated shape of a position/index buffer pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshLayout {
    /// Number of vertices (`positions.len() / 3`).
    pub vertex_count: usize,
    /// Number of triangles (`indices.len() / 3`).
    pub triangle_count: usize,
}

/// Summary of a normal computation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NormalReport {
    /// Number of vertices written.
    pub vertex_count: usize,
    /// Number of triangles in the index buffer.
    pub triangle_count: usize,
    /// Triangles ignored because they reference a vertex outside the position buffer.
    pub skipped_triangles: usize,
    /// Vertices whose normal came out as the zero vector.
    pub zero_normals: usize,
}

/// Check buffer lengths against the kernel's preconditions.
///
/// Index values are not checked here; triangles with out-of-range indices
/// are skipped during accumulation.
pub fn validate_buffers(
    positions: &[f32],
    indices: &[u32],
    normals_len: usize,
) -> Result<MeshLayout> {
    if positions.len() % FLOATS_PER_VERTEX != 0 {
        return Err(NormalsError::InvalidArgument(format!(
            "positions length {} is not a multiple of {}",
            positions.len(),
            FLOATS_PER_VERTEX
        )));
    }
    if indices.len() % INDICES_PER_TRIANGLE != 0 {
        return Err(NormalsError::InvalidArgument(format!(
            "indices length {} is not a multiple of {}",
            indices.len(),
            INDICES_PER_TRIANGLE
        )));
    }
    if normals_len != positions.len() {
        return Err(NormalsError::InvalidArgument(format!(
            "normals length {} does not match positions length {}",
            normals_len,
            positions.len()
        )));
    }
    Ok(MeshLayout {
        vertex_count: positions.len() / FLOATS_PER_VERTEX,
        triangle_count: indices.len() / INDICES_PER_TRIANGLE,
    })
}

/// Compute area-weighted, counter-clockwise vertex normals into `normals`.
///
/// `normals` must be the same length as `positions`; its prior contents are
/// ignored and fully overwritten. Vertices not referenced by any triangle, or
/// whose face normals cancel out, get the zero vector.
///
/// # Example
///
/// ```
/// let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
/// let indices = [0, 1, 2];
/// let mut normals = [0.0; 9];
/// meshnorm::compute_normals(&positions, &indices, &mut normals).unwrap();
/// assert_eq!(&normals[0..3], &[0.0, 0.0, 1.0]);
/// ```
pub fn compute_normals(positions: &[f32], indices: &[u32], normals: &mut [f32]) -> Result<()> {
    compute_normals_with(positions, indices, normals, &NormalSettings::default()).map(|_| ())
}

/// Compute vertex normals into `normals` using the given settings.
///
/// Length checks run before `normals` is touched, so on error the buffer is
/// left unmodified.
pub fn compute_normals_with(
    positions: &[f32],
    indices: &[u32],
    normals: &mut [f32],
    settings: &NormalSettings,
) -> Result<NormalReport> {
    let layout = validate_buffers(positions, indices, normals.len())?;
    log::debug!(
        "computing normals: {} vertices, {} triangles, {:?}",
        layout.vertex_count,
        layout.triangle_count,
        settings
    );

    normals.fill(0.0);

    let sign = settings.winding.sign();
    let mut skipped_triangles = 0;

    for tri in indices.chunks_exact(INDICES_PER_TRIANGLE) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let (Some(pa), Some(pb), Some(pc)) = (
            load_vec3(positions, a),
            load_vec3(positions, b),
            load_vec3(positions, c),
        ) else {
            skipped_triangles += 1;
            continue;
        };

        let mut n = face_normal(&pa, &pb, &pc) * sign;
        if settings.weighting == FaceWeighting::Uniform {
            n = normalize_or_zero(&n);
        }

        add_vec3(normals, a, &n);
        add_vec3(normals, b, &n);
        add_vec3(normals, c, &n);
    }

    if skipped_triangles > 0 {
        log::warn!(
            "skipped {} of {} triangles with vertex indices >= {}",
            skipped_triangles,
            layout.triangle_count,
            layout.vertex_count
        );
    }

    let mut zero_normals = 0;
    for v in 0..layout.vertex_count {
        let Some(sum) = load_vec3(normals, v) else {
            break;
        };
        let n = normalize_or_zero(&sum);
        if n.x == 0.0 && n.y == 0.0 && n.z == 0.0 {
            zero_normals += 1;
        }
        store_vec3(normals, v, &n);
    }

    Ok(NormalReport {
        vertex_count: layout.vertex_count,
        triangle_count: layout.triangle_count,
        skipped_triangles,
        zero_normals,
    })
}

/// Compute area-weighted vertex normals into a newly allocated buffer.
///
/// Returns a flat array with the same layout and length as `positions`.
pub fn vertex_normals(positions: &[f32], indices: &[u32]) -> Result<Vec<f32>> {
    let mut normals = vec![0.0; positions.len()];
    compute_normals(positions, indices, &mut normals)?;
    Ok(normals)
}
