//! Normal recomputation over many meshes at once.

use rayon::prelude::*;

use crate::error::Result;
use crate::mesh::TriangleMesh;
use crate::normals::NormalReport;
use crate::settings::NormalSettings;

/// Recompute normals for every mesh in parallel.
///
/// Each mesh owns its buffers, so meshes are processed independently. The
/// kernel itself stays single-threaded per mesh, so results match
/// [`TriangleMesh::recompute_normals`] bit for bit. Results are returned in
/// input order; a failing mesh does not stop the others.
pub fn recompute_normals_batch(
    meshes: &mut [TriangleMesh],
    settings: &NormalSettings,
) -> Vec<Result<NormalReport>> {
    log::debug!("recomputing normals for {} meshes", meshes.len());
    meshes
        .par_iter_mut()
        .map(|mesh| mesh.recompute_normals(settings))
        .collect()
}
