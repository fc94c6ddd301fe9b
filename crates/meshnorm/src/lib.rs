#![warn(missing_docs)]

//! Vertex normal computation for triangle meshes.
//!
//! The kernel takes flat buffers (3 floats per vertex, 3 indices per
//! triangle), accumulates area-weighted face normals onto their vertices in
//! index-buffer order and normalizes the result into a caller-owned buffer.
//! Output is deterministic: identical inputs give bit-identical normals.
//!
//! Triangles are counter-clockwise when seen from the front, so the face
//! normal is `(p1 - p0) × (p2 - p0)`.
//!
//! # Example
//!
//! ```
//! use meshnorm::{compute_normals_with, NormalSettings};
//!
//! let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 9.0, 9.0, 9.0];
//! let indices = [0, 1, 2];
//! let mut normals = [0.0; 12];
//!
//! let report = compute_normals_with(&positions, &indices, &mut normals, &NormalSettings::default())?;
//! assert_eq!(&normals[0..3], &[0.0, 0.0, 1.0]);
//! // Vertex 3 is not part of any triangle
//! assert_eq!(&normals[9..12], &[0.0, 0.0, 0.0]);
//! assert_eq!(report.zero_normals, 1);
//! # Ok::<(), meshnorm::NormalsError>(())
//! ```

pub mod batch;
pub mod error;
pub mod generators;
pub mod mesh;
pub mod normals;
pub mod settings;

pub use batch::recompute_normals_batch;
pub use error::{NormalsError, Result};
pub use mesh::TriangleMesh;
pub use normals::{
    compute_normals, compute_normals_with, validate_buffers, vertex_normals, MeshLayout,
    NormalReport,
};
pub use settings::{FaceWeighting, NormalSettings, Winding};
