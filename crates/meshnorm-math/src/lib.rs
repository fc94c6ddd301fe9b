#![warn(missing_docs)]

//! Math types for meshnorm.
//!
//! Thin wrappers around nalgebra for single-precision mesh data, plus
//! helpers to read and write 3D vectors stored flat as `[x0, y0, z0, x1, ...]`.

use nalgebra::Vector3;

/// Floats per vertex in a flat position or normal buffer.
pub const FLOATS_PER_VERTEX: usize = 3;

/// Indices per triangle in a flat index buffer.
pub const INDICES_PER_TRIANGLE: usize = 3;

/// A vector in 3D space (single precision).
pub type Vec3f = Vector3<f32>;

/// Read vertex `vertex` from a flat XYZ buffer.
///
/// Returns `None` when the vertex lies outside the buffer.
#[inline]
pub fn load_vec3(buf: &[f32], vertex: usize) -> Option<Vec3f> {
    let start = vertex.checked_mul(FLOATS_PER_VERTEX)?;
    let xyz = buf.get(start..start.checked_add(FLOATS_PER_VERTEX)?)?;
    Some(Vec3f::new(xyz[0], xyz[1], xyz[2]))
}

/// Overwrite vertex `vertex` of a flat XYZ buffer. Out-of-range writes are ignored.
#[inline]
pub fn store_vec3(buf: &mut [f32], vertex: usize, v: &Vec3f) {
    if let Some(xyz) = slot_mut(buf, vertex) {
        xyz[0] = v.x;
        xyz[1] = v.y;
        xyz[2] = v.z;
    }
}

/// Add `v` onto vertex `vertex` of a flat XYZ buffer. Out-of-range writes are ignored.
#[inline]
pub fn add_vec3(buf: &mut [f32], vertex: usize, v: &Vec3f) {
    if let Some(xyz) = slot_mut(buf, vertex) {
        xyz[0] += v.x;
        xyz[1] += v.y;
        xyz[2] += v.z;
    }
}

#[inline]
fn slot_mut(buf: &mut [f32], vertex: usize) -> Option<&mut [f32]> {
    let start = vertex.checked_mul(FLOATS_PER_VERTEX)?;
    buf.get_mut(start..start.checked_add(FLOATS_PER_VERTEX)?)
}

/// Non-normalized face normal of triangle `(p0, p1, p2)`.
///
/// Computed as `(p1 - p0) × (p2 - p0)`, so a counter-clockwise triangle
/// faces the viewer and the magnitude is twice the triangle's area.
#[inline]
pub fn face_normal(p0: &Vec3f, p1: &Vec3f, p2: &Vec3f) -> Vec3f {
    let e1 = p1 - p0;
    let e2 = p2 - p0;
    e1.cross(&e2)
}

/// Unit vector in the direction of `v`, or the zero vector if `v` is zero or not finite.
///
/// `v` is divided by its largest component first so the squared length
/// neither underflows for tiny vectors nor overflows for huge ones.
#[inline]
pub fn normalize_or_zero(v: &Vec3f) -> Vec3f {
    if !v.iter().all(|c| c.is_finite()) {
        return Vec3f::zeros();
    }
    let scale = v.amax();
    if scale > 0.0 {
        let unit = v / scale;
        unit / unit.norm()
    } else {
        Vec3f::zeros()
    }
}

/// Tolerance for comparing normals produced by different implementations.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Maximum allowed per-component difference.
    pub component: f32,
}

impl Tolerance {
    /// Four decimal places, the precision normals are usually compared at.
    pub const DEFAULT: Self = Self { component: 1e-4 };

    /// Count the components of two flat buffers that differ by more than the tolerance.
    ///
    /// Buffers of different length count every unmatched component as a mismatch.
    pub fn count_mismatches(&self, a: &[f32], b: &[f32]) -> usize {
        let paired = a
            .iter()
            .zip(b)
            .filter(|(x, y)| (*x - *y).abs() > self.component)
            .count();
        paired + a.len().abs_diff(b.len())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
