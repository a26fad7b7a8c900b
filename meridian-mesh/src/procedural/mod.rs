//! Parametric mesh generation
//!
//! Analytic tessellations of the built-in shapes. Sphere and plane share the
//! same `(S+1) × (S+1)` grid layout and the same single-strip index
//! synthesis; the cube is a fixed 36-vertex triangle list used for
//! environment capture and background passes.

mod cube;
mod sphere_plane;

pub use cube::generate_cube;
pub use sphere_plane::{generate_plane, generate_sphere};

use crate::mesh::MeshBuffer;

/// Default tessellation density for spheres
pub const SPHERE_SEGMENTS: u32 = 16;
/// Default tessellation density for planes
pub const PLANE_SEGMENTS: u32 = 64;

/// Built-in parametric shapes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    Sphere,
    Plane,
}

impl Shape {
    /// Tessellation density used when the host does not pick one
    pub fn default_segments(self) -> u32 {
        match self {
            Shape::Sphere => SPHERE_SEGMENTS,
            Shape::Plane => PLANE_SEGMENTS,
        }
    }
}

/// Generate a parametric mesh for `shape` with `segments` subdivisions
pub fn generate(shape: Shape, segments: u32) -> MeshBuffer {
    match shape {
        Shape::Sphere => generate_sphere(segments),
        Shape::Plane => generate_plane(segments),
    }
}

/// Synthesize one continuous zig-zag triangle strip over an
/// `(segments+1) × (segments+1)` vertex grid
///
/// Even rows pair `(row·cols + x, (row+1)·cols + x)` with `x` ascending; odd
/// rows emit the swapped pair with `x` descending, which keeps the strip
/// unbroken across row turns. Total index count is `segments · 2 · cols`.
pub(crate) fn strip_indices(segments: u32) -> Vec<u32> {
    let cols = segments + 1;
    let mut indices = Vec::with_capacity((segments * 2 * cols) as usize);

    for row in 0..segments {
        if row % 2 == 0 {
            for x in 0..cols {
                indices.push(row * cols + x);
                indices.push((row + 1) * cols + x);
            }
        } else {
            for x in (0..cols).rev() {
                indices.push((row + 1) * cols + x);
                indices.push(row * cols + x);
            }
        }
    }

    indices
}
