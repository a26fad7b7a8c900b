//! Smooth normal reconstruction for imported geometry
//!
//! Imported meshes carry no analytic normals, so per-vertex normals are
//! rebuilt from the triangle data: each vertex averages the distinct face
//! normals of its adjacent triangles, then renormalizes.

use glam::Vec3;
use tracing::warn;

/// Two face normals closer than this per component count as the same plane
/// and contribute once to a vertex's average.
const NORMAL_DEDUP_EPSILON: f32 = 1e-6;

/// Reconstruct per-vertex smooth normals from triangle data
///
/// # Arguments
/// * `positions` - Vertex positions; the index space all triangles refer to
/// * `indices` - Flat triangle list, three indices per face
///
/// # Returns
/// One normal per vertex, unit length. Face normals follow the winding
/// convention `normalize(cross(v2 - v0, v1 - v0))`. A vertex whose adjacent
/// face normals cancel (or that no triangle touches) gets `[0, 0, 0]`, never
/// NaN; such vertices are counted and reported through a warning event.
///
/// # Panics
/// If any index is out of range for `positions`.
pub fn smooth_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut accumulators: Vec<Vec<Vec3>> = vec![Vec::new(); positions.len()];
    let mut skipped_faces = 0usize;

    for tri in indices.chunks_exact(3) {
        let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let v0 = Vec3::from(positions[i0]);
        let v1 = Vec3::from(positions[i1]);
        let v2 = Vec3::from(positions[i2]);

        let face_normal = (v2 - v0).cross(v1 - v0).normalize_or_zero();
        if face_normal == Vec3::ZERO {
            // Collapsed triangle: no orientation to contribute
            skipped_faces += 1;
            continue;
        }

        for &index in &[i0, i1, i2] {
            let recorded = &mut accumulators[index];
            let duplicate = recorded
                .iter()
                .any(|n| (*n - face_normal).abs().max_element() <= NORMAL_DEDUP_EPSILON);
            if !duplicate {
                recorded.push(face_normal);
            }
        }
    }

    let mut degenerate_vertices = 0usize;
    let normals = accumulators
        .iter()
        .map(|recorded| {
            let sum: Vec3 = recorded.iter().copied().sum();
            let normal = sum.normalize_or_zero();
            if normal == Vec3::ZERO {
                degenerate_vertices += 1;
            }
            normal.to_array()
        })
        .collect();

    if skipped_faces > 0 || degenerate_vertices > 0 {
        warn!(
            skipped_faces,
            degenerate_vertices, "degenerate geometry during normal reconstruction"
        );
    }

    normals
}
