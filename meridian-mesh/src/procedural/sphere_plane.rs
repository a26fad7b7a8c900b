//! Sphere and plane grid generators (strip topology)

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::mesh::{MeshBuffer, PrimitiveTopology};

use super::strip_indices;

/// Generate a unit UV sphere tessellated as one continuous triangle strip
///
/// # Arguments
/// * `segments` - Grid subdivisions per axis (clamped to 1..=256)
///
/// # Returns
/// Mesh with `(segments+1)²` vertices and `segments · 2 · (segments+1)`
/// strip indices.
///
/// # UV Mapping
/// - U (horizontal): longitude, wraps 0→1 with a duplicate seam column
/// - V (vertical): latitude, 0 at the north pole to 1 at the south pole
///
/// Normals equal positions exactly: every point of the grid lies on the unit
/// sphere, so no renormalization is applied.
pub fn generate_sphere(segments: u32) -> MeshBuffer {
    let segments = segments.clamp(1, 256);
    let vertex_count = ((segments + 1) * (segments + 1)) as usize;

    let mut positions = Vec::with_capacity(vertex_count);
    let mut normals = Vec::with_capacity(vertex_count);
    let mut uvs = Vec::with_capacity(vertex_count);

    for row in 0..=segments {
        let v = row as f32 / segments as f32;
        for col in 0..=segments {
            let u = col as f32 / segments as f32;

            let position = Vec3::new(
                (TAU * u).cos() * (PI * v).sin(),
                (PI * v).cos(),
                (TAU * u).sin() * (PI * v).sin(),
            );

            positions.push(position.to_array());
            uvs.push([u, v]);
            normals.push(position.to_array());
        }
    }

    MeshBuffer::new(
        positions,
        normals,
        uvs,
        strip_indices(segments),
        PrimitiveTopology::TriangleStrip,
    )
}

/// Generate a unit grid on y = 0, tessellated as one continuous triangle strip
///
/// Positions span `[0,1] × {0} × [0,1]` with UVs matching the grid
/// coordinates. Normals are copied from positions (not the constant up
/// vector), matching the sphere path; hosts that want flat shading supply
/// their own normal.
pub fn generate_plane(segments: u32) -> MeshBuffer {
    let segments = segments.clamp(1, 256);
    let vertex_count = ((segments + 1) * (segments + 1)) as usize;

    let mut positions = Vec::with_capacity(vertex_count);
    let mut normals = Vec::with_capacity(vertex_count);
    let mut uvs = Vec::with_capacity(vertex_count);

    for row in 0..=segments {
        let v = row as f32 / segments as f32;
        for col in 0..=segments {
            let u = col as f32 / segments as f32;

            let position = Vec3::new(u, 0.0, v);

            positions.push(position.to_array());
            uvs.push([u, v]);
            normals.push(position.to_array());
        }
    }

    MeshBuffer::new(
        positions,
        normals,
        uvs,
        strip_indices(segments),
        PrimitiveTopology::TriangleStrip,
    )
}
