//! Unit cube generator (list topology)

use glam::Vec3;

use crate::mesh::{MeshBuffer, PrimitiveTopology};

/// Generate a `[-1, 1]³` cube as a 36-vertex triangle list
///
/// Each face carries its own four corner positions with a flat face normal
/// and `[0,1]²` UVs, emitted as two CCW triangles. The renderer creates this
/// once during setup (environment capture, background pass) and owns the
/// buffer for its lifetime.
pub fn generate_cube() -> MeshBuffer {
    let mut positions = Vec::with_capacity(36);
    let mut normals = Vec::with_capacity(36);
    let mut uvs = Vec::with_capacity(36);

    // Corners arrive CCW viewed from outside: BL, BR, TR, TL.
    let add_face = |positions: &mut Vec<[f32; 3]>,
                    normals: &mut Vec<[f32; 3]>,
                    uvs: &mut Vec<[f32; 2]>,
                    corners: [Vec3; 4],
                    normal: Vec3| {
        const CORNER_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        for &corner in &[0usize, 1, 2, 2, 3, 0] {
            positions.push(corners[corner].to_array());
            normals.push(normal.to_array());
            uvs.push(CORNER_UVS[corner]);
        }
    };

    // Front face (z = +1)
    add_face(
        &mut positions,
        &mut normals,
        &mut uvs,
        [
            Vec3::new(-1.0, -1.0, 1.0),
            Vec3::new(1.0, -1.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(-1.0, 1.0, 1.0),
        ],
        Vec3::Z,
    );

    // Back face (z = -1)
    add_face(
        &mut positions,
        &mut normals,
        &mut uvs,
        [
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(-1.0, 1.0, -1.0),
            Vec3::new(1.0, 1.0, -1.0),
        ],
        Vec3::NEG_Z,
    );

    // Top face (y = +1)
    add_face(
        &mut positions,
        &mut normals,
        &mut uvs,
        [
            Vec3::new(-1.0, 1.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(1.0, 1.0, -1.0),
            Vec3::new(-1.0, 1.0, -1.0),
        ],
        Vec3::Y,
    );

    // Bottom face (y = -1)
    add_face(
        &mut positions,
        &mut normals,
        &mut uvs,
        [
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, 1.0),
            Vec3::new(-1.0, -1.0, 1.0),
        ],
        Vec3::NEG_Y,
    );

    // Right face (x = +1)
    add_face(
        &mut positions,
        &mut normals,
        &mut uvs,
        [
            Vec3::new(1.0, -1.0, 1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(1.0, 1.0, -1.0),
            Vec3::new(1.0, 1.0, 1.0),
        ],
        Vec3::X,
    );

    // Left face (x = -1)
    add_face(
        &mut positions,
        &mut normals,
        &mut uvs,
        [
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(-1.0, -1.0, 1.0),
            Vec3::new(-1.0, 1.0, 1.0),
            Vec3::new(-1.0, 1.0, -1.0),
        ],
        Vec3::NEG_X,
    );

    let indices = (0..36).collect();

    MeshBuffer::new(
        positions,
        normals,
        uvs,
        indices,
        PrimitiveTopology::TriangleList,
    )
}
