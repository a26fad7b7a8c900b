//! OBJ-subset geometry import
//!
//! Reads the line-oriented `v`/`f` subset of Wavefront OBJ, then runs the
//! reconstruction pipeline: smooth normals from the raw triangles, canonical
//! rescale from the streamed bounds, spherical UVs from the canonical
//! positions, frozen into a [`MeshBuffer`].
//!
//! Import is atomic: every failure discards all accumulated state, so the
//! caller never observes a partial mesh.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use glam::Vec3;
use tracing::info;

use crate::bounds::{self, BoundingExtents, CanonicalFrame};
use crate::error::MeshError;
use crate::mesh::{MeshBuffer, PrimitiveTopology};
use crate::normals;
use crate::uv;

/// A completed import: the frozen mesh plus the frames collaborators need
#[derive(Clone, Debug)]
pub struct ImportedMesh {
    /// Render-ready buffer (list topology, canonical positions)
    pub mesh: MeshBuffer,
    /// Pre-rescale extents of the source file, for collision placement
    pub source_extents: BoundingExtents,
    /// Extents after the canonical rescale
    pub canonical_extents: BoundingExtents,
    /// Scale and mid-point the rescale derived from the source extents
    pub frame: CanonicalFrame,
}

/// Import a geometry file from disk
///
/// # Errors
/// [`MeshError::Open`] if the file cannot be opened; otherwise any failure
/// of [`import_obj_from_reader`].
pub fn import_obj(path: impl AsRef<Path>) -> Result<ImportedMesh, MeshError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| MeshError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    import_obj_from_reader(BufReader::new(file))
}

/// Import a geometry description from any buffered reader
///
/// Recognized records:
/// - `v <float> <float> <float>`: vertex position (extra trailing fields
///   are ignored)
/// - `f <int> <int> <int>`: triangle, 1-based indices
///
/// Lines with any other leading token, blank lines, and `#` comments are
/// skipped. End of input triggers normal reconstruction, canonicalization,
/// and UV projection before the mesh is frozen.
///
/// # Errors
/// - [`MeshError::Read`] if the stream fails mid-parse
/// - [`MeshError::MalformedVertex`] for a `v` record without three floats
/// - [`MeshError::MalformedFace`] for an `f` record without exactly three
///   parseable indices
/// - [`MeshError::FaceIndexOutOfRange`] if a face references a vertex the
///   file never declares
/// - [`MeshError::DegenerateBounds`] if every axis has zero extent
pub fn import_obj_from_reader<R: BufRead>(reader: R) -> Result<ImportedMesh, MeshError> {
    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();
    let mut extents = BoundingExtents::zeroed();

    for (line_index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => {
                let vertex = parse_vertex(&mut tokens).ok_or(MeshError::MalformedVertex {
                    line: line_index + 1,
                })?;
                extents.include(Vec3::from(vertex));
                positions.push(vertex);
            }
            Some("f") => {
                let triple = parse_face(&mut tokens).ok_or(MeshError::MalformedFace {
                    line: line_index + 1,
                })?;
                indices.extend_from_slice(&triple);
            }
            _ => {}
        }
    }

    // Faces may reference vertices declared later in the file, so the index
    // invariant is checked once the whole file is in.
    for &index in &indices {
        if index as usize >= positions.len() {
            return Err(MeshError::FaceIndexOutOfRange {
                index,
                vertex_count: positions.len(),
            });
        }
    }

    let vertex_normals = normals::smooth_normals(&positions, &indices);
    let source_extents = extents;
    let (frame, canonical_extents) = bounds::canonicalize(&mut positions, &extents)?;
    let uvs = uv::spherical_uvs(&positions);

    info!(
        vertices = positions.len(),
        faces = indices.len() / 3,
        "imported OBJ geometry"
    );

    Ok(ImportedMesh {
        mesh: MeshBuffer::new(
            positions,
            vertex_normals,
            uvs,
            indices,
            PrimitiveTopology::TriangleList,
        ),
        source_extents,
        canonical_extents,
        frame,
    })
}

/// Parse three floats from a `v` record; trailing fields are ignored
fn parse_vertex<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Option<[f32; 3]> {
    let x = tokens.next()?.parse().ok()?;
    let y = tokens.next()?.parse().ok()?;
    let z = tokens.next()?.parse().ok()?;
    Some([x, y, z])
}

/// Parse exactly three 1-based indices from an `f` record
fn parse_face<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Option<[u32; 3]> {
    let mut triple = [0u32; 3];
    let mut count = 0usize;
    for token in tokens {
        if count == 3 {
            return None;
        }
        triple[count] = token.parse::<u32>().ok()?.checked_sub(1)?;
        count += 1;
    }
    (count == 3).then_some(triple)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TETRAHEDRON: &str = "\
# four corners
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
v 0.0 0.0 1.0
f 1 2 3
f 1 2 4
f 1 3 4
f 2 3 4
";

    #[test]
    fn test_tetrahedron_import() {
        let imported = import_obj_from_reader(TETRAHEDRON.as_bytes()).unwrap();

        assert_eq!(imported.mesh.vertex_count(), 4);
        assert_eq!(imported.mesh.element_count(), 12);
        assert_eq!(imported.mesh.topology(), PrimitiveTopology::TriangleList);

        // Raw extents: unit tetrahedron in the positive octant.
        assert_eq!(imported.source_extents.lower, Vec3::ZERO);
        assert_eq!(imported.source_extents.upper, Vec3::ONE);
        assert!((imported.frame.scale - 1.0).abs() < 1e-6);

        // Per-vertex normals are unit length (no degenerate vertex here).
        for normal in imported.mesh.normals() {
            let length =
                (normal[0] * normal[0] + normal[1] * normal[1] + normal[2] * normal[2]).sqrt();
            assert!((length - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_reconstructed_normals_match_reference() {
        let imported = import_obj_from_reader(TETRAHEDRON.as_bytes()).unwrap();

        // Recompute from the raw source positions with the reference
        // formula; smoothing happens before the canonical rescale, and the
        // rescale is uniform, so directions are unchanged.
        let raw = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        ];
        let faces = [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]];

        for vertex in 0..4 {
            let mut sum = Vec3::ZERO;
            for face in &faces {
                if face.contains(&vertex) {
                    let (v0, v1, v2) = (raw[face[0]], raw[face[1]], raw[face[2]]);
                    sum += (v2 - v0).cross(v1 - v0).normalize();
                }
            }
            let expected = sum.normalize();
            let got = Vec3::from(imported.mesh.normals()[vertex]);
            assert!(
                (got - expected).length() < 1e-5,
                "vertex {vertex}: got {got:?}, want {expected:?}"
            );
        }
    }

    #[test]
    fn test_canonical_positions_hand_computed() {
        // x in [0, 4] (zero-seeded bounds), single dominant axis.
        let input = "\
v 4.0 0.0 0.0
v 0.0 2.0 0.0
v 0.0 0.0 1.0
f 1 2 3
";
        let imported = import_obj_from_reader(input.as_bytes()).unwrap();

        // scale = 4, center = (0.5, 0.25, 0.125);
        // p' = p / 2 - 2 * center
        assert!((imported.frame.scale - 4.0).abs() < 1e-6);
        let expected = [
            [1.0, -0.5, -0.25],
            [-1.0, 0.5, -0.25],
            [-1.0, -0.5, 0.25],
        ];
        for (got, want) in imported.mesh.positions().iter().zip(expected.iter()) {
            for axis in 0..3 {
                assert!(
                    (got[axis] - want[axis]).abs() < 1e-5,
                    "got {got:?}, want {want:?}"
                );
            }
        }
    }

    #[test]
    fn test_unknown_records_skipped() {
        let input = "\
mtllib scene.mtl
o tri
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
vn 0.0 0.0 1.0
vt 0.5 0.5
s off
f 1 2 3
";
        let imported = import_obj_from_reader(input.as_bytes()).unwrap();
        assert_eq!(imported.mesh.vertex_count(), 3);
        assert_eq!(imported.mesh.element_count(), 3);
    }

    #[test]
    fn test_face_with_two_indices_rejected() {
        let input = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
f 1 2
";
        let result = import_obj_from_reader(input.as_bytes());
        assert!(matches!(
            result,
            Err(MeshError::MalformedFace { line: 4 })
        ));
    }

    #[test]
    fn test_face_with_four_indices_rejected() {
        let input = "v 0 0 0\nv 1 0 0\nv 0 1 0\nv 1 1 0\nf 1 2 3 4\n";
        assert!(matches!(
            import_obj_from_reader(input.as_bytes()),
            Err(MeshError::MalformedFace { line: 5 })
        ));
    }

    #[test]
    fn test_malformed_vertex_rejected() {
        let input = "v 1.0 nope 0.0\n";
        assert!(matches!(
            import_obj_from_reader(input.as_bytes()),
            Err(MeshError::MalformedVertex { line: 1 })
        ));
    }

    #[test]
    fn test_zero_face_index_rejected() {
        // 1-based format: index 0 cannot be converted.
        let input = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 0 1 2\n";
        assert!(matches!(
            import_obj_from_reader(input.as_bytes()),
            Err(MeshError::MalformedFace { .. })
        ));
    }

    #[test]
    fn test_out_of_range_face_index_rejected() {
        let input = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 9\n";
        assert!(matches!(
            import_obj_from_reader(input.as_bytes()),
            Err(MeshError::FaceIndexOutOfRange {
                index: 8,
                vertex_count: 3
            })
        ));
    }

    #[test]
    fn test_forward_face_reference_accepted() {
        // Faces may precede the vertices they reference.
        let input = "f 1 2 3\nv 0 0 0\nv 1 0 0\nv 0 1 0\n";
        assert!(import_obj_from_reader(input.as_bytes()).is_ok());
    }

    #[test]
    fn test_missing_file_fails_with_open() {
        let result = import_obj("no/such/mesh.obj");
        assert!(matches!(result, Err(MeshError::Open { .. })));
    }

    #[test]
    fn test_empty_input_has_no_usable_mesh() {
        // No vertices means zero extents; the canonical rescale refuses to
        // divide by zero and the caller gets no buffer at all.
        assert!(matches!(
            import_obj_from_reader("".as_bytes()),
            Err(MeshError::DegenerateBounds)
        ));
    }

    #[test]
    fn test_uvs_are_finite() {
        let imported = import_obj_from_reader(TETRAHEDRON.as_bytes()).unwrap();
        for uv in imported.mesh.uvs() {
            assert!(uv.iter().all(|c| c.is_finite()));
        }
    }
}
