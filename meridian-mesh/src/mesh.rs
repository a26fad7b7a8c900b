//! Render-ready mesh buffers
//!
//! `MeshBuffer` is the frozen output of every build path: full-precision f32
//! attribute arrays plus an index buffer, shared with the renderer by
//! reference. The byte views exist so the upload path can hand slices
//! straight to the GPU without an intermediate copy.

/// How the index buffer is to be interpreted by the draw call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrimitiveTopology {
    /// Every three indices form one triangle
    TriangleList,
    /// Consecutive triangles share an edge; one continuous strip
    TriangleStrip,
}

/// Immutable vertex/index bundle produced by a completed mesh build
///
/// All attribute arrays share the same index space: `positions[i]`,
/// `normals[i]`, and `uvs[i]` describe vertex `i`. Rebuilding a mesh
/// constructs a new `MeshBuffer`; nothing mutates one after it is returned.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeshBuffer {
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    uvs: Vec<[f32; 2]>,
    indices: Vec<u32>,
    topology: PrimitiveTopology,
}

impl MeshBuffer {
    pub(crate) fn new(
        positions: Vec<[f32; 3]>,
        normals: Vec<[f32; 3]>,
        uvs: Vec<[f32; 2]>,
        indices: Vec<u32>,
        topology: PrimitiveTopology,
    ) -> Self {
        debug_assert_eq!(positions.len(), normals.len());
        debug_assert_eq!(positions.len(), uvs.len());
        Self {
            positions,
            normals,
            uvs,
            indices,
            topology,
        }
    }

    /// Vertex positions as `[x, y, z]`
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Vertex normals as `[x, y, z]`
    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    /// Texture coordinates as `[u, v]`
    pub fn uvs(&self) -> &[[f32; 2]] {
        &self.uvs
    }

    /// Index buffer
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Index interpretation for the draw call
    pub fn topology(&self) -> PrimitiveTopology {
        self.topology
    }

    /// Number of index elements to draw
    pub fn element_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles described by the index buffer
    pub fn triangle_count(&self) -> usize {
        match self.topology {
            PrimitiveTopology::TriangleList => self.indices.len() / 3,
            PrimitiveTopology::TriangleStrip => self.indices.len().saturating_sub(2),
        }
    }

    /// Position data as raw bytes for GPU upload
    pub fn positions_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Normal data as raw bytes for GPU upload
    pub fn normals_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    /// UV data as raw bytes for GPU upload
    pub fn uvs_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }

    /// Index data as raw bytes for GPU upload
    pub fn indices_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
