//! Geometry pipeline error types

use std::io;
use std::path::PathBuf;

/// Failure kinds of the mesh build pipeline
///
/// Every error is terminal for the build that raised it: no partially
/// populated mesh is ever observable by the caller.
#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    /// Geometry file could not be opened
    #[error("failed to open geometry file {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Geometry stream failed mid-read
    #[error("failed to read geometry stream")]
    Read(#[from] io::Error),

    /// Vertex record without three parseable floating-point values
    #[error("malformed vertex record at line {line}: expected three floating-point values")]
    MalformedVertex { line: usize },

    /// Face record without exactly three parseable 1-based vertex indices
    #[error("malformed face record at line {line}: expected exactly three vertex indices")]
    MalformedFace { line: usize },

    /// Face index referencing a vertex that was never declared
    #[error("face index {index} out of range for {vertex_count} vertices")]
    FaceIndexOutOfRange { index: u32, vertex_count: usize },

    /// All vertices collapse onto a single point per axis; the canonical
    /// rescale would divide by zero
    #[error("degenerate bounds: zero extent on every axis, cannot canonicalize")]
    DegenerateBounds,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            MeshError::MalformedFace { line: 7 }.to_string(),
            "malformed face record at line 7: expected exactly three vertex indices"
        );
        assert_eq!(
            MeshError::MalformedVertex { line: 3 }.to_string(),
            "malformed vertex record at line 3: expected three floating-point values"
        );
        assert_eq!(
            MeshError::FaceIndexOutOfRange {
                index: 9,
                vertex_count: 4
            }
            .to_string(),
            "face index 9 out of range for 4 vertices"
        );
    }
}
