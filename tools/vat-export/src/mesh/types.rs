//! Types for parsed mesh frames

/// One face-vertex occurrence: indices into the position and normal tables
///
/// Faces are kept in file order and never deduplicated or reindexed; a face
/// with N vertices contributes N refs. Indices are 0-based and unchecked
/// until flattening resolves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceVertexRef {
    pub position: u32,
    pub normal: u32,
}

/// Parsed content of one OBJ frame file
#[derive(Debug, Default)]
pub struct ObjMesh {
    /// Vertex positions, indexed by `FaceVertexRef::position`
    pub positions: Vec<[f32; 3]>,
    /// Vertex normals, indexed by `FaceVertexRef::normal`
    pub normals: Vec<[f32; 3]>,
    /// Flat per-face-vertex stream, file order
    pub faces: Vec<FaceVertexRef>,
}

impl ObjMesh {
    /// Flattened face-vertex count: one output texel column per ref
    pub fn flattened_len(&self) -> usize {
        self.faces.len()
    }
}
