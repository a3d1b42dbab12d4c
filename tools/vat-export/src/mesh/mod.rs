//! Mesh loader (per-frame OBJ files)

mod obj;
mod types;

// Re-export public API
pub use obj::{load_obj, parse_obj};
pub use types::{FaceVertexRef, ObjMesh};
