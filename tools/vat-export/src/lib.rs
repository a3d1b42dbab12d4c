//! vat-export library
//!
//! Bakes a directory of per-frame OBJ meshes into a pair of vertex animation
//! textures: one RGBA32F sheet for positions, one for normals, each with one
//! row per frame and one column per flattened face-vertex.

pub mod collect;
pub mod error;
pub mod export;
pub mod flatten;
pub mod formats;
pub mod mesh;

// Re-export the pipeline entry point and its types
pub use error::ExportError;
pub use export::{export, ContainerKind, ExportConfig, ExportOutputs};
pub use flatten::DEFAULT_MAX_SHEET_WIDTH;
