//! Pipeline error types
//!
//! Every variant is fatal to the run: the pipeline writes both output files
//! or none.

use std::path::PathBuf;
use thiserror::Error;

/// Which attribute table an out-of-range face reference pointed into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Position,
    Normal,
}

impl std::fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeKind::Position => write!(f, "position"),
            AttributeKind::Normal => write!(f, "normal"),
        }
    }
}

/// Fatal export pipeline errors
#[derive(Debug, Error)]
pub enum ExportError {
    /// Input directory missing or unreadable
    #[error("cannot read input directory {path:?}: {source}")]
    Directory {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Input directory contains no mesh files
    #[error("no .obj files found in {path:?}")]
    EmptyInput { path: PathBuf },

    /// A frame file failed to parse
    #[error("failed to parse {file}: {message}")]
    Parse { file: String, message: String },

    /// Flattened sheet width exceeds the configured bound
    #[error("flattened vertex count {width} exceeds maximum sheet width {max}")]
    Capacity { width: usize, max: u32 },

    /// A face referenced an attribute index outside its table
    #[error("{file}: face references {kind} index {index}, but only {count} are defined")]
    AttributeIndex {
        file: String,
        kind: AttributeKind,
        index: u32,
        count: usize,
    },

    /// Output file could not be created or written
    #[error("cannot write output {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
