//! Frame set collection
//!
//! Gathers the per-frame OBJ files of an input directory into a
//! deterministic animation order. Row order in the baked sheet is exactly
//! the byte-lexicographic sort of file names - never the OS enumeration
//! order, which differs across platforms.

use crate::error::ExportError;
use crate::mesh::{self, ObjMesh};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Recognized mesh file extension (matched ASCII case-insensitively)
const MESH_EXT: &str = "obj";

/// One loaded animation frame
#[derive(Debug)]
pub struct Frame {
    /// Source file name, carried for error reporting
    pub name: String,
    pub mesh: ObjMesh,
}

/// Enumerate, sort, and load every frame file in `dir`
///
/// Fails before any file is read if the directory itself cannot be
/// enumerated, and on the first frame that fails to parse. An empty match
/// set is an error - a zero-row sheet is never produced.
pub fn collect_frames(dir: &Path) -> Result<Vec<Frame>, ExportError> {
    let entries = std::fs::read_dir(dir).map_err(|source| ExportError::Directory {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<(OsString, PathBuf)> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ExportError::Directory {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && has_mesh_extension(&path) {
            files.push((entry.file_name(), path));
        }
    }

    if files.is_empty() {
        return Err(ExportError::EmptyInput {
            path: dir.to_path_buf(),
        });
    }

    // Byte-lexicographic by file name; animation row order depends on this
    files.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut frames = Vec::with_capacity(files.len());
    for (file_name, path) in files {
        let name = file_name.to_string_lossy().into_owned();
        tracing::info!("read file: {}", name);

        let mesh = mesh::load_obj(&path).map_err(|err| ExportError::Parse {
            file: name.clone(),
            message: format!("{:#}", err),
        })?;
        frames.push(Frame { name, mesh });
    }

    Ok(frames)
}

fn has_mesh_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(MESH_EXT))
}
