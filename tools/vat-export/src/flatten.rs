//! Flattening engine
//!
//! Expands each frame's indexed faces into a flat per-face-vertex texel
//! stream and assembles all frames into two same-shaped rasters: positions
//! and normals, one row per frame, one column per face-vertex occurrence.
//! Shorter frames are padded to the widest frame with zero texels.

use crate::collect::Frame;
use crate::error::{AttributeKind, ExportError};
use vat_common::{Raster, Texel};

/// Default sheet width bound
///
/// Policy constant, not a format limit: keeps a pathological frame set from
/// requesting an absurdly wide texture (and the matching allocation) before
/// anyone looks at it. Overridable via `--max-width`.
pub const DEFAULT_MAX_SHEET_WIDTH: u32 = 16384;

/// The two baked sheets of one run, sharing dimensions
#[derive(Debug)]
pub struct VatSheets {
    pub positions: Raster,
    pub normals: Raster,
}

/// Flatten a frame set into position and normal rasters
///
/// Width is the maximum flattened face-vertex count across frames, height is
/// the frame count. The width guard runs before either raster is allocated.
pub fn flatten_frames(frames: &[Frame], max_width: u32) -> Result<VatSheets, ExportError> {
    // The collector never hands over an empty set; keep the max() below
    // well-defined anyway rather than inheriting undefined behavior.
    let Some(width) = frames.iter().map(|f| f.mesh.flattened_len()).max() else {
        return Err(ExportError::EmptyInput {
            path: std::path::PathBuf::new(),
        });
    };

    if width > max_width as usize {
        return Err(ExportError::Capacity { width, max: max_width });
    }

    let width = width as u32;
    let height = frames.len() as u32;
    let mut positions = Raster::with_dimensions(width, height);
    let mut normals = Raster::with_dimensions(width, height);

    for frame in frames {
        for face_ref in &frame.mesh.faces {
            let position = resolve(frame, AttributeKind::Position, face_ref.position)?;
            let normal = resolve(frame, AttributeKind::Normal, face_ref.normal)?;
            positions.push(Texel::from_attribute(position));
            normals.push(Texel::from_attribute(normal));
        }

        let remain = width as usize - frame.mesh.flattened_len();
        positions.pad(remain);
        normals.pad(remain);
    }

    Ok(VatSheets { positions, normals })
}

/// Bounds-checked attribute lookup
fn resolve(frame: &Frame, kind: AttributeKind, index: u32) -> Result<[f32; 3], ExportError> {
    let table = match kind {
        AttributeKind::Position => &frame.mesh.positions,
        AttributeKind::Normal => &frame.mesh.normals,
    };
    table
        .get(index as usize)
        .copied()
        .ok_or_else(|| ExportError::AttributeIndex {
            file: frame.name.clone(),
            kind,
            index,
            count: table.len(),
        })
}
