//! Raster model for baked animation sheets
//!
//! A VAT sheet is a row-major grid of RGBA32F texels: one row per animation
//! frame, one column per flattened face-vertex. Real texels carry `w = 1.0`;
//! padding texels are all zero, so a shader (or inspector) can tell them
//! apart by alpha alone.

use bytemuck::{Pod, Zeroable};

/// One RGBA32F texel (16 bytes)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Texel {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Texel {
    /// Byte size of one texel (four f32 channels)
    pub const SIZE: usize = 16;

    /// Padding texel: all channels zero, `w = 0.0` marks it as unused
    pub const PAD: Texel = Texel {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 0.0,
    };

    /// Real-data texel from a 3-component attribute, `w` fixed at 1.0
    pub fn from_attribute(v: [f32; 3]) -> Self {
        Self {
            x: v[0],
            y: v[1],
            z: v[2],
            w: 1.0,
        }
    }
}

/// Row-major texel grid, `width` columns by `height` rows
///
/// Rows are filled front-to-back by the flattening engine; a complete raster
/// always holds exactly `width * height` texels.
#[derive(Debug, Clone)]
pub struct Raster {
    width: u32,
    height: u32,
    texels: Vec<Texel>,
}

impl Raster {
    /// Create an empty raster with capacity for its full texel grid
    pub fn with_dimensions(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            texels: Vec::with_capacity(width as usize * height as usize),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn texels(&self) -> &[Texel] {
        &self.texels
    }

    /// Append one texel in row-major order
    pub fn push(&mut self, texel: Texel) {
        self.texels.push(texel);
    }

    /// Append `count` padding texels
    pub fn pad(&mut self, count: usize) {
        let new_len = self.texels.len() + count;
        self.texels.resize(new_len, Texel::PAD);
    }

    /// Whether the grid holds exactly `width * height` texels
    pub fn is_complete(&self) -> bool {
        self.texels.len() == self.width as usize * self.height as usize
    }

    /// Payload byte length of the complete grid
    pub fn payload_size(&self) -> usize {
        self.width as usize * self.height as usize * Texel::SIZE
    }

    /// Raw little-endian payload: texels in row-major order, x,y,z,w per texel
    pub fn payload_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.texels)
    }
}
