//! Texture container formats for baked VAT sheets
//!
//! Both containers carry the same payload: row-major RGBA32F texels, four
//! little-endian IEEE-754 floats per texel. Only the header differs.

mod dds;
mod ktx;

pub use dds::{DdsHeader, DDS_EXT};
pub use ktx::{KtxHeader, KTX_EXT};
