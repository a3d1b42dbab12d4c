//! KTX 1.1 container header (RGBA32F)
//!
//! Fixed 64-byte header declaring a GL_RGBA32F internal format, one face,
//! one mip level, no key/value data. The writer follows the header with a
//! 4-byte image-size field and then the raw texel payload.
//!
//! Note: Not packed - we use explicit byte serialization.
//!
//! # Layout (fields little-endian u32 unless noted)
//! ```text
//! 0x00: identifier[12]          = AB 4B 54 58 20 31 31 BB 0D 0A 1A 0A
//! 0x0C: endianness              = 0x04030201
//! 0x10: gl_type                 = 0
//! 0x14: gl_type_size            = 0
//! 0x18: gl_format               = 0
//! 0x1C: gl_internal_format      = 0x8814 (GL_RGBA32F)
//! 0x20: gl_base_internal_format = 0
//! 0x24: pixel_width
//! 0x28: pixel_height
//! 0x2C: pixel_depth             = 0
//! 0x30: number_of_array_elements = 0
//! 0x34: number_of_faces         = 1
//! 0x38: number_of_mipmap_levels = 1
//! 0x3C: bytes_of_key_value_data = 0
//! 0x40: image_size u32 (written by the encoder, not part of this struct)
//! 0x44: texel payload
//! ```

/// File extension for KTX output
pub const KTX_EXT: &str = "ktx";

/// KTX 1.1 file identifier ("«KTX 11»\r\n\x1A\n")
const KTX_IDENTIFIER: [u8; 12] = [
    0xAB, 0x4B, 0x54, 0x58, 0x20, 0x31, 0x31, 0xBB, 0x0D, 0x0A, 0x1A, 0x0A,
];

/// Endianness marker: reads back as 0x04030201 on a same-endian consumer
const KTX_ENDIANNESS: u32 = 0x0403_0201;

/// GL_RGBA32F
const GL_RGBA32F: u32 = 0x8814;

/// KTX 1.1 header (64 bytes)
#[derive(Debug, Clone, Copy)]
pub struct KtxHeader {
    pub pixel_width: u32,
    pub pixel_height: u32,
}

impl KtxHeader {
    pub const SIZE: usize = 64;

    pub fn new(pixel_width: u32, pixel_height: u32) -> Self {
        Self {
            pixel_width,
            pixel_height,
        }
    }

    /// Write header to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0x00..0x0C].copy_from_slice(&KTX_IDENTIFIER);

        let mut put = |offset: usize, value: u32| {
            bytes[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
        };

        put(0x0C, KTX_ENDIANNESS);
        // 0x10 gl_type, 0x14 gl_type_size, 0x18 gl_format stay 0
        put(0x1C, GL_RGBA32F);
        // 0x20 gl_base_internal_format stays 0
        put(0x24, self.pixel_width);
        put(0x28, self.pixel_height);
        // 0x2C pixel_depth, 0x30 array elements stay 0
        put(0x34, 1); // faces
        put(0x38, 1); // mipmap levels
        // 0x3C key/value byte count stays 0
        bytes
    }

    /// Read header from bytes
    ///
    /// Returns `None` on short input, a wrong identifier, or an internal
    /// format other than GL_RGBA32F.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        if bytes[0x00..0x0C] != KTX_IDENTIFIER {
            return None;
        }
        let get = |offset: usize| {
            u32::from_le_bytes([
                bytes[offset],
                bytes[offset + 1],
                bytes[offset + 2],
                bytes[offset + 3],
            ])
        };

        if get(0x1C) != GL_RGBA32F {
            return None;
        }
        Some(Self {
            pixel_width: get(0x24),
            pixel_height: get(0x28),
        })
    }

    /// Calculate expected image size (16 bytes per texel)
    pub fn image_size(&self) -> u32 {
        self.pixel_width * self.pixel_height * 16
    }
}
