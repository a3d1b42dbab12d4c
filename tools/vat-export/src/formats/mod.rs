//! Container writers for baked sheets
//!
//! Serializes a [`Raster`] into a DDS or KTX file body: fixed header,
//! KTX's image-size field, then the raw texel payload with no alignment or
//! padding beyond the texel boundary.

use std::io::Write;
use vat_common::Raster;

pub use vat_common::formats::{DdsHeader, KtxHeader, DDS_EXT, KTX_EXT};

/// Write a complete DDS texture file
pub fn write_dds_texture<W: Write>(w: &mut W, raster: &Raster) -> std::io::Result<()> {
    let header = DdsHeader::new(raster.width(), raster.height());
    w.write_all(&header.to_bytes())?;
    w.write_all(raster.payload_bytes())?;
    Ok(())
}

/// Write a complete KTX texture file
///
/// KTX carries an explicit image-size field between header and payload.
pub fn write_ktx_texture<W: Write>(w: &mut W, raster: &Raster) -> std::io::Result<()> {
    let header = KtxHeader::new(raster.width(), raster.height());
    w.write_all(&header.to_bytes())?;
    w.write_all(&header.image_size().to_le_bytes())?;
    w.write_all(raster.payload_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vat_common::Texel;

    fn raster_1x1() -> Raster {
        let mut raster = Raster::with_dimensions(1, 1);
        raster.push(Texel::from_attribute([1.0, 2.0, 3.0]));
        raster
    }

    #[test]
    fn test_dds_file_layout() {
        let mut buf = Vec::new();
        write_dds_texture(&mut buf, &raster_1x1()).unwrap();

        assert_eq!(buf.len(), DdsHeader::SIZE + 16);
        let header = DdsHeader::from_bytes(&buf).unwrap();
        assert_eq!((header.width, header.height), (1, 1));
        assert_eq!(&buf[DdsHeader::SIZE..DdsHeader::SIZE + 4], &1.0f32.to_le_bytes());
    }

    #[test]
    fn test_ktx_file_layout() {
        let mut buf = Vec::new();
        write_ktx_texture(&mut buf, &raster_1x1()).unwrap();

        assert_eq!(buf.len(), KtxHeader::SIZE + 4 + 16);
        let header = KtxHeader::from_bytes(&buf).unwrap();
        assert_eq!((header.pixel_width, header.pixel_height), (1, 1));
        assert_eq!(&buf[KtxHeader::SIZE..KtxHeader::SIZE + 4], &16u32.to_le_bytes());
        assert_eq!(
            &buf[KtxHeader::SIZE + 4..KtxHeader::SIZE + 8],
            &1.0f32.to_le_bytes()
        );
    }
}
