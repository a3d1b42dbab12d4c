//! Shared types for vertex animation texture (VAT) baking
//!
//! This crate provides the pieces shared between the export tool and any
//! future runtime loaders:
//!
//! - [`raster`] - Texel grid model for baked animation sheets
//! - [`formats`] - DDS / KTX texture container headers

pub mod formats;
pub mod raster;

// Re-export commonly used format items
pub use formats::{DdsHeader, KtxHeader, DDS_EXT, KTX_EXT};

// Re-export the raster model
pub use raster::{Raster, Texel};
