//! pxkit - Image helpers for generative pixel art
//!
//! A small set of pure bitmap transforms: border cropping, alpha-masked
//! grayscale, grid line overlays and nearest-neighbour scaling. Decoding and
//! encoding stay at the edges (`Bitmap::open` / `Bitmap::save`); every
//! transform works on in-memory bitmaps and returns a new one.

pub mod bitmap;
pub mod error;
pub mod ops;
pub mod settings;
pub mod types;

pub use bitmap::{Bitmap, IndexedImage, PixelFormat};
pub use error::{PxError, Result};
pub use ops::{
    crop_border, downsample_upsample, masked_grayscale, overlay_grid_lines, scale, GridStyle,
    DEFAULT_OPACITY_THRESHOLD,
};
pub use settings::Settings;
pub use types::Colour;
