//! In-memory bitmaps.
//!
//! `Bitmap` wraps the 8-bit `image` buffers the transforms work on, plus a
//! palette-indexed layout. Transforms borrow a `Bitmap` and hand back a new
//! one; nothing is mutated in place.

mod indexed;

use std::fmt;
use std::path::Path;

use image::{DynamicImage, GrayAlphaImage, GrayImage, Rgba, RgbImage, RgbaImage};

use crate::error::{PxError, Result};
use crate::types::Colour;

pub use indexed::IndexedImage;

/// Pixel layout of a bitmap. All layouts use 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    Luma,
    LumaAlpha,
    Rgb,
    Rgba,
    Indexed,
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelFormat::Luma => write!(f, "L"),
            PixelFormat::LumaAlpha => write!(f, "LA"),
            PixelFormat::Rgb => write!(f, "RGB"),
            PixelFormat::Rgba => write!(f, "RGBA"),
            PixelFormat::Indexed => write!(f, "P"),
        }
    }
}

/// A rectangular grid of pixels in one of the supported formats.
#[derive(Debug, Clone, PartialEq)]
pub enum Bitmap {
    Luma(GrayImage),
    LumaAlpha(GrayAlphaImage),
    Rgb(RgbImage),
    Rgba(RgbaImage),
    Indexed(IndexedImage),
}

impl Bitmap {
    /// Load a bitmap from disk. The file format is picked from the content
    /// and extension by the `image` crate.
    pub fn open(path: &Path) -> Result<Self> {
        let img = image::open(path).map_err(|e| PxError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to load image: {}", e),
        })?;
        Ok(Self::from_dynamic(img))
    }

    /// Save a bitmap to disk, encoding by file extension.
    ///
    /// Indexed bitmaps are written as RGBA.
    pub fn save(&self, path: &Path) -> Result<()> {
        let result = match self {
            Bitmap::Luma(img) => img.save(path),
            Bitmap::LumaAlpha(img) => img.save(path),
            Bitmap::Rgb(img) => img.save(path),
            Bitmap::Rgba(img) => img.save(path),
            Bitmap::Indexed(img) => img.to_rgba().save(path),
        };

        result.map_err(|e| PxError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write image: {}", e),
        })
    }

    /// Wrap a decoded image. 8-bit layouts are kept as they are; anything
    /// wider (16-bit, float) is narrowed to RGBA.
    pub fn from_dynamic(img: DynamicImage) -> Self {
        match img {
            DynamicImage::ImageLuma8(buf) => Bitmap::Luma(buf),
            DynamicImage::ImageLumaA8(buf) => Bitmap::LumaAlpha(buf),
            DynamicImage::ImageRgb8(buf) => Bitmap::Rgb(buf),
            DynamicImage::ImageRgba8(buf) => Bitmap::Rgba(buf),
            other => Bitmap::Rgba(other.to_rgba8()),
        }
    }

    pub fn format(&self) -> PixelFormat {
        match self {
            Bitmap::Luma(_) => PixelFormat::Luma,
            Bitmap::LumaAlpha(_) => PixelFormat::LumaAlpha,
            Bitmap::Rgb(_) => PixelFormat::Rgb,
            Bitmap::Rgba(_) => PixelFormat::Rgba,
            Bitmap::Indexed(_) => PixelFormat::Indexed,
        }
    }

    pub fn width(&self) -> u32 {
        self.dimensions().0
    }

    pub fn height(&self) -> u32 {
        self.dimensions().1
    }

    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Bitmap::Luma(img) => img.dimensions(),
            Bitmap::LumaAlpha(img) => img.dimensions(),
            Bitmap::Rgb(img) => img.dimensions(),
            Bitmap::Rgba(img) => img.dimensions(),
            Bitmap::Indexed(img) => (img.width(), img.height()),
        }
    }

    /// The pixel at (x, y) seen as RGBA, or `None` outside the bitmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        match self {
            Bitmap::Luma(img) => img
                .get_pixel_checked(x, y)
                .map(|p| Colour::rgb(p[0], p[0], p[0])),
            Bitmap::LumaAlpha(img) => img
                .get_pixel_checked(x, y)
                .map(|p| Colour::new(p[0], p[0], p[0], p[1])),
            Bitmap::Rgb(img) => img
                .get_pixel_checked(x, y)
                .map(|p| Colour::rgb(p[0], p[1], p[2])),
            Bitmap::Rgba(img) => img.get_pixel_checked(x, y).map(|p| Colour::from(p.0)),
            Bitmap::Indexed(img) => img.colour_at(x, y),
        }
    }

    /// Convert to an RGBA buffer.
    ///
    /// The mapping is total: luma `l` becomes `(l, l, l, 255)`, luma-alpha
    /// `(l, a)` becomes `(l, l, l, a)`, RGB gains alpha 255 and indexed
    /// pixels resolve through their palette.
    pub fn to_rgba(&self) -> RgbaImage {
        match self {
            Bitmap::Rgba(img) => img.clone(),
            Bitmap::Indexed(img) => img.to_rgba(),
            other => {
                let (width, height) = other.dimensions();
                RgbaImage::from_fn(width, height, |x, y| {
                    let colour = other.pixel(x, y).unwrap_or(Colour::TRANSPARENT);
                    Rgba(colour.to_rgba())
                })
            }
        }
    }
}

impl From<GrayImage> for Bitmap {
    fn from(img: GrayImage) -> Self {
        Bitmap::Luma(img)
    }
}

impl From<GrayAlphaImage> for Bitmap {
    fn from(img: GrayAlphaImage) -> Self {
        Bitmap::LumaAlpha(img)
    }
}

impl From<RgbImage> for Bitmap {
    fn from(img: RgbImage) -> Self {
        Bitmap::Rgb(img)
    }
}

impl From<RgbaImage> for Bitmap {
    fn from(img: RgbaImage) -> Self {
        Bitmap::Rgba(img)
    }
}

impl From<IndexedImage> for Bitmap {
    fn from(img: IndexedImage) -> Self {
        Bitmap::Indexed(img)
    }
}

impl From<DynamicImage> for Bitmap {
    fn from(img: DynamicImage) -> Self {
        Self::from_dynamic(img)
    }
}
