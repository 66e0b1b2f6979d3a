//! Palette-indexed bitmaps.

use image::{GrayImage, Rgba, RgbaImage};

use crate::error::{PxError, Result};
use crate::types::Colour;

/// A bitmap whose pixels are indices into a colour palette.
///
/// Indices are stored in a single-channel buffer; every index is guaranteed
/// to resolve to a palette entry.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedImage {
    palette: Vec<Colour>,
    indices: GrayImage,
}

impl IndexedImage {
    /// Create an indexed image, checking that every index hits the palette.
    pub fn new(palette: Vec<Colour>, indices: GrayImage) -> Result<Self> {
        if palette.is_empty() || palette.len() > 256 {
            return Err(PxError::InvalidParameter {
                message: format!("Palette must hold 1-256 colours, got {}", palette.len()),
                help: None,
            });
        }

        if let Some((x, y, p)) = indices
            .enumerate_pixels()
            .find(|(_, _, p)| usize::from(p[0]) >= palette.len())
        {
            return Err(PxError::InvalidParameter {
                message: format!(
                    "Index {} at ({}, {}) is outside the {}-colour palette",
                    p[0],
                    x,
                    y,
                    palette.len()
                ),
                help: Some("Every index must be less than the palette length".to_string()),
            });
        }

        Ok(Self { palette, indices })
    }

    pub fn palette(&self) -> &[Colour] {
        &self.palette
    }

    pub fn indices(&self) -> &GrayImage {
        &self.indices
    }

    pub fn width(&self) -> u32 {
        self.indices.width()
    }

    pub fn height(&self) -> u32 {
        self.indices.height()
    }

    /// Colour at (x, y), or `None` outside the image.
    pub fn colour_at(&self, x: u32, y: u32) -> Option<Colour> {
        let index = self.indices.get_pixel_checked(x, y)?[0];
        self.palette.get(usize::from(index)).copied()
    }

    /// Same palette, new index buffer. Used by transforms that only move
    /// indices around, so the palette invariant still holds.
    pub(crate) fn with_indices(&self, indices: GrayImage) -> Self {
        Self {
            palette: self.palette.clone(),
            indices,
        }
    }

    /// Resolve every index through the palette.
    pub fn to_rgba(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width(), self.height(), |x, y| {
            let index = usize::from(self.indices.get_pixel(x, y)[0]);
            Rgba(self.palette[index].to_rgba())
        })
    }
}
