//! Alpha-masked grayscale conversion.

use image::GrayImage;
use rayon::prelude::*;
use tracing::debug;

use crate::bitmap::Bitmap;
use crate::types::Colour;

/// Alpha values below this count as transparent unless told otherwise.
pub const DEFAULT_OPACITY_THRESHOLD: u8 = 128;

/// Convert a bitmap to single-channel Rec. 601 luma.
///
/// Pixels whose alpha is strictly below `threshold` become 0; every other
/// pixel gets `round(0.299 R + 0.587 G + 0.114 B)`. The source is converted
/// to RGBA first, so any pixel format is accepted.
pub fn masked_grayscale(bitmap: &Bitmap, threshold: u8) -> Bitmap {
    let rgba = bitmap.to_rgba();
    let (width, height) = rgba.dimensions();
    debug!(width, height, threshold, "converting to masked grayscale");

    let mut luma = GrayImage::new(width, height);
    let out: &mut [u8] = &mut luma;
    out.par_iter_mut()
        .zip(rgba.as_raw().par_chunks_exact(4))
        .for_each(|(value, px)| {
            *value = masked_luma(Colour::new(px[0], px[1], px[2], px[3]), threshold);
        });

    Bitmap::Luma(luma)
}

fn masked_luma(colour: Colour, threshold: u8) -> u8 {
    if colour.a < threshold {
        0
    } else {
        colour.luma()
    }
}
