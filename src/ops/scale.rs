//! Nearest-neighbour scaling.
//!
//! Sampling is pixel-centre based: output column `x` of `W_out` reads source
//! column `floor((x + 0.5) * W_in / W_out)`, computed exactly in integers.
//! An integer upscale by `n` therefore repeats every source pixel `n x n`
//! times, and an integer downscale by `n` keeps the pixel at offset `n / 2`
//! inside each `n x n` block. Rows follow the same rule.

use image::{ImageBuffer, Pixel};
use tracing::debug;

use crate::bitmap::Bitmap;
use crate::error::{PxError, Result};

/// Resize by `factor` using nearest-neighbour sampling.
///
/// The output is `round(width * factor) x round(height * factor)` and keeps
/// the source pixel format. Fails with `InvalidScale` for a non-finite or
/// non-positive factor, or when either output side rounds to zero.
pub fn scale(bitmap: &Bitmap, factor: f64) -> Result<Bitmap> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(PxError::InvalidScale {
            message: format!("scale factor must be a positive number, got {}", factor),
            help: None,
        });
    }

    let (width, height) = bitmap.dimensions();
    let new_width = scaled_side(width, factor)?;
    let new_height = scaled_side(height, factor)?;

    if new_width == 0 || new_height == 0 {
        return Err(PxError::InvalidScale {
            message: format!(
                "scaling {}x{} by {} gives an empty {}x{} image",
                width, height, factor, new_width, new_height
            ),
            help: Some("Use a larger factor or a larger source image".to_string()),
        });
    }

    debug!(width, height, factor, new_width, new_height, "scaling (nearest)");

    let scaled = match bitmap {
        Bitmap::Luma(img) => Bitmap::Luma(resample(img, new_width, new_height)),
        Bitmap::LumaAlpha(img) => Bitmap::LumaAlpha(resample(img, new_width, new_height)),
        Bitmap::Rgb(img) => Bitmap::Rgb(resample(img, new_width, new_height)),
        Bitmap::Rgba(img) => Bitmap::Rgba(resample(img, new_width, new_height)),
        Bitmap::Indexed(img) => {
            Bitmap::Indexed(img.with_indices(resample(img.indices(), new_width, new_height)))
        }
    };

    Ok(scaled)
}

/// Downsample by `1 / factor`, then upsample by `factor`.
///
/// Previews how an image reads when every `factor x factor` block collapses
/// to one pixel. Errors from either step are returned unchanged.
pub fn downsample_upsample(bitmap: &Bitmap, factor: u32) -> Result<Bitmap> {
    let factor = f64::from(factor);
    let downsampled = scale(bitmap, 1.0 / factor)?;
    scale(&downsampled, factor)
}

fn scaled_side(side: u32, factor: f64) -> Result<u32> {
    let scaled = (f64::from(side) * factor).round();
    if scaled > f64::from(u32::MAX) {
        return Err(PxError::InvalidScale {
            message: format!("scaling {} by {} overflows the maximum image size", side, factor),
            help: None,
        });
    }
    Ok(scaled as u32)
}

/// Source coordinate sampled by output coordinate `dst`.
fn nearest_source(dst: u32, src_len: u32, dst_len: u32) -> u32 {
    let pos = (2 * u64::from(dst) + 1) * u64::from(src_len) / (2 * u64::from(dst_len));
    // pos < src_len whenever dst < dst_len
    pos.min(u64::from(src_len) - 1) as u32
}

fn resample<P>(
    img: &ImageBuffer<P, Vec<P::Subpixel>>,
    width: u32,
    height: u32,
) -> ImageBuffer<P, Vec<P::Subpixel>>
where
    P: Pixel,
{
    let (src_w, src_h) = img.dimensions();
    let columns: Vec<u32> = (0..width).map(|x| nearest_source(x, src_w, width)).collect();
    let rows: Vec<u32> = (0..height).map(|y| nearest_source(y, src_h, height)).collect();

    ImageBuffer::from_fn(width, height, |x, y| {
        *img.get_pixel(columns[x as usize], rows[y as usize])
    })
}
