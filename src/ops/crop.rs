//! Border cropping.

use image::{imageops, ImageBuffer, Pixel};
use tracing::debug;

use crate::bitmap::Bitmap;
use crate::error::{PxError, Result};

/// Trim `margin` pixels from all four edges.
///
/// The result covers `[margin, width - margin) x [margin, height - margin)`
/// of the source and keeps its pixel format. Fails with `InvalidDimensions`
/// when nothing would be left.
pub fn crop_border(bitmap: &Bitmap, margin: u32) -> Result<Bitmap> {
    let (width, height) = bitmap.dimensions();

    let invalid = || PxError::InvalidDimensions {
        width,
        height,
        margin,
    };
    let twice = margin.checked_mul(2).ok_or_else(invalid)?;
    if twice >= width || twice >= height {
        return Err(invalid());
    }

    let (w, h) = (width - twice, height - twice);
    debug!(width, height, margin, "cropping border to {}x{}", w, h);

    let cropped = match bitmap {
        Bitmap::Luma(img) => Bitmap::Luma(crop_buffer(img, margin, w, h)),
        Bitmap::LumaAlpha(img) => Bitmap::LumaAlpha(crop_buffer(img, margin, w, h)),
        Bitmap::Rgb(img) => Bitmap::Rgb(crop_buffer(img, margin, w, h)),
        Bitmap::Rgba(img) => Bitmap::Rgba(crop_buffer(img, margin, w, h)),
        Bitmap::Indexed(img) => {
            Bitmap::Indexed(img.with_indices(crop_buffer(img.indices(), margin, w, h)))
        }
    };

    Ok(cropped)
}

fn crop_buffer<P>(
    img: &ImageBuffer<P, Vec<P::Subpixel>>,
    offset: u32,
    width: u32,
    height: u32,
) -> ImageBuffer<P, Vec<P::Subpixel>>
where
    P: Pixel + 'static,
{
    imageops::crop_imm(img, offset, offset, width, height).to_image()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::IndexedImage;
    use crate::types::Colour;
    use image::{GrayImage, Luma, Rgba, RgbaImage};
    use pretty_assertions::assert_eq;

    fn numbered(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 0, 255]))
    }

    #[test]
    fn test_crop_4x4_margin_1() {
        let src = numbered(4, 4);
        let cropped = crop_border(&Bitmap::from(src.clone()), 1).unwrap();

        assert_eq!(cropped.dimensions(), (2, 2));
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(
                    cropped.pixel(x, y),
                    Some(Colour::from(src.get_pixel(x + 1, y + 1).0))
                );
            }
        }
    }

    #[test]
    fn test_crop_keeps_format() {
        let bitmap = Bitmap::from(GrayImage::from_pixel(5, 6, Luma([7])));
        let cropped = crop_border(&bitmap, 2).unwrap();
        assert_eq!(cropped.format(), bitmap.format());
        assert_eq!(cropped.dimensions(), (1, 2));
    }

    #[test]
    fn test_crop_indexed_keeps_palette() {
        let indices = GrayImage::from_fn(3, 3, |x, y| Luma([u8::from(x == 1 && y == 1)]));
        let indexed = IndexedImage::new(vec![Colour::BLACK, Colour::WHITE], indices).unwrap();

        let cropped = crop_border(&Bitmap::from(indexed), 1).unwrap();
        assert_eq!(cropped.dimensions(), (1, 1));
        assert_eq!(cropped.pixel(0, 0), Some(Colour::WHITE));
    }

    #[test]
    fn test_crop_zero_margin_is_copy() {
        let bitmap = Bitmap::from(numbered(3, 2));
        assert_eq!(crop_border(&bitmap, 0).unwrap(), bitmap);
    }

    #[test]
    fn test_crop_too_large() {
        let bitmap = Bitmap::from(numbered(4, 6));

        let err = crop_border(&bitmap, 2).unwrap_err();
        assert!(matches!(
            err,
            PxError::InvalidDimensions {
                width: 4,
                height: 6,
                margin: 2
            }
        ));
        assert!(crop_border(&bitmap, u32::MAX).is_err());
    }

    #[test]
    fn test_crop_empty_bitmap() {
        let bitmap = Bitmap::from(RgbaImage::new(0, 0));
        assert!(crop_border(&bitmap, 0).is_err());
    }
}
