//! Grid line overlays for visualising cell boundaries.

use std::ops::Range;

use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bitmap::Bitmap;
use crate::error::{PxError, Result};
use crate::types::Colour;

/// How grid lines are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridStyle {
    /// Line colour. Only RGB is used; lines are always fully opaque.
    pub colour: Colour,
    /// Line thickness in pixels.
    pub width: u32,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            colour: Colour::RED,
            width: 1,
        }
    }
}

/// Draw vertical lines at `xs` and horizontal lines at `ys` over a copy of
/// `bitmap`.
///
/// The canvas is the source converted to RGBA. Vertical lines are drawn
/// first, then horizontal ones, each in the order given; later lines
/// overwrite earlier ones. A line of width `w` at `c` covers
/// `c - (w - 1) / 2 .. c - (w - 1) / 2 + w`. Anything outside the canvas is
/// clipped.
pub fn overlay_grid_lines(
    bitmap: &Bitmap,
    xs: &[i32],
    ys: &[i32],
    style: &GridStyle,
) -> Result<Bitmap> {
    if style.width == 0 {
        return Err(PxError::InvalidParameter {
            message: "Grid line width must be at least 1".to_string(),
            help: None,
        });
    }

    let mut canvas = bitmap.to_rgba();
    let (width, height) = canvas.dimensions();
    debug!(
        width,
        height,
        vertical = xs.len(),
        horizontal = ys.len(),
        colour = %style.colour,
        "overlaying grid lines"
    );

    let ink = Rgba(style.colour.opaque().to_rgba());

    for &x in xs {
        for col in line_span(x, style.width, width) {
            for row in 0..height {
                canvas.put_pixel(col, row, ink);
            }
        }
    }

    for &y in ys {
        for row in line_span(y, style.width, height) {
            for col in 0..width {
                canvas.put_pixel(col, row, ink);
            }
        }
    }

    Ok(Bitmap::Rgba(canvas))
}

/// Pixel range covered by a line centred on `coord`, clipped to `0..limit`.
fn line_span(coord: i32, line_width: u32, limit: u32) -> Range<u32> {
    let start = i64::from(coord) - (i64::from(line_width) - 1) / 2;
    let end = start + i64::from(line_width);
    let clip = |v: i64| v.clamp(0, i64::from(limit)) as u32;
    clip(start)..clip(end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};
    use pretty_assertions::assert_eq;

    const BG: [u8; 4] = [10, 20, 30, 255];

    fn background(width: u32, height: u32) -> Bitmap {
        Bitmap::from(RgbaImage::from_pixel(width, height, Rgba(BG)))
    }

    fn canvas(bitmap: Bitmap) -> RgbaImage {
        match bitmap {
            Bitmap::Rgba(img) => img,
            other => panic!("expected RGBA, got {}", other.format()),
        }
    }

    #[test]
    fn test_line_span() {
        assert_eq!(line_span(3, 1, 10), 3..4);
        assert_eq!(line_span(3, 2, 10), 3..5);
        assert_eq!(line_span(3, 3, 10), 2..5);
        assert_eq!(line_span(0, 3, 10), 0..2);
        assert_eq!(line_span(9, 4, 10), 8..10);
        assert_eq!(line_span(-5, 1, 10), 0..0);
        assert_eq!(line_span(12, 1, 10), 10..10);
    }

    #[test]
    fn test_single_lines_default_style() {
        let style = GridStyle::default();
        let out = canvas(overlay_grid_lines(&background(4, 3), &[1], &[2], &style).unwrap());

        assert_eq!(out.dimensions(), (4, 3));
        for y in 0..3 {
            for x in 0..4 {
                let expected = if x == 1 || y == 2 { [255, 0, 0, 255] } else { BG };
                assert_eq!(out.get_pixel(x, y).0, expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_crossing_and_repeated_lines() {
        let style = GridStyle {
            colour: Colour::rgb(0, 255, 0),
            width: 1,
        };
        let out = canvas(overlay_grid_lines(&background(3, 3), &[1, 1], &[1], &style).unwrap());
        assert_eq!(out.get_pixel(1, 1).0, [0, 255, 0, 255]);
        assert_eq!(out.get_pixel(1, 0).0, [0, 255, 0, 255]);
        assert_eq!(out.get_pixel(0, 1).0, [0, 255, 0, 255]);
        assert_eq!(out.get_pixel(0, 0).0, BG);
    }

    #[test]
    fn test_line_alpha_is_forced_opaque() {
        let style = GridStyle {
            colour: Colour::new(0, 0, 255, 10),
            width: 1,
        };
        let out = canvas(overlay_grid_lines(&background(2, 2), &[0], &[], &style).unwrap());
        assert_eq!(out.get_pixel(0, 1).0, [0, 0, 255, 255]);
    }

    #[test]
    fn test_wide_lines() {
        let style = GridStyle {
            colour: Colour::WHITE,
            width: 3,
        };
        let out = canvas(overlay_grid_lines(&background(7, 1), &[3], &[], &style).unwrap());
        let row: Vec<[u8; 4]> = (0..7).map(|x| out.get_pixel(x, 0).0).collect();
        let w = [255, 255, 255, 255];
        assert_eq!(row, vec![BG, BG, w, w, w, BG, BG]);
    }

    #[test]
    fn test_out_of_range_lines_are_clipped() {
        let src = background(3, 3);
        let style = GridStyle::default();
        let out = overlay_grid_lines(&src, &[-1, 3, 100], &[-7, 3], &style).unwrap();
        assert_eq!(out.to_rgba(), src.to_rgba());
    }

    #[test]
    fn test_luma_source_converted() {
        let src = Bitmap::from(GrayImage::from_pixel(2, 2, Luma([50])));
        let out = canvas(overlay_grid_lines(&src, &[], &[0], &GridStyle::default()).unwrap());
        assert_eq!(out.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(out.get_pixel(1, 1).0, [50, 50, 50, 255]);
    }

    #[test]
    fn test_source_untouched() {
        let src = background(2, 2);
        let before = src.clone();
        overlay_grid_lines(&src, &[0, 1], &[0, 1], &GridStyle::default()).unwrap();
        assert_eq!(src, before);
    }

    #[test]
    fn test_zero_width_rejected() {
        let style = GridStyle {
            colour: Colour::RED,
            width: 0,
        };
        let err = overlay_grid_lines(&background(2, 2), &[0], &[], &style).unwrap_err();
        assert!(matches!(err, PxError::InvalidParameter { .. }));
    }
}
