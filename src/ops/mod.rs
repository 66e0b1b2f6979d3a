//! Stateless bitmap transforms.
//!
//! Every transform borrows its input and returns a newly allocated
//! `Bitmap`:
//! - `crop_border` - trim a fixed margin from every edge
//! - `masked_grayscale` - Rec. 601 luma with an alpha cut-off
//! - `overlay_grid_lines` - draw reference lines over an RGBA copy
//! - `scale` / `downsample_upsample` - nearest-neighbour resizing

mod crop;
mod grayscale;
mod grid;
mod scale;

pub use crop::crop_border;
pub use grayscale::{masked_grayscale, DEFAULT_OPACITY_THRESHOLD};
pub use grid::{overlay_grid_lines, GridStyle};
pub use scale::{downsample_upsample, scale};
