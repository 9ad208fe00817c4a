//! bannerforge - layered banner rendering core
//!
//! A library for composing layered banner images: a base colour plus up to
//! six stacked pattern overlays, rendered deterministically onto a fixed
//! 256x512 RGBA canvas, exportable as PNG bytes and as a JSON description
//! that maps each layer colour to the nearest of 16 standard dyes.
//!
//! The crate is stateless between calls; the [`Banner`] value is owned by
//! the calling UI layer and passed in by reference on each render.

pub mod error;
pub mod output;
pub mod render;
pub mod types;

pub use error::{BannerError, Result};
pub use output::{write_export, BannerExport, LayerExport};
pub use render::{draw_pattern, encode_png, render, write_png, Canvas, BANNER_HEIGHT, BANNER_WIDTH};
pub use types::{classify, Banner, Colour, Dye, Layer, PaintMode, Pattern, DYE_PALETTE, MAX_LAYERS};
