//! Rendering module for bannerforge.
//!
//! This module handles rasterizing patterns onto the fixed-size canvas,
//! compositing layer stacks over a base colour, and encoding PNG output.

mod canvas;
mod compositor;
mod pattern;
mod png;

pub use canvas::{Canvas, BANNER_HEIGHT, BANNER_WIDTH};
pub use compositor::render;
pub use pattern::draw_pattern;
pub use png::{encode_png, write_png};
