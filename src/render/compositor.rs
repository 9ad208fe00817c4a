//! Banner compositing: stack pattern layers over a base colour.

use crate::types::{Banner, PaintMode};

use super::canvas::Canvas;
use super::pattern::draw_pattern;

/// Render a banner into a fresh canvas.
///
/// The canvas starts as the opaque base colour. Layers apply bottom-up in
/// stack order through one of two paint paths:
///
/// - direct patterns overwrite the pixels they cover at full opacity;
/// - alpha patterns (the gradient) render into a transparent overlay
///   buffer that is then composited over the running canvas, so lower
///   layers stay visible through the partial transparency.
///
/// Stateless and reentrant; the banner is only read.
pub fn render(banner: &Banner) -> Canvas {
    let mut canvas = Canvas::solid(banner.base());

    for layer in banner.layers() {
        match layer.pattern.paint_mode() {
            PaintMode::Direct => {
                draw_pattern(&mut canvas, layer.pattern, layer.colour.opaque());
            }
            PaintMode::AlphaOver => {
                let mut overlay = Canvas::transparent();
                draw_pattern(&mut overlay, layer.pattern, layer.colour);
                canvas.composite_over(&overlay);
            }
        }
    }

    canvas
}
