//! Pattern rasterization: one drawing routine per pattern variant.
//!
//! All geometry is proportional to the fixed canvas dimensions.
//! Proportional sizes must floor, never round; they are computed with
//! integer arithmetic (`dim * pct / 100`).

use crate::types::{Colour, Pattern};

use super::canvas::{Canvas, BANNER_HEIGHT, BANNER_WIDTH};

const W: usize = BANNER_WIDTH;
const H: usize = BANNER_HEIGHT;

/// Rasterize `pattern` in `colour` onto `canvas`.
///
/// Pure and deterministic: identical inputs produce pixel-identical
/// output. The colour is written as given, alpha included; the compositor
/// decides whether the target is the running canvas or a transparent
/// overlay buffer.
pub fn draw_pattern(canvas: &mut Canvas, pattern: Pattern, colour: Colour) {
    match pattern {
        Pattern::StripeCenter => stripe_center(canvas, colour),
        Pattern::StripeTop => stripe_top(canvas, colour),
        Pattern::StripeBottom => stripe_bottom(canvas, colour),
        Pattern::StripeLeft => stripe_left(canvas, colour),
        Pattern::StripeRight => stripe_right(canvas, colour),
        Pattern::Cross => cross(canvas, colour),
        Pattern::Border => border(canvas, colour),
        Pattern::Chevron => chevron(canvas, colour),
        Pattern::HalfHorizontal => half_horizontal(canvas, colour),
        Pattern::HalfVertical => half_vertical(canvas, colour),
        Pattern::Gradient => gradient(canvas, colour),
        Pattern::Circle => circle(canvas, colour),
        Pattern::Diagonal => diagonal(canvas, colour),
    }
}

/// Horizontal band of height 18% of H, vertically centred.
fn stripe_center(canvas: &mut Canvas, colour: Colour) {
    let stripe = H * 18 / 100;
    canvas.fill_rect(0, (H - stripe) / 2, W, stripe, colour);
}

/// Horizontal band of height 20% of H at the top edge.
fn stripe_top(canvas: &mut Canvas, colour: Colour) {
    let stripe = H * 20 / 100;
    canvas.fill_rect(0, 0, W, stripe, colour);
}

/// Horizontal band of height 20% of H at the bottom edge.
fn stripe_bottom(canvas: &mut Canvas, colour: Colour) {
    let stripe = H * 20 / 100;
    canvas.fill_rect(0, H - stripe, W, stripe, colour);
}

/// Vertical band of width 20% of W at the left edge.
fn stripe_left(canvas: &mut Canvas, colour: Colour) {
    let stripe = W * 20 / 100;
    canvas.fill_rect(0, 0, stripe, H, colour);
}

/// Vertical band of width 20% of W at the right edge.
fn stripe_right(canvas: &mut Canvas, colour: Colour) {
    let stripe = W * 20 / 100;
    canvas.fill_rect(W - stripe, 0, stripe, H, colour);
}

/// Plus-sign: centred horizontal and vertical bars, both 12% of W thick.
fn cross(canvas: &mut Canvas, colour: Colour) {
    let bar = W * 12 / 100;
    canvas.fill_rect(0, (H - bar) / 2, W, bar, colour);
    canvas.fill_rect((W - bar) / 2, 0, bar, H, colour);
}

/// Edge bands of thickness 8% of W along all four sides.
fn border(canvas: &mut Canvas, colour: Colour) {
    let t = W * 8 / 100;
    canvas.fill_rect(0, 0, W, t, colour);
    canvas.fill_rect(0, H - t, W, t, colour);
    canvas.fill_rect(0, 0, t, H, colour);
    canvas.fill_rect(W - t, 0, t, H, colour);
}

/// Downward triangle: base corners at (0, c) and (W, c), apex at
/// (W/2, 2c), with c = 20% of H.
fn chevron(canvas: &mut Canvas, colour: Colour) {
    let c = (H * 20 / 100) as i32;
    canvas.fill_polygon(
        &[(0, c), ((W / 2) as i32, 2 * c), (W as i32, c)],
        colour,
    );
}

/// Top half of the canvas.
fn half_horizontal(canvas: &mut Canvas, colour: Colour) {
    canvas.fill_rect(0, 0, W, H / 2, colour);
}

/// Left half of the canvas.
fn half_vertical(canvas: &mut Canvas, colour: Colour) {
    canvas.fill_rect(0, 0, W / 2, H, colour);
}

/// Full-canvas alpha ramp: every row keeps the layer RGB while alpha runs
/// from 80 at the top toward 255 at the bottom.
///
/// alpha(y) = round(255 * (y/H) * 0.7 + 80), clamped to 255 (the raw
/// formula exceeds 255 on the last few rows).
fn gradient(canvas: &mut Canvas, colour: Colour) {
    for y in 0..H {
        let alpha = (255.0 * (y as f64 / H as f64) * 0.7 + 80.0).round().min(255.0);
        canvas.fill_rect(0, y, W, 1, colour.with_alpha(alpha as u8));
    }
}

/// Disk of radius 18% of W centred on the canvas.
fn circle(canvas: &mut Canvas, colour: Colour) {
    let r = W * 18 / 100;
    canvas.fill_disk(W / 2, H / 2, r, colour);
}

/// Corner-to-corner diagonal band of thickness 12% of W, as a filled
/// hexagon from the bottom-left to the top-right corner.
fn diagonal(canvas: &mut Canvas, colour: Colour) {
    let bar = (W * 12 / 100) as i32;
    let (w, h) = (W as i32, H as i32);
    canvas.fill_polygon(
        &[
            (0, h),
            (bar, h),
            (w, bar),
            (w, 0),
            (w - bar, 0),
            (0, h - bar),
        ],
        colour,
    );
}
