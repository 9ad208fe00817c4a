//! Core domain types for bannerforge.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - RGBA colour values
//! - `Pattern` - the closed set of overlay patterns
//! - `Banner` / `Layer` - the user-authored composition
//! - `Dye` - the fixed classification palette

mod banner;
mod colour;
mod dye;
mod pattern;

pub use banner::{Banner, Layer, MAX_LAYERS};
pub use colour::Colour;
pub use dye::{classify, Dye, DYE_PALETTE};
pub use pattern::{PaintMode, Pattern};
