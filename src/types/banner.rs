//! Banner composition state: a base colour plus ordered pattern layers.

use crate::error::{BannerError, Result};

use super::{Colour, Pattern};

/// Maximum number of pattern layers a banner can hold.
pub const MAX_LAYERS: usize = 6;

/// One pattern + colour pair within a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layer {
    pub pattern: Pattern,
    pub colour: Colour,
}

impl Layer {
    /// Create a new layer.
    pub const fn new(pattern: Pattern, colour: Colour) -> Self {
        Self { pattern, colour }
    }
}

/// The complete user-authored composition: a base colour plus an ordered
/// stack of layers. Index 0 is the bottom-most layer; later layers
/// composite on top of earlier ones.
///
/// The value is owned by the caller and passed into rendering by shared
/// reference; the rendering core keeps no state between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    base: Colour,
    layers: Vec<Layer>,
}

impl Banner {
    /// Create a banner with no layers over the given base colour.
    pub fn new(base: Colour) -> Self {
        Self {
            base: base.opaque(),
            layers: Vec::new(),
        }
    }

    /// The base colour (always opaque).
    pub fn base(&self) -> Colour {
        self.base
    }

    /// Replace the base colour.
    pub fn set_base(&mut self, base: Colour) {
        self.base = base.opaque();
    }

    /// The layer stack, bottom-most first.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Number of layers currently in the stack.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Check if the banner has no layers.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Push a layer on top of the stack.
    ///
    /// Rejected once [`MAX_LAYERS`] layers exist; the existing state is
    /// left unchanged.
    pub fn add_layer(&mut self, layer: Layer) -> Result<()> {
        if self.layers.len() >= MAX_LAYERS {
            return Err(BannerError::LayerLimit);
        }
        self.layers.push(layer);
        Ok(())
    }

    /// Move the layer at `index` one position toward the base (index 0).
    ///
    /// Returns `false` without changes when `index` is 0 or out of range.
    pub fn lower_layer(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.layers.len() {
            return false;
        }
        self.layers.swap(index, index - 1);
        true
    }

    /// Move the layer at `index` one position toward the top of the stack.
    ///
    /// Returns `false` without changes when `index` is the top layer or
    /// out of range.
    pub fn raise_layer(&mut self, index: usize) -> bool {
        if index + 1 >= self.layers.len() {
            return false;
        }
        self.layers.swap(index, index + 1);
        true
    }

    /// Remove all layers, keeping the base colour.
    pub fn clear_layers(&mut self) {
        self.layers.clear();
    }
}

impl Default for Banner {
    /// An empty banner over the standard red base.
    fn default() -> Self {
        Self::new(Colour::rgb(0xB0, 0x2E, 0x26))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white_layer(pattern: Pattern) -> Layer {
        Layer::new(pattern, Colour::WHITE)
    }

    #[test]
    fn test_new_banner_is_empty() {
        let banner = Banner::new(Colour::rgb(1, 2, 3));
        assert!(banner.is_empty());
        assert_eq!(banner.layer_count(), 0);
        assert_eq!(banner.base(), Colour::rgb(1, 2, 3));
    }

    #[test]
    fn test_base_is_forced_opaque() {
        let banner = Banner::new(Colour::new(1, 2, 3, 40));
        assert!(banner.base().is_opaque());

        let mut banner = Banner::default();
        banner.set_base(Colour::new(9, 9, 9, 0));
        assert!(banner.base().is_opaque());
    }

    #[test]
    fn test_default_base_colour() {
        assert_eq!(Banner::default().base(), Colour::rgb(0xB0, 0x2E, 0x26));
    }

    #[test]
    fn test_add_layer_up_to_cap() {
        let mut banner = Banner::default();
        for _ in 0..MAX_LAYERS {
            banner.add_layer(white_layer(Pattern::Cross)).unwrap();
        }
        assert_eq!(banner.layer_count(), MAX_LAYERS);
    }

    #[test]
    fn test_add_layer_beyond_cap_is_rejected() {
        let mut banner = Banner::default();
        for _ in 0..MAX_LAYERS {
            banner.add_layer(white_layer(Pattern::Border)).unwrap();
        }

        let before = banner.clone();
        let err = banner.add_layer(white_layer(Pattern::Circle)).unwrap_err();

        assert!(matches!(err, BannerError::LayerLimit));
        // rejected mutation leaves state untouched
        assert_eq!(banner, before);
        assert_eq!(banner.layer_count(), MAX_LAYERS);
    }

    #[test]
    fn test_lower_layer_swaps_adjacent() {
        let mut banner = Banner::default();
        banner.add_layer(white_layer(Pattern::Cross)).unwrap();
        banner.add_layer(white_layer(Pattern::Circle)).unwrap();

        assert!(banner.lower_layer(1));
        assert_eq!(banner.layers()[0].pattern, Pattern::Circle);
        assert_eq!(banner.layers()[1].pattern, Pattern::Cross);
    }

    #[test]
    fn test_raise_layer_swaps_adjacent() {
        let mut banner = Banner::default();
        banner.add_layer(white_layer(Pattern::Cross)).unwrap();
        banner.add_layer(white_layer(Pattern::Circle)).unwrap();

        assert!(banner.raise_layer(0));
        assert_eq!(banner.layers()[0].pattern, Pattern::Circle);
        assert_eq!(banner.layers()[1].pattern, Pattern::Cross);
    }

    #[test]
    fn test_reorder_out_of_range_is_noop() {
        let mut banner = Banner::default();
        banner.add_layer(white_layer(Pattern::Cross)).unwrap();

        assert!(!banner.lower_layer(0));
        assert!(!banner.lower_layer(5));
        assert!(!banner.raise_layer(0));
        assert!(!banner.raise_layer(5));
        assert_eq!(banner.layers()[0].pattern, Pattern::Cross);
    }

    #[test]
    fn test_clear_layers_keeps_base() {
        let mut banner = Banner::new(Colour::rgb(7, 8, 9));
        banner.add_layer(white_layer(Pattern::Gradient)).unwrap();
        banner.clear_layers();

        assert!(banner.is_empty());
        assert_eq!(banner.base(), Colour::rgb(7, 8, 9));
    }

    #[test]
    fn test_can_add_after_clear() {
        let mut banner = Banner::default();
        for _ in 0..MAX_LAYERS {
            banner.add_layer(white_layer(Pattern::Chevron)).unwrap();
        }
        banner.clear_layers();
        assert!(banner.add_layer(white_layer(Pattern::Chevron)).is_ok());
    }
}
