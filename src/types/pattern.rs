//! The closed set of banner overlay patterns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BannerError, Result};

/// How a pattern's pixels are applied to the running canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintMode {
    /// Painted straight onto the canvas, overwriting covered pixels.
    Direct,
    /// Rendered into a transparent buffer, then alpha-composited over.
    AlphaOver,
}

/// A banner overlay pattern.
///
/// The set is closed and fixed at build time; each variant has a stable
/// snake_case identifier used in the JSON export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    StripeCenter,
    StripeTop,
    StripeBottom,
    StripeLeft,
    StripeRight,
    Cross,
    Border,
    Chevron,
    HalfHorizontal,
    HalfVertical,
    Gradient,
    Circle,
    Diagonal,
}

impl Pattern {
    /// All patterns, in pick-list order.
    pub const ALL: [Pattern; 13] = [
        Pattern::StripeCenter,
        Pattern::StripeTop,
        Pattern::StripeBottom,
        Pattern::StripeLeft,
        Pattern::StripeRight,
        Pattern::Cross,
        Pattern::Border,
        Pattern::Chevron,
        Pattern::HalfHorizontal,
        Pattern::HalfVertical,
        Pattern::Gradient,
        Pattern::Circle,
        Pattern::Diagonal,
    ];

    /// Stable snake_case identifier (the JSON `type` field).
    pub fn id(self) -> &'static str {
        match self {
            Pattern::StripeCenter => "stripe_center",
            Pattern::StripeTop => "stripe_top",
            Pattern::StripeBottom => "stripe_bottom",
            Pattern::StripeLeft => "stripe_left",
            Pattern::StripeRight => "stripe_right",
            Pattern::Cross => "cross",
            Pattern::Border => "border",
            Pattern::Chevron => "chevron",
            Pattern::HalfHorizontal => "half_horizontal",
            Pattern::HalfVertical => "half_vertical",
            Pattern::Gradient => "gradient",
            Pattern::Circle => "circle",
            Pattern::Diagonal => "diagonal",
        }
    }

    /// Human-readable label for pick lists.
    pub fn label(self) -> &'static str {
        match self {
            Pattern::StripeCenter => "Stripe (center)",
            Pattern::StripeTop => "Stripe (top)",
            Pattern::StripeBottom => "Stripe (bottom)",
            Pattern::StripeLeft => "Stripe (left)",
            Pattern::StripeRight => "Stripe (right)",
            Pattern::Cross => "Cross",
            Pattern::Border => "Border",
            Pattern::Chevron => "Chevron",
            Pattern::HalfHorizontal => "Half (horizontal)",
            Pattern::HalfVertical => "Half (vertical)",
            Pattern::Gradient => "Gradient",
            Pattern::Circle => "Circle",
            Pattern::Diagonal => "Diagonal",
        }
    }

    /// Resolve a snake_case identifier.
    ///
    /// The identifier set is closed; an unknown id is an invariant
    /// violation, not a user-facing condition.
    pub fn from_id(id: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.id() == id)
            .ok_or_else(|| BannerError::InvalidPattern { id: id.to_string() })
    }

    /// How this pattern is applied during compositing.
    ///
    /// The gradient is the one translucent pattern; painting it directly
    /// would overwrite lower layers instead of showing through them.
    pub fn paint_mode(self) -> PaintMode {
        match self {
            Pattern::Gradient => PaintMode::AlphaOver,
            _ => PaintMode::Direct,
        }
    }
}

impl FromStr for Pattern {
    type Err = BannerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_id(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
