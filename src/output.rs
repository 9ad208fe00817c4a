//! Machine-readable banner export.
//!
//! Serializes a banner to a stable JSON contract, attaching the
//! nearest-dye classification for each layer, and rebuilds banners from
//! previously exported documents.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BannerError, Result};
use crate::types::{Banner, Colour, Dye, Layer, Pattern};

/// JSON shape of an exported banner.
///
/// ```json
/// {
///   "base_color": "#RRGGBB",
///   "layers": [
///     { "type": "<pattern id>", "hex": "#RRGGBB",
///       "closest_minecraft_dye": "<dye name>", "dye_index": 0 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BannerExport {
    pub base_color: String,
    pub layers: Vec<LayerExport>,
}

/// JSON shape of one exported layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerExport {
    #[serde(rename = "type")]
    pub pattern: String,
    pub hex: String,
    pub closest_minecraft_dye: String,
    pub dye_index: u8,
}

impl BannerExport {
    /// Build the export for a banner, classifying each layer colour
    /// against the dye palette.
    pub fn from_banner(banner: &Banner) -> Self {
        let layers = banner
            .layers()
            .iter()
            .map(|layer| {
                let dye = Dye::nearest(layer.colour);
                LayerExport {
                    pattern: layer.pattern.id().to_string(),
                    hex: layer.colour.rgb_hex(),
                    closest_minecraft_dye: dye.name.to_string(),
                    dye_index: dye.index,
                }
            })
            .collect();

        Self {
            base_color: banner.base().rgb_hex(),
            layers,
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| BannerError::Build {
            message: format!("Failed to serialize banner export: {}", e),
        })
    }

    /// Parse an export from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| BannerError::Parse {
            message: format!("Invalid banner export: {}", e),
            help: None,
        })
    }

    /// Rebuild a banner from this export.
    ///
    /// Revalidates everything that crossed the serialization boundary:
    /// hex colours, pattern identifiers, and the layer cap.
    pub fn to_banner(&self) -> Result<Banner> {
        let mut banner = Banner::new(Colour::from_hex(&self.base_color)?);

        for layer in &self.layers {
            let pattern = Pattern::from_id(&layer.pattern)?;
            let colour = Colour::from_hex(&layer.hex)?;
            banner.add_layer(Layer::new(pattern, colour))?;
        }

        Ok(banner)
    }
}

/// Write a banner's JSON export to a file.
pub fn write_export(banner: &Banner, path: &Path) -> Result<()> {
    let json = BannerExport::from_banner(banner).to_json()?;

    fs::write(path, json).map_err(|e| BannerError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write banner export: {}", e),
    })?;

    Ok(())
}
