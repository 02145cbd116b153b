//! palette.toml parsing

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use packed_color::PackedColor;
use serde::Deserialize;

use crate::parse::parse_color;

/// palette.toml structure
#[derive(Debug, Default, Deserialize)]
pub struct PaletteManifest {
    #[serde(default)]
    pub adjust: AdjustSection,
    #[serde(default)]
    pub colors: BTreeMap<String, ColorEntry>,
}

/// Adjustments applied to every palette entry
///
/// An absent factor skips that step entirely; an explicit 1.0 still runs it
/// and may move a channel by one step.
#[derive(Debug, Default, Deserialize)]
pub struct AdjustSection {
    /// Default: not applied
    #[serde(default)]
    pub contrast: Option<f32>,

    /// Default: not applied
    #[serde(default)]
    pub saturation: Option<f32>,
}

/// A palette color, either a TOML integer (`0xFF202020`) or a string (`"#E05A2B"`)
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ColorEntry {
    Packed(u32),
    Text(String),
}

impl ColorEntry {
    pub fn resolve(&self) -> Result<PackedColor> {
        match self {
            Self::Packed(argb) => Ok(PackedColor::from_argb(*argb)),
            Self::Text(text) => parse_color(text),
        }
    }
}

impl PaletteManifest {
    /// Load manifest from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read palette: {}", path.display()))?;
        tracing::debug!("Loaded {} bytes from {}", content.len(), path.display());
        Self::parse(&content)
    }

    /// Parse manifest from string
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse palette.toml")
    }

    /// Resolve every entry, in name order.
    pub fn resolve_colors(&self) -> Result<Vec<(String, PackedColor)>> {
        self.colors
            .iter()
            .map(|(name, entry)| {
                let color = entry
                    .resolve()
                    .with_context(|| format!("Invalid color for '{name}'"))?;
                Ok((name.clone(), color))
            })
            .collect()
    }
}
