//! Palette command - adjust every color in a palette.toml

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use packed_color::PackedColor;
use serde::Serialize;

use crate::adjust::apply;
use crate::manifest::PaletteManifest;
use crate::parse::hex;

/// Arguments for the palette command
#[derive(Args)]
pub struct PaletteArgs {
    /// Path to the palette TOML file
    pub file: PathBuf,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// One adjusted palette entry
#[derive(Debug, Serialize)]
pub struct PaletteEntry {
    pub name: String,
    pub original: String,
    pub argb: String,
    pub color: PackedColor,
}

/// Execute the palette command
pub fn execute(args: PaletteArgs) -> Result<()> {
    let manifest = PaletteManifest::load(&args.file)?;
    let entries = adjust_palette(&manifest)?;
    tracing::info!("Adjusted {} colors from {}", entries.len(), args.file.display());
    print!("{}", render(&entries, args.json)?);
    Ok(())
}

/// Apply the manifest's adjust section to each color.
pub fn adjust_palette(manifest: &PaletteManifest) -> Result<Vec<PaletteEntry>> {
    let adjust = &manifest.adjust;
    tracing::debug!(
        "Palette adjust: contrast={:?} saturation={:?}",
        adjust.contrast,
        adjust.saturation
    );

    Ok(manifest
        .resolve_colors()?
        .into_iter()
        .map(|(name, original)| {
            let color = apply(original, adjust.contrast, adjust.saturation);
            PaletteEntry {
                name,
                original: hex(original),
                argb: hex(color),
                color,
            }
        })
        .collect())
}

fn render(entries: &[PaletteEntry], json: bool) -> Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(entries)?;
        out.push('\n');
        return Ok(out);
    }

    let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
    Ok(entries
        .iter()
        .map(|e| {
            format!(
                "{:<width$}  {} -> {}  {}\n",
                e.name, e.original, e.argb, e.color
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PALETTE: &str = r##"
[adjust]
contrast = 0.0

[colors]
sky = "#3366B2"
ink = 0x80101010
"##;

    #[test]
    fn test_adjust_palette_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PALETTE.as_bytes()).unwrap();

        let manifest = PaletteManifest::load(file.path()).unwrap();
        let entries = adjust_palette(&manifest).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "ink");
        assert_eq!(entries[0].original, "0x80101010");
        // contrast 0 collapses to mid-grey, alpha kept
        assert_eq!(entries[0].color, PackedColor::new(127, 127, 127, 0x80));
        assert_eq!(entries[1].name, "sky");
        assert_eq!(entries[1].argb, "0xFF7F7F7F");
    }

    #[test]
    fn test_render_text_and_json() {
        let manifest = PaletteManifest::parse(PALETTE).unwrap();
        let entries = adjust_palette(&manifest).unwrap();

        let text = render(&entries, false).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.starts_with("ink  0x80101010 -> 0x807F7F7F  Alpha:128 Red:127"));

        let json = render(&entries, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[1]["name"], "sky");
        assert_eq!(value[1]["color"]["alpha"], 255);
    }

    #[test]
    fn test_palette_without_adjust_is_unchanged() {
        // both colors drift by one step if run through factor 1.0
        let manifest =
            PaletteManifest::parse("[colors]\nc = 0xFF000346\nd = \"#C8285A\"\n").unwrap();
        let entries = adjust_palette(&manifest).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].color.to_argb(), 0xFF000346);
        assert_eq!(entries[1].color.to_argb(), 0xFFC8285A);
        for entry in &entries {
            assert_eq!(entry.argb, entry.original);
        }
    }

    #[test]
    fn test_palette_applies_only_given_factor() {
        let manifest =
            PaletteManifest::parse("[adjust]\nsaturation = 0.0\n\n[colors]\nd = 0xFFC8285A\n")
                .unwrap();
        let entries = adjust_palette(&manifest).unwrap();
        let original = PackedColor::from_argb(0xFFC8285A);
        assert_eq!(entries[0].color, original.adjust_saturation(0.0));
    }
}
