//! Color argument parsing

use anyhow::{Context, Result, bail};
use packed_color::PackedColor;

/// Parse `0xAARRGGBB`, `#AARRGGBB`, `#RRGGBB` (alpha 255) or a decimal `u32`.
pub fn parse_color(text: &str) -> Result<PackedColor> {
    let text = text.trim();

    let color = if let Some(hex) = text.strip_prefix('#') {
        let argb = parse_hex_digits(hex, text)?;
        match hex.len() {
            6 => PackedColor::from_argb(argb).with_alpha(255),
            8 => PackedColor::from_argb(argb),
            _ => bail!("Hex color must have 6 or 8 digits: {text}"),
        }
    } else if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        PackedColor::from_argb(parse_hex_digits(hex, text)?)
    } else {
        let argb: u32 = text
            .parse()
            .with_context(|| format!("Invalid color: {text}"))?;
        PackedColor::from_argb(argb)
    };

    tracing::debug!("Parsed {:?} as {:#010X}", text, color.to_argb());
    Ok(color)
}

/// Hex digits only; `from_str_radix` alone would also take a leading `+`.
fn parse_hex_digits(hex: &str, text: &str) -> Result<u32> {
    if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        bail!("Invalid hex color: {text}");
    }
    u32::from_str_radix(hex, 16).with_context(|| format!("Invalid hex color: {text}"))
}

/// Format as `0xAARRGGBB`.
pub fn hex(color: PackedColor) -> String {
    format!("{:#010X}", color.to_argb())
}
