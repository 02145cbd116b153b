//! Adjust command - contrast and saturation

use anyhow::Result;
use clap::Args;
use packed_color::PackedColor;

use crate::inspect::describe;
use crate::parse::parse_color;

/// Arguments for the adjust command
#[derive(Args)]
pub struct AdjustArgs {
    /// Color to adjust
    #[arg(value_parser = parse_color)]
    pub color: PackedColor,

    /// Contrast factor around mid-grey (1.0 keeps the color to within one step)
    #[arg(long, allow_negative_numbers = true)]
    pub contrast: Option<f32>,

    /// Saturation factor around the luminance grey (0.0 = greyscale)
    #[arg(long, allow_negative_numbers = true)]
    pub saturation: Option<f32>,
}

/// Execute the adjust command
pub fn execute(args: AdjustArgs) -> Result<()> {
    if args.contrast.is_none() && args.saturation.is_none() {
        tracing::warn!("No --contrast or --saturation given; color is unchanged");
    }
    let result = apply(args.color, args.contrast, args.saturation);
    print!("{}", describe(result));
    Ok(())
}

/// Contrast first, then saturation; either may be skipped.
pub fn apply(color: PackedColor, contrast: Option<f32>, saturation: Option<f32>) -> PackedColor {
    let mut color = color;
    if let Some(contrast) = contrast {
        color = color.adjust_contrast(contrast);
    }
    if let Some(saturation) = saturation {
        color = color.adjust_saturation(saturation);
    }
    color
}
