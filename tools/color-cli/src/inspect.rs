//! Inspect command - show every view of a single color

use anyhow::Result;
use clap::Args;
use packed_color::PackedColor;

use crate::parse::{hex, parse_color};

/// Arguments for the inspect command
#[derive(Args)]
pub struct InspectArgs {
    /// Color to inspect
    #[arg(value_parser = parse_color)]
    pub color: PackedColor,
}

/// Execute the inspect command
pub fn execute(args: InspectArgs) -> Result<()> {
    print!("{}", describe(args.color));
    Ok(())
}

/// Multi-line report used by `inspect` and the other single-result commands.
pub fn describe(color: PackedColor) -> String {
    let v = color.to_vec4();
    let [a, r, g, b] = color.to_array();
    format!(
        "{color}\n  packed:  {}\n  hex:     {color:02X}\n  \
         rgba:    [{:.4}, {:.4}, {:.4}, {:.4}]\n  \
         argb:    [{a:.4}, {r:.4}, {g:.4}, {b:.4}]\n  \
         luma:    {:.4}\n",
        hex(color),
        v.x,
        v.y,
        v.z,
        v.w,
        color.luminance(),
    )
}
