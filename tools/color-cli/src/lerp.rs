//! Lerp command - interpolate between two colors

use anyhow::{Result, ensure};
use clap::Args;
use packed_color::PackedColor;

use crate::inspect::describe;
use crate::parse::{hex, parse_color};

/// Arguments for the lerp command
#[derive(Args)]
pub struct LerpArgs {
    /// Start color (amount 0)
    #[arg(value_parser = parse_color)]
    pub start: PackedColor,

    /// End color (amount 1)
    #[arg(value_parser = parse_color)]
    pub end: PackedColor,

    /// Blend amount; not clamped unless --smooth is given
    #[arg(short, long, default_value_t = 0.5, allow_negative_numbers = true)]
    pub amount: f32,

    /// Ease with smoothstep (clamps the amount to [0, 1])
    #[arg(long)]
    pub smooth: bool,

    /// Print a gradient of this many evenly spaced steps instead of one color.
    /// Cannot be combined with --amount.
    #[arg(long, conflicts_with = "amount")]
    pub steps: Option<u32>,
}

/// Execute the lerp command
pub fn execute(args: LerpArgs) -> Result<()> {
    if let Some(steps) = args.steps {
        ensure!(steps >= 2, "A gradient needs at least 2 steps");
        for (i, color) in gradient(args.start, args.end, steps, args.smooth)
            .into_iter()
            .enumerate()
        {
            println!("{i:>3}  {}  {color}", hex(color));
        }
        return Ok(());
    }

    let result = interpolate(args.start, args.end, args.amount, args.smooth);
    tracing::info!(
        "{} {} -> {} at {}",
        if args.smooth { "smoothstep" } else { "lerp" },
        hex(args.start),
        hex(args.end),
        args.amount
    );
    print!("{}", describe(result));
    Ok(())
}

fn interpolate(start: PackedColor, end: PackedColor, amount: f32, smooth: bool) -> PackedColor {
    if smooth {
        start.smooth_step(end, amount)
    } else {
        start.lerp(end, amount)
    }
}

/// `steps` colors from `start` to `end` inclusive.
fn gradient(start: PackedColor, end: PackedColor, steps: u32, smooth: bool) -> Vec<PackedColor> {
    let last = (steps - 1) as f32;
    (0..steps)
        .map(|i| interpolate(start, end, i as f32 / last, smooth))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_hits_both_ends() {
        let start = PackedColor::BLACK;
        let end = PackedColor::WHITE;
        let colors = gradient(start, end, 5, false);
        assert_eq!(colors.len(), 5);
        assert_eq!(colors[0], start);
        assert_eq!(colors[2], PackedColor::new(127, 127, 127, 255));
        assert_eq!(colors[4], end);

        let eased = gradient(start, end, 5, true);
        assert_eq!(eased[0], start);
        assert_eq!(eased[4], end);
        assert!(eased[1].red < colors[1].red);
    }

    #[test]
    fn test_interpolate_switches_mode() {
        let start = PackedColor::splat(0);
        let end = PackedColor::splat(200);
        assert_eq!(interpolate(start, end, 2.0, false), PackedColor::splat(144));
        assert_eq!(interpolate(start, end, 2.0, true), end);
    }
}
