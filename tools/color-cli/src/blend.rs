//! Blend command - combine two colors channel by channel

use anyhow::Result;
use clap::{Args, ValueEnum};
use packed_color::PackedColor;

use crate::inspect::describe;
use crate::parse::parse_color;

/// Per-channel operation applied by `blend`
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BlendOp {
    /// Sum modulo 256
    Add,
    /// Difference modulo 256
    Sub,
    /// Sum pinned at 255
    SaturatingAdd,
    /// Difference pinned at 0
    SaturatingSub,
    /// a * b / 255
    Modulate,
    Min,
    Max,
}

impl BlendOp {
    pub fn apply(self, a: PackedColor, b: PackedColor) -> PackedColor {
        match self {
            Self::Add => a + b,
            Self::Sub => a - b,
            Self::SaturatingAdd => a.saturating_add(b),
            Self::SaturatingSub => a.saturating_sub(b),
            Self::Modulate => a * b,
            Self::Min => a.min(b),
            Self::Max => a.max(b),
        }
    }
}

/// Arguments for the blend command
#[derive(Args)]
pub struct BlendArgs {
    /// Left operand
    #[arg(value_parser = parse_color)]
    pub a: PackedColor,

    /// Right operand
    #[arg(value_parser = parse_color)]
    pub b: PackedColor,

    /// Operation to apply
    #[arg(long, value_enum, default_value_t = BlendOp::Add)]
    pub op: BlendOp,
}

/// Execute the blend command
pub fn execute(args: BlendArgs) -> Result<()> {
    let result = args.op.apply(args.a, args.b);
    tracing::info!("{:?}: {} with {} -> {}", args.op, args.a, args.b, result);
    print!("{}", describe(result));
    Ok(())
}
