//! packed-color - inspect, blend and adjust 32-bit ARGB colors
//!
//! # Commands
//!
//! - `packed-color inspect <COLOR>` - Show channels, packed hex and float views
//! - `packed-color blend <A> <B> --op <OP>` - Combine two colors channel by channel
//! - `packed-color lerp <START> <END> --amount <T>` - Interpolate (`--smooth` for smoothstep)
//! - `packed-color adjust <COLOR>` - Apply contrast and/or saturation
//! - `packed-color palette <FILE>` - Adjust every color in a TOML palette
//!
//! Colors are written as `0xAARRGGBB`, `#AARRGGBB`, `#RRGGBB` (opaque) or a
//! decimal integer.
//!
//! # Palette (palette.toml)
//!
//! ```toml
//! [adjust]
//! contrast = 1.2
//! saturation = 0.8
//!
//! [colors]
//! background = 0xFF202020
//! accent = "#E05A2B"
//! ```
//!
//! Set `RUST_LOG=debug` to trace parsing and config loading on stderr.

mod adjust;
mod blend;
mod inspect;
mod lerp;
mod manifest;
mod palette;
mod parse;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Inspect, blend and adjust packed ARGB colors
#[derive(Parser)]
#[command(name = "packed-color")]
#[command(about = "Inspect, blend and adjust packed ARGB colors")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show channels, packed hex and normalized views of a color
    Inspect(inspect::InspectArgs),

    /// Combine two colors channel by channel
    Blend(blend::BlendArgs),

    /// Interpolate between two colors
    Lerp(lerp::LerpArgs),

    /// Apply contrast and saturation adjustments
    Adjust(adjust::AdjustArgs),

    /// Adjust every color in a TOML palette file
    Palette(palette::PaletteArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect(args) => inspect::execute(args),
        Commands::Blend(args) => blend::execute(args),
        Commands::Lerp(args) => lerp::execute(args),
        Commands::Adjust(args) => adjust::execute(args),
        Commands::Palette(args) => palette::execute(args),
    }
}
