//! Fixed-layout 32-bit ARGB color
//!
//! [`PackedColor`] stores four 8-bit channels in 4 bytes and reproduces the
//! legacy byte arithmetic exactly, so colors computed here match dependent
//! rendering code bit for bit.
//!
//! # Modules
//!
//! - [`color`] - The type itself, quantization, constructors, channel access
//! - [`arithmetic`] - Add/subtract (wrapping), modulate, scale, negate, clamp, min/max
//! - [`interpolate`] - Lerp and smoothstep
//! - [`adjust`] - Contrast and saturation
//! - [`convert`] - Packed integers, glam vectors, float colors, arrays
//! - [`format`] - Display/radix formatting and hashing
//! - [`float_color`] - Normalized [`Color3`] / [`Color4`]
//!
//! # Wrapping vs saturating
//!
//! `+`, `-` and unary `-` wrap modulo 256, as does narrowing in lerp, modulate
//! and raw scaling. `clamp`, `min`, `max` and everything routed through
//! [`to_byte`] saturate. [`PackedColor::saturating_add`] and
//! [`PackedColor::saturating_sub`] are available for callers that want
//! saturation throughout.
//!
//! ```
//! use packed_color::PackedColor;
//!
//! let a = PackedColor::new(200, 0, 0, 255);
//! let b = PackedColor::new(100, 0, 0, 0);
//! assert_eq!((a + b).red, 44);
//! assert_eq!(a.saturating_add(b).red, 255);
//! ```

pub mod adjust;
pub mod arithmetic;
pub mod color;
pub mod convert;
pub mod error;
pub mod float_color;
pub mod format;
pub mod interpolate;

pub use color::{PackedColor, to_byte, truncate_to_byte};
pub use error::ColorError;
pub use float_color::{Color3, Color4};
