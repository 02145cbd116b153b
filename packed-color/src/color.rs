//! The packed 32-bit color type and its construction paths
//!
//! Every float-accepting constructor funnels through [`to_byte`], the single
//! float → byte quantization primitive. Byte-domain arithmetic narrows with
//! [`truncate_to_byte`], which wraps rather than clamps.

use bitcode::{Decode, Encode};
use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::error::ColorError;
use crate::float_color::{Color3, Color4};

// ============================================================================
// Quantization
// ============================================================================

/// Convert a normalized float to a channel byte.
///
/// Multiplies by 255, truncates toward zero, then clamps to `[0, 255]`.
/// NaN maps to 0.
#[inline]
pub fn to_byte(component: f32) -> u8 {
    let value = (component * 255.0) as i32;
    value.clamp(0, 255) as u8
}

/// Narrow a float result into a byte the way legacy byte arithmetic does.
///
/// Truncates toward zero to 32 bits, then keeps the low 8 bits, so 300.0
/// becomes 44 and -1.0 becomes 255.
#[inline]
pub fn truncate_to_byte(value: f32) -> u8 {
    value as i32 as u8
}

/// Normalized float view of a channel byte.
#[inline]
pub(crate) fn normalize(channel: u8) -> f32 {
    channel as f32 / 255.0
}

// ============================================================================
// PackedColor
// ============================================================================

/// 32-bit color stored as four bytes.
///
/// Memory layout (4 bytes, align 1):
/// - red, green, blue, alpha, in that order
///
/// The packed integer form is independent of this layout: alpha is always the
/// most significant byte of [`PackedColor::to_argb`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Pod,
    Zeroable,
    Serialize,
    Deserialize,
    Encode,
    Decode,
)]
#[repr(C)]
pub struct PackedColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

const _: () = assert!(core::mem::size_of::<PackedColor>() == 4);
const _: () = assert!(core::mem::align_of::<PackedColor>() == 1);

impl PackedColor {
    /// All channels zero
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Create from four channel bytes.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Set all four channels, alpha included, to the same byte.
    #[inline]
    pub const fn splat(value: u8) -> Self {
        Self::new(value, value, value, value)
    }

    /// Set all four channels, alpha included, to the same normalized value.
    #[inline]
    pub fn splat_f32(value: f32) -> Self {
        Self::splat(to_byte(value))
    }

    /// Create from four normalized floats in (R, G, B, A) order.
    #[inline]
    pub fn from_f32(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self::new(to_byte(red), to_byte(green), to_byte(blue), to_byte(alpha))
    }

    /// Create from a normalized (R, G, B, A) vector.
    #[inline]
    pub fn from_vec4(value: Vec4) -> Self {
        Self::from_f32(value.x, value.y, value.z, value.w)
    }

    /// Create from a normalized (R, G, B) vector and a separate alpha.
    #[inline]
    pub fn from_vec3(value: Vec3, alpha: f32) -> Self {
        Self::from_f32(value.x, value.y, value.z, alpha)
    }

    /// Create from a normalized (R, G, B) vector with alpha 1.0.
    #[inline]
    pub fn from_vec3_opaque(value: Vec3) -> Self {
        Self::from_vec3(value, 1.0)
    }

    /// Quantize a float color.
    #[inline]
    pub fn from_color4(value: Color4) -> Self {
        Self::from_f32(value.red, value.green, value.blue, value.alpha)
    }

    /// Quantize a float RGB color; alpha becomes 255.
    #[inline]
    pub fn from_color3(value: Color3) -> Self {
        Self::from_f32(value.red, value.green, value.blue, 1.0)
    }

    /// Unpack `0xAARRGGBB`.
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            alpha: ((argb >> 24) & 255) as u8,
            red: ((argb >> 16) & 255) as u8,
            green: ((argb >> 8) & 255) as u8,
            blue: (argb & 255) as u8,
        }
    }

    /// Unpack a signed `0xAARRGGBB` integer (bit-identical to [`Self::from_argb`]).
    #[inline]
    pub const fn from_argb_i32(argb: i32) -> Self {
        Self::from_argb(argb as u32)
    }

    /// Create from bytes in (A, R, G, B) order.
    #[inline]
    pub const fn from_argb_bytes(values: [u8; 4]) -> Self {
        Self::new(values[1], values[2], values[3], values[0])
    }

    /// Create from normalized floats in (A, R, G, B) order.
    #[inline]
    pub fn from_argb_floats(values: [f32; 4]) -> Self {
        Self::from_f32(values[1], values[2], values[3], values[0])
    }

    /// Create from a native (A, R, G, B) byte buffer.
    ///
    /// Returns [`ColorError::NullInput`] for a null pointer and
    /// [`ColorError::InvalidLength`] unless `len == 4`.
    ///
    /// # Safety
    ///
    /// When `ptr` is non-null it must be valid for reads of `len` bytes.
    pub unsafe fn from_raw_argb_bytes(ptr: *const u8, len: usize) -> Result<Self, ColorError> {
        if ptr.is_null() {
            return Err(ColorError::NullInput);
        }
        // SAFETY: non-null, and the caller guarantees `len` readable bytes.
        let values = unsafe { core::slice::from_raw_parts(ptr, len) };
        Self::try_from(values)
    }

    /// Create from a native (A, R, G, B) normalized float buffer.
    ///
    /// # Safety
    ///
    /// When `ptr` is non-null it must be valid for reads of `len` floats.
    pub unsafe fn from_raw_argb_floats(ptr: *const f32, len: usize) -> Result<Self, ColorError> {
        if ptr.is_null() {
            return Err(ColorError::NullInput);
        }
        // SAFETY: non-null, and the caller guarantees `len` readable floats.
        let values = unsafe { core::slice::from_raw_parts(ptr, len) };
        Self::try_from(values)
    }

    /// Copy with a different alpha byte.
    #[must_use]
    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self::new(self.red, self.green, self.blue, alpha)
    }

    // ------------------------------------------------------------------------
    // Channel access
    // ------------------------------------------------------------------------

    #[inline]
    pub fn red_f32(self) -> f32 {
        normalize(self.red)
    }

    #[inline]
    pub fn green_f32(self) -> f32 {
        normalize(self.green)
    }

    #[inline]
    pub fn blue_f32(self) -> f32 {
        normalize(self.blue)
    }

    #[inline]
    pub fn alpha_f32(self) -> f32 {
        normalize(self.alpha)
    }

    /// Normalized channel by index: 0 = alpha, 1 = red, 2 = green, 3 = blue.
    pub fn get(&self, index: usize) -> Result<f32, ColorError> {
        match index {
            0 => Ok(normalize(self.alpha)),
            1 => Ok(normalize(self.red)),
            2 => Ok(normalize(self.green)),
            3 => Ok(normalize(self.blue)),
            _ => Err(ColorError::IndexOutOfRange { index }),
        }
    }

    /// Quantize `value` into the channel at `index` (same indices as [`Self::get`]).
    pub fn set(&mut self, index: usize, value: f32) -> Result<(), ColorError> {
        let channel = match index {
            0 => &mut self.alpha,
            1 => &mut self.red,
            2 => &mut self.green,
            3 => &mut self.blue,
            _ => return Err(ColorError::IndexOutOfRange { index }),
        };
        *channel = to_byte(value);
        Ok(())
    }
}
