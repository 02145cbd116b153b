//! Linear and smoothstep interpolation between colors

use crate::color::{PackedColor, truncate_to_byte};

/// `start + amount * (end - start)`, narrowed with wraparound.
#[inline]
fn blend(start: u8, end: u8, amount: f32) -> u8 {
    truncate_to_byte(start as f32 + amount * (end as i32 - start as i32) as f32)
}

/// Cubic ease `t² (3 - 2t)` on `amount` clamped to `[0, 1]`.
#[inline]
fn smooth_amount(amount: f32) -> f32 {
    let t = if amount > 1.0 {
        1.0
    } else if amount < 0.0 {
        0.0
    } else {
        amount
    };
    (t * t) * (3.0 - 2.0 * t)
}

impl PackedColor {
    /// Per-channel linear interpolation.
    ///
    /// `amount` is not clamped; values outside `[0, 1]` extrapolate and wrap
    /// when they leave the byte range. `0.0` yields `self`, `1.0` yields `end`.
    #[must_use]
    #[inline]
    pub fn lerp(self, end: Self, amount: f32) -> Self {
        self.zip_channels(end, |s, e| blend(s, e, amount))
    }

    #[inline]
    pub fn lerp_into(&self, end: &Self, amount: f32, result: &mut Self) {
        *result = self.lerp(*end, amount);
    }

    /// Linear interpolation after easing the clamped `amount` with smoothstep.
    #[must_use]
    #[inline]
    pub fn smooth_step(self, end: Self, amount: f32) -> Self {
        self.lerp(end, smooth_amount(amount))
    }

    #[inline]
    pub fn smooth_step_into(&self, end: &Self, amount: f32, result: &mut Self) {
        *result = self.smooth_step(*end, amount);
    }
}
