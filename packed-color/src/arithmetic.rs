//! Per-channel arithmetic
//!
//! Each operation has a by-value form and an `_into` form writing to a
//! caller-owned slot. Add, subtract and unary negation wrap modulo 256;
//! clamp, max and min saturate. `scale` and `negate` deliberately differ
//! from their `_into` counterparts:
//!
//! | operation | by value                     | `_into`                 |
//! |-----------|------------------------------|-------------------------|
//! | scale     | `to_byte(c / 255 * s)`       | `truncate(c * s)`       |
//! | negate    | `to_byte(1 - c / 255)`       | `255 - c`               |

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::color::{PackedColor, normalize, to_byte, truncate_to_byte};

impl PackedColor {
    /// Apply `f` to every channel.
    #[inline]
    pub(crate) fn map_channels(self, f: impl Fn(u8) -> u8) -> Self {
        Self::new(f(self.red), f(self.green), f(self.blue), f(self.alpha))
    }

    /// Combine matching channels of `self` and `other` with `f`.
    #[inline]
    pub(crate) fn zip_channels(self, other: Self, f: impl Fn(u8, u8) -> u8) -> Self {
        Self::new(
            f(self.red, other.red),
            f(self.green, other.green),
            f(self.blue, other.blue),
            f(self.alpha, other.alpha),
        )
    }

    // ========================================================================
    // Add / Subtract / Negate (wrapping)
    // ========================================================================

    /// Per-channel sum modulo 256 (200 + 100 = 44).
    #[must_use]
    #[inline]
    pub fn wrapping_add(self, other: Self) -> Self {
        self.zip_channels(other, u8::wrapping_add)
    }

    #[inline]
    pub fn wrapping_add_into(&self, other: &Self, result: &mut Self) {
        *result = self.wrapping_add(*other);
    }

    /// Per-channel difference modulo 256 (10 - 20 = 246).
    #[must_use]
    #[inline]
    pub fn wrapping_sub(self, other: Self) -> Self {
        self.zip_channels(other, u8::wrapping_sub)
    }

    #[inline]
    pub fn wrapping_sub_into(&self, other: &Self, result: &mut Self) {
        *result = self.wrapping_sub(*other);
    }

    /// Per-channel two's-complement negation (1 becomes 255, 0 stays 0).
    #[must_use]
    #[inline]
    pub fn wrapping_neg(self) -> Self {
        self.map_channels(u8::wrapping_neg)
    }

    #[inline]
    pub fn wrapping_neg_into(&self, result: &mut Self) {
        *result = self.wrapping_neg();
    }

    /// Per-channel sum pinned at 255.
    #[must_use]
    #[inline]
    pub fn saturating_add(self, other: Self) -> Self {
        self.zip_channels(other, u8::saturating_add)
    }

    /// Per-channel difference pinned at 0.
    #[must_use]
    #[inline]
    pub fn saturating_sub(self, other: Self) -> Self {
        self.zip_channels(other, u8::saturating_sub)
    }

    // ========================================================================
    // Modulate / Scale
    // ========================================================================

    /// Multiplicative blend: `a * b / 255` per channel, truncated.
    #[must_use]
    #[inline]
    pub fn modulate(self, other: Self) -> Self {
        self.zip_channels(other, |a, b| {
            truncate_to_byte((a as u32 * b as u32) as f32 / 255.0)
        })
    }

    #[inline]
    pub fn modulate_into(&self, other: &Self, result: &mut Self) {
        *result = self.modulate(*other);
    }

    /// Scale the normalized channels and re-quantize with [`to_byte`].
    ///
    /// Saturates: `scale(2.0)` on 200 gives 255.
    #[must_use]
    #[inline]
    pub fn scale(self, scale: f32) -> Self {
        self.map_channels(|c| to_byte(normalize(c) * scale))
    }

    /// Scale raw byte magnitudes and truncate into a byte.
    ///
    /// Wraps: scaling 200 by 2.0 gives 144.
    #[inline]
    pub fn scale_into(&self, scale: f32, result: &mut Self) {
        result.alpha = truncate_to_byte(self.alpha as f32 * scale);
        result.red = truncate_to_byte(self.red as f32 * scale);
        result.green = truncate_to_byte(self.green as f32 * scale);
        result.blue = truncate_to_byte(self.blue as f32 * scale);
    }

    /// Invert each channel in the normalized float domain.
    ///
    /// `to_byte(1 - c / 255)` loses a step for many inputs (65 becomes 189);
    /// use [`Self::negate_into`] for exact byte inversion.
    #[must_use]
    #[inline]
    pub fn negate(self) -> Self {
        self.map_channels(|c| to_byte(1.0 - normalize(c)))
    }

    /// Exact byte inversion: `255 - c` per channel.
    #[inline]
    pub fn negate_into(&self, result: &mut Self) {
        result.alpha = 255 - self.alpha;
        result.red = 255 - self.red;
        result.green = 255 - self.green;
        result.blue = 255 - self.blue;
    }

    // ========================================================================
    // Clamp / Max / Min (saturating)
    // ========================================================================

    /// Pin each channel to `[min, max]`. Where `min > max`, `min` wins.
    #[must_use]
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        let pin = |value: u8, lo: u8, hi: u8| value.min(hi).max(lo);
        Self::new(
            pin(self.red, min.red, max.red),
            pin(self.green, min.green, max.green),
            pin(self.blue, min.blue, max.blue),
            pin(self.alpha, min.alpha, max.alpha),
        )
    }

    #[inline]
    pub fn clamp_into(&self, min: &Self, max: &Self, result: &mut Self) {
        *result = self.clamp(*min, *max);
    }

    /// Per-channel maximum
    #[must_use]
    #[inline]
    pub fn max(self, other: Self) -> Self {
        self.zip_channels(other, u8::max)
    }

    #[inline]
    pub fn max_into(&self, other: &Self, result: &mut Self) {
        *result = self.max(*other);
    }

    /// Per-channel minimum
    #[must_use]
    #[inline]
    pub fn min(self, other: Self) -> Self {
        self.zip_channels(other, u8::min)
    }

    #[inline]
    pub fn min_into(&self, other: &Self, result: &mut Self) {
        *result = self.min(*other);
    }
}

// ============================================================================
// Operators
// ============================================================================

impl Add for PackedColor {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

impl AddAssign for PackedColor {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = self.wrapping_add(rhs);
    }
}

impl Sub for PackedColor {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }
}

impl SubAssign for PackedColor {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.wrapping_sub(rhs);
    }
}

impl Neg for PackedColor {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.wrapping_neg()
    }
}

/// Raw byte scaling, same as [`PackedColor::scale_into`].
impl Mul<f32> for PackedColor {
    type Output = Self;

    #[inline]
    fn mul(self, scale: f32) -> Self {
        let mut result = Self::TRANSPARENT;
        self.scale_into(scale, &mut result);
        result
    }
}

impl Mul<PackedColor> for f32 {
    type Output = PackedColor;

    #[inline]
    fn mul(self, color: PackedColor) -> PackedColor {
        color * self
    }
}

impl MulAssign<f32> for PackedColor {
    #[inline]
    fn mul_assign(&mut self, scale: f32) {
        *self = *self * scale;
    }
}

/// Multiplicative blend, same as [`PackedColor::modulate`].
impl Mul for PackedColor {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.modulate(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red(value: u8) -> PackedColor {
        PackedColor::new(value, 0, 0, 0)
    }

    #[test]
    fn test_add_wraps() {
        assert_eq!(red(255).wrapping_add(red(1)), PackedColor::TRANSPARENT);
        assert_eq!(red(200) + red(100), red(44));

        let mut out = PackedColor::TRANSPARENT;
        red(200).wrapping_add_into(&red(100), &mut out);
        assert_eq!(out, red(44));
    }

    #[test]
    fn test_sub_wraps() {
        assert_eq!(red(10).wrapping_sub(red(20)), red(246));
        assert_eq!(red(10) - red(20), red(246));

        let mut out = PackedColor::WHITE;
        red(0).wrapping_sub_into(&red(1), &mut out);
        assert_eq!(out, red(255));
    }

    #[test]
    fn test_add_sub_assign() {
        let mut c = PackedColor::new(250, 10, 0, 128);
        c += PackedColor::new(10, 10, 10, 128);
        assert_eq!(c, PackedColor::new(4, 20, 10, 0));
        c -= PackedColor::new(5, 0, 0, 1);
        assert_eq!(c, PackedColor::new(255, 20, 10, 255));
    }

    #[test]
    fn test_saturating_forms() {
        assert_eq!(red(200).saturating_add(red(100)), red(255));
        assert_eq!(red(10).saturating_sub(red(20)), red(0));
    }

    #[test]
    fn test_unary_neg_wraps() {
        let c = PackedColor::new(0, 1, 128, 255);
        assert_eq!(-c, PackedColor::new(0, 255, 128, 1));

        let mut out = PackedColor::TRANSPARENT;
        c.wrapping_neg_into(&mut out);
        assert_eq!(out, -c);
    }

    #[test]
    fn test_modulate() {
        let full = PackedColor::splat(255);
        let half = PackedColor::splat(128);
        assert_eq!(full.modulate(half), half);
        assert_eq!(full * half, half);

        // 128 * 128 / 255 = 64.25
        assert_eq!(half.modulate(half), PackedColor::splat(64));

        let mut out = PackedColor::TRANSPARENT;
        half.modulate_into(&half, &mut out);
        assert_eq!(out, PackedColor::splat(64));
    }

    #[test]
    fn test_scale_by_value_saturates() {
        let c = PackedColor::new(200, 100, 0, 255);
        assert_eq!(c.scale(2.0), PackedColor::new(255, 200, 0, 255));
        assert_eq!(c.scale(-1.0), PackedColor::TRANSPARENT);
        assert_eq!(c.scale(0.5), PackedColor::new(100, 50, 0, 127));
    }

    #[test]
    fn test_scale_into_wraps() {
        let c = PackedColor::new(200, 100, 0, 255);
        let mut out = PackedColor::TRANSPARENT;
        c.scale_into(2.0, &mut out);
        assert_eq!(out, PackedColor::new(144, 200, 0, 254));

        c.scale_into(0.5, &mut out);
        assert_eq!(out, PackedColor::new(100, 50, 0, 127));
    }

    #[test]
    fn test_scale_operators_use_raw_bytes() {
        let c = PackedColor::new(200, 100, 0, 255);
        let mut out = PackedColor::TRANSPARENT;
        c.scale_into(2.0, &mut out);
        assert_eq!(c * 2.0, out);
        assert_eq!(2.0 * c, out);

        let mut d = c;
        d *= 2.0;
        assert_eq!(d, out);
    }

    #[test]
    fn test_negate_into_is_exact() {
        let mut out = PackedColor::TRANSPARENT;
        PackedColor::new(0, 65, 128, 255).negate_into(&mut out);
        assert_eq!(out, PackedColor::new(255, 190, 127, 0));
    }

    #[test]
    fn test_negate_by_value_goes_through_floats() {
        let c = PackedColor::new(0, 64, 65, 255);
        assert_eq!(c.negate(), PackedColor::new(255, 191, 189, 0));
    }

    #[test]
    fn test_clamp_saturates() {
        let min = PackedColor::splat(50);
        let max = PackedColor::splat(200);
        assert_eq!(red(10).clamp(min, max), PackedColor::new(50, 50, 50, 50));
        assert_eq!(
            PackedColor::new(250, 120, 0, 200).clamp(min, max),
            PackedColor::new(200, 120, 50, 200)
        );

        let mut out = PackedColor::TRANSPARENT;
        red(10).clamp_into(&min, &max, &mut out);
        assert_eq!(out.red, 50);
    }

    #[test]
    fn test_clamp_inverted_bounds_prefers_min() {
        let c = PackedColor::splat(100);
        let out = c.clamp(PackedColor::splat(150), PackedColor::splat(50));
        assert_eq!(out, PackedColor::splat(150));
    }

    #[test]
    fn test_max_min() {
        let a = PackedColor::new(10, 200, 30, 255);
        let b = PackedColor::new(20, 100, 30, 0);
        assert_eq!(a.max(b), PackedColor::new(20, 200, 30, 255));
        assert_eq!(a.min(b), PackedColor::new(10, 100, 30, 0));

        let mut out = PackedColor::TRANSPARENT;
        a.max_into(&b, &mut out);
        assert_eq!(out, a.max(b));
        a.min_into(&b, &mut out);
        assert_eq!(out, a.min(b));
    }
}
