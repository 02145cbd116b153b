//! Conversions between `PackedColor`, packed integers, vectors and float colors
//!
//! Two channel orders are in play and both are part of the contract:
//! - vectors and float colors are (R, G, B, A)
//! - arrays ([`PackedColor::to_array`], `TryFrom<&[u8]>`, `TryFrom<&[f32]>`) are (A, R, G, B)
//!
//! Lossy float → byte conversions are only available as named constructors
//! in the `color` module; the `From` impls here never lose information.

use glam::{Vec3, Vec4};

use crate::color::{PackedColor, normalize};
use crate::error::ColorError;
use crate::float_color::{Color3, Color4};

impl PackedColor {
    /// Pack as `0xAARRGGBB`.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        (self.blue as u32)
            | ((self.green as u32) << 8)
            | ((self.red as u32) << 16)
            | ((self.alpha as u32) << 24)
    }

    /// Signed view of [`Self::to_argb`], for APIs taking `int` colors.
    #[inline]
    pub const fn to_argb_i32(self) -> i32 {
        self.to_argb() as i32
    }

    /// Normalized (R, G, B)
    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(normalize(self.red), normalize(self.green), normalize(self.blue))
    }

    /// Normalized (R, G, B, A)
    #[inline]
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(
            normalize(self.red),
            normalize(self.green),
            normalize(self.blue),
            normalize(self.alpha),
        )
    }

    /// Normalized RGB, alpha dropped.
    #[inline]
    pub fn to_color3(self) -> Color3 {
        Color3::from(self.to_vec3())
    }

    #[inline]
    pub fn to_color4(self) -> Color4 {
        Color4::from(self.to_vec4())
    }

    /// Normalized channels in (A, R, G, B) order.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [
            normalize(self.alpha),
            normalize(self.red),
            normalize(self.green),
            normalize(self.blue),
        ]
    }

    /// Raw bytes in memory order (R, G, B, A).
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Raw bytes in (A, R, G, B) order, inverse of [`Self::from_argb_bytes`].
    #[inline]
    pub const fn to_argb_bytes(self) -> [u8; 4] {
        [self.alpha, self.red, self.green, self.blue]
    }
}

// ============================================================================
// Packed integers
// ============================================================================

impl From<u32> for PackedColor {
    #[inline]
    fn from(argb: u32) -> Self {
        Self::from_argb(argb)
    }
}

impl From<i32> for PackedColor {
    #[inline]
    fn from(argb: i32) -> Self {
        Self::from_argb_i32(argb)
    }
}

impl From<PackedColor> for u32 {
    #[inline]
    fn from(color: PackedColor) -> Self {
        color.to_argb()
    }
}

impl From<PackedColor> for i32 {
    #[inline]
    fn from(color: PackedColor) -> Self {
        color.to_argb_i32()
    }
}

// ============================================================================
// Float views
// ============================================================================

impl From<PackedColor> for Vec3 {
    #[inline]
    fn from(color: PackedColor) -> Self {
        color.to_vec3()
    }
}

impl From<PackedColor> for Vec4 {
    #[inline]
    fn from(color: PackedColor) -> Self {
        color.to_vec4()
    }
}

impl From<PackedColor> for Color3 {
    #[inline]
    fn from(color: PackedColor) -> Self {
        color.to_color3()
    }
}

impl From<PackedColor> for Color4 {
    #[inline]
    fn from(color: PackedColor) -> Self {
        color.to_color4()
    }
}

// ============================================================================
// Arrays (A, R, G, B)
// ============================================================================

impl TryFrom<&[u8]> for PackedColor {
    type Error = ColorError;

    fn try_from(values: &[u8]) -> Result<Self, Self::Error> {
        let values: [u8; 4] = values
            .try_into()
            .map_err(|_| ColorError::InvalidLength { len: values.len() })?;
        Ok(Self::from_argb_bytes(values))
    }
}

impl TryFrom<&[f32]> for PackedColor {
    type Error = ColorError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        let values: [f32; 4] = values
            .try_into()
            .map_err(|_| ColorError::InvalidLength { len: values.len() })?;
        Ok(Self::from_argb_floats(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_argb_byte_order() {
        let c = PackedColor::new(0x11, 0x22, 0x33, 0x44);
        assert_eq!(c.to_argb(), 0x44112233);
        assert_eq!(u32::from(c), 0x44112233);
        assert_eq!(c.to_argb_i32(), 0x44112233);
    }

    #[test]
    fn test_to_argb_i32_negative_when_alpha_high() {
        let c = PackedColor::new(0, 0, 0, 0x80);
        assert_eq!(c.to_argb_i32(), i32::MIN);
        assert_eq!(i32::from(PackedColor::splat(255)), -1);
        assert_eq!(PackedColor::from(-1i32), PackedColor::splat(255));
    }

    #[test]
    fn test_argb_roundtrip() {
        for argb in [0u32, 1, 0xFF, 0xFF00, 0x00FF0000, 0xFF000000, 0xDEADBEEF, u32::MAX] {
            assert_eq!(PackedColor::from(argb).to_argb(), argb);
        }
    }

    #[test]
    fn test_vector_order_is_rgba() {
        let c = PackedColor::new(255, 0, 51, 102);
        assert_eq!(c.to_vec4(), Vec4::new(1.0, 0.0, 0.2, 0.4));
        assert_eq!(c.to_vec3(), Vec3::new(1.0, 0.0, 0.2));
        assert_eq!(Vec4::from(c), c.to_vec4());
    }

    #[test]
    fn test_to_array_order_is_argb() {
        let c = PackedColor::new(255, 0, 51, 102);
        assert_eq!(c.to_array(), [0.4, 1.0, 0.0, 0.2]);
    }

    #[test]
    fn test_float_color_conversions() {
        let c = PackedColor::new(255, 0, 51, 102);
        assert_eq!(c.to_color4(), Color4::new(1.0, 0.0, 0.2, 0.4));
        assert_eq!(c.to_color3(), Color3::new(1.0, 0.0, 0.2));

        assert_eq!(PackedColor::from_color4(c.to_color4()), c);
        assert_eq!(PackedColor::from_color3(c.to_color3()), c.with_alpha(255));
        assert_eq!(PackedColor::from_vec4(c.to_vec4()), c);
    }

    #[test]
    fn test_byte_orders() {
        let c = PackedColor::new(1, 2, 3, 4);
        assert_eq!(c.to_bytes(), [1, 2, 3, 4]);
        assert_eq!(c.to_argb_bytes(), [4, 1, 2, 3]);
        assert_eq!(PackedColor::from_argb_bytes(c.to_argb_bytes()), c);
    }

    #[test]
    fn test_try_from_slices() {
        let bytes: &[u8] = &[255, 10, 20, 30];
        assert_eq!(PackedColor::try_from(bytes), Ok(PackedColor::new(10, 20, 30, 255)));

        let floats: &[f32] = &[1.0, 0.0, 0.5, 1.0];
        assert_eq!(PackedColor::try_from(floats), Ok(PackedColor::new(0, 127, 255, 255)));
    }

    #[test]
    fn test_try_from_rejects_wrong_lengths() {
        for len in [0usize, 3, 5] {
            let bytes = vec![0u8; len];
            assert_eq!(
                PackedColor::try_from(bytes.as_slice()),
                Err(ColorError::InvalidLength { len })
            );

            let floats = vec![0.0f32; len];
            assert_eq!(
                PackedColor::try_from(floats.as_slice()),
                Err(ColorError::InvalidLength { len })
            );
        }
    }
}
