//! Contrast and saturation adjustment
//!
//! Both operate on normalized channels and leave alpha untouched.

use crate::color::{PackedColor, normalize, to_byte};

// BT.709-style luminance weights
const LUMA_RED: f32 = 0.2125;
const LUMA_GREEN: f32 = 0.7154;
const LUMA_BLUE: f32 = 0.0721;

impl PackedColor {
    /// Weighted grey value of the color channels, in `[0, 1]`.
    #[inline]
    pub fn luminance(self) -> f32 {
        normalize(self.red) * LUMA_RED
            + normalize(self.green) * LUMA_GREEN
            + normalize(self.blue) * LUMA_BLUE
    }

    /// Scale each color channel's distance from mid-grey by `contrast`.
    ///
    /// `0.0` collapses to grey 127; values above 1.0 push toward black/white.
    #[must_use]
    #[inline]
    pub fn adjust_contrast(self, contrast: f32) -> Self {
        let adjust = |c: u8| to_byte(0.5 + contrast * (normalize(c) - 0.5));
        Self::new(
            adjust(self.red),
            adjust(self.green),
            adjust(self.blue),
            self.alpha,
        )
    }

    #[inline]
    pub fn adjust_contrast_into(&self, contrast: f32, result: &mut Self) {
        *result = self.adjust_contrast(contrast);
    }

    /// Scale each color channel's distance from [`Self::luminance`] by `saturation`.
    ///
    /// `0.0` yields greyscale; `1.0` reproduces the input to within one step.
    #[must_use]
    #[inline]
    pub fn adjust_saturation(self, saturation: f32) -> Self {
        let grey = self.luminance();
        let adjust = |c: u8| to_byte(grey + saturation * (normalize(c) - grey));
        Self::new(
            adjust(self.red),
            adjust(self.green),
            adjust(self.blue),
            self.alpha,
        )
    }

    #[inline]
    pub fn adjust_saturation_into(&self, saturation: f32, result: &mut Self) {
        *result = self.adjust_saturation(saturation);
    }
}
