//! Textual rendering and hashing
//!
//! All formatting traits render `Alpha:{a} Red:{r} Green:{g} Blue:{b}` and
//! apply the caller's flags (width, fill, alignment, `+`, `#`, zero padding)
//! to each channel individually:
//!
//! ```
//! use packed_color::PackedColor;
//!
//! let c = PackedColor::new(255, 128, 0, 10);
//! assert_eq!(c.to_string(), "Alpha:10 Red:255 Green:128 Blue:0");
//! assert_eq!(format!("{c:03}"), "Alpha:010 Red:255 Green:128 Blue:000");
//! assert_eq!(format!("{c:02X}"), "Alpha:0A Red:FF Green:80 Blue:00");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::color::PackedColor;

type ChannelFmt = fn(&u8, &mut fmt::Formatter<'_>) -> fmt::Result;

impl PackedColor {
    fn write_channels(&self, f: &mut fmt::Formatter<'_>, channel: ChannelFmt) -> fmt::Result {
        f.write_str("Alpha:")?;
        channel(&self.alpha, f)?;
        f.write_str(" Red:")?;
        channel(&self.red, f)?;
        f.write_str(" Green:")?;
        channel(&self.green, f)?;
        f.write_str(" Blue:")?;
        channel(&self.blue, f)
    }

    /// Order-independent hash: the sum of the four channel values.
    ///
    /// Colors that are permutations of each other collide.
    #[inline]
    pub const fn hash_code(&self) -> u32 {
        self.alpha as u32 + self.red as u32 + self.green as u32 + self.blue as u32
    }
}

impl fmt::Display for PackedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_channels(f, <u8 as fmt::Display>::fmt)
    }
}

impl fmt::LowerHex for PackedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_channels(f, <u8 as fmt::LowerHex>::fmt)
    }
}

impl fmt::UpperHex for PackedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_channels(f, <u8 as fmt::UpperHex>::fmt)
    }
}

impl fmt::Octal for PackedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_channels(f, <u8 as fmt::Octal>::fmt)
    }
}

impl fmt::Binary for PackedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_channels(f, <u8 as fmt::Binary>::fmt)
    }
}

impl Hash for PackedColor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_code());
    }
}
