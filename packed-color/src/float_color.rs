//! Normalized floating-point colors
//!
//! POD float colors that `PackedColor` converts to and from. Channels are
//! nominally in `[0.0, 1.0]` but are not clamped here; quantization happens
//! on the way into a `PackedColor`.

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// RGB float color (12 bytes)
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
#[repr(C)]
pub struct Color3 {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

/// RGBA float color (16 bytes)
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
#[repr(C)]
pub struct Color4 {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Color3 {
    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    /// [red, green, blue]
    pub fn to_array(&self) -> [f32; 3] {
        [self.red, self.green, self.blue]
    }

    pub fn from_array(arr: [f32; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl Color4 {
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// [red, green, blue, alpha]
    pub fn to_array(&self) -> [f32; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    pub fn from_array(arr: [f32; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

impl From<Vec3> for Color3 {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Color3> for Vec3 {
    fn from(c: Color3) -> Self {
        Vec3::new(c.red, c.green, c.blue)
    }
}

impl From<Vec4> for Color4 {
    fn from(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Color4> for Vec4 {
    fn from(c: Color4) -> Self {
        Vec4::new(c.red, c.green, c.blue, c.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_order() {
        let c = Color4::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(c.to_array(), [0.1, 0.2, 0.3, 0.4]);
        assert_eq!(Color4::from_array(c.to_array()), c);

        let c = Color3::from_array([0.5, 0.25, 1.0]);
        assert_eq!(c, Color3::new(0.5, 0.25, 1.0));
    }

    #[test]
    fn test_glam_conversions() {
        let v = Vec4::new(0.1, 0.2, 0.3, 0.4);
        let c = Color4::from(v);
        assert_eq!(c.alpha, 0.4);
        assert_eq!(Vec4::from(c), v);

        let v = Vec3::new(1.0, 0.0, 0.5);
        assert_eq!(Vec3::from(Color3::from(v)), v);
    }

    #[test]
    fn test_pod_sizes() {
        assert_eq!(core::mem::size_of::<Color3>(), 12);
        assert_eq!(core::mem::size_of::<Color4>(), 16);
        let c = Color4::new(1.0, 0.0, 0.0, 1.0);
        assert_eq!(bytemuck::cast::<Color4, [f32; 4]>(c), [1.0, 0.0, 0.0, 1.0]);
    }
}
