//! Color model for neon rendering.
//!
//! Colors are produced from hue/saturation/value and handed to the surface as
//! 8-bit RGBA. Neon fills are two-stop diagonal gradients whose end stop sits
//! 60° further around the hue wheel than the start stop.

use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};

/// Hue distance between the two stops of a [`NeonBrush`].
pub const GRADIENT_HUE_SPAN: f32 = 60.0;

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    pub const RED: Self = Self::opaque(255, 0, 0);
    pub const GREEN: Self = Self::opaque(0, 255, 0);
    pub const BLUE: Self = Self::opaque(0, 0, 255);

    /// A fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Linear-light components, for writing into an sRGB render target.
    pub fn to_linear(self) -> Vec4 {
        fn channel(c: u8) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        Vec4::new(
            channel(self.r),
            channel(self.g),
            channel(self.b),
            self.a as f32 / 255.0,
        )
    }
}

/// Convert HSV to an opaque RGBA color.
///
/// * `hue` - degrees, any real value (wrapped into `0..360`)
/// * `saturation` - 0.0 (gray) to 1.0 (vivid)
/// * `value` - 0.0 (black) to 1.0 (bright)
///
/// Channels are truncated, not rounded.
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> Rgba8 {
    let hue = ((hue as f64 % 360.0) + 360.0) % 360.0;
    let saturation = saturation as f64;
    let sector = (hue / 60.0).floor();
    let f = hue / 60.0 - sector;

    let value = value as f64 * 255.0;
    let v = value as u8;
    let p = (value * (1.0 - saturation)) as u8;
    let q = (value * (1.0 - f * saturation)) as u8;
    let t = (value * (1.0 - (1.0 - f) * saturation)) as u8;

    match sector as i64 % 6 {
        0 => Rgba8::opaque(v, t, p),
        1 => Rgba8::opaque(q, v, p),
        2 => Rgba8::opaque(p, v, t),
        3 => Rgba8::opaque(p, q, v),
        4 => Rgba8::opaque(t, p, v),
        _ => Rgba8::opaque(v, p, q),
    }
}

/// Two-stop linear gradient fill running from `start_point` to `end_point`
/// in the visual's unit square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeonBrush {
    pub start: Rgba8,
    pub end: Rgba8,
    pub start_point: Vec2,
    pub end_point: Vec2,
}

impl NeonBrush {
    /// Fully saturated diagonal gradient from `hue` to `hue + 60`.
    pub fn from_hue(hue: f32) -> Self {
        Self {
            start: hsv_to_rgb(hue, 1.0, 1.0),
            end: hsv_to_rgb(hue + GRADIENT_HUE_SPAN, 1.0, 1.0),
            start_point: Vec2::ZERO,
            end_point: Vec2::ONE,
        }
    }
}
