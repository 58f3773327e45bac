//! Colors - hue/saturation/brightness and RGB
//!
//! Color cycling works in HSB space, where sliding the hue walks around
//! the color wheel. Renderers usually want RGB, so `Hsb::to_rgb` converts.

use serde::{Deserialize, Serialize};

/// Wrap a hue into [0, 1)
pub fn wrap_hue(hue: f64) -> f64 {
    let wrapped = hue.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

/// A color as hue, saturation and brightness, each in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hsb {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
}

impl Hsb {
    pub fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }

    /// Fully saturated color with the given hue and brightness
    pub fn vivid(hue: f64, brightness: f64) -> Self {
        Self::new(hue, 1.0, brightness)
    }

    /// Convert to 8-bit RGB
    pub fn to_rgb(&self) -> Rgb {
        let h = wrap_hue(self.hue) * 6.0;
        let s = self.saturation.clamp(0.0, 1.0);
        let v = self.brightness.clamp(0.0, 1.0);

        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sector as u8 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Rgb::from_unit(r, g, b)
    }
}

/// An 8-bit RGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// From channel values in [0, 1]
    fn from_unit(r: f64, g: f64, b: f64) -> Self {
        let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(channel(r), channel(g), channel(b))
    }

    /// CSS hex notation, e.g. `#ff8000`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        assert_eq!(Hsb::vivid(0.0, 1.0).to_rgb(), Rgb::new(255, 0, 0));
        assert_eq!(Hsb::vivid(1.0 / 3.0, 1.0).to_rgb(), Rgb::new(0, 255, 0));
        assert_eq!(Hsb::vivid(2.0 / 3.0, 1.0).to_rgb(), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(Hsb::vivid(1.0, 1.0).to_rgb(), Hsb::vivid(0.0, 1.0).to_rgb());
        assert!((wrap_hue(1.25) - 0.25).abs() < 1e-12);
        assert!((wrap_hue(-0.25) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_brightness_and_saturation() {
        assert_eq!(Hsb::new(0.3, 0.0, 1.0).to_rgb(), Rgb::WHITE);
        assert_eq!(Hsb::vivid(0.5, 0.0).to_rgb(), Rgb::BLACK);
        assert_eq!(Hsb::vivid(0.0, 0.5).to_rgb(), Rgb::new(128, 0, 0));
    }

    #[test]
    fn test_hex() {
        assert_eq!(Rgb::new(255, 128, 0).to_hex(), "#ff8000");
    }
}
