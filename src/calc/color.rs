//! Color-space conversion
//!
//! HEX <-> RGB <-> HSL. Hue is reported in degrees [0, 360), saturation and
//! lightness as percentages [0, 100]. The achromatic case (all channels
//! equal) short-circuits to hue 0 / saturation 0, avoiding the
//! division by zero in the standard min/max algorithm.

use serde::Serialize;
use std::fmt;

use crate::error::{ToolboxError, ToolboxResult};

/// An 8-bit-per-channel RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A color in hue/saturation/lightness form
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hsl {
    /// Hue in degrees, [0, 360)
    pub h: f64,
    /// Saturation percentage, [0, 100]
    pub s: f64,
    /// Lightness percentage, [0, 100]
    pub l: f64,
}

impl Rgb {
    /// Parse a "#rrggbb" (or "rrggbb") hex string
    ///
    /// # Errors
    ///
    /// Returns [`ToolboxError::InvalidInput`] for anything that is not
    /// exactly six hex digits after the optional `#`.
    pub fn from_hex(hex: &str) -> ToolboxResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ToolboxError::InvalidInput(format!(
                "'{}' is not a #rrggbb color",
                hex
            )));
        }

        let byte = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).expect("validated hex digits")
        };

        Ok(Self {
            r: byte(0..2),
            g: byte(2..4),
            b: byte(4..6),
        })
    }

    /// Format as "#rrggbb"
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to HSL using the standard min/max-channel algorithm
    pub fn to_hsl(&self) -> Hsl {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            // Achromatic: hue and saturation are undefined, report zero
            return Hsl {
                h: 0.0,
                s: 0.0,
                l: l * 100.0,
            };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        // Hue from whichever channel attains the max
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        } / 6.0;

        Hsl {
            h: h * 360.0,
            s: s * 100.0,
            l: l * 100.0,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl Hsl {
    /// Convert back to RGB
    pub fn to_rgb(&self) -> Rgb {
        let h = (self.h.rem_euclid(360.0)) / 360.0;
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);

        if s == 0.0 {
            let v = (l * 255.0).round() as u8;
            return Rgb { r: v, g: v, b: v };
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        let channel = |t: f64| {
            let t = t.rem_euclid(1.0);
            let v = if t < 1.0 / 6.0 {
                p + (q - p) * 6.0 * t
            } else if t < 0.5 {
                q
            } else if t < 2.0 / 3.0 {
                p + (q - p) * (2.0 / 3.0 - t) * 6.0
            } else {
                p
            };
            (v * 255.0).round() as u8
        };

        Rgb {
            r: channel(h + 1.0 / 3.0),
            g: channel(h),
            b: channel(h - 1.0 / 3.0),
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.h.round(),
            self.s.round(),
            self.l.round()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(
            Rgb::from_hex("#6366f1").unwrap(),
            Rgb {
                r: 99,
                g: 102,
                b: 241
            }
        );
        assert_eq!(
            Rgb::from_hex("ff0000").unwrap(),
            Rgb { r: 255, g: 0, b: 0 }
        );

        assert!(Rgb::from_hex("#fff").is_err());
        assert!(Rgb::from_hex("#gggggg").is_err());
        assert!(Rgb::from_hex("").is_err());
    }

    #[test]
    fn test_reference_hsl() {
        // Indigo-500, the original tool's default swatch
        let hsl = Rgb::from_hex("#6366f1").unwrap().to_hsl();
        assert_eq!(hsl.h.round(), 239.0);
        assert_eq!(hsl.s.round(), 84.0);
        assert_eq!(hsl.l.round(), 67.0);
    }

    #[test]
    fn test_primaries() {
        let red = Rgb { r: 255, g: 0, b: 0 }.to_hsl();
        assert_eq!((red.h, red.s, red.l), (0.0, 100.0, 50.0));

        let green = Rgb { r: 0, g: 255, b: 0 }.to_hsl();
        assert_eq!((green.h, green.s, green.l), (120.0, 100.0, 50.0));

        let blue = Rgb { r: 0, g: 0, b: 255 }.to_hsl();
        assert_eq!((blue.h, blue.s, blue.l), (240.0, 100.0, 50.0));
    }

    #[test]
    fn test_achromatic_has_no_hue() {
        for v in [0u8, 64, 128, 200, 255] {
            let hsl = Rgb { r: v, g: v, b: v }.to_hsl();
            assert_eq!(hsl.h, 0.0);
            assert_eq!(hsl.s, 0.0);
        }
    }

    #[test]
    fn test_round_trip_through_hsl() {
        // Primary, secondary, and grayscale colors survive hex -> hsl -> rgb -> hex
        for hex in [
            "#ff0000", "#00ff00", "#0000ff", "#ffff00", "#00ffff", "#ff00ff", "#000000",
            "#ffffff", "#808080",
        ] {
            let rgb = Rgb::from_hex(hex).unwrap();
            let back = rgb.to_hsl().to_rgb();
            assert_eq!(back.to_hex(), hex, "round trip failed for {}", hex);
        }
    }

    #[test]
    fn test_display_formats() {
        let rgb = Rgb::from_hex("#6366f1").unwrap();
        assert_eq!(rgb.to_string(), "rgb(99, 102, 241)");
        assert_eq!(rgb.to_hsl().to_string(), "hsl(239, 84%, 67%)");
        assert_eq!(rgb.to_hex(), "#6366f1");
    }
}
