use std::ops::Add;

use image::Rgb;

/// RGB color with every channel clamped to `[0, 1]` on construction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RGBColor {
    r: f64,
    g: f64,
    b: f64,
}

impl RGBColor {
    pub fn new(r: f64, g: f64, b: f64) -> RGBColor {
        RGBColor {
            r: r.min(1.0).max(0.0),
            g: g.min(1.0).max(0.0),
            b: b.min(1.0).max(0.0),
        }
    }
    pub const BLACK: RGBColor = RGBColor {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
    pub const WHITE: RGBColor = RGBColor {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };
}

impl RGBColor {
    #[inline(always)]
    pub fn r(&self) -> f64 {
        self.r
    }
    #[inline(always)]
    pub fn g(&self) -> f64 {
        self.g
    }
    #[inline(always)]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Scales every channel by `w`, then reclamps.
    pub fn weighted(self, w: f64) -> RGBColor {
        RGBColor::new(self.r * w, self.g * w, self.b * w)
    }
}

// sums then reclamps
impl Add for RGBColor {
    type Output = RGBColor;
    fn add(self, other: RGBColor) -> RGBColor {
        RGBColor::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl From<[f64; 3]> for RGBColor {
    fn from(other: [f64; 3]) -> RGBColor {
        RGBColor::new(other[0], other[1], other[2])
    }
}

// channels are truncated, not rounded
impl From<RGBColor> for Rgb<u8> {
    fn from(c: RGBColor) -> Self {
        Rgb([
            (c.r * 255.0) as u8,
            (c.g * 255.0) as u8,
            (c.b * 255.0) as u8,
        ])
    }
}
