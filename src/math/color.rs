use nalgebra::{ArrayStorage, Vector3};
use serde::{Deserialize, Serialize};

use std::ops::{Add, Mul};

/// Linear RGB triple. Channels are not clamped; values above 1 survive until output.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct RGBColor(pub Vector3<f64>);

impl RGBColor {
    pub const fn new(r: f64, g: f64, b: f64) -> RGBColor {
        RGBColor(Vector3::from_array_storage(ArrayStorage([[r, g, b]])))
    }
    pub const BLACK: RGBColor = RGBColor::new(0.0, 0.0, 0.0);
    pub const WHITE: RGBColor = RGBColor::new(1.0, 1.0, 1.0);

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|e| e.is_finite())
    }

    pub fn clamped(&self) -> RGBColor {
        RGBColor(self.0.map(|e| e.clamp(0.0, 1.0)))
    }
}

impl RGBColor {
    #[inline(always)]
    pub fn r(&self) -> f64 {
        self.0.x
    }
    #[inline(always)]
    pub fn g(&self) -> f64 {
        self.0.y
    }
    #[inline(always)]
    pub fn b(&self) -> f64 {
        self.0.z
    }
}

impl Default for RGBColor {
    fn default() -> Self {
        RGBColor::BLACK
    }
}

// componentwise
impl Mul for RGBColor {
    type Output = Self;
    fn mul(self, other: RGBColor) -> Self {
        RGBColor(self.0.component_mul(&other.0))
    }
}

impl Mul<f64> for RGBColor {
    type Output = RGBColor;
    fn mul(self, other: f64) -> RGBColor {
        RGBColor(self.0 * other)
    }
}

impl Add for RGBColor {
    type Output = RGBColor;
    fn add(self, other: RGBColor) -> RGBColor {
        RGBColor(self.0 + other.0)
    }
}

impl From<[f64; 3]> for RGBColor {
    fn from(c: [f64; 3]) -> RGBColor {
        RGBColor::new(c[0], c[1], c[2])
    }
}

impl From<RGBColor> for [f64; 3] {
    fn from(c: RGBColor) -> [f64; 3] {
        [c.r(), c.g(), c.b()]
    }
}
