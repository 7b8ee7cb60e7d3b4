// Copyright @yucwang 2026

use super::constants::{Float, Vector3f};

use std::ops;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RGBSpectrum {
    rgb: Vector3f,
}

impl Default for RGBSpectrum {
    fn default() -> Self {
        Self { rgb: Vector3f::new(0.0, 0.0, 0.0) }
    }
}

impl RGBSpectrum {
    pub fn new(r: Float, g: Float, b: Float) -> Self {
        Self { rgb: Vector3f::new(r, g, b) }
    }

    pub fn from_vector3(v: Vector3f) -> Self {
        Self { rgb: v }
    }

    pub fn black() -> Self {
        Self::default()
    }

    pub fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    pub fn is_black(&self) -> bool {
        self.rgb[0] == 0.0 && self.rgb[1] == 0.0 && self.rgb[2] == 0.0
    }

    pub fn has_nan(&self) -> bool {
        self.rgb[0].is_nan() || self.rgb[1].is_nan() || self.rgb[2].is_nan()
    }

    pub fn max_component(&self) -> Float {
        self.rgb[0].max(self.rgb[1]).max(self.rgb[2])
    }

    pub fn to_vector3(&self) -> Vector3f {
        self.rgb
    }
}

impl ops::Index<usize> for RGBSpectrum {
    type Output = Float;

    fn index(&self, index: usize) -> &Float {
        &self.rgb[index]
    }
}

impl ops::Add for RGBSpectrum {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { rgb: self.rgb + rhs.rgb }
    }
}

impl ops::AddAssign for RGBSpectrum {
    fn add_assign(&mut self, rhs: Self) {
        self.rgb += rhs.rgb;
    }
}

impl ops::Sub for RGBSpectrum {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { rgb: self.rgb - rhs.rgb }
    }
}

// Componentwise product, used for filtering radiance through an albedo.
impl ops::Mul for RGBSpectrum {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self { rgb: self.rgb.component_mul(&rhs.rgb) }
    }
}

impl ops::MulAssign for RGBSpectrum {
    fn mul_assign(&mut self, rhs: Self) {
        self.rgb = self.rgb.component_mul(&rhs.rgb);
    }
}

impl ops::Mul<Float> for RGBSpectrum {
    type Output = Self;

    fn mul(self, rhs: Float) -> Self {
        Self { rgb: self.rgb * rhs }
    }
}

impl ops::Mul<RGBSpectrum> for Float {
    type Output = RGBSpectrum;

    fn mul(self, rhs: RGBSpectrum) -> RGBSpectrum {
        RGBSpectrum { rgb: rhs.rgb * self }
    }
}

impl ops::Div<Float> for RGBSpectrum {
    type Output = Self;

    fn div(self, rhs: Float) -> Self {
        Self { rgb: self.rgb / rhs }
    }
}

/* Tests for RGBSpectrum */

#[cfg(test)]
mod tests {
    use super::RGBSpectrum;

    #[test]
    fn test_spectrum_arithmetic() {
        let a = RGBSpectrum::new(0.5, 0.25, 1.0);
        let b = RGBSpectrum::new(0.5, 0.5, 0.5);

        let sum = a + b;
        assert!((sum[0] - 1.0).abs() < 1e-6);
        assert!((sum[1] - 0.75).abs() < 1e-6);

        let filtered = a * b;
        assert!((filtered[0] - 0.25).abs() < 1e-6);
        assert!((filtered[2] - 0.5).abs() < 1e-6);

        let scaled = a * 2.0;
        assert!((scaled[2] - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_spectrum_black() {
        assert!(RGBSpectrum::default().is_black());
        assert!(!RGBSpectrum::white().is_black());
        assert!(!RGBSpectrum::new(0.0, 0.0, 1e-6).is_black());
    }
}
