// Copyright @yucwang 2026

use crate::math::spectrum::RGBSpectrum;

pub struct SolidColor {
    value: RGBSpectrum,
}

impl SolidColor {
    pub fn new(value: RGBSpectrum) -> Self {
        Self { value }
    }

    pub fn eval(&self) -> RGBSpectrum {
        self.value
    }
}
