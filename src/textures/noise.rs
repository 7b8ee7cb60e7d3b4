// Copyright @yucwang 2026

use super::perlin::Perlin;
use crate::core::rng::LcgRng;
use crate::math::constants::{Float, Vector3f};
use crate::math::spectrum::RGBSpectrum;

// Marble-like grayscale texture: a sine along z phase-shifted by turbulence.
pub struct NoiseTexture {
    perlin: Perlin,
    scale: Float,
}

impl NoiseTexture {
    pub fn new(scale: Float, rng: &mut LcgRng) -> Self {
        Self { perlin: Perlin::new(rng), scale }
    }

    pub fn eval(&self, p: &Vector3f) -> RGBSpectrum {
        let phase = self.scale * p.z + 10.0 * self.perlin.turbulence(p, 7);
        RGBSpectrum::white() * 0.5 * (1.0 + phase.sin())
    }
}

/* Tests for NoiseTexture */
