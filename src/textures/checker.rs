// Copyright @yucwang 2026

use crate::core::texture::Texture;
use crate::math::constants::{Vector2f, Vector3f};
use crate::math::spectrum::RGBSpectrum;
use crate::textures::solid::SolidColor;
use std::sync::Arc;

// A 3D checker pattern: the tile is chosen by the sign of a product of
// sines of the world-space position, not by screen or uv coordinates.
pub struct CheckerTexture {
    odd: Arc<Texture>,
    even: Arc<Texture>,
}

impl CheckerTexture {
    pub fn new(odd: Arc<Texture>, even: Arc<Texture>) -> Self {
        Self { odd, even }
    }

    pub fn from_colors(odd: RGBSpectrum, even: RGBSpectrum) -> Self {
        Self {
            odd: Arc::new(Texture::Solid(SolidColor::new(odd))),
            even: Arc::new(Texture::Solid(SolidColor::new(even))),
        }
    }

    pub fn eval(&self, uv: Vector2f, p: &Vector3f) -> RGBSpectrum {
        let sines = (10.0 * p.x).sin() * (10.0 * p.y).sin() * (10.0 * p.z).sin();
        if sines < 0.0 {
            self.odd.eval(uv, p)
        } else {
            self.even.eval(uv, p)
        }
    }
}

/* Tests for CheckerTexture */
