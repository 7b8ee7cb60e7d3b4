// Copyright @yucwang 2026

use crate::math::constants::{Vector2f, Vector3f};
use crate::math::spectrum::RGBSpectrum;
use crate::textures::checker::CheckerTexture;
use crate::textures::image::ImageTexture;
use crate::textures::noise::NoiseTexture;
use crate::textures::solid::SolidColor;

// Closed variant set, mirroring the material dispatch.
pub enum Texture {
    Solid(SolidColor),
    Checker(CheckerTexture),
    Noise(NoiseTexture),
    Image(ImageTexture),
}

impl Texture {
    pub fn eval(&self, uv: Vector2f, p: &Vector3f) -> RGBSpectrum {
        match self {
            Texture::Solid(t) => t.eval(),
            Texture::Checker(t) => t.eval(uv, p),
            Texture::Noise(t) => t.eval(p),
            Texture::Image(t) => t.eval(uv),
        }
    }
}
