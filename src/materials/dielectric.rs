// Copyright @yucwang 2026

use crate::core::hittable::HitRecord;
use crate::core::material::ScatterRecord;
use crate::core::rng::LcgRng;
use crate::math::constants::Float;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;
use crate::math::warp::{reflect, refract};

pub struct Dielectric {
    refractive_index: Float,
}

// Schlick's closed-form estimate of Fresnel reflectance.
pub fn schlick_reflectance(cosine: Float, refraction_ratio: Float) -> Float {
    let r0 = (1.0 - refraction_ratio) / (1.0 + refraction_ratio);
    let r0 = r0 * r0;
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

impl Dielectric {
    pub fn new(refractive_index: Float) -> Self {
        Self { refractive_index }
    }

    pub fn scatter(&self,
                   ray_in: &Ray3f,
                   hit: &HitRecord,
                   rng: &mut LcgRng) -> Option<ScatterRecord> {
        // Entering the medium divides by the index, exiting multiplies.
        let refraction_ratio = if hit.front_face() {
            1.0 / self.refractive_index
        } else {
            self.refractive_index
        };

        let unit_dir = ray_in.dir().normalize();
        let cos_theta = (-unit_dir).dot(&hit.normal()).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        let cannot_refract = refraction_ratio * sin_theta > 1.0;
        let direction = if cannot_refract
            || schlick_reflectance(cos_theta, refraction_ratio) > rng.next_f32()
        {
            reflect(&unit_dir, &hit.normal())
        } else {
            refract(&unit_dir, &hit.normal(), refraction_ratio)
        };

        // Clear glass attenuates nothing.
        Some(ScatterRecord {
            attenuation: RGBSpectrum::white(),
            scattered: Ray3f::new(hit.p(), direction, ray_in.time()),
        })
    }
}

/* Tests for Dielectric */
