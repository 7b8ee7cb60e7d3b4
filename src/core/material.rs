// Copyright @yucwang 2026

use crate::core::hittable::HitRecord;
use crate::core::rng::LcgRng;
use crate::materials::dielectric::Dielectric;
use crate::materials::diffuse_light::DiffuseLight;
use crate::materials::isotropic::Isotropic;
use crate::materials::lambertian::Lambertian;
use crate::materials::metal::Metal;
use crate::math::constants::{Vector2f, Vector3f};
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

pub struct ScatterRecord {
    pub attenuation: RGBSpectrum,
    pub scattered: Ray3f,
}

// The material set is fixed, so surface response is a closed sum type rather
// than a trait object. Exhaustive matches catch a forgotten variant at
// compile time.
pub enum Material {
    Lambertian(Lambertian),
    Metal(Metal),
    Dielectric(Dielectric),
    DiffuseLight(DiffuseLight),
    Isotropic(Isotropic),
}

impl Material {
    // Returns None when the ray is absorbed.
    pub fn scatter(&self,
                   ray_in: &Ray3f,
                   hit: &HitRecord,
                   rng: &mut LcgRng) -> Option<ScatterRecord> {
        match self {
            Material::Lambertian(m) => m.scatter(ray_in, hit, rng),
            Material::Metal(m) => m.scatter(ray_in, hit, rng),
            Material::Dielectric(m) => m.scatter(ray_in, hit, rng),
            Material::DiffuseLight(_) => None,
            Material::Isotropic(m) => m.scatter(ray_in, hit, rng),
        }
    }

    pub fn emitted(&self, uv: Vector2f, p: &Vector3f) -> RGBSpectrum {
        match self {
            Material::DiffuseLight(m) => m.emitted(uv, p),
            _ => RGBSpectrum::black(),
        }
    }
}
