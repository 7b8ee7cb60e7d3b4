// Copyright @yucwang 2026

use crate::core::hittable::HitRecord;
use crate::core::material::ScatterRecord;
use crate::core::rng::LcgRng;
use crate::core::texture::Texture;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;
use crate::math::warp::sample_unit_vector;
use crate::textures::solid::SolidColor;
use std::sync::Arc;

pub struct Lambertian {
    albedo: Arc<Texture>,
}

impl Lambertian {
    pub fn new(albedo: Arc<Texture>) -> Self {
        Self { albedo }
    }

    pub fn from_color(color: RGBSpectrum) -> Self {
        Self { albedo: Arc::new(Texture::Solid(SolidColor::new(color))) }
    }

    // Normal plus a uniform unit vector approximates cosine-weighted
    // diffuse scattering. A diffuse surface never absorbs the ray.
    pub fn scatter(&self,
                   ray_in: &Ray3f,
                   hit: &HitRecord,
                   rng: &mut LcgRng) -> Option<ScatterRecord> {
        let mut scatter_dir = hit.normal() + sample_unit_vector(rng);

        // The random vector can cancel the normal almost exactly; fall back
        // to the normal instead of propagating a near-zero direction.
        if scatter_dir.norm_squared() < 1e-12 {
            scatter_dir = hit.normal();
        }

        Some(ScatterRecord {
            attenuation: self.albedo.eval(hit.uv(), &hit.p()),
            scattered: Ray3f::new(hit.p(), scatter_dir, ray_in.time()),
        })
    }
}

/* Tests for Lambertian */
