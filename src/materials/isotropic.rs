// Copyright @yucwang 2026

use crate::core::hittable::HitRecord;
use crate::core::material::ScatterRecord;
use crate::core::rng::LcgRng;
use crate::core::texture::Texture;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;
use crate::math::warp::sample_in_unit_sphere;
use crate::textures::solid::SolidColor;
use std::sync::Arc;

// Phase function of a constant medium: the incoming direction is forgotten
// and the ray leaves in a uniformly random direction.
pub struct Isotropic {
    albedo: Arc<Texture>,
}

impl Isotropic {
    pub fn new(albedo: Arc<Texture>) -> Self {
        Self { albedo }
    }

    pub fn from_color(color: RGBSpectrum) -> Self {
        Self { albedo: Arc::new(Texture::Solid(SolidColor::new(color))) }
    }

    pub fn scatter(&self,
                   ray_in: &Ray3f,
                   hit: &HitRecord,
                   rng: &mut LcgRng) -> Option<ScatterRecord> {
        Some(ScatterRecord {
            attenuation: self.albedo.eval(hit.uv(), &hit.p()),
            scattered: Ray3f::new(hit.p(), sample_in_unit_sphere(rng), ray_in.time()),
        })
    }
}

/* Tests for Isotropic */

#[cfg(test)]
mod tests {
    use super::Isotropic;
    use crate::core::hittable::HitRecord;
    use crate::core::material::Material;
    use crate::core::rng::LcgRng;
    use crate::math::constants::{Vector3f};
    use crate::math::ray::Ray3f;
    use crate::math::spectrum::RGBSpectrum;
    use std::sync::Arc;

    #[test]
    fn test_scatters_in_all_directions() {
        let material = Arc::new(Material::Isotropic(Isotropic::from_color(
            RGBSpectrum::new(0.2, 0.4, 0.9))));
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, -1.0), 0.0);
        let hit = HitRecord::medium_interaction(1.0, ray.at(1.0), material.clone());

        let mut rng = LcgRng::new(8);
        let mut mean = Vector3f::zeros();
        for _ in 0..2048 {
            let scatter = material.scatter(&ray, &hit, &mut rng)
                .expect("phase function always scatters");
            mean += scatter.scattered.dir().normalize();
        }
        // Directions average out near zero when the phase function is
        // genuinely isotropic.
        mean /= 2048.0;
        assert!(mean.norm() < 0.1);
    }
}
