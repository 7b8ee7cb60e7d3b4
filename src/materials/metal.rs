// Copyright @yucwang 2026

use crate::core::hittable::HitRecord;
use crate::core::material::ScatterRecord;
use crate::core::rng::LcgRng;
use crate::math::constants::Float;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;
use crate::math::warp::{reflect, sample_in_unit_sphere};

pub struct Metal {
    albedo: RGBSpectrum,
    fuzz: Float,
}

impl Metal {
    pub fn new(albedo: RGBSpectrum, fuzz: Float) -> Self {
        Self { albedo, fuzz: fuzz.min(1.0) }
    }

    pub fn scatter(&self,
                   ray_in: &Ray3f,
                   hit: &HitRecord,
                   rng: &mut LcgRng) -> Option<ScatterRecord> {
        let reflected = reflect(&ray_in.dir().normalize(), &hit.normal());
        let fuzzed = reflected + self.fuzz * sample_in_unit_sphere(rng);

        // Fuzz can push the reflection below the surface; such rays are
        // absorbed rather than traced into the object.
        if fuzzed.dot(&hit.normal()) <= 0.0 {
            return None;
        }

        Some(ScatterRecord {
            attenuation: self.albedo,
            scattered: Ray3f::new(hit.p(), fuzzed, ray_in.time()),
        })
    }
}

/* Tests for Metal */

#[cfg(test)]
mod tests {
    use super::Metal;
    use crate::core::hittable::HitRecord;
    use crate::core::material::Material;
    use crate::core::rng::LcgRng;
    use crate::math::constants::{Vector2f, Vector3f};
    use crate::math::ray::Ray3f;
    use crate::math::spectrum::RGBSpectrum;
    use std::sync::Arc;

    fn hit_on_ground(material: &Arc<Material>, ray: &Ray3f) -> HitRecord {
        HitRecord::new(ray, Vector3f::new(0.0, 1.0, 0.0), 1.0,
                       Vector3f::zeros(), Vector2f::new(0.0, 0.0),
                       material.clone())
    }

    #[test]
    fn test_perfect_mirror_reflection() {
        let material = Arc::new(Material::Metal(Metal::new(
            RGBSpectrum::new(0.8, 0.6, 0.2), 0.0)));
        let ray = Ray3f::new(Vector3f::new(-1.0, 1.0, 0.0),
                             Vector3f::new(1.0, -1.0, 0.0), 0.0);
        let hit = hit_on_ground(&material, &ray);

        let mut rng = LcgRng::new(2);
        let scatter = material.scatter(&ray, &hit, &mut rng).expect("mirror reflects");
        let expected = Vector3f::new(1.0, 1.0, 0.0).normalize();
        assert!((scatter.scattered.dir().normalize() - expected).norm() < 1e-5);
    }

    #[test]
    fn test_fuzzed_reflection_stays_above_surface() {
        let material = Arc::new(Material::Metal(Metal::new(
            RGBSpectrum::new(0.7, 0.7, 0.7), 0.4)));
        let ray = Ray3f::new(Vector3f::new(-1.0, 1.0, 0.0),
                             Vector3f::new(1.0, -1.0, 0.0), 0.0);
        let hit = hit_on_ground(&material, &ray);

        let mut rng = LcgRng::new(3);
        for _ in 0..256 {
            if let Some(scatter) = material.scatter(&ray, &hit, &mut rng) {
                assert!(scatter.scattered.dir().dot(&hit.normal()) > 0.0);
            }
        }
    }

    #[test]
    fn test_grazing_fuzzed_ray_can_be_absorbed() {
        // A heavily fuzzed reflection at grazing incidence dips below the
        // surface for some samples, which must absorb the ray.
        let material = Arc::new(Material::Metal(Metal::new(
            RGBSpectrum::new(0.7, 0.7, 0.7), 1.0)));
        let ray = Ray3f::new(Vector3f::new(-10.0, 0.01, 0.0),
                             Vector3f::new(10.0, -0.01, 0.0), 0.0);
        let hit = hit_on_ground(&material, &ray);

        let mut rng = LcgRng::new(4);
        let mut absorbed = 0;
        for _ in 0..512 {
            if material.scatter(&ray, &hit, &mut rng).is_none() {
                absorbed += 1;
            }
        }
        assert!(absorbed > 0);
    }
}
