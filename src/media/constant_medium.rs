// Copyright @yucwang 2026

use crate::core::hittable::{HitRecord, Hittable};
use crate::core::material::Material;
use crate::core::rng::LcgRng;
use crate::core::texture::Texture;
use crate::materials::isotropic::Isotropic;
use crate::math::aabb::AABB;
use crate::math::constants::{EPSILON, Float, FLOAT_INFINITY};
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;
use std::sync::Arc;

// Uniform-density fog bounded by a wrapped convex hittable. A ray entering
// the boundary scatters after an exponentially distributed free path, or
// passes through when the sampled distance exceeds the chord.
pub struct ConstantMedium {
    boundary: Arc<Hittable>,
    phase_function: Arc<Material>,
    neg_inv_density: Float,
}

impl ConstantMedium {
    pub fn new(boundary: Arc<Hittable>, density: Float, albedo: Arc<Texture>) -> Self {
        Self {
            boundary,
            phase_function: Arc::new(Material::Isotropic(Isotropic::new(albedo))),
            neg_inv_density: -1.0 / density,
        }
    }

    pub fn from_color(boundary: Arc<Hittable>, density: Float, color: RGBSpectrum) -> Self {
        Self {
            boundary,
            phase_function: Arc::new(Material::Isotropic(Isotropic::from_color(color))),
            neg_inv_density: -1.0 / density,
        }
    }

    pub fn hit(&self,
               ray: &Ray3f,
               t_min: Float,
               t_max: Float,
               rng: &mut LcgRng) -> Option<HitRecord> {
        // Probe the full line to find the entry, then again past it for the
        // exit. A ray starting inside the boundary gets its entry clamped.
        let entry = self.boundary.hit(ray, -FLOAT_INFINITY, FLOAT_INFINITY, rng)?;
        let exit = self.boundary.hit(ray, entry.t() + EPSILON, FLOAT_INFINITY, rng)?;

        let mut t_entry = entry.t().max(t_min);
        let t_exit = exit.t().min(t_max);
        if t_entry >= t_exit {
            return None;
        }
        if t_entry < 0.0 {
            t_entry = 0.0;
        }

        let ray_length = ray.dir().norm();
        let distance_inside = (t_exit - t_entry) * ray_length;
        let hit_distance = self.neg_inv_density * rng.next_f32().max(Float::MIN_POSITIVE).ln();

        if hit_distance > distance_inside {
            return None;
        }

        let t = t_entry + hit_distance / ray_length;
        Some(HitRecord::medium_interaction(t, ray.at(t), self.phase_function.clone()))
    }

    pub fn bounding_box(&self, time0: Float, time1: Float) -> Option<AABB> {
        self.boundary.bounding_box(time0, time1)
    }
}

/* Tests for ConstantMedium */

#[cfg(test)]
mod tests {
    use super::ConstantMedium;
    use crate::core::hittable::Hittable;
    use crate::core::material::Material;
    use crate::core::rng::LcgRng;
    use crate::materials::lambertian::Lambertian;
    use crate::math::constants::{FLOAT_INFINITY, Vector3f};
    use crate::math::ray::Ray3f;
    use crate::math::spectrum::RGBSpectrum;
    use crate::shapes::sphere::Sphere;
    use std::sync::Arc;

    fn fog_sphere(density: f32) -> ConstantMedium {
        let material = Arc::new(Material::Lambertian(Lambertian::from_color(
            RGBSpectrum::new(0.5, 0.5, 0.5),
        )));
        let boundary = Arc::new(Hittable::Sphere(Sphere::new(
            Vector3f::new(0.0, 0.0, -5.0), 2.0, material)));
        ConstantMedium::from_color(boundary, density, RGBSpectrum::white())
    }

    fn scatter_fraction(medium: &ConstantMedium, samples: u32) -> f32 {
        let mut rng = LcgRng::new(99);
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, -1.0), 0.0);
        let mut scattered = 0u32;
        for _ in 0..samples {
            if medium.hit(&ray, 0.001, FLOAT_INFINITY, &mut rng).is_some() {
                scattered += 1;
            }
        }
        scattered as f32 / samples as f32
    }

    #[test]
    fn test_dense_fog_almost_always_scatters() {
        let medium = fog_sphere(10.0);
        assert!(scatter_fraction(&medium, 2000) > 0.99);
    }

    #[test]
    fn test_thin_fog_becomes_transparent() {
        // Vanishing density means vanishing scatter probability.
        let medium = fog_sphere(1e-4);
        assert!(scatter_fraction(&medium, 2000) < 0.01);
    }

    #[test]
    fn test_scatter_point_inside_boundary() {
        let medium = fog_sphere(5.0);
        let mut rng = LcgRng::new(3);
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, -2.0), 0.0);
        for _ in 0..200 {
            if let Some(record) = medium.hit(&ray, 0.001, FLOAT_INFINITY, &mut rng) {
                let center = Vector3f::new(0.0, 0.0, -5.0);
                assert!((record.p() - center).norm() <= 2.0 + 1e-3);
            }
        }
    }

    #[test]
    fn test_ray_starting_inside() {
        let medium = fog_sphere(50.0);
        let mut rng = LcgRng::new(4);
        // Origin inside the boundary sphere.
        let ray = Ray3f::new(Vector3f::new(0.0, 0.0, -5.0),
                             Vector3f::new(0.0, 0.0, 1.0), 0.0);
        let record = medium.hit(&ray, 0.001, FLOAT_INFINITY, &mut rng)
            .expect("dense fog scatters before the exit");
        assert!(record.t() > 0.0 && record.t() < 2.0 + 1e-3);
    }

    #[test]
    fn test_miss_outside_boundary() {
        let medium = fog_sphere(10.0);
        let mut rng = LcgRng::new(5);
        let ray = Ray3f::new(Vector3f::new(10.0, 0.0, 0.0),
                             Vector3f::new(0.0, 0.0, -1.0), 0.0);
        assert!(medium.hit(&ray, 0.001, FLOAT_INFINITY, &mut rng).is_none());
    }
}
