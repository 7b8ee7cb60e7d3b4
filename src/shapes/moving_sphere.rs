// Copyright @yucwang 2026

use super::sphere::sphere_uv;
use crate::core::hittable::HitRecord;
use crate::core::material::Material;
use crate::math::aabb::AABB;
use crate::math::constants::{Float, Vector3f};
use crate::math::ray::Ray3f;
use std::sync::Arc;

// A sphere whose center slides linearly between two keyframes; each ray
// evaluates the center at its own time, which is what produces motion blur
// once many time-jittered samples are averaged.
pub struct MovingSphere {
    center0: Vector3f,
    center1: Vector3f,
    time0: Float,
    time1: Float,
    radius: Float,
    material: Arc<Material>,
}

impl MovingSphere {
    pub fn new(center0: Vector3f,
               center1: Vector3f,
               time0: Float,
               time1: Float,
               radius: Float,
               material: Arc<Material>) -> Self {
        Self { center0, center1, time0, time1, radius, material }
    }

    pub fn center(&self, time: Float) -> Vector3f {
        self.center0
            + ((time - self.time0) / (self.time1 - self.time0)) * (self.center1 - self.center0)
    }

    pub fn hit(&self, ray: &Ray3f, t_min: Float, t_max: Float) -> Option<HitRecord> {
        let center = self.center(ray.time());
        let oc = ray.origin() - center;
        let a = ray.dir().norm_squared();
        let half_b = oc.dot(&ray.dir());
        let c = oc.norm_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_d = discriminant.sqrt();

        let mut root = (-half_b - sqrt_d) / a;
        if root <= t_min || root >= t_max {
            root = (-half_b + sqrt_d) / a;
            if root <= t_min || root >= t_max {
                return None;
            }
        }

        let p = ray.at(root);
        let outward_normal = (p - center) / self.radius;
        let uv = sphere_uv(&outward_normal);
        Some(HitRecord::new(ray, outward_normal, root, p, uv, self.material.clone()))
    }

    // Encloses the sphere at both window endpoints; linear motion stays
    // inside the union.
    pub fn bounding_box(&self, time0: Float, time1: Float) -> AABB {
        let r = Vector3f::new(self.radius, self.radius, self.radius);
        let c0 = self.center(time0);
        let c1 = self.center(time1);
        AABB::union(&AABB::new(c0 - r, c0 + r), &AABB::new(c1 - r, c1 + r))
    }
}

/* Tests for MovingSphere */

#[cfg(test)]
mod tests {
    use super::MovingSphere;
    use crate::core::material::Material;
    use crate::materials::lambertian::Lambertian;
    use crate::math::constants::{FLOAT_INFINITY, Vector3f};
    use crate::math::ray::Ray3f;
    use crate::math::spectrum::RGBSpectrum;
    use std::sync::Arc;

    fn test_sphere() -> MovingSphere {
        let material = Arc::new(Material::Lambertian(Lambertian::from_color(
            RGBSpectrum::new(0.5, 0.5, 0.5),
        )));
        MovingSphere::new(Vector3f::new(0.0, 0.0, -5.0),
                          Vector3f::new(4.0, 0.0, -5.0),
                          0.0, 1.0, 1.0, material)
    }

    #[test]
    fn test_center_interpolation() {
        let sphere = test_sphere();
        assert_eq!(sphere.center(0.0), Vector3f::new(0.0, 0.0, -5.0));
        assert_eq!(sphere.center(1.0), Vector3f::new(4.0, 0.0, -5.0));
        let mid = sphere.center(0.5);
        assert!((mid - Vector3f::new(2.0, 0.0, -5.0)).norm() < 1e-6);
    }

    #[test]
    fn test_hit_follows_time() {
        let sphere = test_sphere();
        let dir = Vector3f::new(0.0, 0.0, -1.0);

        // At time 0 the sphere sits on the axis through the origin.
        let ray = Ray3f::new(Vector3f::zeros(), dir, 0.0);
        assert!(sphere.hit(&ray, 0.001, FLOAT_INFINITY).is_some());

        // At time 1 it has moved out of the way of the same ray.
        let ray = Ray3f::new(Vector3f::zeros(), dir, 1.0);
        assert!(sphere.hit(&ray, 0.001, FLOAT_INFINITY).is_none());

        // But a ray aimed at the displaced center connects.
        let ray = Ray3f::new(Vector3f::new(4.0, 0.0, 0.0), dir, 1.0);
        let record = sphere.hit(&ray, 0.001, FLOAT_INFINITY).expect("displaced hit");
        assert!((record.t() - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_bounding_box_spans_motion() {
        let sphere = test_sphere();
        let bbox = sphere.bounding_box(0.0, 1.0);
        assert!((bbox.p_min[0] + 1.0).abs() < 1e-6);
        assert!((bbox.p_max[0] - 5.0).abs() < 1e-6);
    }
}
