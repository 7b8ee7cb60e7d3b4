// Copyright @yucwang 2026

use crate::core::hittable::HitRecord;
use crate::core::material::Material;
use crate::math::aabb::AABB;
use crate::math::constants::{Float, PI, Vector2f, Vector3f};
use crate::math::ray::Ray3f;
use std::sync::Arc;

pub struct Sphere {
    center: Vector3f,
    radius: Float,
    material: Arc<Material>,
}

// Spherical texture coordinates of a point on the unit sphere:
// u wraps around the Y axis from -X, v runs from the south to the north pole.
pub fn sphere_uv(p: &Vector3f) -> Vector2f {
    let theta = (-p.y).acos();
    let phi = (-p.z).atan2(p.x) + PI;
    Vector2f::new(phi / (2.0 * PI), theta / PI)
}

impl Sphere {
    pub fn new(center: Vector3f, radius: Float, material: Arc<Material>) -> Self {
        Self { center, radius, material }
    }

    pub fn center(&self) -> Vector3f {
        self.center
    }

    pub fn radius(&self) -> Float {
        self.radius
    }

    pub fn hit(&self, ray: &Ray3f, t_min: Float, t_max: Float) -> Option<HitRecord> {
        let oc = ray.origin() - self.center;
        let a = ray.dir().norm_squared();
        let half_b = oc.dot(&ray.dir());
        let c = oc.norm_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_d = discriminant.sqrt();

        // Nearest root inside the queried range, falling back to the far one.
        let mut root = (-half_b - sqrt_d) / a;
        if root <= t_min || root >= t_max {
            root = (-half_b + sqrt_d) / a;
            if root <= t_min || root >= t_max {
                return None;
            }
        }

        let p = ray.at(root);
        // A negative radius flips the normal, which models hollow glass.
        let outward_normal = (p - self.center) / self.radius;
        let uv = sphere_uv(&outward_normal);
        Some(HitRecord::new(ray, outward_normal, root, p, uv, self.material.clone()))
    }

    pub fn bounding_box(&self) -> AABB {
        let r = Vector3f::new(self.radius, self.radius, self.radius);
        AABB::new(self.center - r, self.center + r)
    }
}

/* Tests for Sphere */
