// Copyright @yucwang 2026

use crate::core::hittable::HitRecord;
use crate::core::material::Material;
use crate::math::aabb::AABB;
use crate::math::constants::{EPSILON, Float, Vector2f, Vector3f};
use crate::math::ray::Ray3f;
use std::sync::Arc;

// Axis-aligned rectangles, one per coordinate plane. Their boxes pad the
// zero-thickness axis so BVH construction never sees a degenerate extent.

pub struct XyRect {
    x0: Float,
    x1: Float,
    y0: Float,
    y1: Float,
    k: Float,
    material: Arc<Material>,
}

impl XyRect {
    pub fn new(x0: Float, x1: Float, y0: Float, y1: Float, k: Float,
               material: Arc<Material>) -> Self {
        Self { x0, x1, y0, y1, k, material }
    }

    pub fn hit(&self, ray: &Ray3f, t_min: Float, t_max: Float) -> Option<HitRecord> {
        // A ray parallel to the plane yields an infinite or NaN t, which the
        // range check rejects.
        let t = (self.k - ray.origin().z) / ray.dir().z;
        if !(t > t_min && t < t_max) {
            return None;
        }

        let x = ray.origin().x + t * ray.dir().x;
        let y = ray.origin().y + t * ray.dir().y;
        if x < self.x0 || x > self.x1 || y < self.y0 || y > self.y1 {
            return None;
        }

        let uv = Vector2f::new((x - self.x0) / (self.x1 - self.x0),
                               (y - self.y0) / (self.y1 - self.y0));
        let outward_normal = Vector3f::new(0.0, 0.0, 1.0);
        Some(HitRecord::new(ray, outward_normal, t, ray.at(t), uv, self.material.clone()))
    }

    pub fn bounding_box(&self) -> AABB {
        AABB::new(Vector3f::new(self.x0, self.y0, self.k - EPSILON),
                  Vector3f::new(self.x1, self.y1, self.k + EPSILON))
    }
}

pub struct XzRect {
    x0: Float,
    x1: Float,
    z0: Float,
    z1: Float,
    k: Float,
    material: Arc<Material>,
}

impl XzRect {
    pub fn new(x0: Float, x1: Float, z0: Float, z1: Float, k: Float,
               material: Arc<Material>) -> Self {
        Self { x0, x1, z0, z1, k, material }
    }

    pub fn hit(&self, ray: &Ray3f, t_min: Float, t_max: Float) -> Option<HitRecord> {
        let t = (self.k - ray.origin().y) / ray.dir().y;
        if !(t > t_min && t < t_max) {
            return None;
        }

        let x = ray.origin().x + t * ray.dir().x;
        let z = ray.origin().z + t * ray.dir().z;
        if x < self.x0 || x > self.x1 || z < self.z0 || z > self.z1 {
            return None;
        }

        let uv = Vector2f::new((x - self.x0) / (self.x1 - self.x0),
                               (z - self.z0) / (self.z1 - self.z0));
        let outward_normal = Vector3f::new(0.0, 1.0, 0.0);
        Some(HitRecord::new(ray, outward_normal, t, ray.at(t), uv, self.material.clone()))
    }

    pub fn bounding_box(&self) -> AABB {
        AABB::new(Vector3f::new(self.x0, self.k - EPSILON, self.z0),
                  Vector3f::new(self.x1, self.k + EPSILON, self.z1))
    }
}

pub struct YzRect {
    y0: Float,
    y1: Float,
    z0: Float,
    z1: Float,
    k: Float,
    material: Arc<Material>,
}

impl YzRect {
    pub fn new(y0: Float, y1: Float, z0: Float, z1: Float, k: Float,
               material: Arc<Material>) -> Self {
        Self { y0, y1, z0, z1, k, material }
    }

    pub fn hit(&self, ray: &Ray3f, t_min: Float, t_max: Float) -> Option<HitRecord> {
        let t = (self.k - ray.origin().x) / ray.dir().x;
        if !(t > t_min && t < t_max) {
            return None;
        }

        let y = ray.origin().y + t * ray.dir().y;
        let z = ray.origin().z + t * ray.dir().z;
        if y < self.y0 || y > self.y1 || z < self.z0 || z > self.z1 {
            return None;
        }

        let uv = Vector2f::new((y - self.y0) / (self.y1 - self.y0),
                               (z - self.z0) / (self.z1 - self.z0));
        let outward_normal = Vector3f::new(1.0, 0.0, 0.0);
        Some(HitRecord::new(ray, outward_normal, t, ray.at(t), uv, self.material.clone()))
    }

    pub fn bounding_box(&self) -> AABB {
        AABB::new(Vector3f::new(self.k - EPSILON, self.y0, self.z0),
                  Vector3f::new(self.k + EPSILON, self.y1, self.z1))
    }
}

/* Tests for axis-aligned rectangles */
