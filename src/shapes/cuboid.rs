// Copyright @yucwang 2026

use super::aarect::{XyRect, XzRect, YzRect};
use crate::core::hittable::{HitRecord, Hittable, HittableList};
use crate::core::material::Material;
use crate::core::rng::LcgRng;
use crate::math::aabb::AABB;
use crate::math::constants::{Float, Vector3f};
use crate::math::ray::Ray3f;
use std::sync::Arc;

// An axis-aligned box assembled from its six face rectangles. Six faces do
// not warrant a BVH; a plain list scan is used.
pub struct Cuboid {
    p_min: Vector3f,
    p_max: Vector3f,
    sides: HittableList,
}

impl Cuboid {
    pub fn new(p0: Vector3f, p1: Vector3f, material: Arc<Material>) -> Self {
        let mut sides = HittableList::new();

        sides.add(Arc::new(Hittable::XyRect(XyRect::new(
            p0.x, p1.x, p0.y, p1.y, p1.z, material.clone()))));
        sides.add(Arc::new(Hittable::XyRect(XyRect::new(
            p0.x, p1.x, p0.y, p1.y, p0.z, material.clone()))));

        sides.add(Arc::new(Hittable::XzRect(XzRect::new(
            p0.x, p1.x, p0.z, p1.z, p1.y, material.clone()))));
        sides.add(Arc::new(Hittable::XzRect(XzRect::new(
            p0.x, p1.x, p0.z, p1.z, p0.y, material.clone()))));

        sides.add(Arc::new(Hittable::YzRect(YzRect::new(
            p0.y, p1.y, p0.z, p1.z, p1.x, material.clone()))));
        sides.add(Arc::new(Hittable::YzRect(YzRect::new(
            p0.y, p1.y, p0.z, p1.z, p0.x, material))));

        Self { p_min: p0, p_max: p1, sides }
    }

    pub fn hit(&self,
               ray: &Ray3f,
               t_min: Float,
               t_max: Float,
               rng: &mut LcgRng) -> Option<HitRecord> {
        self.sides.hit(ray, t_min, t_max, rng)
    }

    pub fn bounding_box(&self) -> AABB {
        AABB::new(self.p_min, self.p_max)
    }
}

/* Tests for Cuboid */
