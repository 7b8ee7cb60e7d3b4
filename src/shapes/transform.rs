// Copyright @yucwang 2026

use crate::core::hittable::{HitRecord, Hittable};
use crate::core::rng::LcgRng;
use crate::math::aabb::AABB;
use crate::math::constants::{Float, Vector3f, degrees_to_radians};
use crate::math::ray::Ray3f;
use std::sync::Arc;

// Instancing wrappers: instead of moving the wrapped object, the incoming
// ray is moved into object space and the resulting hit moved back out.

pub struct Translate {
    inner: Arc<Hittable>,
    offset: Vector3f,
}

impl Translate {
    pub fn new(inner: Arc<Hittable>, offset: Vector3f) -> Self {
        Self { inner, offset }
    }

    pub fn hit(&self,
               ray: &Ray3f,
               t_min: Float,
               t_max: Float,
               rng: &mut LcgRng) -> Option<HitRecord> {
        let moved = Ray3f::new(ray.origin() - self.offset, ray.dir(), ray.time());
        let record = self.inner.hit(&moved, t_min, t_max, rng)?;
        // The direction is unchanged, so the face orientation survives.
        Some(HitRecord::new(&moved,
                            record.outward_normal(),
                            record.t(),
                            record.p() + self.offset,
                            record.uv(),
                            record.material().clone()))
    }

    pub fn bounding_box(&self, time0: Float, time1: Float) -> Option<AABB> {
        let bbox = self.inner.bounding_box(time0, time1)?;
        Some(AABB::new(bbox.p_min + self.offset, bbox.p_max + self.offset))
    }
}

pub struct RotateY {
    inner: Arc<Hittable>,
    sin_theta: Float,
    cos_theta: Float,
    bbox: Option<AABB>,
}

fn rotate_y(v: &Vector3f, sin_theta: Float, cos_theta: Float) -> Vector3f {
    Vector3f::new(cos_theta * v.x + sin_theta * v.z,
                  v.y,
                  -sin_theta * v.x + cos_theta * v.z)
}

fn rotate_y_inv(v: &Vector3f, sin_theta: Float, cos_theta: Float) -> Vector3f {
    Vector3f::new(cos_theta * v.x - sin_theta * v.z,
                  v.y,
                  sin_theta * v.x + cos_theta * v.z)
}

impl RotateY {
    pub fn new(inner: Arc<Hittable>, angle_degrees: Float) -> Self {
        let radians = degrees_to_radians(angle_degrees);
        let sin_theta = radians.sin();
        let cos_theta = radians.cos();

        // The world-space box is fixed at construction from the rotated
        // corners of the wrapped box.
        let bbox = inner.bounding_box(0.0, 1.0).map(|inner_box| {
            let mut bbox = AABB::default();
            for i in 0..2 {
                for j in 0..2 {
                    for k in 0..2 {
                        let corner = Vector3f::new(
                            if i == 0 { inner_box.p_min.x } else { inner_box.p_max.x },
                            if j == 0 { inner_box.p_min.y } else { inner_box.p_max.y },
                            if k == 0 { inner_box.p_min.z } else { inner_box.p_max.z },
                        );
                        bbox.expand_by_point(&rotate_y(&corner, sin_theta, cos_theta));
                    }
                }
            }
            bbox
        });

        Self { inner, sin_theta, cos_theta, bbox }
    }

    pub fn hit(&self,
               ray: &Ray3f,
               t_min: Float,
               t_max: Float,
               rng: &mut LcgRng) -> Option<HitRecord> {
        let origin = rotate_y_inv(&ray.origin(), self.sin_theta, self.cos_theta);
        let dir = rotate_y_inv(&ray.dir(), self.sin_theta, self.cos_theta);
        let rotated = Ray3f::new(origin, dir, ray.time());

        let record = self.inner.hit(&rotated, t_min, t_max, rng)?;
        let p = rotate_y(&record.p(), self.sin_theta, self.cos_theta);
        let outward_normal =
            rotate_y(&record.outward_normal(), self.sin_theta, self.cos_theta);

        // Rotation preserves dot products, so orienting against the world
        // ray is equivalent to orienting against the rotated ray.
        Some(HitRecord::new(ray, outward_normal, record.t(), p,
                            record.uv(), record.material().clone()))
    }

    pub fn bounding_box(&self) -> Option<AABB> {
        self.bbox
    }
}

/* Tests for the instancing wrappers */
