// Copyright @yucwang 2026

use super::constants::{EPSILON, Float, FLOAT_MAX, FLOAT_MIN, Vector3f};
use super::ray::Ray3f;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AABB {
    pub p_min: Vector3f,
    pub p_max: Vector3f,
}

impl Default for AABB {
    fn default() -> Self {
        Self { p_min: Vector3f::new(FLOAT_MAX, FLOAT_MAX, FLOAT_MAX),
               p_max: Vector3f::new(FLOAT_MIN, FLOAT_MIN, FLOAT_MIN) }
    }
}

impl AABB {
    pub fn new(p_min: Vector3f, p_max: Vector3f) -> Self {
        let mut min = Vector3f::new(0.0, 0.0, 0.0);
        let mut max = Vector3f::new(0.0, 0.0, 0.0);
        for idx in 0..3 {
            min[idx] = p_min[idx].min(p_max[idx]);
            max[idx] = p_max[idx].max(p_min[idx]);
        }
        Self { p_min: min, p_max: max }
    }

    pub fn union(a: &AABB, b: &AABB) -> AABB {
        let mut result = *a;
        result.expand_by_aabb(b);
        result
    }

    pub fn center(&self) -> Vector3f {
        0.5f32 * self.p_min + 0.5f32 * self.p_max
    }

    pub fn expand_by_point(&mut self, p: &Vector3f) {
        for idx in 0..3 {
            self.p_min[idx] = self.p_min[idx].min(p[idx]);
            self.p_max[idx] = self.p_max[idx].max(p[idx]);
        }
    }

    pub fn expand_by_aabb(&mut self, other: &AABB) {
        for idx in 0..3 {
            self.p_min[idx] = self.p_min[idx].min(other.p_min[idx]);
            self.p_max[idx] = self.p_max[idx].max(other.p_max[idx]);
        }
    }

    // Grows zero-thickness axes so a box is never degenerate when it is used
    // as a BVH split criterion.
    pub fn pad(&self) -> AABB {
        let mut min = self.p_min;
        let mut max = self.p_max;
        for idx in 0..3 {
            if max[idx] - min[idx] < EPSILON {
                min[idx] -= 0.5 * EPSILON;
                max[idx] += 0.5 * EPSILON;
            }
        }
        AABB { p_min: min, p_max: max }
    }

    // Slab test over the caller's (t_min, t_max) range.
    pub fn ray_intersect(&self, ray: &Ray3f, t_min: Float, t_max: Float) -> bool {
        if !self.is_valid() {
            return false;
        }

        let o = ray.origin();
        let d = ray.dir();
        let mut t_min = t_min;
        let mut t_max = t_max;

        for idx in 0..3 {
            let dir = d[idx];
            if dir.abs() < 1e-8 {
                if o[idx] < self.p_min[idx] || o[idx] > self.p_max[idx] {
                    return false;
                }
                continue;
            }

            let inv = 1.0 / dir;
            let mut t0 = (self.p_min[idx] - o[idx]) * inv;
            let mut t1 = (self.p_max[idx] - o[idx]) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }

            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_max <= t_min {
                return false;
            }
        }

        true
    }

    pub fn is_valid(&self) -> bool {
        for idx in 0..3 {
            if self.p_min[idx] > self.p_max[idx] {
                return false;
            }
        }

        true
    }
}

/* Test for AABB */
