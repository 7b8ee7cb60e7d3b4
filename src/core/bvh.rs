// Copyright @yucwang 2026

use crate::core::hittable::{HitRecord, Hittable};
use crate::core::rng::LcgRng;
use crate::math::aabb::AABB;
use crate::math::constants::Float;
use crate::math::ray::Ray3f;
use std::cmp::Ordering;
use std::sync::Arc;

// Binary bounding-volume hierarchy. Each build level picks a random axis,
// sorts the primitives by box minimum along it and splits at the midpoint.
// A single-object node duplicates that object into both children, which
// keeps traversal free of null checks.
pub struct BvhNode {
    left: Arc<Hittable>,
    right: Arc<Hittable>,
    bbox: AABB,
}

impl BvhNode {
    pub fn new(mut objects: Vec<Arc<Hittable>>,
               time0: Float,
               time1: Float,
               rng: &mut LcgRng) -> Self {
        let axis = (rng.next_u32() % 3) as usize;
        objects.sort_by(|a, b| compare_box_min(a, b, axis, time0, time1));

        let (left, right) = match objects.len() {
            0 => {
                // Degenerate tree over nothing; the invalid box rejects
                // every ray.
                return Self {
                    left: Arc::new(Hittable::List(Default::default())),
                    right: Arc::new(Hittable::List(Default::default())),
                    bbox: AABB::default(),
                };
            }
            1 => {
                let only = objects.remove(0);
                (only.clone(), only)
            }
            2 => {
                let right = objects.remove(1);
                let left = objects.remove(0);
                (left, right)
            }
            len => {
                let tail = objects.split_off(len / 2);
                let left = Arc::new(Hittable::Bvh(
                    BvhNode::new(objects, time0, time1, rng)));
                let right = Arc::new(Hittable::Bvh(
                    BvhNode::new(tail, time0, time1, rng)));
                (left as Arc<Hittable>, right as Arc<Hittable>)
            }
        };

        let left_box = left.bounding_box(time0, time1).unwrap_or_default();
        let right_box = right.bounding_box(time0, time1).unwrap_or_default();
        let bbox = AABB::union(&left_box.pad(), &right_box.pad());

        Self { left, right, bbox }
    }

    pub fn hit(&self,
               ray: &Ray3f,
               t_min: Float,
               t_max: Float,
               rng: &mut LcgRng) -> Option<HitRecord> {
        if !self.bbox.ray_intersect(ray, t_min, t_max) {
            return None;
        }

        let hit_left = self.left.hit(ray, t_min, t_max, rng);
        // Anything behind the left hit is occluded, so tighten the range.
        let right_max = hit_left.as_ref().map_or(t_max, |record| record.t());
        let hit_right = self.right.hit(ray, t_min, right_max, rng);

        hit_right.or(hit_left)
    }

    pub fn bounding_box(&self) -> AABB {
        self.bbox
    }
}

fn compare_box_min(a: &Arc<Hittable>,
                   b: &Arc<Hittable>,
                   axis: usize,
                   time0: Float,
                   time1: Float) -> Ordering {
    let key = |object: &Arc<Hittable>| {
        object.bounding_box(time0, time1)
            .map_or(0.0, |bbox| bbox.p_min[axis])
    };
    key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal)
}

/* Tests for BvhNode */

#[cfg(test)]
mod tests {
    use super::BvhNode;
    use crate::core::hittable::{Hittable, HittableList};
    use crate::core::material::Material;
    use crate::core::rng::LcgRng;
    use crate::materials::lambertian::Lambertian;
    use crate::math::constants::{FLOAT_INFINITY, Vector3f};
    use crate::math::ray::Ray3f;
    use crate::math::spectrum::RGBSpectrum;
    use crate::shapes::moving_sphere::MovingSphere;
    use crate::shapes::sphere::Sphere;
    use std::sync::Arc;

    fn gray_material() -> Arc<Material> {
        Arc::new(Material::Lambertian(Lambertian::from_color(
            RGBSpectrum::new(0.5, 0.5, 0.5),
        )))
    }

    fn random_sphere_cloud(rng: &mut LcgRng, count: usize) -> Vec<Arc<Hittable>> {
        let material = gray_material();
        let mut objects: Vec<Arc<Hittable>> = Vec::with_capacity(count);
        for i in 0..count {
            let center = Vector3f::new(rng.next_f32_in(-20.0, 20.0),
                                       rng.next_f32_in(-20.0, 20.0),
                                       rng.next_f32_in(-20.0, 20.0));
            let radius = rng.next_f32_in(0.1, 2.0);
            if i % 5 == 0 {
                let drift = Vector3f::new(rng.next_f32_in(-1.0, 1.0),
                                          rng.next_f32_in(-1.0, 1.0),
                                          rng.next_f32_in(-1.0, 1.0));
                objects.push(Arc::new(Hittable::MovingSphere(MovingSphere::new(
                    center, center + drift, 0.0, 1.0, radius, material.clone()))));
            } else {
                objects.push(Arc::new(Hittable::Sphere(Sphere::new(
                    center, radius, material.clone()))));
            }
        }
        objects
    }

    #[test]
    fn test_matches_linear_scan() {
        // The hierarchy is an acceleration structure only: over many random
        // scenes and rays it must agree with the brute-force closest hit.
        let mut build_rng = LcgRng::new(2024);
        let mut ray_rng = LcgRng::new(4048);

        for scene_idx in 0..8 {
            let objects = random_sphere_cloud(&mut build_rng, 20 + scene_idx * 7);
            let mut list = HittableList::new();
            for object in &objects {
                list.add(object.clone());
            }
            let bvh = BvhNode::new(objects, 0.0, 1.0, &mut build_rng);

            for _ in 0..200 {
                let ray = Ray3f::new(
                    Vector3f::new(ray_rng.next_f32_in(-30.0, 30.0),
                                  ray_rng.next_f32_in(-30.0, 30.0),
                                  ray_rng.next_f32_in(-30.0, 30.0)),
                    Vector3f::new(ray_rng.next_f32_in(-1.0, 1.0),
                                  ray_rng.next_f32_in(-1.0, 1.0),
                                  ray_rng.next_f32_in(-1.0, 1.0)),
                    ray_rng.next_f32_in(0.0, 1.0));
                if ray.dir().norm_squared() < 1e-6 {
                    continue;
                }

                let mut rng_a = LcgRng::new(7);
                let mut rng_b = LcgRng::new(7);
                let from_bvh = bvh.hit(&ray, 0.001, FLOAT_INFINITY, &mut rng_a);
                let from_list = list.hit(&ray, 0.001, FLOAT_INFINITY, &mut rng_b);

                match (from_bvh, from_list) {
                    (Some(a), Some(b)) => {
                        assert!((a.t() - b.t()).abs() < 1e-3,
                                "closest hit diverged: {} vs {}", a.t(), b.t());
                    }
                    (None, None) => {}
                    (a, b) => panic!("hit disagreement: bvh={} list={}",
                                     a.is_some(), b.is_some()),
                }
            }
        }
    }

    #[test]
    fn test_single_object_tree() {
        let material = gray_material();
        let sphere = Arc::new(Hittable::Sphere(Sphere::new(
            Vector3f::new(0.0, 0.0, -5.0), 1.0, material)));
        let mut rng = LcgRng::new(1);
        let bvh = BvhNode::new(vec![sphere], 0.0, 1.0, &mut rng);

        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, -1.0), 0.0);
        let record = bvh.hit(&ray, 0.001, FLOAT_INFINITY, &mut rng)
            .expect("sphere on the ray");
        assert!((record.t() - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_empty_tree_rejects_everything() {
        let mut rng = LcgRng::new(1);
        let bvh = BvhNode::new(Vec::new(), 0.0, 1.0, &mut rng);
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, -1.0), 0.0);
        assert!(bvh.hit(&ray, 0.001, FLOAT_INFINITY, &mut rng).is_none());
    }
}
