// Copyright @yucwang 2026

use crate::core::bvh::BvhNode;
use crate::core::material::Material;
use crate::core::rng::LcgRng;
use crate::math::aabb::AABB;
use crate::math::constants::{Float, Vector2f, Vector3f};
use crate::math::ray::Ray3f;
use crate::media::constant_medium::ConstantMedium;
use crate::shapes::aarect::{XyRect, XzRect, YzRect};
use crate::shapes::cuboid::Cuboid;
use crate::shapes::moving_sphere::MovingSphere;
use crate::shapes::sphere::Sphere;
use crate::shapes::transform::{RotateY, Translate};
use std::sync::Arc;

pub struct HitRecord {
    p: Vector3f,
    normal: Vector3f,
    t: Float,
    uv: Vector2f,
    front_face: bool,
    material: Arc<Material>,
}

impl HitRecord {
    // Stores the normal facing against the ray and remembers which side the
    // ray came from, so shading code never has to re-derive orientation.
    pub fn new(ray: &Ray3f,
               outward_normal: Vector3f,
               t: Float,
               p: Vector3f,
               uv: Vector2f,
               material: Arc<Material>) -> Self {
        let front_face = ray.dir().dot(&outward_normal) < 0.0;
        let normal = if front_face { outward_normal } else { -outward_normal };
        Self { p, normal, t, uv, front_face, material }
    }

    // Scatter point inside a participating medium. The normal is arbitrary
    // because the attached phase function ignores it.
    pub fn medium_interaction(t: Float, p: Vector3f, material: Arc<Material>) -> Self {
        Self {
            p,
            normal: Vector3f::new(1.0, 0.0, 0.0),
            t,
            uv: Vector2f::new(0.0, 0.0),
            front_face: true,
            material,
        }
    }

    pub fn t(&self) -> Float {
        self.t
    }

    pub fn p(&self) -> Vector3f {
        self.p
    }

    pub fn normal(&self) -> Vector3f {
        self.normal
    }

    // The geometric outward normal, undoing the front-face flip.
    pub fn outward_normal(&self) -> Vector3f {
        if self.front_face { self.normal } else { -self.normal }
    }

    pub fn front_face(&self) -> bool {
        self.front_face
    }

    pub fn uv(&self) -> Vector2f {
        self.uv
    }

    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }
}

// Everything a ray can intersect. The variant set is fixed by design, so the
// scene graph is a closed sum type; shared subtrees are Arc'd and immutable
// once built.
pub enum Hittable {
    Sphere(Sphere),
    MovingSphere(MovingSphere),
    XyRect(XyRect),
    XzRect(XzRect),
    YzRect(YzRect),
    Cuboid(Cuboid),
    Translate(Translate),
    RotateY(RotateY),
    ConstantMedium(ConstantMedium),
    List(HittableList),
    Bvh(BvhNode),
}

impl Hittable {
    // Earliest intersection with t in (t_min, t_max). The generator is
    // threaded through because the constant medium samples its scatter
    // distance during intersection.
    pub fn hit(&self,
               ray: &Ray3f,
               t_min: Float,
               t_max: Float,
               rng: &mut LcgRng) -> Option<HitRecord> {
        match self {
            Hittable::Sphere(s) => s.hit(ray, t_min, t_max),
            Hittable::MovingSphere(s) => s.hit(ray, t_min, t_max),
            Hittable::XyRect(s) => s.hit(ray, t_min, t_max),
            Hittable::XzRect(s) => s.hit(ray, t_min, t_max),
            Hittable::YzRect(s) => s.hit(ray, t_min, t_max),
            Hittable::Cuboid(s) => s.hit(ray, t_min, t_max, rng),
            Hittable::Translate(s) => s.hit(ray, t_min, t_max, rng),
            Hittable::RotateY(s) => s.hit(ray, t_min, t_max, rng),
            Hittable::ConstantMedium(s) => s.hit(ray, t_min, t_max, rng),
            Hittable::List(s) => s.hit(ray, t_min, t_max, rng),
            Hittable::Bvh(s) => s.hit(ray, t_min, t_max, rng),
        }
    }

    // Minimal enclosing box over the shutter window, None when unbounded.
    pub fn bounding_box(&self, time0: Float, time1: Float) -> Option<AABB> {
        match self {
            Hittable::Sphere(s) => Some(s.bounding_box()),
            Hittable::MovingSphere(s) => Some(s.bounding_box(time0, time1)),
            Hittable::XyRect(s) => Some(s.bounding_box()),
            Hittable::XzRect(s) => Some(s.bounding_box()),
            Hittable::YzRect(s) => Some(s.bounding_box()),
            Hittable::Cuboid(s) => Some(s.bounding_box()),
            Hittable::Translate(s) => s.bounding_box(time0, time1),
            Hittable::RotateY(s) => s.bounding_box(),
            Hittable::ConstantMedium(s) => s.bounding_box(time0, time1),
            Hittable::List(s) => s.bounding_box(time0, time1),
            Hittable::Bvh(s) => Some(s.bounding_box()),
        }
    }
}

#[derive(Default)]
pub struct HittableList {
    objects: Vec<Arc<Hittable>>,
}

impl HittableList {
    pub fn new() -> Self {
        Self { objects: Vec::new() }
    }

    pub fn add(&mut self, object: Arc<Hittable>) {
        self.objects.push(object);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn objects(&self) -> &[Arc<Hittable>] {
        &self.objects
    }

    pub fn into_objects(self) -> Vec<Arc<Hittable>> {
        self.objects
    }

    pub fn hit(&self,
               ray: &Ray3f,
               t_min: Float,
               t_max: Float,
               rng: &mut LcgRng) -> Option<HitRecord> {
        let mut closest = t_max;
        let mut result = None;

        for object in &self.objects {
            if let Some(record) = object.hit(ray, t_min, closest, rng) {
                closest = record.t();
                result = Some(record);
            }
        }

        result
    }

    pub fn bounding_box(&self, time0: Float, time1: Float) -> Option<AABB> {
        if self.objects.is_empty() {
            return None;
        }

        let mut bbox = AABB::default();
        for object in &self.objects {
            bbox.expand_by_aabb(&object.bounding_box(time0, time1)?);
        }
        Some(bbox)
    }
}

/* Tests for the hit record and list container */
