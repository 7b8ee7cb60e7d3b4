// Copyright @yucwang 2026

use crate::core::hittable::{HitRecord, Hittable};
use crate::core::rng::LcgRng;
use crate::core::sensor::Sensor;
use crate::math::constants::Float;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;
use std::sync::Arc;

// The world as the renderer sees it: a single intersectable root, the
// background radiance for escaped rays, and the cameras. Missing emitters
// are fine; a scene lit only by the background is legitimate.
pub struct Scene {
    root: Arc<Hittable>,
    background: RGBSpectrum,
    sensors: Vec<Box<dyn Sensor>>,
}

impl Scene {
    pub fn new(root: Arc<Hittable>, background: RGBSpectrum) -> Self {
        Self { root, background, sensors: Vec::new() }
    }

    pub fn add_sensor(&mut self, sensor: Box<dyn Sensor>) {
        self.sensors.push(sensor);
    }

    // Removes the sensor so the renderer can own its bitmap mutably while
    // the rest of the scene stays shared across worker threads.
    pub fn take_sensor(&mut self, camera_id: usize) -> Option<Box<dyn Sensor>> {
        if camera_id < self.sensors.len() {
            Some(self.sensors.remove(camera_id))
        } else {
            None
        }
    }

    pub fn insert_sensor(&mut self, camera_id: usize, sensor: Box<dyn Sensor>) {
        if camera_id <= self.sensors.len() {
            self.sensors.insert(camera_id, sensor);
        } else {
            self.sensors.push(sensor);
        }
    }

    pub fn num_sensors(&self) -> usize {
        self.sensors.len()
    }

    pub fn background(&self) -> RGBSpectrum {
        self.background
    }

    pub fn root(&self) -> &Arc<Hittable> {
        &self.root
    }

    pub fn ray_intersection(&self,
                            ray: &Ray3f,
                            t_min: Float,
                            t_max: Float,
                            rng: &mut LcgRng) -> Option<HitRecord> {
        self.root.hit(ray, t_min, t_max, rng)
    }
}

/* Tests for Scene */

#[cfg(test)]
mod tests {
    use super::Scene;
    use crate::core::hittable::Hittable;
    use crate::core::material::Material;
    use crate::core::rng::LcgRng;
    use crate::core::sensor::Sensor;
    use crate::materials::lambertian::Lambertian;
    use crate::math::bitmap::Bitmap;
    use crate::math::constants::{FLOAT_INFINITY, Vector2f, Vector3f};
    use crate::math::ray::Ray3f;
    use crate::math::spectrum::RGBSpectrum;
    use crate::shapes::sphere::Sphere;
    use std::sync::Arc;

    struct TestSensor {
        bitmap: Bitmap,
    }

    impl Sensor for TestSensor {
        fn sample_ray(&self, _uv: &Vector2f, _rng: &mut LcgRng) -> Ray3f {
            Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, -1.0), 0.0)
        }

        fn bitmap(&self) -> &Bitmap {
            &self.bitmap
        }

        fn bitmap_mut(&mut self) -> &mut Bitmap {
            &mut self.bitmap
        }
    }

    fn test_scene() -> Scene {
        let material = Arc::new(Material::Lambertian(Lambertian::from_color(
            RGBSpectrum::new(0.5, 0.5, 0.5))));
        let root = Arc::new(Hittable::Sphere(Sphere::new(
            Vector3f::new(0.0, 0.0, -5.0), 1.0, material)));
        Scene::new(root, RGBSpectrum::new(0.7, 0.8, 1.0))
    }

    #[test]
    fn test_ray_intersection_delegates_to_root() {
        let scene = test_scene();
        let mut rng = LcgRng::new(3);
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, -1.0), 0.0);
        let record = scene.ray_intersection(&ray, 0.001, FLOAT_INFINITY, &mut rng)
            .expect("sphere on the ray");
        assert!((record.t() - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_sensor_take_and_insert() {
        let mut scene = test_scene();
        assert!(scene.take_sensor(0).is_none());

        scene.add_sensor(Box::new(TestSensor { bitmap: Bitmap::new(2, 2) }));
        assert_eq!(scene.num_sensors(), 1);

        let sensor = scene.take_sensor(0).expect("sensor was added");
        assert_eq!(scene.num_sensors(), 0);

        scene.insert_sensor(0, sensor);
        assert_eq!(scene.num_sensors(), 1);
    }
}
