// Copyright @yucwang 2026

use crate::core::integrator::Integrator;
use crate::core::rng::LcgRng;
use crate::core::scene::Scene;
use crate::core::sensor::Sensor;
use crate::math::constants::{FLOAT_INFINITY, Float, T_MIN, Vector2f};
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

// Unidirectional path tracing with a fixed bounce budget. The loop keeps a
// running throughput and adds emission at every surface it touches; a path
// that survives all max_depth bounces contributes only what it accumulated
// so far. That cutoff darkens deep paths slightly and is the intended
// behavior, not a bug.
pub struct PathIntegrator {
    max_depth: u32,
    samples_per_pixel: u32,
}

impl PathIntegrator {
    pub fn new(max_depth: u32, samples_per_pixel: u32) -> Self {
        Self { max_depth, samples_per_pixel }
    }

    fn trace_path(&self, scene: &Scene, mut ray: Ray3f, rng: &mut LcgRng) -> RGBSpectrum {
        let mut radiance = RGBSpectrum::black();
        let mut throughput = RGBSpectrum::white();

        for _ in 0..self.max_depth {
            let hit = match scene.ray_intersection(&ray, T_MIN, FLOAT_INFINITY, rng) {
                Some(hit) => hit,
                None => {
                    radiance += throughput * scene.background();
                    return radiance;
                }
            };

            radiance += throughput * hit.material().emitted(hit.uv(), &hit.p());

            let scatter = match hit.material().scatter(&ray, &hit, rng) {
                Some(scatter) => scatter,
                None => return radiance,
            };

            throughput *= scatter.attenuation;
            ray = scatter.scattered;
        }

        radiance
    }
}

impl Integrator for PathIntegrator {
    fn trace_ray_forward(&self,
                         scene: &Scene,
                         sensor: &dyn Sensor,
                         pixel: Vector2f,
                         rng: &mut LcgRng) -> RGBSpectrum {
        let width = sensor.bitmap().width() as Float;
        let height = sensor.bitmap().height() as Float;

        // Jitter within the pixel footprint; v grows upward while rows grow
        // downward, hence the flip.
        let s = (pixel.x + rng.next_f32()) / width;
        let t = 1.0 - (pixel.y + rng.next_f32()) / height;

        let ray = sensor.sample_ray(&Vector2f::new(s, t), rng);
        self.trace_path(scene, ray, rng)
    }

    fn samples_per_pixel(&self) -> u32 {
        self.samples_per_pixel
    }
}

/* Tests for PathIntegrator */
