// Copyright @yucwang 2026

use crate::core::rng::LcgRng;
use crate::core::sensor::Sensor;
use crate::math::bitmap::Bitmap;
use crate::math::constants::{Float, Vector2f, Vector3f};
use crate::math::ray::Ray3f;
use crate::math::warp::sample_in_unit_disk;

// Thin-lens perspective camera. Rays start on a lens disk of radius
// aperture / 2 and pass through the focus plane, so only geometry at
// focus_dist renders sharp. Each ray also carries a shutter time drawn
// from [time0, time1] for motion blur.
pub struct PerspectiveCamera {
    origin: Vector3f,
    lower_left_corner: Vector3f,
    horizontal: Vector3f,
    vertical: Vector3f,
    u: Vector3f,
    v: Vector3f,
    lens_radius: Float,
    time0: Float,
    time1: Float,
    bitmap: Bitmap,
}

impl PerspectiveCamera {
    pub fn new(look_from: Vector3f,
               look_at: Vector3f,
               vup: Vector3f,
               vfov_radians: Float,
               aspect: Float,
               aperture: Float,
               focus_dist: Float,
               time0: Float,
               time1: Float,
               width: usize,
               height: usize) -> Self {
        let h = (0.5 * vfov_radians).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = aspect * viewport_height;

        let w = (look_from - look_at).normalize();
        let u = vup.cross(&w).normalize();
        let v = w.cross(&u);

        let horizontal = focus_dist * viewport_width * u;
        let vertical = focus_dist * viewport_height * v;
        let lower_left_corner =
            look_from - 0.5 * horizontal - 0.5 * vertical - focus_dist * w;

        Self {
            origin: look_from,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            lens_radius: 0.5 * aperture,
            time0,
            time1,
            bitmap: Bitmap::new(width, height),
        }
    }

    pub fn width(&self) -> usize {
        self.bitmap.width()
    }

    pub fn height(&self) -> usize {
        self.bitmap.height()
    }
}

impl Sensor for PerspectiveCamera {
    fn sample_ray(&self, uv: &Vector2f, rng: &mut LcgRng) -> Ray3f {
        let rd = self.lens_radius * sample_in_unit_disk(rng);
        let offset = self.u * rd.x + self.v * rd.y;

        let origin = self.origin + offset;
        let dir = self.lower_left_corner
            + uv.x * self.horizontal
            + uv.y * self.vertical
            - origin;
        let time = rng.next_f32_in(self.time0, self.time1);

        Ray3f::new(origin, dir, time)
    }

    fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    fn bitmap_mut(&mut self) -> &mut Bitmap {
        &mut self.bitmap
    }

    fn describe(&self) -> String {
        String::from("PerspectiveCamera")
    }
}
