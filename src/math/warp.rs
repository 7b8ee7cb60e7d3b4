// Copyright @yucwang 2026

use super::constants::{Float, Vector2f, Vector3f};
use crate::core::rng::LcgRng;

// Rejection sampling keeps the distributions exactly uniform; the expected
// number of draws per sample is below two.
pub fn sample_in_unit_sphere(rng: &mut LcgRng) -> Vector3f {
    loop {
        let p = Vector3f::new(rng.next_f32_in(-1.0, 1.0),
                              rng.next_f32_in(-1.0, 1.0),
                              rng.next_f32_in(-1.0, 1.0));
        if p.norm_squared() < 1.0 {
            return p;
        }
    }
}

pub fn sample_unit_vector(rng: &mut LcgRng) -> Vector3f {
    sample_in_unit_sphere(rng).normalize()
}

pub fn sample_in_unit_disk(rng: &mut LcgRng) -> Vector2f {
    loop {
        let p = Vector2f::new(rng.next_f32_in(-1.0, 1.0),
                              rng.next_f32_in(-1.0, 1.0));
        if p.norm_squared() < 1.0 {
            return p;
        }
    }
}

pub fn reflect(v: &Vector3f, n: &Vector3f) -> Vector3f {
    v - 2.0 * v.dot(n) * n
}

// Snell refraction of a unit incident direction. The caller guarantees the
// ratio admits a real solution.
pub fn refract(uv: &Vector3f, n: &Vector3f, etai_over_etat: Float) -> Vector3f {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.norm_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

/* Tests for sampling and reflection */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::LcgRng;
    use crate::math::constants::Vector3f;

    #[test]
    fn test_sample_in_unit_sphere() {
        let mut rng = LcgRng::new(11);
        for _ in 0..256 {
            assert!(sample_in_unit_sphere(&mut rng).norm_squared() < 1.0);
        }
    }

    #[test]
    fn test_sample_unit_vector_is_unit() {
        let mut rng = LcgRng::new(12);
        for _ in 0..256 {
            let v = sample_unit_vector(&mut rng);
            assert!((v.norm() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_sample_in_unit_disk() {
        let mut rng = LcgRng::new(13);
        for _ in 0..256 {
            assert!(sample_in_unit_disk(&mut rng).norm_squared() < 1.0);
        }
    }

    #[test]
    fn test_reflect() {
        let v = Vector3f::new(1.0, -1.0, 0.0);
        let n = Vector3f::new(0.0, 1.0, 0.0);
        let r = reflect(&v, &n);
        assert!((r - Vector3f::new(1.0, 1.0, 0.0)).norm() < 1e-6);
    }

    #[test]
    fn test_refract_straight_through() {
        // Normal incidence passes through undeflected for any ratio.
        let uv = Vector3f::new(0.0, -1.0, 0.0);
        let n = Vector3f::new(0.0, 1.0, 0.0);
        let r = refract(&uv, &n, 1.5);
        assert!((r - uv).norm() < 1e-5);
    }
}
