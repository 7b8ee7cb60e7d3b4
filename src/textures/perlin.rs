// Copyright @yucwang 2026

use crate::core::rng::LcgRng;
use crate::math::constants::{Float, Vector3f};
use crate::math::warp::sample_unit_vector;

const POINT_COUNT: usize = 256;

// Lattice noise over random unit gradients with hashed permutation tables.
// The tables are drawn from the caller's generator, so a seed pins down the
// whole pattern.
pub struct Perlin {
    gradients: Vec<Vector3f>,
    perm_x: Vec<usize>,
    perm_y: Vec<usize>,
    perm_z: Vec<usize>,
}

impl Perlin {
    pub fn new(rng: &mut LcgRng) -> Self {
        let gradients = (0..POINT_COUNT)
            .map(|_| sample_unit_vector(rng))
            .collect();

        Self {
            gradients,
            perm_x: generate_perm(rng),
            perm_y: generate_perm(rng),
            perm_z: generate_perm(rng),
        }
    }

    // Smoothed gradient noise in [-1, 1].
    pub fn noise(&self, p: &Vector3f) -> Float {
        let u = p.x - p.x.floor();
        let v = p.y - p.y.floor();
        let w = p.z - p.z.floor();

        let i = p.x.floor() as i64;
        let j = p.y.floor() as i64;
        let k = p.z.floor() as i64;

        let mut cell = [[[Vector3f::zeros(); 2]; 2]; 2];
        for di in 0..2usize {
            for dj in 0..2usize {
                for dk in 0..2usize {
                    let idx = self.perm_x[((i + di as i64) & 255) as usize]
                        ^ self.perm_y[((j + dj as i64) & 255) as usize]
                        ^ self.perm_z[((k + dk as i64) & 255) as usize];
                    cell[di][dj][dk] = self.gradients[idx];
                }
            }
        }

        trilinear_interp(&cell, u, v, w)
    }

    // Summed-octave turbulence, always non-negative.
    pub fn turbulence(&self, p: &Vector3f, depth: u32) -> Float {
        let mut accum = 0.0;
        let mut temp_p = *p;
        let mut weight = 1.0;

        for _ in 0..depth {
            accum += weight * self.noise(&temp_p);
            weight *= 0.5;
            temp_p *= 2.0;
        }

        accum.abs()
    }
}

fn generate_perm(rng: &mut LcgRng) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..POINT_COUNT).collect();
    // Fisher-Yates from the tail.
    for i in (1..POINT_COUNT).rev() {
        let target = (rng.next_u32() as usize) % (i + 1);
        perm.swap(i, target);
    }
    perm
}

fn trilinear_interp(cell: &[[[Vector3f; 2]; 2]; 2], u: Float, v: Float, w: Float) -> Float {
    // Hermitian smoothing removes the grid-aligned banding of raw lerp.
    let uu = u * u * (3.0 - 2.0 * u);
    let vv = v * v * (3.0 - 2.0 * v);
    let ww = w * w * (3.0 - 2.0 * w);

    let mut accum = 0.0;
    for i in 0..2usize {
        for j in 0..2usize {
            for k in 0..2usize {
                let fi = i as Float;
                let fj = j as Float;
                let fk = k as Float;
                let weight = Vector3f::new(u - fi, v - fj, w - fk);
                accum += (fi * uu + (1.0 - fi) * (1.0 - uu))
                    * (fj * vv + (1.0 - fj) * (1.0 - vv))
                    * (fk * ww + (1.0 - fk) * (1.0 - ww))
                    * cell[i][j][k].dot(&weight);
            }
        }
    }

    accum
}

/* Tests for Perlin */

#[cfg(test)]
mod tests {
    use super::Perlin;
    use crate::core::rng::LcgRng;
    use crate::math::constants::Vector3f;

    #[test]
    fn test_noise_is_bounded_and_deterministic() {
        let mut rng = LcgRng::new(123);
        let perlin = Perlin::new(&mut rng);
        let mut rng = LcgRng::new(123);
        let twin = Perlin::new(&mut rng);

        let mut sample_rng = LcgRng::new(9);
        for _ in 0..512 {
            let p = Vector3f::new(sample_rng.next_f32_in(-20.0, 20.0),
                                  sample_rng.next_f32_in(-20.0, 20.0),
                                  sample_rng.next_f32_in(-20.0, 20.0));
            let n = perlin.noise(&p);
            assert!(n >= -1.0 - 1e-4 && n <= 1.0 + 1e-4, "noise {} out of range", n);
            assert_eq!(n, twin.noise(&p));
        }
    }

    #[test]
    fn test_noise_varies() {
        let mut rng = LcgRng::new(321);
        let perlin = Perlin::new(&mut rng);
        let a = perlin.noise(&Vector3f::new(0.3, 0.7, 1.9));
        let b = perlin.noise(&Vector3f::new(5.1, 2.2, -3.4));
        assert!((a - b).abs() > 1e-6);
    }

    #[test]
    fn test_turbulence_non_negative() {
        let mut rng = LcgRng::new(55);
        let perlin = Perlin::new(&mut rng);
        let mut sample_rng = LcgRng::new(10);
        for _ in 0..256 {
            let p = Vector3f::new(sample_rng.next_f32_in(-10.0, 10.0),
                                  sample_rng.next_f32_in(-10.0, 10.0),
                                  sample_rng.next_f32_in(-10.0, 10.0));
            assert!(perlin.turbulence(&p, 7) >= 0.0);
        }
    }
}
