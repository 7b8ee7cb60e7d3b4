// Copyright @yucwang 2026

use crate::math::constants::Float;

pub struct LcgRng {
    state: u64,
}

impl LcgRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }

    pub fn next_f32(&mut self) -> Float {
        (self.next_u32() as Float) / (u32::MAX as Float)
    }

    pub fn next_f32_in(&mut self, min: Float, max: Float) -> Float {
        min + (max - min) * self.next_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::LcgRng;

    #[test]
    fn test_rng_deterministic() {
        let mut a = LcgRng::new(42);
        let mut b = LcgRng::new(42);
        for _ in 0..64 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_rng_ranges() {
        let mut rng = LcgRng::new(7);
        for _ in 0..1024 {
            let u = rng.next_f32();
            assert!((0.0..=1.0).contains(&u));
            let r = rng.next_f32_in(-2.0, 3.0);
            assert!((-2.0..=3.0).contains(&r));
        }
    }
}
