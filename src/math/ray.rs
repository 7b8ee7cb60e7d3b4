// Copyright @yucwang 2026

use super::constants::{Float, Vector3f};

// The direction is deliberately not normalized: the constant medium and the
// camera both rely on rays carrying their raw direction length.
#[derive(Debug, Copy, Clone)]
pub struct Ray3f {
    origin: Vector3f,
    dir: Vector3f,
    time: Float,
}

impl Ray3f {
    pub fn new(o: Vector3f, d: Vector3f, time: Float) -> Self {
        Self { origin: o, dir: d, time }
    }

    pub fn origin(&self) -> Vector3f {
        self.origin
    }

    pub fn dir(&self) -> Vector3f {
        self.dir
    }

    pub fn time(&self) -> Float {
        self.time
    }

    pub fn at(&self, t: Float) -> Vector3f {
        self.origin + self.dir * t
    }
}

/* Tests for Ray */

#[cfg(test)]
mod tests {
    use super::Ray3f;
    use super::Vector3f;

    #[test]
    fn test_ray3f() {
        let o = Vector3f::new(1.0, 2.0, 3.0);
        let d = Vector3f::new(0.0, 0.0, -2.0);
        let ray = Ray3f::new(o, d, 0.5);
        assert_eq!(o, ray.origin());
        assert_eq!(d, ray.dir());
        assert_eq!(ray.time(), 0.5);

        // Direction length is preserved, so at() advances by 2 units per t.
        let p = ray.at(2.0);
        assert!((p[0] - 1.0).abs() < 1e-6);
        assert!((p[1] - 2.0).abs() < 1e-6);
        assert!((p[2] + 1.0).abs() < 1e-6);
    }
}
