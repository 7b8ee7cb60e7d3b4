// Copyright @yucwang 2026

use crate::core::texture::Texture;
use crate::math::constants::{Vector2f, Vector3f};
use crate::math::spectrum::RGBSpectrum;
use crate::textures::solid::SolidColor;
use std::sync::Arc;

// Pure emitter: never scatters, so the path ends at the light. In scenes
// with a black background these are the only radiance sources.
pub struct DiffuseLight {
    emit: Arc<Texture>,
}

impl DiffuseLight {
    pub fn new(emit: Arc<Texture>) -> Self {
        Self { emit }
    }

    pub fn from_color(color: RGBSpectrum) -> Self {
        Self { emit: Arc::new(Texture::Solid(SolidColor::new(color))) }
    }

    pub fn emitted(&self, uv: Vector2f, p: &Vector3f) -> RGBSpectrum {
        self.emit.eval(uv, p)
    }
}

/* Tests for DiffuseLight */

#[cfg(test)]
mod tests {
    use super::DiffuseLight;
    use crate::core::hittable::HitRecord;
    use crate::core::material::Material;
    use crate::core::rng::LcgRng;
    use crate::math::constants::{Vector2f, Vector3f};
    use crate::math::ray::Ray3f;
    use crate::math::spectrum::RGBSpectrum;
    use std::sync::Arc;

    #[test]
    fn test_emits_and_never_scatters() {
        let color = RGBSpectrum::new(4.0, 4.0, 4.0);
        let material = Arc::new(Material::DiffuseLight(DiffuseLight::from_color(color)));

        let ray = Ray3f::new(Vector3f::new(0.0, 1.0, 0.0),
                             Vector3f::new(0.0, -1.0, 0.0), 0.0);
        let hit = HitRecord::new(&ray, Vector3f::new(0.0, 1.0, 0.0), 1.0,
                                 Vector3f::zeros(), Vector2f::new(0.5, 0.5),
                                 material.clone());

        let mut rng = LcgRng::new(7);
        assert!(material.scatter(&ray, &hit, &mut rng).is_none());
        assert_eq!(material.emitted(hit.uv(), &hit.p()), color);
    }

    #[test]
    fn test_other_materials_emit_black() {
        use crate::materials::lambertian::Lambertian;
        let material = Material::Lambertian(Lambertian::from_color(
            RGBSpectrum::new(0.5, 0.5, 0.5)));
        let emitted = material.emitted(Vector2f::new(0.1, 0.2), &Vector3f::zeros());
        assert!(emitted.is_black());
    }
}
