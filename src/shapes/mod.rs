// Copyright @yucwang 2026

pub mod aarect;
pub mod cuboid;
pub mod moving_sphere;
pub mod sphere;
pub mod transform;
