// Copyright @yucwang 2026

pub mod bvh;
pub mod hittable;
pub mod integrator;
pub mod material;
pub mod rng;
pub mod scene;
pub mod sensor;
pub mod texture;
