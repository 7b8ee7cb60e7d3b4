// Copyright @yucwang 2026

pub mod checker;
pub mod image;
pub mod noise;
pub mod perlin;
pub mod solid;
