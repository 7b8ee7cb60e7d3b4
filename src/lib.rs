// Copyright @yucwang 2026

#![allow(dead_code)]

pub mod core;
pub mod math;
pub mod io;
pub mod integrators;
pub mod materials;
pub mod media;
pub mod renderers;
pub mod scenes;
pub mod sensors;
pub mod shapes;
pub mod textures;
