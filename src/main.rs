// Copyright 2020 TwoCookingMice

#![allow(dead_code)]

pub extern crate nalgebra as na;

mod core;
mod io;
mod integrators;
mod materials;
mod math;
mod media;
mod renderers;
mod scenes;
mod sensors;
mod shapes;
mod textures;

use self::core::rng::LcgRng;
use self::integrators::path::PathIntegrator;
use self::io::exr_utils;
use self::io::png_utils;
use self::renderers::simple::{ SimpleRenderer, Renderer };

use std::env;

fn main() {
    env::set_var("RUST_LOG", "info");
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <scene> <output.(exr|png)> [--width N] [--spp N] [--max-depth N] [--seed N]", args[0]);
        eprintln!("Scenes: {}", scenes::SCENE_NAMES.join(", "));
        std::process::exit(1);
    }

    let scene_name = &args[1];
    let output_path = &args[2];
    let mut width: usize = 600;
    let mut spp_override: Option<u32> = None;
    let mut max_depth_override: Option<u32> = None;
    let mut seed: u64 = 0;

    let mut i = 3;
    while i < args.len() {
        match args[i].as_str() {
            "--width" => {
                i += 1;
                width = args.get(i).and_then(|v| v.parse::<usize>().ok()).unwrap_or(600);
            }
            "--spp" => {
                i += 1;
                spp_override = args.get(i).and_then(|v| v.parse::<u32>().ok());
            }
            "--max-depth" => {
                i += 1;
                max_depth_override = args.get(i).and_then(|v| v.parse::<u32>().ok());
            }
            "--seed" => {
                i += 1;
                seed = args.get(i).and_then(|v| v.parse::<u64>().ok()).unwrap_or(0);
            }
            _ => {}
        }
        i += 1;
    }

    let mut scene_rng = LcgRng::new(seed);
    let description = match scenes::build(scene_name, width, &mut scene_rng) {
        Some(description) => description,
        None => {
            eprintln!("Unknown scene: {}. Scenes: {}", scene_name,
                      scenes::SCENE_NAMES.join(", "));
            std::process::exit(1);
        }
    };

    let mut scene = description.scene;
    let spp = spp_override.unwrap_or(description.samples_per_pixel);
    let max_depth = max_depth_override.unwrap_or(description.max_depth);
    let integrator = Box::new(PathIntegrator::new(max_depth, spp));

    let renderer: SimpleRenderer = SimpleRenderer::new(integrator, 0, seed);
    let image = renderer.render(&mut scene);

    if output_path.to_ascii_lowercase().ends_with(".png") {
        png_utils::write_png_to_file(&image, output_path);
    } else {
        exr_utils::write_exr_to_file(&image, output_path);
    }
}
