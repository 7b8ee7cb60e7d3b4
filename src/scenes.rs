// Copyright @yucwang 2026

use crate::core::bvh::BvhNode;
use crate::core::hittable::{Hittable, HittableList};
use crate::core::material::Material;
use crate::core::rng::LcgRng;
use crate::core::scene::Scene;
use crate::core::texture::Texture;
use crate::materials::dielectric::Dielectric;
use crate::materials::diffuse_light::DiffuseLight;
use crate::materials::lambertian::Lambertian;
use crate::materials::metal::Metal;
use crate::math::constants::{Float, Vector3f, degrees_to_radians};
use crate::math::spectrum::RGBSpectrum;
use crate::media::constant_medium::ConstantMedium;
use crate::sensors::perspective::PerspectiveCamera;
use crate::shapes::aarect::{XyRect, XzRect, YzRect};
use crate::shapes::cuboid::Cuboid;
use crate::shapes::moving_sphere::MovingSphere;
use crate::shapes::sphere::Sphere;
use crate::shapes::transform::{RotateY, Translate};
use crate::textures::checker::CheckerTexture;
use crate::textures::image::ImageTexture;
use crate::textures::noise::NoiseTexture;
use std::sync::Arc;

pub const SCENE_NAMES: [&str; 8] = [
    "bouncing-spheres",
    "two-spheres",
    "perlin-spheres",
    "earth",
    "simple-light",
    "cornell-box",
    "cornell-smoke",
    "final",
];

pub struct SceneDescription {
    pub scene: Scene,
    pub samples_per_pixel: u32,
    pub max_depth: u32,
}

struct CameraSetup {
    look_from: Vector3f,
    look_at: Vector3f,
    vfov_degrees: Float,
    aperture: Float,
    aspect: Float,
}

fn sky() -> RGBSpectrum {
    RGBSpectrum::new(0.7, 0.8, 1.0)
}

// Builds one of the demo scenes by name. The generator drives every random
// placement, so the same seed reproduces the same world.
pub fn build(name: &str, width: usize, rng: &mut LcgRng) -> Option<SceneDescription> {
    match name {
        "bouncing-spheres" => Some(bouncing_spheres(width, rng)),
        "two-spheres" => Some(two_spheres(width, rng)),
        "perlin-spheres" => Some(perlin_spheres(width, rng)),
        "earth" => Some(earth(width, rng)),
        "simple-light" => Some(simple_light(width, rng)),
        "cornell-box" => Some(cornell_box(width, rng)),
        "cornell-smoke" => Some(cornell_smoke(width, rng)),
        "final" => Some(final_scene(width, rng)),
        _ => None,
    }
}

fn random_color(rng: &mut LcgRng, min: Float, max: Float) -> RGBSpectrum {
    RGBSpectrum::new(rng.next_f32_in(min, max),
                     rng.next_f32_in(min, max),
                     rng.next_f32_in(min, max))
}

fn finish(world: HittableList,
          background: RGBSpectrum,
          camera: CameraSetup,
          width: usize,
          samples_per_pixel: u32,
          rng: &mut LcgRng) -> SceneDescription {
    let height = ((width as Float) / camera.aspect) as usize;
    let height = height.max(1);

    let root = Arc::new(Hittable::Bvh(
        BvhNode::new(world.into_objects(), 0.0, 1.0, rng)));
    let mut scene = Scene::new(root, background);
    scene.add_sensor(Box::new(PerspectiveCamera::new(
        camera.look_from,
        camera.look_at,
        Vector3f::new(0.0, 1.0, 0.0),
        degrees_to_radians(camera.vfov_degrees),
        (width as Float) / (height as Float),
        camera.aperture,
        10.0,
        0.0,
        1.0,
        width,
        height)));

    SceneDescription { scene, samples_per_pixel, max_depth: 50 }
}

fn bouncing_spheres(width: usize, rng: &mut LcgRng) -> SceneDescription {
    let mut world = HittableList::new();

    let checker = Arc::new(Texture::Checker(CheckerTexture::from_colors(
        RGBSpectrum::new(0.2, 0.3, 0.1),
        RGBSpectrum::new(0.9, 0.9, 0.9))));
    let ground = Arc::new(Material::Lambertian(Lambertian::new(checker)));
    world.add(Arc::new(Hittable::Sphere(Sphere::new(
        Vector3f::new(0.0, -1000.0, 0.0), 1000.0, ground))));

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = rng.next_f32();
            let center = Vector3f::new(a as Float + 0.9 * rng.next_f32(),
                                       0.2,
                                       b as Float + 0.9 * rng.next_f32());

            if (center - Vector3f::new(4.0, 0.2, 0.0)).norm() <= 0.9 {
                continue;
            }

            if choose_mat < 0.8 {
                let albedo = random_color(rng, 0.0, 1.0) * random_color(rng, 0.0, 1.0);
                let material = Arc::new(Material::Lambertian(
                    Lambertian::from_color(albedo)));
                let center2 = center + Vector3f::new(0.0, rng.next_f32_in(0.0, 0.5), 0.0);
                world.add(Arc::new(Hittable::MovingSphere(MovingSphere::new(
                    center, center2, 0.0, 1.0, 0.2, material))));
            } else if choose_mat < 0.95 {
                let albedo = random_color(rng, 0.5, 1.0);
                let fuzz = rng.next_f32_in(0.0, 0.5);
                let material = Arc::new(Material::Metal(Metal::new(albedo, fuzz)));
                world.add(Arc::new(Hittable::Sphere(Sphere::new(center, 0.2, material))));
            } else {
                let material = Arc::new(Material::Dielectric(Dielectric::new(1.5)));
                world.add(Arc::new(Hittable::Sphere(Sphere::new(center, 0.2, material))));
            }
        }
    }

    let glass = Arc::new(Material::Dielectric(Dielectric::new(1.5)));
    world.add(Arc::new(Hittable::Sphere(Sphere::new(
        Vector3f::new(0.0, 1.0, 0.0), 1.0, glass))));

    let brown = Arc::new(Material::Lambertian(Lambertian::from_color(
        RGBSpectrum::new(0.4, 0.2, 0.1))));
    world.add(Arc::new(Hittable::Sphere(Sphere::new(
        Vector3f::new(-4.0, 1.0, 0.0), 1.0, brown))));

    let steel = Arc::new(Material::Metal(Metal::new(
        RGBSpectrum::new(0.7, 0.6, 0.5), 0.0)));
    world.add(Arc::new(Hittable::Sphere(Sphere::new(
        Vector3f::new(4.0, 1.0, 0.0), 1.0, steel))));

    finish(world, sky(), CameraSetup {
        look_from: Vector3f::new(13.0, 2.0, 3.0),
        look_at: Vector3f::zeros(),
        vfov_degrees: 20.0,
        aperture: 0.1,
        aspect: 16.0 / 9.0,
    }, width, 10, rng)
}

fn two_spheres(width: usize, rng: &mut LcgRng) -> SceneDescription {
    let mut world = HittableList::new();

    let checker = Arc::new(Texture::Checker(CheckerTexture::from_colors(
        RGBSpectrum::new(0.2, 0.3, 0.1),
        RGBSpectrum::new(0.9, 0.9, 0.9))));
    let material = Arc::new(Material::Lambertian(Lambertian::new(checker)));

    world.add(Arc::new(Hittable::Sphere(Sphere::new(
        Vector3f::new(0.0, -10.0, 0.0), 10.0, material.clone()))));
    world.add(Arc::new(Hittable::Sphere(Sphere::new(
        Vector3f::new(0.0, 10.0, 0.0), 10.0, material))));

    finish(world, sky(), CameraSetup {
        look_from: Vector3f::new(13.0, 2.0, 3.0),
        look_at: Vector3f::zeros(),
        vfov_degrees: 20.0,
        aperture: 0.0,
        aspect: 16.0 / 9.0,
    }, width, 10, rng)
}

fn perlin_spheres(width: usize, rng: &mut LcgRng) -> SceneDescription {
    let mut world = HittableList::new();

    let pertext = Arc::new(Texture::Noise(NoiseTexture::new(4.0, rng)));
    let material = Arc::new(Material::Lambertian(Lambertian::new(pertext)));

    world.add(Arc::new(Hittable::Sphere(Sphere::new(
        Vector3f::new(0.0, -1000.0, 0.0), 1000.0, material.clone()))));
    world.add(Arc::new(Hittable::Sphere(Sphere::new(
        Vector3f::new(0.0, 2.0, 0.0), 2.0, material))));

    finish(world, sky(), CameraSetup {
        look_from: Vector3f::new(13.0, 2.0, 3.0),
        look_at: Vector3f::zeros(),
        vfov_degrees: 20.0,
        aperture: 0.0,
        aspect: 16.0 / 9.0,
    }, width, 10, rng)
}

fn earth(width: usize, rng: &mut LcgRng) -> SceneDescription {
    let mut world = HittableList::new();

    let earth_texture = Arc::new(Texture::Image(ImageTexture::from_file("earthmap.jpg")));
    let surface = Arc::new(Material::Lambertian(Lambertian::new(earth_texture)));
    world.add(Arc::new(Hittable::Sphere(Sphere::new(
        Vector3f::zeros(), 2.0, surface))));

    finish(world, sky(), CameraSetup {
        look_from: Vector3f::new(13.0, 2.0, 3.0),
        look_at: Vector3f::zeros(),
        vfov_degrees: 20.0,
        aperture: 0.0,
        aspect: 16.0 / 9.0,
    }, width, 10, rng)
}

fn simple_light(width: usize, rng: &mut LcgRng) -> SceneDescription {
    let mut world = HittableList::new();

    let pertext = Arc::new(Texture::Noise(NoiseTexture::new(4.0, rng)));
    let material = Arc::new(Material::Lambertian(Lambertian::new(pertext)));
    world.add(Arc::new(Hittable::Sphere(Sphere::new(
        Vector3f::new(0.0, -1000.0, 0.0), 1000.0, material.clone()))));
    world.add(Arc::new(Hittable::Sphere(Sphere::new(
        Vector3f::new(0.0, 2.0, 0.0), 2.0, material))));

    // Emission above one keeps the panel bright enough to light the scene.
    let light = Arc::new(Material::DiffuseLight(DiffuseLight::from_color(
        RGBSpectrum::new(4.0, 4.0, 4.0))));
    world.add(Arc::new(Hittable::XyRect(XyRect::new(
        3.0, 5.0, 1.0, 3.0, -2.0, light))));

    finish(world, RGBSpectrum::black(), CameraSetup {
        look_from: Vector3f::new(26.0, 3.0, 6.0),
        look_at: Vector3f::new(0.0, 2.0, 0.0),
        vfov_degrees: 20.0,
        aperture: 0.0,
        aspect: 16.0 / 9.0,
    }, width, 400, rng)
}

fn cornell_walls(world: &mut HittableList, light_emission: RGBSpectrum,
                 light_extent: (Float, Float, Float, Float)) {
    let red = Arc::new(Material::Lambertian(Lambertian::from_color(
        RGBSpectrum::new(0.65, 0.05, 0.05))));
    let white = Arc::new(Material::Lambertian(Lambertian::from_color(
        RGBSpectrum::new(0.73, 0.73, 0.73))));
    let green = Arc::new(Material::Lambertian(Lambertian::from_color(
        RGBSpectrum::new(0.12, 0.45, 0.15))));
    let light = Arc::new(Material::DiffuseLight(DiffuseLight::from_color(
        light_emission)));

    world.add(Arc::new(Hittable::YzRect(YzRect::new(
        0.0, 555.0, 0.0, 555.0, 555.0, green))));
    world.add(Arc::new(Hittable::YzRect(YzRect::new(
        0.0, 555.0, 0.0, 555.0, 0.0, red))));
    let (x0, x1, z0, z1) = light_extent;
    world.add(Arc::new(Hittable::XzRect(XzRect::new(
        x0, x1, z0, z1, 554.0, light))));
    world.add(Arc::new(Hittable::XzRect(XzRect::new(
        0.0, 555.0, 0.0, 555.0, 0.0, white.clone()))));
    world.add(Arc::new(Hittable::XzRect(XzRect::new(
        0.0, 555.0, 0.0, 555.0, 555.0, white.clone()))));
    world.add(Arc::new(Hittable::XyRect(XyRect::new(
        0.0, 555.0, 0.0, 555.0, 555.0, white))));
}

fn cornell_boxes() -> (Arc<Hittable>, Arc<Hittable>) {
    let white = Arc::new(Material::Lambertian(Lambertian::from_color(
        RGBSpectrum::new(0.73, 0.73, 0.73))));

    let tall = Arc::new(Hittable::Cuboid(Cuboid::new(
        Vector3f::zeros(), Vector3f::new(165.0, 330.0, 165.0), white.clone())));
    let tall = Arc::new(Hittable::RotateY(RotateY::new(tall, 15.0)));
    let tall = Arc::new(Hittable::Translate(Translate::new(
        tall, Vector3f::new(265.0, 0.0, 295.0))));

    let short = Arc::new(Hittable::Cuboid(Cuboid::new(
        Vector3f::zeros(), Vector3f::new(165.0, 165.0, 165.0), white)));
    let short = Arc::new(Hittable::RotateY(RotateY::new(short, -18.0)));
    let short = Arc::new(Hittable::Translate(Translate::new(
        short, Vector3f::new(130.0, 0.0, 65.0))));

    (tall, short)
}

fn cornell_camera() -> CameraSetup {
    CameraSetup {
        look_from: Vector3f::new(278.0, 278.0, -800.0),
        look_at: Vector3f::new(278.0, 278.0, 0.0),
        vfov_degrees: 40.0,
        aperture: 0.0,
        aspect: 1.0,
    }
}

fn cornell_box(width: usize, rng: &mut LcgRng) -> SceneDescription {
    let mut world = HittableList::new();
    cornell_walls(&mut world,
                  RGBSpectrum::new(15.0, 15.0, 15.0),
                  (213.0, 343.0, 227.0, 332.0));

    let (tall, short) = cornell_boxes();
    world.add(tall);
    world.add(short);

    finish(world, RGBSpectrum::black(), cornell_camera(), width, 200, rng)
}

fn cornell_smoke(width: usize, rng: &mut LcgRng) -> SceneDescription {
    let mut world = HittableList::new();
    cornell_walls(&mut world,
                  RGBSpectrum::new(7.0, 7.0, 7.0),
                  (113.0, 443.0, 127.0, 432.0));

    let (tall, short) = cornell_boxes();
    world.add(Arc::new(Hittable::ConstantMedium(ConstantMedium::from_color(
        tall, 0.01, RGBSpectrum::black()))));
    world.add(Arc::new(Hittable::ConstantMedium(ConstantMedium::from_color(
        short, 0.01, RGBSpectrum::white()))));

    finish(world, RGBSpectrum::black(), cornell_camera(), width, 200, rng)
}

fn final_scene(width: usize, rng: &mut LcgRng) -> SceneDescription {
    let mut world = HittableList::new();

    // Ground made of a jittered grid of boxes, gathered under its own
    // subtree so the top level stays shallow.
    let ground = Arc::new(Material::Lambertian(Lambertian::from_color(
        RGBSpectrum::new(0.48, 0.83, 0.53))));
    let boxes_per_side = 20;
    let mut ground_boxes: Vec<Arc<Hittable>> = Vec::new();
    for i in 0..boxes_per_side {
        for j in 0..boxes_per_side {
            let w = 100.0;
            let x0 = -1000.0 + (i as Float) * w;
            let z0 = -1000.0 + (j as Float) * w;
            let x1 = x0 + w;
            let y1 = rng.next_f32_in(1.0, 101.0);
            let z1 = z0 + w;
            ground_boxes.push(Arc::new(Hittable::Cuboid(Cuboid::new(
                Vector3f::new(x0, 0.0, z0),
                Vector3f::new(x1, y1, z1),
                ground.clone()))));
        }
    }
    world.add(Arc::new(Hittable::Bvh(
        BvhNode::new(ground_boxes, 0.0, 1.0, rng))));

    let light = Arc::new(Material::DiffuseLight(DiffuseLight::from_color(
        RGBSpectrum::new(7.0, 7.0, 7.0))));
    world.add(Arc::new(Hittable::XzRect(XzRect::new(
        123.0, 423.0, 147.0, 412.0, 554.0, light))));

    let center1 = Vector3f::new(400.0, 400.0, 200.0);
    let center2 = center1 + Vector3f::new(30.0, 0.0, 0.0);
    let orange = Arc::new(Material::Lambertian(Lambertian::from_color(
        RGBSpectrum::new(0.7, 0.3, 0.1))));
    world.add(Arc::new(Hittable::MovingSphere(MovingSphere::new(
        center1, center2, 0.0, 1.0, 50.0, orange))));

    world.add(Arc::new(Hittable::Sphere(Sphere::new(
        Vector3f::new(260.0, 150.0, 45.0), 50.0,
        Arc::new(Material::Dielectric(Dielectric::new(1.5)))))));
    world.add(Arc::new(Hittable::Sphere(Sphere::new(
        Vector3f::new(0.0, 150.0, 145.0), 50.0,
        Arc::new(Material::Metal(Metal::new(
            RGBSpectrum::new(0.8, 0.8, 0.9), 1.0)))))));

    // A glass ball filled with blue fog; the surface and the interior are
    // two separate objects over the same sphere.
    let boundary = Arc::new(Hittable::Sphere(Sphere::new(
        Vector3f::new(360.0, 150.0, 145.0), 70.0,
        Arc::new(Material::Dielectric(Dielectric::new(1.5))))));
    world.add(boundary.clone());
    world.add(Arc::new(Hittable::ConstantMedium(ConstantMedium::from_color(
        boundary, 0.2, RGBSpectrum::new(0.2, 0.4, 0.9)))));

    let mist_boundary = Arc::new(Hittable::Sphere(Sphere::new(
        Vector3f::zeros(), 5000.0,
        Arc::new(Material::Dielectric(Dielectric::new(1.5))))));
    world.add(Arc::new(Hittable::ConstantMedium(ConstantMedium::from_color(
        mist_boundary, 0.0001, RGBSpectrum::white()))));

    let earth_texture = Arc::new(Texture::Image(ImageTexture::from_file("earthmap.jpg")));
    world.add(Arc::new(Hittable::Sphere(Sphere::new(
        Vector3f::new(400.0, 200.0, 400.0), 100.0,
        Arc::new(Material::Lambertian(Lambertian::new(earth_texture)))))));

    let pertext = Arc::new(Texture::Noise(NoiseTexture::new(0.1, rng)));
    world.add(Arc::new(Hittable::Sphere(Sphere::new(
        Vector3f::new(220.0, 280.0, 300.0), 80.0,
        Arc::new(Material::Lambertian(Lambertian::new(pertext)))))));

    let white = Arc::new(Material::Lambertian(Lambertian::from_color(
        RGBSpectrum::new(0.73, 0.73, 0.73))));
    let mut cluster: Vec<Arc<Hittable>> = Vec::new();
    for _ in 0..1000 {
        let center = Vector3f::new(rng.next_f32_in(0.0, 165.0),
                                   rng.next_f32_in(0.0, 165.0),
                                   rng.next_f32_in(0.0, 165.0));
        cluster.push(Arc::new(Hittable::Sphere(Sphere::new(
            center, 10.0, white.clone()))));
    }
    let cluster = Arc::new(Hittable::Bvh(BvhNode::new(cluster, 0.0, 1.0, rng)));
    let cluster = Arc::new(Hittable::RotateY(RotateY::new(cluster, 15.0)));
    world.add(Arc::new(Hittable::Translate(Translate::new(
        cluster, Vector3f::new(-100.0, 270.0, 395.0)))));

    finish(world, RGBSpectrum::black(), CameraSetup {
        look_from: Vector3f::new(478.0, 278.0, -600.0),
        look_at: Vector3f::new(278.0, 278.0, 0.0),
        vfov_degrees: 40.0,
        aperture: 0.0,
        aspect: 1.0,
    }, width, 100, rng)
}

/* Tests for the scene catalog */
