// Copyright @yucwang 2026

use crate::math::bitmap::Bitmap;

use image::RgbImage;

// Write the bitmap as an 8-bit PNG. Values go through gamma 2 (square
// root) and are clamped to [0, 0.999] before quantization.
pub fn write_png_to_file(bitmap: &Bitmap, file_path: &str) {
    log::info!("Starting writing png image: {}.", file_path);

    let width = bitmap.width();
    let height = bitmap.height();
    let mut image = RgbImage::new(width as u32, height as u32);

    for y in 0..height {
        for x in 0..width {
            let color = bitmap[(x, y)];
            let mut channels = [0u8; 3];
            for idx in 0..3 {
                let v = color[idx].max(0.0).sqrt().clamp(0.0, 0.999);
                channels[idx] = (256.0 * v) as u8;
            }
            image.put_pixel(x as u32, y as u32, image::Rgb(channels));
        }
    }

    match image.save(file_path) {
        Ok(()) => log::info!("PNG written to: {}.", file_path),
        Err(e) => log::error!("PNG written error: {}.", e),
    }
}
