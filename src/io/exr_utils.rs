/* Copyright 2020 @TwoCookingMice */

use crate::math::bitmap::Bitmap;

use exr::prelude::*;

// Write the linear radiance bitmap as an OpenEXR image.
pub fn write_exr_to_file(bitmap: &Bitmap, file_path: &str) {
    log::info!("Starting writing openexr images: {}.", file_path);

    let width = bitmap.width();
    let height = bitmap.height();
    let image = bitmap.raw_copy();

    let write_result = write_rgb_file(file_path, width, height, |x, y| {
        (
            image[y * width + x].0,
            image[y * width + x].1,
            image[y * width + x].2,
        )
    });
    match write_result {
        Ok(()) => log::info!("EXR written to: {}.", file_path),
        Err(e) => log::error!("EXR written error: {}.", e),
    }
}
