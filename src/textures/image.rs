// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector2f};
use crate::math::spectrum::RGBSpectrum;
use image::io::Reader as ImageReader;
use log::warn;

const BYTES_PER_PIXEL: usize = 3;

// Nearest-texel image lookup. A load failure keeps the texture usable and
// renders as solid cyan so the broken asset is visible in the output.
pub struct ImageTexture {
    data: Option<ImageData>,
}

struct ImageData {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
}

impl ImageTexture {
    pub fn from_file(path: &str) -> Self {
        let data = match load_rgb8(path) {
            Ok(data) => Some(data),
            Err(e) => {
                warn!("failed to load texture {}: {}", path, e);
                None
            }
        };
        Self { data }
    }

    pub fn eval(&self, uv: Vector2f) -> RGBSpectrum {
        let data = match &self.data {
            Some(data) => data,
            None => return RGBSpectrum::new(0.0, 1.0, 1.0),
        };

        let u = uv.x.clamp(0.0, 1.0);
        // Image rows run top to bottom; uv space runs bottom to top.
        let v = 1.0 - uv.y.clamp(0.0, 1.0);

        let mut x = (u * data.width as Float) as usize;
        let mut y = (v * data.height as Float) as usize;
        if x >= data.width {
            x = data.width - 1;
        }
        if y >= data.height {
            y = data.height - 1;
        }

        let base = (y * data.width + x) * BYTES_PER_PIXEL;
        let scale = 1.0 / 255.0;
        RGBSpectrum::new(
            scale * data.pixels[base] as Float,
            scale * data.pixels[base + 1] as Float,
            scale * data.pixels[base + 2] as Float,
        )
    }
}

fn load_rgb8(path: &str) -> std::result::Result<ImageData, String> {
    let img = ImageReader::open(path)
        .map_err(|e| format!("failed to open {}: {}", path, e))?
        .decode()
        .map_err(|e| format!("failed to decode {}: {}", path, e))?
        .to_rgb8();

    let width = img.width() as usize;
    let height = img.height() as usize;
    if width == 0 || height == 0 {
        return Err(format!("image {} has zero extent", path));
    }

    Ok(ImageData {
        pixels: img.into_raw(),
        width,
        height,
    })
}

/* Tests for ImageTexture */

#[cfg(test)]
mod tests {
    use super::ImageTexture;
    use crate::math::constants::Vector2f;
    use crate::math::spectrum::RGBSpectrum;

    #[test]
    fn test_missing_file_evaluates_to_cyan() {
        let tex = ImageTexture::from_file("/nonexistent/texture.png");
        let c = tex.eval(Vector2f::new(0.5, 0.5));
        assert_eq!(c, RGBSpectrum::new(0.0, 1.0, 1.0));
    }

    #[test]
    fn test_uv_is_clamped() {
        let tex = ImageTexture::from_file("/nonexistent/texture.png");
        // Out-of-range coordinates must not panic, with or without data.
        let _ = tex.eval(Vector2f::new(-3.0, 7.5));
    }
}
