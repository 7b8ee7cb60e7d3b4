// Copyright @yucwang 2026

use super::constants::Float;
use super::spectrum::RGBSpectrum;

use std::ops;
use std::vec::Vec;

#[derive(Debug, Clone)]
pub struct Bitmap {
    data: Vec<RGBSpectrum>,
    height: usize,
    width: usize,
}

impl ops::Index<(usize, usize)> for Bitmap {
    type Output = RGBSpectrum;

    fn index(&self, index: (usize, usize)) -> &RGBSpectrum {
        &self.data[index.0 + self.width * index.1]
    }
}

impl ops::IndexMut<(usize, usize)> for Bitmap {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut RGBSpectrum {
        &mut self.data[index.0 + self.width * index.1]
    }
}

impl Bitmap {
    pub fn new(width: usize, height: usize) -> Self {
        Self { data: vec![RGBSpectrum::default(); width * height],
               width,
               height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn raw_copy(&self) -> Vec<(Float, Float, Float)> {
        self.data
            .iter()
            .map(|c| (c[0], c[1], c[2]))
            .collect()
    }
}

/* Test for Bitmap */
