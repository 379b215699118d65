use crate::texture::Texture;
use image::{DynamicImage, GenericImageView, ImageResult, Pixel};
use nalgebra::{Point3, Vector2, Vector3};
use std::path::Path;

pub struct ImageTexture {
    image: DynamicImage,
}

impl ImageTexture {
    pub fn new(image: DynamicImage) -> Self {
        ImageTexture { image }
    }
    pub fn open<P: AsRef<Path>>(path: P) -> ImageResult<Self> {
        Ok(Self::new(image::open(path)?))
    }
}

impl Texture for ImageTexture {
    fn value(&self, uv: &Vector2<f32>, _p: &Point3<f32>) -> Vector3<f32> {
        let (width, height) = self.image.dimensions();
        let u = uv[0].clamp(0.0, 1.0);
        // Image rows grow downward.
        let v = 1.0 - uv[1].clamp(0.0, 1.0);
        let i = ((u * width as f32) as u32).min(width - 1);
        let j = ((v * height as f32) as u32).min(height - 1);
        let rgb = self.image.get_pixel(i, j).to_rgb();
        Vector3::new(rgb[0] as f32, rgb[1] as f32, rgb[2] as f32) / 255.0
    }
}
