use crate::texture::Texture;
use nalgebra::{Point3, Vector2, Vector3};

#[derive(Debug, Clone)]
pub struct SolidColor {
    color: Vector3<f32>,
}

impl SolidColor {
    pub fn new(color: Vector3<f32>) -> Self {
        SolidColor { color }
    }
}

impl Texture for SolidColor {
    fn value(&self, _uv: &Vector2<f32>, _p: &Point3<f32>) -> Vector3<f32> {
        self.color
    }
}
