use crate::material::Material;
use crate::texture::Texture;
use nalgebra::{Point3, Vector2, Vector3};
use rand::Rng;

#[derive(Debug, Clone)]
pub struct DiffuseLight<T> {
    emit: T,
}

impl<T> DiffuseLight<T> {
    pub fn new(emit: T) -> Self {
        DiffuseLight { emit }
    }
}

impl<T: Texture, R: Rng> Material<R> for DiffuseLight<T> {
    fn emitted(&self, uv: &Vector2<f32>, p: &Point3<f32>) -> Vector3<f32> {
        self.emit.value(uv, p)
    }
}
