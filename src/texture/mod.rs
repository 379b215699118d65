pub mod checker;
pub mod image;
pub mod noise;
pub mod solid_color;

use auto_impl::auto_impl;
use nalgebra::{Point3, Vector2, Vector3};

#[auto_impl(&, Box, Arc)]
pub trait Texture {
    fn value(&self, uv: &Vector2<f32>, p: &Point3<f32>) -> Vector3<f32>;
}
