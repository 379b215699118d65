pub mod dielectric;
pub mod diffuse_light;
pub mod isotropic;
pub mod lambertian;
pub mod metal;

use crate::hittable::HitRecord;
use crate::ray::Ray;
use auto_impl::auto_impl;
use nalgebra::{Point3, Vector2, Vector3};
use rand::Rng;
use std::sync::Arc;

pub struct ScatterRecord {
    pub attenuation: Vector3<f32>,
    pub scattered: Ray,
}

#[auto_impl(&, Box, Arc)]
pub trait Material<R: Rng> {
    fn scatter(
        &self,
        _ray_in: &Ray,
        _hit_record: &HitRecord<R>,
        _rng: &mut R,
    ) -> Option<ScatterRecord> {
        None
    }
    fn emitted(&self, _uv: &Vector2<f32>, _p: &Point3<f32>) -> Vector3<f32> {
        Vector3::zeros()
    }
}

pub type BoxedMaterial<R> = Arc<dyn Material<R> + Send + Sync>;

pub fn reflect(v: &Vector3<f32>, n: &Vector3<f32>) -> Vector3<f32> {
    v - 2.0 * v.dot(n) * n
}

pub fn refract(v: &Vector3<f32>, n: &Vector3<f32>, ni_over_nt: f32) -> Option<Vector3<f32>> {
    let uv = v.normalize();
    let dt = uv.dot(n);
    let discriminant = 1.0 - ni_over_nt * ni_over_nt * (1.0 - dt * dt);
    if discriminant > 0.0 {
        Some(ni_over_nt * (uv - n * dt) - n * discriminant.sqrt())
    } else {
        None
    }
}
