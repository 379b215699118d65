pub mod aa_rect;
pub mod constant_medium;
pub mod cuboid;
pub mod hittable_list;
pub mod sphere;
pub mod transform;

use crate::bvh::aabb::AABB;
use crate::material::BoxedMaterial;
use crate::ray::Ray;
use auto_impl::auto_impl;
use nalgebra::{Point3, Vector2, Vector3};
use rand::Rng;
use std::sync::Arc;

pub struct HitRecord<R: Rng> {
    pub t: f32,
    pub p: Point3<f32>,
    pub normal: Vector3<f32>,
    pub uv: Vector2<f32>,
    pub material: BoxedMaterial<R>,
}

#[auto_impl(&, Box, Arc)]
pub trait Bounded {
    fn bounding_box(&self, time0: f32, time1: f32) -> Option<AABB>;
}

#[auto_impl(&, Box, Arc)]
pub trait Hittable<R: Rng>: Bounded {
    fn hit(&self, ray: &Ray, t_min: f32, t_max: f32, rng: &mut R) -> Option<HitRecord<R>>;
}

pub type BoxedHittable<R> = Arc<dyn Hittable<R> + Send + Sync>;
