use crate::bvh::aabb::AABB;
use crate::hittable::aa_rect::{XYRect, XZRect, YZRect};
use crate::hittable::hittable_list::HittableList;
use crate::hittable::transform::FlipNormals;
use crate::hittable::{Bounded, HitRecord, Hittable};
use crate::material::BoxedMaterial;
use crate::ray::Ray;
use nalgebra::Point3;
use rand::Rng;
use std::sync::Arc;

pub struct Cuboid<R: Rng> {
    p_min: Point3<f32>,
    p_max: Point3<f32>,
    faces: HittableList<R>,
}

impl<R: Rng + 'static> Cuboid<R> {
    pub fn new(p_min: Point3<f32>, p_max: Point3<f32>, material: BoxedMaterial<R>) -> Self {
        let mut faces = HittableList::new();
        faces.add(Arc::new(XYRect::new(
            p_min[0],
            p_max[0],
            p_min[1],
            p_max[1],
            p_max[2],
            material.clone(),
        )));
        faces.add(Arc::new(FlipNormals::new(XYRect::new(
            p_min[0],
            p_max[0],
            p_min[1],
            p_max[1],
            p_min[2],
            material.clone(),
        ))));
        faces.add(Arc::new(XZRect::new(
            p_min[0],
            p_max[0],
            p_min[2],
            p_max[2],
            p_max[1],
            material.clone(),
        )));
        faces.add(Arc::new(FlipNormals::new(XZRect::new(
            p_min[0],
            p_max[0],
            p_min[2],
            p_max[2],
            p_min[1],
            material.clone(),
        ))));
        faces.add(Arc::new(YZRect::new(
            p_min[1],
            p_max[1],
            p_min[2],
            p_max[2],
            p_max[0],
            material.clone(),
        )));
        faces.add(Arc::new(FlipNormals::new(YZRect::new(
            p_min[1],
            p_max[1],
            p_min[2],
            p_max[2],
            p_min[0],
            material,
        ))));
        Cuboid {
            p_min,
            p_max,
            faces,
        }
    }
}

impl<R: Rng> Bounded for Cuboid<R> {
    fn bounding_box(&self, _time0: f32, _time1: f32) -> Option<AABB> {
        // The corners themselves, not the union of the padded faces.
        Some(AABB::with_bounds(self.p_min, self.p_max))
    }
}

impl<R: Rng> Hittable<R> for Cuboid<R> {
    fn hit(&self, ray: &Ray, t_min: f32, t_max: f32, rng: &mut R) -> Option<HitRecord<R>> {
        self.faces.hit(ray, t_min, t_max, rng)
    }
}
