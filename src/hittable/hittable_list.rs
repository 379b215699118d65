use crate::bvh::aabb::AABB;
use crate::hittable::{Bounded, BoxedHittable, HitRecord, Hittable};
use crate::ray::Ray;
use rand::Rng;

pub struct HittableList<R: Rng> {
    objects: Vec<BoxedHittable<R>>,
}

impl<R: Rng> HittableList<R> {
    pub fn new() -> Self {
        HittableList { objects: vec![] }
    }
    pub fn add(&mut self, hittable: BoxedHittable<R>) {
        self.objects.push(hittable);
    }
    pub fn len(&self) -> usize {
        self.objects.len()
    }
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl<R: Rng> Default for HittableList<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Bounded for HittableList<R> {
    fn bounding_box(&self, time0: f32, time1: f32) -> Option<AABB> {
        self.objects
            .iter()
            .map(|object| object.bounding_box(time0, time1))
            .reduce(|x, y| Some(x?.join(&y?)))
            .flatten()
    }
}

impl<R: Rng> Hittable<R> for HittableList<R> {
    fn hit(&self, ray: &Ray, t_min: f32, t_max: f32, rng: &mut R) -> Option<HitRecord<R>> {
        let mut hit_record = None;
        let mut closest_so_far = t_max;
        for object in self.objects.iter() {
            if let Some(record) = object.hit(ray, t_min, closest_so_far, rng) {
                closest_so_far = record.t;
                hit_record = Some(record);
            }
        }
        hit_record
    }
}
