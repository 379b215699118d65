use crate::hittable::HitRecord;
use crate::material::{Material, ScatterRecord};
use crate::random::random_in_unit_sphere;
use crate::ray::Ray;
use crate::texture::Texture;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Isotropic<T> {
    albedo: T,
}

impl<T> Isotropic<T> {
    pub fn new(albedo: T) -> Self {
        Isotropic { albedo }
    }
}

impl<T: Texture, R: Rng> Material<R> for Isotropic<T> {
    fn scatter(
        &self,
        ray_in: &Ray,
        hit_record: &HitRecord<R>,
        rng: &mut R,
    ) -> Option<ScatterRecord> {
        Some(ScatterRecord {
            attenuation: self.albedo.value(&hit_record.uv, &hit_record.p),
            scattered: Ray::new(hit_record.p, random_in_unit_sphere(rng), ray_in.time()),
        })
    }
}
