use crate::hittable::HitRecord;
use crate::material::{Material, ScatterRecord};
use crate::random::random_in_unit_sphere;
use crate::ray::Ray;
use crate::texture::Texture;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Lambertian<T> {
    albedo: T,
}

impl<T> Lambertian<T> {
    pub fn new(albedo: T) -> Self {
        Lambertian { albedo }
    }
}

impl<T: Texture, R: Rng> Material<R> for Lambertian<T> {
    fn scatter(
        &self,
        ray_in: &Ray,
        hit_record: &HitRecord<R>,
        rng: &mut R,
    ) -> Option<ScatterRecord> {
        let target = hit_record.p + hit_record.normal + random_in_unit_sphere(rng);
        Some(ScatterRecord {
            attenuation: self.albedo.value(&hit_record.uv, &hit_record.p),
            scattered: Ray::new(hit_record.p, target - hit_record.p, ray_in.time()),
        })
    }
}
