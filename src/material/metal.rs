use crate::hittable::HitRecord;
use crate::material::{reflect, Material, ScatterRecord};
use crate::random::random_in_unit_sphere;
use crate::ray::Ray;
use nalgebra::Vector3;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Metal {
    albedo: Vector3<f32>,
    fuzz: f32,
}

impl Metal {
    pub fn new(albedo: Vector3<f32>, fuzz: f32) -> Self {
        Metal { albedo, fuzz }
    }
}

impl<R: Rng> Material<R> for Metal {
    fn scatter(
        &self,
        ray_in: &Ray,
        hit_record: &HitRecord<R>,
        rng: &mut R,
    ) -> Option<ScatterRecord> {
        let reflected = reflect(ray_in.direction().as_ref(), &hit_record.normal);
        let direction = reflected + self.fuzz * random_in_unit_sphere(rng);
        if direction.dot(&hit_record.normal) > 0.0 {
            Some(ScatterRecord {
                attenuation: self.albedo,
                scattered: Ray::new(hit_record.p, direction, ray_in.time()),
            })
        } else {
            // Fuzz pushed the reflection under the surface; absorb it.
            None
        }
    }
}
