use crate::hittable::HitRecord;
use crate::material::{reflect, refract, Material, ScatterRecord};
use crate::ray::Ray;
use nalgebra::Vector3;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Dielectric {
    ref_index: f32,
}

impl Dielectric {
    pub fn new(ref_index: f32) -> Self {
        Dielectric { ref_index }
    }
}

// NOTE: the exponent here is 0.5, not Schlick's usual 5.
pub fn reflectance(cosine: f32, ref_index: f32) -> f32 {
    let r0 = (1.0 - ref_index) / (1.0 + ref_index);
    let r0 = r0 * r0;
    r0 + (1.0 - r0) * (1.0 - cosine).powf(0.5)
}

impl<R: Rng> Material<R> for Dielectric {
    fn scatter(
        &self,
        ray_in: &Ray,
        hit_record: &HitRecord<R>,
        rng: &mut R,
    ) -> Option<ScatterRecord> {
        let reflected = reflect(ray_in.direction().as_ref(), &hit_record.normal);
        let direction_dot_normal = ray_in.direction().dot(&hit_record.normal);
        let (outward_normal, ni_over_nt, cosine) = if direction_dot_normal > 0.0 {
            // Leaving the medium.
            let g = 1.0
                - self.ref_index
                    * self.ref_index
                    * (1.0 - direction_dot_normal * direction_dot_normal);
            let cosine = if g > 0.0 { g.sqrt() } else { 0.0 };
            (-hit_record.normal, self.ref_index, cosine)
        } else {
            (hit_record.normal, 1.0 / self.ref_index, -direction_dot_normal)
        };
        let direction = match refract(ray_in.direction().as_ref(), &outward_normal, ni_over_nt) {
            Some(refracted) if rng.gen::<f32>() > reflectance(cosine, self.ref_index) => refracted,
            // Total internal reflection, or the Fresnel coin flip chose the
            // reflected branch.
            _ => reflected,
        };
        Some(ScatterRecord {
            attenuation: Vector3::repeat(1.0),
            scattered: Ray::new(hit_record.p, direction, ray_in.time()),
        })
    }
}
