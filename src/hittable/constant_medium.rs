use crate::bvh::aabb::AABB;
use crate::hittable::{Bounded, HitRecord, Hittable};
use crate::material::isotropic::Isotropic;
use crate::material::BoxedMaterial;
use crate::ray::Ray;
use crate::texture::Texture;
use crate::EPSILON;
use nalgebra::{Vector2, Vector3};
use rand::Rng;
use std::sync::Arc;

pub struct ConstantMedium<O, R: Rng> {
    boundary: O,
    neg_inv_density: f32,
    phase_function: BoxedMaterial<R>,
}

impl<O, R: Rng> ConstantMedium<O, R> {
    pub fn new<T>(boundary: O, density: f32, phase_texture: T) -> Self
    where
        T: Texture + Send + Sync + 'static,
    {
        ConstantMedium {
            boundary,
            neg_inv_density: -1.0 / density,
            phase_function: Arc::new(Isotropic::new(phase_texture)),
        }
    }
}

impl<O: Bounded, R: Rng> Bounded for ConstantMedium<O, R> {
    fn bounding_box(&self, time0: f32, time1: f32) -> Option<AABB> {
        self.boundary.bounding_box(time0, time1)
    }
}

impl<O: Hittable<R>, R: Rng> Hittable<R> for ConstantMedium<O, R> {
    fn hit(&self, ray: &Ray, t_min: f32, t_max: f32, rng: &mut R) -> Option<HitRecord<R>> {
        let mut entry = self
            .boundary
            .hit(ray, f32::NEG_INFINITY, f32::INFINITY, rng)?;
        let mut exit = self
            .boundary
            .hit(ray, entry.t + EPSILON, f32::INFINITY, rng)?;
        entry.t = entry.t.max(t_min);
        exit.t = exit.t.min(t_max);
        if entry.t < 0.0 {
            // The origin is already past the boundary.
            return None;
        }
        let distance_inside_boundary = exit.t - entry.t;
        let hit_distance = self.neg_inv_density * rng.gen::<f32>().ln();
        if hit_distance >= distance_inside_boundary {
            // Transmitted rays pass through unattenuated.
            return None;
        }
        let t = entry.t + hit_distance;
        Some(HitRecord {
            t,
            p: ray.at(t),
            // Placeholder; isotropic scattering never reads it.
            normal: Vector3::new(0.0, 1.0, 0.0),
            uv: Vector2::zeros(),
            material: self.phase_function.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hittable::sphere::Sphere;
    use crate::material::lambertian::Lambertian;
    use crate::texture::solid_color::SolidColor;
    use nalgebra::Point3;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    fn fog_over_unit_diameter(density: f32) -> ConstantMedium<Sphere<Pcg64>, Pcg64> {
        let boundary = Sphere::new(
            Point3::new(0.0, 0.0, -2.0),
            0.5,
            Arc::new(Lambertian::new(SolidColor::new(Vector3::repeat(1.0)))),
        );
        ConstantMedium::new(boundary, density, SolidColor::new(Vector3::repeat(1.0)))
    }

    #[test]
    fn scatter_rate_follows_the_exponential_law() {
        // Interior path length through the center is 1, so the expected
        // scatter rate is 1 - exp(-density).
        let density = 2.0;
        let medium = fog_over_unit_diameter(density);
        let ray = Ray::new(Point3::origin(), Vector3::new(0.0, 0.0, -1.0), 0.0);
        let mut rng = Pcg64::seed_from_u64(42);
        let trials = 20_000;
        let mut scattered = 0;
        for _ in 0..trials {
            if medium.hit(&ray, 0.001, f32::INFINITY, &mut rng).is_some() {
                scattered += 1;
            }
        }
        let rate = scattered as f32 / trials as f32;
        let expected = 1.0 - (-density).exp();
        assert!(
            (rate - expected).abs() < 0.02,
            "rate {} expected {}",
            rate,
            expected
        );
    }

    #[test]
    fn zero_density_never_scatters() {
        let medium = fog_over_unit_diameter(0.0);
        let ray = Ray::new(Point3::origin(), Vector3::new(0.0, 0.0, -1.0), 0.0);
        let mut rng = Pcg64::seed_from_u64(7);
        for _ in 0..1_000 {
            assert!(medium.hit(&ray, 0.001, f32::INFINITY, &mut rng).is_none());
        }
    }

    #[test]
    fn scatter_point_lies_inside_the_boundary() {
        let medium = fog_over_unit_diameter(50.0);
        let ray = Ray::new(Point3::origin(), Vector3::new(0.0, 0.0, -1.0), 0.0);
        let mut rng = Pcg64::seed_from_u64(3);
        let record = medium.hit(&ray, 0.001, f32::INFINITY, &mut rng).unwrap();
        assert!(record.t > 1.5 && record.t < 2.5);
        assert!((record.p - Point3::new(0.0, 0.0, -2.0)).norm() <= 0.5 + 1e-4);
    }

    #[test]
    fn origin_past_the_boundary_misses() {
        let medium = fog_over_unit_diameter(50.0);
        let ray = Ray::new(Point3::new(0.0, 0.0, -4.0), Vector3::new(0.0, 0.0, -1.0), 0.0);
        let mut rng = Pcg64::seed_from_u64(3);
        assert!(medium.hit(&ray, 0.001, f32::INFINITY, &mut rng).is_none());
    }
}
