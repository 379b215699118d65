use crate::bvh::aabb::AABB;
use crate::hittable::{Bounded, HitRecord, Hittable};
use crate::ray::Ray;
use itertools::iproduct;
use nalgebra::{Point3, Vector3};
use rand::Rng;

pub struct FlipNormals<O> {
    object: O,
}

impl<O> FlipNormals<O> {
    pub fn new(object: O) -> Self {
        FlipNormals { object }
    }
}

impl<O: Bounded> Bounded for FlipNormals<O> {
    fn bounding_box(&self, time0: f32, time1: f32) -> Option<AABB> {
        self.object.bounding_box(time0, time1)
    }
}

impl<O: Hittable<R>, R: Rng> Hittable<R> for FlipNormals<O> {
    fn hit(&self, ray: &Ray, t_min: f32, t_max: f32, rng: &mut R) -> Option<HitRecord<R>> {
        let mut record = self.object.hit(ray, t_min, t_max, rng)?;
        record.normal = -record.normal;
        Some(record)
    }
}

pub struct Translate<O> {
    object: O,
    offset: Vector3<f32>,
}

impl<O> Translate<O> {
    pub fn new(object: O, offset: Vector3<f32>) -> Self {
        Translate { object, offset }
    }
}

impl<O: Bounded> Bounded for Translate<O> {
    fn bounding_box(&self, time0: f32, time1: f32) -> Option<AABB> {
        self.object
            .bounding_box(time0, time1)
            .map(|aabb| AABB::with_bounds(aabb.min + self.offset, aabb.max + self.offset))
    }
}

impl<O: Hittable<R>, R: Rng> Hittable<R> for Translate<O> {
    fn hit(&self, ray: &Ray, t_min: f32, t_max: f32, rng: &mut R) -> Option<HitRecord<R>> {
        let moved = Ray::new(
            *ray.origin() - self.offset,
            ray.direction().into_inner(),
            ray.time(),
        );
        let mut record = self.object.hit(&moved, t_min, t_max, rng)?;
        record.p += self.offset;
        Some(record)
    }
}

pub struct RotateY<O> {
    object: O,
    sin_theta: f32,
    cos_theta: f32,
    aabb: Option<AABB>,
}

impl<O: Bounded> RotateY<O> {
    pub fn new(object: O, angle: f32) -> Self {
        let radians = angle.to_radians();
        let sin_theta = radians.sin();
        let cos_theta = radians.cos();
        let mut rotated = Self {
            object,
            sin_theta,
            cos_theta,
            aabb: None,
        };
        let aabb = rotated.object.bounding_box(0.0, 1.0).map(|aabb| {
            iproduct!(0..2, 0..2, 0..2)
                .map(|(i, j, k)| {
                    let corner = Vector3::new(
                        if i == 0 { aabb.min[0] } else { aabb.max[0] },
                        if j == 0 { aabb.min[1] } else { aabb.max[1] },
                        if k == 0 { aabb.min[2] } else { aabb.max[2] },
                    );
                    Point3::from(rotated.to_world(corner))
                })
                .fold(AABB::empty(), |aabb, corner| aabb.grow(&corner))
        });
        rotated.aabb = aabb;
        rotated
    }

    fn to_object(&self, v: Vector3<f32>) -> Vector3<f32> {
        Vector3::new(
            self.cos_theta * v[0] - self.sin_theta * v[2],
            v[1],
            self.sin_theta * v[0] + self.cos_theta * v[2],
        )
    }

    fn to_world(&self, v: Vector3<f32>) -> Vector3<f32> {
        Vector3::new(
            self.cos_theta * v[0] + self.sin_theta * v[2],
            v[1],
            -self.sin_theta * v[0] + self.cos_theta * v[2],
        )
    }
}

impl<O: Bounded> Bounded for RotateY<O> {
    fn bounding_box(&self, _time0: f32, _time1: f32) -> Option<AABB> {
        self.aabb
    }
}

impl<O: Hittable<R>, R: Rng> Hittable<R> for RotateY<O> {
    fn hit(&self, ray: &Ray, t_min: f32, t_max: f32, rng: &mut R) -> Option<HitRecord<R>> {
        let rotated = Ray::new(
            Point3::from(self.to_object(ray.origin().coords)),
            self.to_object(ray.direction().into_inner()),
            ray.time(),
        );
        let mut record = self.object.hit(&rotated, t_min, t_max, rng)?;
        record.p = Point3::from(self.to_world(record.p.coords));
        record.normal = self.to_world(record.normal);
        Some(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hittable::sphere::Sphere;
    use crate::material::lambertian::Lambertian;
    use crate::material::BoxedMaterial;
    use crate::texture::solid_color::SolidColor;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;
    use std::sync::Arc;
    use test_case::test_case;

    fn matte() -> BoxedMaterial<Pcg64> {
        Arc::new(Lambertian::new(SolidColor::new(Vector3::repeat(0.5))))
    }

    fn unit_sphere_at_origin() -> Sphere<Pcg64> {
        Sphere::new(Point3::origin(), 1.0, matte())
    }

    #[test_case(0.0)]
    #[test_case(18.0)]
    #[test_case(90.0)]
    #[test_case(-15.0)]
    fn rotation_round_trip(angle: f32) {
        let rotate = RotateY::new(unit_sphere_at_origin(), angle);
        let v = Vector3::new(0.3, -1.2, 2.7);
        let round_trip = rotate.to_world(rotate.to_object(v));
        assert!((round_trip - v).norm() < 1e-5);
        let reverse = rotate.to_object(rotate.to_world(v));
        assert!((reverse - v).norm() < 1e-5);
    }

    #[test]
    fn flip_negates_normal() {
        let flipped = FlipNormals::new(unit_sphere_at_origin());
        let ray = Ray::new(Point3::new(0.0, 0.0, 3.0), Vector3::new(0.0, 0.0, -1.0), 0.0);
        let mut rng = Pcg64::seed_from_u64(0);
        let record = flipped.hit(&ray, 0.001, f32::INFINITY, &mut rng).unwrap();
        assert!((record.normal - Vector3::new(0.0, 0.0, -1.0)).norm() < 1e-6);
    }

    #[test]
    fn translate_shifts_hit_point_and_bounds() {
        let offset = Vector3::new(2.0, 0.0, 0.0);
        let translated = Translate::new(unit_sphere_at_origin(), offset);
        let ray = Ray::new(Point3::new(2.0, 0.0, 3.0), Vector3::new(0.0, 0.0, -1.0), 0.0);
        let mut rng = Pcg64::seed_from_u64(0);
        let record = translated.hit(&ray, 0.001, f32::INFINITY, &mut rng).unwrap();
        assert!((record.t - 2.0).abs() < 1e-6);
        assert!((record.p - Point3::new(2.0, 0.0, 1.0)).norm() < 1e-6);
        let aabb = translated.bounding_box(0.0, 1.0).unwrap();
        assert_eq!(aabb.min, Point3::new(1.0, -1.0, -1.0));
        assert_eq!(aabb.max, Point3::new(3.0, 1.0, 1.0));
    }

    #[test]
    fn quarter_turn_moves_the_x_axis() {
        let rotate = RotateY::new(unit_sphere_at_origin(), 90.0);
        let world = rotate.to_world(Vector3::new(1.0, 0.0, 0.0));
        assert!((world - Vector3::new(0.0, 0.0, -1.0)).norm() < 1e-6);
    }

    #[test]
    fn rotated_box_covers_the_diagonal() {
        let rect = crate::hittable::aa_rect::XZRect::<Pcg64>::new(-1.0, 1.0, -1.0, 1.0, 0.0, matte());
        let rotate = RotateY::new(rect, 45.0);
        let aabb = rotate.bounding_box(0.0, 1.0).unwrap();
        let half_diagonal = 2.0f32.sqrt();
        assert!((aabb.max[0] - half_diagonal).abs() < 1e-3);
        assert!((aabb.min[2] + half_diagonal).abs() < 1e-3);
    }
}
