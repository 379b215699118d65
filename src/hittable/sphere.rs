use crate::bvh::aabb::AABB;
use crate::hittable::{Bounded, HitRecord, Hittable};
use crate::material::BoxedMaterial;
use crate::ray::Ray;
use nalgebra::{Point3, Vector2, Vector3};
use rand::Rng;
use std::f32::consts::PI;

pub struct Sphere<R: Rng> {
    center: Point3<f32>,
    radius: f32,
    material: BoxedMaterial<R>,
}

impl<R: Rng> Sphere<R> {
    pub fn new(center: Point3<f32>, radius: f32, material: BoxedMaterial<R>) -> Self {
        Sphere {
            center,
            radius,
            material,
        }
    }
}

pub struct MovingSphere<R: Rng> {
    center0: Point3<f32>,
    center1: Point3<f32>,
    time0: f32,
    time1: f32,
    radius: f32,
    material: BoxedMaterial<R>,
}

impl<R: Rng> MovingSphere<R> {
    pub fn new(
        center0: Point3<f32>,
        time0: f32,
        center1: Point3<f32>,
        time1: f32,
        radius: f32,
        material: BoxedMaterial<R>,
    ) -> Self {
        MovingSphere {
            center0,
            center1,
            time0,
            time1,
            radius,
            material,
        }
    }
    pub fn center(&self, time: f32) -> Point3<f32> {
        self.center0
            + ((time - self.time0) / (self.time1 - self.time0)) * (self.center1 - self.center0)
    }
}

pub fn sphere_uv(normal: &Vector3<f32>) -> Vector2<f32> {
    let phi = normal[2].atan2(normal[0]);
    let theta = normal[1].asin();
    Vector2::new(
        1.0 - (phi + PI) / (2.0 * PI),
        (theta + PI / 2.0) / PI,
    )
}

fn hit_sphere<R: Rng>(
    center: Point3<f32>,
    radius: f32,
    material: &BoxedMaterial<R>,
    ray: &Ray,
    t_min: f32,
    t_max: f32,
) -> Option<HitRecord<R>> {
    let oc = ray.origin() - center;
    let half_b = oc.dot(ray.direction());
    let c = oc.norm_squared() - radius * radius;
    let discriminant = half_b * half_b - c;
    if discriminant <= 0.0 {
        return None;
    }
    let sqrt_d = discriminant.sqrt();
    let near = -half_b - sqrt_d;
    let t = if near > t_min && near < t_max {
        near
    } else {
        -half_b + sqrt_d
    };
    if t <= t_min || t >= t_max {
        return None;
    }
    let p = ray.at(t);
    let normal = (p - center) / radius;
    Some(HitRecord {
        t,
        p,
        normal,
        uv: sphere_uv(&normal),
        material: material.clone(),
    })
}

impl<R: Rng> Bounded for Sphere<R> {
    fn bounding_box(&self, _time0: f32, _time1: f32) -> Option<AABB> {
        let radius = Vector3::from_element(self.radius.abs());
        Some(AABB::with_bounds(
            self.center - radius,
            self.center + radius,
        ))
    }
}

impl<R: Rng> Hittable<R> for Sphere<R> {
    fn hit(&self, ray: &Ray, t_min: f32, t_max: f32, _rng: &mut R) -> Option<HitRecord<R>> {
        hit_sphere(self.center, self.radius, &self.material, ray, t_min, t_max)
    }
}

impl<R: Rng> Bounded for MovingSphere<R> {
    fn bounding_box(&self, time0: f32, time1: f32) -> Option<AABB> {
        let radius = Vector3::from_element(self.radius.abs());
        let center0 = self.center(time0);
        let center1 = self.center(time1);
        let start = AABB::with_bounds(center0 - radius, center0 + radius);
        let end = AABB::with_bounds(center1 - radius, center1 + radius);
        Some(start.join(&end))
    }
}

impl<R: Rng> Hittable<R> for MovingSphere<R> {
    fn hit(&self, ray: &Ray, t_min: f32, t_max: f32, _rng: &mut R) -> Option<HitRecord<R>> {
        hit_sphere(
            self.center(ray.time()),
            self.radius,
            &self.material,
            ray,
            t_min,
            t_max,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::lambertian::Lambertian;
    use crate::texture::solid_color::SolidColor;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;
    use std::sync::Arc;

    fn matte() -> BoxedMaterial<Pcg64> {
        Arc::new(Lambertian::new(SolidColor::new(Vector3::repeat(0.5))))
    }

    #[test]
    fn head_on_hit() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, matte());
        let ray = Ray::new(Point3::origin(), Vector3::new(0.0, 0.0, -1.0), 0.0);
        let mut rng = Pcg64::seed_from_u64(0);
        let record = sphere.hit(&ray, 0.001, f32::INFINITY, &mut rng).unwrap();
        assert!((record.t - 0.5).abs() < 1e-6);
        assert!((record.normal - Vector3::new(0.0, 0.0, 1.0)).norm() < 1e-6);
        assert!((record.p - Point3::new(0.0, 0.0, -0.5)).norm() < 1e-6);
    }

    #[test]
    fn normals_are_unit_and_outward() {
        let center = Point3::new(1.5, -2.0, 3.0);
        let sphere = Sphere::new(center, 2.5, matte());
        let mut rng = Pcg64::seed_from_u64(3);
        for _ in 0..100 {
            let direction = crate::random::random_in_unit_sphere(&mut rng);
            let ray = Ray::new(Point3::new(-8.0, 4.0, -9.0), (center - Point3::new(-8.0, 4.0, -9.0)) + direction, 0.0);
            if let Some(record) = sphere.hit(&ray, 0.001, f32::INFINITY, &mut rng) {
                assert!((record.normal.norm() - 1.0).abs() < 1e-5);
                assert!(record.normal.dot(&(record.p - center)) > 0.0);
            }
        }
    }

    #[test]
    fn origin_inside_takes_far_root() {
        let sphere = Sphere::new(Point3::origin(), 1.0, matte());
        let ray = Ray::new(Point3::origin(), Vector3::new(0.0, 0.0, -1.0), 0.0);
        let mut rng = Pcg64::seed_from_u64(0);
        let record = sphere.hit(&ray, 0.001, f32::INFINITY, &mut rng).unwrap();
        assert!((record.t - 1.0).abs() < 1e-6);
    }

    #[test]
    fn miss_reports_none() {
        let sphere = Sphere::new(Point3::new(0.0, 2.0, -1.0), 0.5, matte());
        let ray = Ray::new(Point3::origin(), Vector3::new(0.0, 0.0, -1.0), 0.0);
        let mut rng = Pcg64::seed_from_u64(0);
        assert!(sphere.hit(&ray, 0.001, f32::INFINITY, &mut rng).is_none());
    }

    #[test]
    fn moving_center_interpolates() {
        let sphere = MovingSphere::<Pcg64>::new(
            Point3::new(0.0, 0.0, -1.0),
            0.0,
            Point3::new(0.0, 1.0, -1.0),
            1.0,
            0.5,
            matte(),
        );
        assert_eq!(sphere.center(0.0), Point3::new(0.0, 0.0, -1.0));
        assert_eq!(sphere.center(0.5), Point3::new(0.0, 0.5, -1.0));
        assert_eq!(sphere.center(1.0), Point3::new(0.0, 1.0, -1.0));
    }

    #[test]
    fn moving_bounds_cover_the_sweep() {
        let sphere = MovingSphere::<Pcg64>::new(
            Point3::new(0.0, 0.0, 0.0),
            0.0,
            Point3::new(2.0, 0.0, 0.0),
            1.0,
            0.5,
            matte(),
        );
        let aabb = sphere.bounding_box(0.0, 1.0).unwrap();
        assert_eq!(aabb.min, Point3::new(-0.5, -0.5, -0.5));
        assert_eq!(aabb.max, Point3::new(2.5, 0.5, 0.5));
    }

    #[test]
    fn uv_covers_the_poles_and_seam() {
        let top = sphere_uv(&Vector3::new(0.0, 1.0, 0.0));
        assert!((top[1] - 1.0).abs() < 1e-6);
        let bottom = sphere_uv(&Vector3::new(0.0, -1.0, 0.0));
        assert!(bottom[1].abs() < 1e-6);
        let front = sphere_uv(&Vector3::new(-1.0, 0.0, 0.0));
        assert!((front[0] - 1.0).abs() < 1e-6 || front[0].abs() < 1e-6);
        assert!((front[1] - 0.5).abs() < 1e-6);
    }
}
