use crate::bvh::aabb::AABB;
use crate::hittable::{Bounded, HitRecord, Hittable};
use crate::material::BoxedMaterial;
use crate::ray::Ray;
use crate::EPSILON;
use nalgebra::{Point3, Vector2, Vector3};
use rand::Rng;

// One plane-intersection algorithm, three orientations: $ia/$ib index the
// in-plane axes, $ic the axis held constant at k.
macro_rules! rect_shape {
    ($ty:ident, $a0:ident $a1:ident $b0:ident $b1:ident, $ia:tt $ib:tt $ic:tt) => {
        pub struct $ty<R: Rng> {
            $a0: f32,
            $a1: f32,
            $b0: f32,
            $b1: f32,
            k: f32,
            material: BoxedMaterial<R>,
        }

        impl<R: Rng> $ty<R> {
            pub fn new(
                $a0: f32,
                $a1: f32,
                $b0: f32,
                $b1: f32,
                k: f32,
                material: BoxedMaterial<R>,
            ) -> Self {
                Self {
                    $a0,
                    $a1,
                    $b0,
                    $b1,
                    k,
                    material,
                }
            }
        }

        impl<R: Rng> Bounded for $ty<R> {
            fn bounding_box(&self, _time0: f32, _time1: f32) -> Option<AABB> {
                // Pad the constant axis so the box never degenerates.
                let mut min = Point3::origin();
                min[$ia] = self.$a0;
                min[$ib] = self.$b0;
                min[$ic] = self.k - EPSILON;
                let mut max = Point3::origin();
                max[$ia] = self.$a1;
                max[$ib] = self.$b1;
                max[$ic] = self.k + EPSILON;
                Some(AABB::with_bounds(min, max))
            }
        }

        impl<R: Rng> Hittable<R> for $ty<R> {
            fn hit(
                &self,
                ray: &Ray,
                t_min: f32,
                t_max: f32,
                _rng: &mut R,
            ) -> Option<HitRecord<R>> {
                if ray.direction()[$ic] == 0.0 {
                    // Parallel to the plane.
                    return None;
                }
                let t = (self.k - ray.origin()[$ic]) / ray.direction()[$ic];
                if t < t_min || t > t_max {
                    return None;
                }
                let a = ray.origin()[$ia] + t * ray.direction()[$ia];
                if a < self.$a0 || a > self.$a1 {
                    return None;
                }
                let b = ray.origin()[$ib] + t * ray.direction()[$ib];
                if b < self.$b0 || b > self.$b1 {
                    return None;
                }
                let mut normal = Vector3::zeros();
                normal[$ic] = 1.0;
                Some(HitRecord {
                    t,
                    p: ray.at(t),
                    normal,
                    uv: Vector2::new(
                        (a - self.$a0) / (self.$a1 - self.$a0),
                        (b - self.$b0) / (self.$b1 - self.$b0),
                    ),
                    material: self.material.clone(),
                })
            }
        }
    };
}

rect_shape!(XYRect, x0 x1 y0 y1, 0 1 2);
rect_shape!(XZRect, x0 x1 z0 z1, 0 2 1);
rect_shape!(YZRect, y0 y1 z0 z1, 1 2 0);
