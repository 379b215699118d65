use crate::ray::Ray;
use nalgebra::{Point3, Vector3};

#[derive(Debug, Clone, Copy)]
pub struct AABB {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
}

impl AABB {
    pub fn with_bounds(min: Point3<f32>, max: Point3<f32>) -> Self {
        Self { min, max }
    }
    pub fn empty() -> Self {
        Self {
            min: Point3::from(Vector3::from_element(f32::INFINITY)),
            max: Point3::from(Vector3::from_element(f32::NEG_INFINITY)),
        }
    }
    pub fn join(&self, other: &Self) -> Self {
        Self {
            min: Point3::from(self.min.coords.inf(&other.min.coords)),
            max: Point3::from(self.max.coords.sup(&other.max.coords)),
        }
    }
    pub fn grow(&self, point: &Point3<f32>) -> Self {
        Self {
            min: Point3::from(self.min.coords.inf(&point.coords)),
            max: Point3::from(self.max.coords.sup(&point.coords)),
        }
    }
    pub fn hit(&self, ray: &Ray, mut t_min: f32, mut t_max: f32) -> bool {
        for axis in 0..3 {
            let direction = ray.direction()[axis];
            if direction == 0.0 {
                // A ray parallel to this slab imposes no constraint on the interval.
                continue;
            }
            let inv_d = 1.0 / direction;
            let mut t0 = (self.min[axis] - ray.origin()[axis]) * inv_d;
            let mut t1 = (self.max[axis] - ray.origin()[axis]) * inv_d;
            if inv_d < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_max <= t_min {
                return false;
            }
        }
        true
    }
}
