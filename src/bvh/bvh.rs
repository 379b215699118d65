use crate::bvh::aabb::AABB;
use crate::hittable::{Bounded, BoxedHittable, HitRecord, Hittable};
use crate::ray::Ray;
use log::debug;
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BvhError {
    #[error("cannot build a bvh over an empty hittable list")]
    Empty,
    #[error("hittable {index} has no bounding box; unbounded geometry is unsupported")]
    UnboundedHittable { index: usize },
}

#[derive(Debug, Clone, Copy)]
enum BvhChild {
    Hittable(usize),
    Node(usize),
}

struct BvhNode {
    aabb: AABB,
    children: [BvhChild; 2],
}

pub struct Bvh<R: Rng> {
    nodes: Vec<BvhNode>,
    objects: Vec<BoxedHittable<R>>,
}

impl<R: Rng> Bvh<R> {
    pub fn build<B: Rng>(
        objects: Vec<BoxedHittable<R>>,
        time0: f32,
        time1: f32,
        rng: &mut B,
    ) -> Result<Self, BvhError> {
        if objects.is_empty() {
            return Err(BvhError::Empty);
        }
        let mut aabbs = Vec::with_capacity(objects.len());
        for (index, object) in objects.iter().enumerate() {
            let aabb = object
                .bounding_box(time0, time1)
                .ok_or(BvhError::UnboundedHittable { index })?;
            aabbs.push(aabb);
        }
        let mut indices: Vec<usize> = (0..objects.len()).collect();
        let mut nodes = Vec::with_capacity(2 * objects.len());
        Self::build_node(&aabbs, &mut indices, &mut nodes, rng);
        debug!(
            "built bvh with {} nodes over {} hittables",
            nodes.len(),
            objects.len()
        );
        Ok(Self { nodes, objects })
    }

    fn build_node<B: Rng>(
        aabbs: &[AABB],
        indices: &mut [usize],
        nodes: &mut Vec<BvhNode>,
        rng: &mut B,
    ) -> usize {
        let node_index = nodes.len();
        nodes.push(BvhNode {
            aabb: AABB::empty(),
            children: [BvhChild::Hittable(0); 2],
        });
        let (aabb, children) = match indices.len() {
            0 => unreachable!("build_node never receives an empty range"),
            // A lone hittable fills both slots.
            1 => (aabbs[indices[0]], [BvhChild::Hittable(indices[0]); 2]),
            2 => (
                aabbs[indices[0]].join(&aabbs[indices[1]]),
                [
                    BvhChild::Hittable(indices[0]),
                    BvhChild::Hittable(indices[1]),
                ],
            ),
            len => {
                let axis = rng.gen_range(0..3usize);
                indices
                    .sort_unstable_by(|a, b| aabbs[*a].min[axis].total_cmp(&aabbs[*b].min[axis]));
                let (left, right) = indices.split_at_mut(len / 2);
                let left_index = Self::build_node(aabbs, left, nodes, rng);
                let right_index = Self::build_node(aabbs, right, nodes, rng);
                (
                    nodes[left_index].aabb.join(&nodes[right_index].aabb),
                    [BvhChild::Node(left_index), BvhChild::Node(right_index)],
                )
            }
        };
        nodes[node_index] = BvhNode { aabb, children };
        node_index
    }

    fn hit_node(
        &self,
        index: usize,
        ray: &Ray,
        t_min: f32,
        t_max: f32,
        rng: &mut R,
    ) -> Option<HitRecord<R>> {
        let node = &self.nodes[index];
        if !node.aabb.hit(ray, t_min, t_max) {
            return None;
        }
        let left = self.hit_child(node.children[0], ray, t_min, t_max, rng);
        let right = self.hit_child(node.children[1], ray, t_min, t_max, rng);
        match (left, right) {
            (Some(left), Some(right)) => Some(if left.t < right.t { left } else { right }),
            (left, right) => left.or(right),
        }
    }

    fn hit_child(
        &self,
        child: BvhChild,
        ray: &Ray,
        t_min: f32,
        t_max: f32,
        rng: &mut R,
    ) -> Option<HitRecord<R>> {
        match child {
            BvhChild::Hittable(index) => self.objects[index].hit(ray, t_min, t_max, rng),
            BvhChild::Node(index) => self.hit_node(index, ray, t_min, t_max, rng),
        }
    }
}

impl<R: Rng> Bounded for Bvh<R> {
    fn bounding_box(&self, _time0: f32, _time1: f32) -> Option<AABB> {
        Some(self.nodes[0].aabb)
    }
}

impl<R: Rng> Hittable<R> for Bvh<R> {
    fn hit(&self, ray: &Ray, t_min: f32, t_max: f32, rng: &mut R) -> Option<HitRecord<R>> {
        self.hit_node(0, ray, t_min, t_max, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hittable::aa_rect::XZRect;
    use crate::hittable::cuboid::Cuboid;
    use crate::hittable::hittable_list::HittableList;
    use crate::hittable::sphere::Sphere;
    use crate::material::lambertian::Lambertian;
    use crate::material::BoxedMaterial;
    use crate::texture::solid_color::SolidColor;
    use nalgebra::{Point3, Vector3};
    use rand::SeedableRng;
    use rand_pcg::Pcg64;
    use std::sync::Arc;

    fn matte(gray: f32) -> BoxedMaterial<Pcg64> {
        Arc::new(Lambertian::new(SolidColor::new(Vector3::repeat(gray))))
    }

    fn sphere_grid(count: usize) -> Vec<BoxedHittable<Pcg64>> {
        (0..count)
            .map(|i| {
                let center = Point3::new(i as f32 * 2.0, (i % 3) as f32, -(i as f32));
                Arc::new(Sphere::new(center, 0.7, matte(0.5))) as BoxedHittable<Pcg64>
            })
            .collect()
    }

    fn mixed_objects() -> Vec<BoxedHittable<Pcg64>> {
        vec![
            Arc::new(Sphere::new(Point3::new(0.0, 0.0, -3.0), 1.0, matte(0.2))),
            Arc::new(XZRect::new(-2.0, 2.0, -2.0, 2.0, -1.5, matte(0.4))),
            Arc::new(Cuboid::new(
                Point3::new(2.0, -1.0, -6.0),
                Point3::new(4.0, 1.0, -4.0),
                matte(0.6),
            )),
            Arc::new(Sphere::new(Point3::new(-3.0, 0.5, -5.0), 1.5, matte(0.8))),
        ]
    }

    fn probe_rays() -> Vec<Ray> {
        vec![
            Ray::new(Point3::new(0.0, 0.0, 1.0), Vector3::new(0.0, 0.0, -1.0), 0.0),
            Ray::new(Point3::new(-4.0, 3.0, 2.0), Vector3::new(0.7, -0.5, -1.0), 0.0),
            Ray::new(Point3::new(6.0, -0.5, -8.0), Vector3::new(-1.0, 0.1, 0.8), 0.0),
        ]
    }

    fn assert_matches_linear_scan(objects: Vec<BoxedHittable<Pcg64>>, seed: u64) {
        let mut list = HittableList::new();
        for object in objects.iter() {
            list.add(object.clone());
        }
        let mut build_rng = Pcg64::seed_from_u64(seed);
        let bvh = Bvh::build(objects, 0.0, 1.0, &mut build_rng).unwrap();
        for ray in probe_rays() {
            let mut rng = Pcg64::seed_from_u64(0);
            let from_bvh = bvh.hit(&ray, 0.001, f32::INFINITY, &mut rng);
            let from_list = list.hit(&ray, 0.001, f32::INFINITY, &mut rng);
            match (from_bvh, from_list) {
                (None, None) => {}
                (Some(a), Some(b)) => {
                    assert_eq!(a.t, b.t);
                    assert_eq!(a.p, b.p);
                    assert_eq!(a.normal, b.normal);
                    assert!(Arc::ptr_eq(&a.material, &b.material));
                }
                (a, b) => panic!(
                    "bvh and linear scan disagree: {:?} vs {:?}",
                    a.map(|r| r.t),
                    b.map(|r| r.t)
                ),
            }
        }
    }

    #[test]
    fn matches_linear_scan_on_sphere_grid() {
        assert_matches_linear_scan(sphere_grid(12), 1);
    }

    #[test]
    fn matches_linear_scan_on_mixed_objects() {
        assert_matches_linear_scan(mixed_objects(), 2);
    }

    #[test]
    fn matches_linear_scan_on_two_spheres() {
        let objects: Vec<BoxedHittable<Pcg64>> = vec![
            Arc::new(Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, matte(0.3))),
            Arc::new(Sphere::new(Point3::new(0.0, -100.5, -1.0), 100.0, matte(0.9))),
        ];
        assert_matches_linear_scan(objects, 3);
    }

    #[test]
    fn single_hittable_fills_both_slots() {
        let objects: Vec<BoxedHittable<Pcg64>> =
            vec![Arc::new(Sphere::new(Point3::new(0.0, 0.0, -2.0), 0.5, matte(0.5)))];
        let mut rng = Pcg64::seed_from_u64(0);
        let bvh = Bvh::build(objects, 0.0, 1.0, &mut rng).unwrap();
        let ray = Ray::new(Point3::origin(), Vector3::new(0.0, 0.0, -1.0), 0.0);
        let record = bvh.hit(&ray, 0.001, f32::INFINITY, &mut rng).unwrap();
        assert!((record.t - 1.5).abs() < 1e-6);
    }

    #[test]
    fn empty_input_is_rejected() {
        let mut rng = Pcg64::seed_from_u64(0);
        assert!(matches!(
            Bvh::<Pcg64>::build(vec![], 0.0, 1.0, &mut rng),
            Err(BvhError::Empty)
        ));
    }

    #[test]
    fn unbounded_input_is_rejected() {
        let objects: Vec<BoxedHittable<Pcg64>> = vec![
            Arc::new(Sphere::new(Point3::origin(), 1.0, matte(0.5))),
            // An empty list has no bounding box.
            Arc::new(HittableList::new()),
        ];
        let mut rng = Pcg64::seed_from_u64(0);
        assert!(matches!(
            Bvh::build(objects, 0.0, 1.0, &mut rng),
            Err(BvhError::UnboundedHittable { index: 1 })
        ));
    }
}
