use nalgebra::{Vector2, Vector3};
use rand::Rng;

pub fn random_in_unit_sphere<R: Rng>(rng: &mut R) -> Vector3<f32> {
    loop {
        let p = 2.0 * Vector3::new(rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>())
            - Vector3::repeat(1.0);
        if p.norm_squared() < 1.0 {
            return p;
        }
    }
}

pub fn random_in_unit_disk<R: Rng>(rng: &mut R) -> Vector2<f32> {
    loop {
        let p = 2.0 * Vector2::new(rng.gen::<f32>(), rng.gen::<f32>()) - Vector2::repeat(1.0);
        if p.norm_squared() < 1.0 {
            return p;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn unit_sphere_samples_stay_inside() {
        let mut rng = Pcg64::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(random_in_unit_sphere(&mut rng).norm_squared() < 1.0);
        }
    }

    #[test]
    fn unit_disk_samples_stay_inside() {
        let mut rng = Pcg64::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(random_in_unit_disk(&mut rng).norm_squared() < 1.0);
        }
    }
}
