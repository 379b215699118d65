use crate::random::random_in_unit_sphere;
use crate::texture::Texture;
use nalgebra::{Point3, Vector2, Vector3};
use rand::Rng;

const POINT_COUNT: usize = 256;

#[derive(Debug, Clone)]
pub struct Perlin {
    rand_vec: Vec<Vector3<f32>>,
    perm_x: Vec<usize>,
    perm_y: Vec<usize>,
    perm_z: Vec<usize>,
}

impl Perlin {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let rand_vec = (0..POINT_COUNT)
            .map(|_| random_in_unit_sphere(rng).normalize())
            .collect();
        Self {
            rand_vec,
            perm_x: Perlin::generate_perm(rng),
            perm_y: Perlin::generate_perm(rng),
            perm_z: Perlin::generate_perm(rng),
        }
    }

    fn generate_perm<R: Rng>(rng: &mut R) -> Vec<usize> {
        let mut perm: Vec<usize> = (0..POINT_COUNT).collect();
        for i in (1..POINT_COUNT).rev() {
            let target = rng.gen_range(0..=i);
            perm.swap(target, i);
        }
        perm
    }

    pub fn noise(&self, p: &Point3<f32>) -> f32 {
        let u = p[0] - p[0].floor();
        let v = p[1] - p[1].floor();
        let w = p[2] - p[2].floor();
        let i = p[0].floor() as isize;
        let j = p[1].floor() as isize;
        let k = p[2].floor() as isize;
        let mut c = [[[Vector3::zeros(); 2]; 2]; 2];
        for (di, plane) in c.iter_mut().enumerate() {
            for (dj, row) in plane.iter_mut().enumerate() {
                for (dk, cell) in row.iter_mut().enumerate() {
                    let index = self.perm_x[((i + di as isize) & 255) as usize]
                        ^ self.perm_y[((j + dj as isize) & 255) as usize]
                        ^ self.perm_z[((k + dk as isize) & 255) as usize];
                    *cell = self.rand_vec[index];
                }
            }
        }
        perlin_interp(&c, u, v, w)
    }

    pub fn turb(&self, p: &Point3<f32>, depth: u32) -> f32 {
        let mut accum = 0.0;
        let mut temp_p = *p;
        let mut weight = 1.0;
        for _ in 0..depth {
            accum += weight * self.noise(&temp_p);
            weight *= 0.5;
            temp_p *= 2.0;
        }
        accum.abs()
    }
}

fn perlin_interp(c: &[[[Vector3<f32>; 2]; 2]; 2], u: f32, v: f32, w: f32) -> f32 {
    let uu = u * u * (3.0 - 2.0 * u);
    let vv = v * v * (3.0 - 2.0 * v);
    let ww = w * w * (3.0 - 2.0 * w);
    let mut accum = 0.0;
    for (i, plane) in c.iter().enumerate() {
        for (j, row) in plane.iter().enumerate() {
            for (k, cell) in row.iter().enumerate() {
                let (i, j, k) = (i as f32, j as f32, k as f32);
                let weight = Vector3::new(u - i, v - j, w - k);
                accum += (i * uu + (1.0 - i) * (1.0 - uu))
                    * (j * vv + (1.0 - j) * (1.0 - vv))
                    * (k * ww + (1.0 - k) * (1.0 - ww))
                    * cell.dot(&weight);
            }
        }
    }
    accum
}

pub struct NoiseTexture {
    perlin: Perlin,
    scale: f32,
}

impl NoiseTexture {
    pub fn new<R: Rng>(scale: f32, rng: &mut R) -> Self {
        NoiseTexture {
            perlin: Perlin::new(rng),
            scale,
        }
    }
}

impl Texture for NoiseTexture {
    fn value(&self, _uv: &Vector2<f32>, p: &Point3<f32>) -> Vector3<f32> {
        let scaled = p * self.scale;
        let noise = 0.5 * (1.0 + (self.scale * p[2] + 5.0 * self.perlin.turb(&scaled, 7)).sin());
        noise * Vector3::repeat(1.0)
    }
}
