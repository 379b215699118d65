use crate::camera::Camera;
use crate::hittable::BoxedHittable;
use crate::image::Image;
use crate::ray::Ray;
use crate::scene::{Background, Scene};
use log::info;
use nalgebra::Vector3;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const T_MIN: f32 = 1e-3;
const DEFAULT_MAX_DEPTH: u32 = 50;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RendererParam {
    pub width: u32,
    pub height: u32,
    pub samples: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_depth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("negative radiance averaged at pixel ({x}, {y})")]
    NegativeRadiance { x: u32, y: u32 },
}

pub struct Renderer<R: Rng> {
    param: RendererParam,
    camera: Camera,
    world: BoxedHittable<R>,
    background: Background,
}

impl<R: Rng> Renderer<R> {
    pub fn new(param: RendererParam, scene: Scene<R>) -> Self {
        let default_aspect_ratio = param.width as f32 / param.height as f32;
        Self {
            camera: Camera::new(scene.camera, default_aspect_ratio),
            world: scene.world,
            background: scene.background,
            param,
        }
    }

    fn ray_color(&self, mut ray: Ray, rng: &mut R) -> Vector3<f32> {
        let max_depth = self.param.max_depth.unwrap_or(DEFAULT_MAX_DEPTH);
        let mut color = Vector3::zeros();
        let mut throughput = Vector3::repeat(1.0);
        let mut depth = 0;
        loop {
            let record = match self.world.hit(&ray, T_MIN, f32::INFINITY, rng) {
                Some(record) => record,
                None => {
                    color += throughput.component_mul(&self.background.sample(ray.direction()));
                    break;
                }
            };
            color += throughput.component_mul(&record.material.emitted(&record.uv, &record.p));
            if depth >= max_depth {
                // The truncated path keeps its own emission, nothing beyond.
                break;
            }
            match record.material.scatter(&ray, &record, rng) {
                Some(scatter) => {
                    throughput.component_mul_assign(&scatter.attenuation);
                    ray = scatter.scattered;
                    depth += 1;
                }
                None => break,
            }
        }
        color
    }

    fn pixel_color(&self, x: u32, y: u32, rng: &mut R) -> Vector3<f32> {
        let width = self.param.width as f32;
        let height = self.param.height as f32;
        let flipped_y = self.param.height - 1 - y;
        let mut color = Vector3::zeros();
        for _ in 0..self.param.samples {
            let u = (x as f32 + rng.gen::<f32>()) / width;
            let v = (flipped_y as f32 + rng.gen::<f32>()) / height;
            let ray = self.camera.get_ray(u, v, rng);
            color += self.ray_color(ray, rng);
        }
        color / self.param.samples as f32
    }

    pub fn render(&self) -> Result<Image, RenderError>
    where
        R: SeedableRng,
    {
        info!(
            "rendering {}x{} at {} samples per pixel",
            self.param.width, self.param.height, self.param.samples
        );
        let seed = self.param.seed.unwrap_or(0);
        let rows = (0..self.param.height)
            .into_par_iter()
            .map(|y| {
                // One private generator per row; nothing is shared.
                let mut rng = R::seed_from_u64(seed.wrapping_add(y as u64));
                (0..self.param.width)
                    .map(|x| tone_map(x, y, self.pixel_color(x, y, &mut rng)))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        let pixels = rows.into_iter().flatten().collect();
        Ok(Image::new(self.param.width, self.param.height, pixels))
    }
}

fn tone_map(x: u32, y: u32, color: Vector3<f32>) -> Result<[u8; 3], RenderError> {
    if color.min() < 0.0 {
        return Err(RenderError::NegativeRadiance { x, y });
    }
    let mut mapped = color.map(f32::sqrt);
    let max = mapped.max();
    if max > 1.0 {
        // Scale uniformly so hue survives clipping.
        mapped /= max;
    }
    Ok([
        (255.0 * mapped[0]) as u8,
        (255.0 * mapped[1]) as u8,
        (255.0 * mapped[2]) as u8,
    ])
}
