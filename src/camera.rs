use crate::random::random_in_unit_disk;
use crate::ray::Ray;
use nalgebra::{Point3, Unit, UnitVector3, Vector3};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraParam {
    pub look_from: Point3<f32>,
    pub look_at: Point3<f32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub up: Option<Vector3<f32>>,
    pub vfov: f32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub aspect_ratio: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub aperture: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub focus_dist: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub time0: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub time1: Option<f32>,
}

#[derive(Debug, Clone)]
pub struct Camera {
    origin: Point3<f32>,
    lower_left_corner: Point3<f32>,
    horizontal: Vector3<f32>,
    vertical: Vector3<f32>,
    u: UnitVector3<f32>,
    v: UnitVector3<f32>,
    lens_radius: f32,
    time0: f32,
    time1: f32,
}

impl Camera {
    pub fn new(param: CameraParam, default_aspect_ratio: f32) -> Self {
        let theta = param.vfov * PI / 180.0;
        let half_height = (theta / 2.0).tan();
        let aspect_ratio = param.aspect_ratio.unwrap_or(default_aspect_ratio);
        let half_width = aspect_ratio * half_height;

        let w = Unit::new_normalize(param.look_from - param.look_at);
        let up = param.up.unwrap_or_else(|| Vector3::new(0.0, 1.0, 0.0));
        let u = Unit::new_normalize(up.cross(&w));
        let v = Unit::new_normalize(w.cross(&u));

        let focus_dist = param
            .focus_dist
            .unwrap_or_else(|| (param.look_from - param.look_at).norm());
        let horizontal = u.scale(2.0 * half_width * focus_dist);
        let vertical = v.scale(2.0 * half_height * focus_dist);
        let lower_left_corner = param.look_from
            - u.scale(half_width * focus_dist)
            - v.scale(half_height * focus_dist)
            - w.scale(focus_dist);

        Self {
            origin: param.look_from,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            lens_radius: param.aperture.unwrap_or(0.0) / 2.0,
            time0: param.time0.unwrap_or(0.0),
            time1: param.time1.unwrap_or(0.0),
        }
    }

    pub fn get_ray<R: Rng>(&self, s: f32, t: f32, rng: &mut R) -> Ray {
        let rd = self.lens_radius * random_in_unit_disk(rng);
        let offset = self.u.scale(rd[0]) + self.v.scale(rd[1]);
        let origin = self.origin + offset;
        let time = self.time0 + (self.time1 - self.time0) * rng.gen::<f32>();
        Ray::new(
            origin,
            self.lower_left_corner + s * self.horizontal + t * self.vertical - origin,
            time,
        )
    }
}
