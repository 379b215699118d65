use crate::bvh::bvh::{Bvh, BvhError};
use crate::camera::CameraParam;
use crate::hittable::aa_rect::{XYRect, XZRect, YZRect};
use crate::hittable::constant_medium::ConstantMedium;
use crate::hittable::cuboid::Cuboid;
use crate::hittable::hittable_list::HittableList;
use crate::hittable::sphere::{MovingSphere, Sphere};
use crate::hittable::transform::{FlipNormals, RotateY, Translate};
use crate::hittable::BoxedHittable;
use crate::material::dielectric::Dielectric;
use crate::material::diffuse_light::DiffuseLight;
use crate::material::lambertian::Lambertian;
use crate::material::metal::Metal;
use crate::material::BoxedMaterial;
use crate::texture::checker::Checker;
use crate::texture::image::ImageTexture;
use crate::texture::noise::NoiseTexture;
use crate::texture::solid_color::SolidColor;
use itertools::iproduct;
use nalgebra::{Point3, UnitVector3, Vector3};
use rand::Rng;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Background {
    pub horizon: Vector3<f32>,
    pub sky: Vector3<f32>,
}

impl Background {
    pub fn sky_gradient() -> Self {
        Background {
            horizon: Vector3::repeat(1.0),
            sky: Vector3::new(0.5, 0.7, 1.0),
        }
    }
    pub fn black() -> Self {
        Background {
            horizon: Vector3::zeros(),
            sky: Vector3::zeros(),
        }
    }
    pub fn sample(&self, direction: &UnitVector3<f32>) -> Vector3<f32> {
        let t = 0.5 * (direction[1] + 1.0);
        self.horizon.lerp(&self.sky, t)
    }
}

pub struct Scene<R: Rng> {
    pub world: BoxedHittable<R>,
    pub camera: CameraParam,
    pub background: Background,
}

fn solid<T: Into<Vector3<f32>>>(color: T) -> SolidColor {
    SolidColor::new(color.into())
}

fn camera_at(
    look_from: Point3<f32>,
    look_at: Point3<f32>,
    vfov: f32,
    aperture: f32,
    focus_dist: f32,
) -> CameraParam {
    CameraParam {
        look_from,
        look_at,
        up: None,
        vfov,
        aspect_ratio: None,
        aperture: Some(aperture),
        focus_dist: Some(focus_dist),
        time0: Some(0.0),
        time1: Some(1.0),
    }
}

pub fn simple<R: Rng + 'static>(rng: &mut R) -> Result<Scene<R>, BvhError> {
    let mut objects: Vec<BoxedHittable<R>> = Vec::new();
    objects.push(Arc::new(MovingSphere::new(
        Point3::new(0.0, 0.0, -1.0),
        0.0,
        Point3::new(0.0, 0.5, -1.0),
        1.0,
        0.5,
        Arc::new(Lambertian::new(solid([0.8, 0.3, 0.3]))),
    )));
    objects.push(Arc::new(Sphere::new(
        Point3::new(0.0, -100.5, -1.0),
        100.0,
        Arc::new(Lambertian::new(Checker::new(
            solid([0.2, 0.2, 0.2]),
            solid([0.7, 0.7, 0.7]),
        ))),
    )));
    objects.push(Arc::new(Sphere::new(
        Point3::new(1.0, 0.0, -1.0),
        0.5,
        Arc::new(Metal::new(Vector3::new(0.8, 0.6, 0.2), 0.3)),
    )));
    let glass: BoxedMaterial<R> = Arc::new(Dielectric::new(1.5));
    objects.push(Arc::new(Sphere::new(
        Point3::new(-1.0, 0.0, -1.0),
        0.5,
        glass.clone(),
    )));
    // Negative radius turns the inner shell inside out: hollow glass.
    objects.push(Arc::new(Sphere::new(
        Point3::new(-1.0, 0.0, -1.0),
        -0.45,
        glass,
    )));
    objects.push(Arc::new(XYRect::new(
        -0.5,
        0.5,
        0.15,
        1.5,
        -1.0,
        Arc::new(DiffuseLight::new(solid([10.0, 10.0, 10.0]))),
    )));

    let look_from = Point3::new(-2.0, 2.0, -3.0);
    let look_at = Point3::new(0.0, 0.0, -1.0);
    let focus_dist = (look_from - look_at).norm();
    Ok(Scene {
        world: Arc::new(Bvh::build(objects, 0.0, 1.0, rng)?),
        camera: camera_at(look_from, look_at, 40.0, 0.0, focus_dist),
        background: Background::sky_gradient(),
    })
}

pub fn random_spheres<R: Rng + 'static>(rng: &mut R) -> Result<Scene<R>, BvhError> {
    let mut objects: Vec<BoxedHittable<R>> = Vec::new();
    objects.push(Arc::new(Sphere::new(
        Point3::new(0.0, -1000.0, 0.0),
        1000.0,
        Arc::new(Lambertian::new(Checker::new(
            solid([0.2, 0.3, 0.1]),
            solid([0.9, 0.9, 0.9]),
        ))),
    )));
    for (a, b) in iproduct!(-11..11, -11..11) {
        let choose_mat = rng.gen::<f32>();
        let radius = 0.2;
        let center = Point3::new(
            a as f32 + 0.9 * rng.gen::<f32>(),
            radius,
            b as f32 + 0.9 * rng.gen::<f32>(),
        );
        if (center - Point3::new(4.0, radius, 0.0)).norm() <= 0.9 {
            continue;
        }
        let material: BoxedMaterial<R> = if choose_mat < 0.8 {
            let albedo = Vector3::new(
                rng.gen::<f32>() * rng.gen::<f32>(),
                rng.gen::<f32>() * rng.gen::<f32>(),
                rng.gen::<f32>() * rng.gen::<f32>(),
            );
            Arc::new(Lambertian::new(solid(albedo)))
        } else if choose_mat < 0.95 {
            let albedo = Vector3::new(
                (1.0 + rng.gen::<f32>()) * 0.5,
                (1.0 + rng.gen::<f32>()) * 0.5,
                (1.0 + rng.gen::<f32>()) * 0.5,
            );
            Arc::new(Metal::new(albedo, 0.5 * rng.gen::<f32>()))
        } else {
            Arc::new(Dielectric::new(1.5))
        };
        objects.push(Arc::new(Sphere::new(center, radius, material)));
    }
    objects.push(Arc::new(Sphere::new(
        Point3::new(0.0, 1.0, 0.0),
        1.0,
        Arc::new(Dielectric::new(1.5)),
    )));
    objects.push(Arc::new(Sphere::new(
        Point3::new(-4.0, 1.0, 0.0),
        1.0,
        Arc::new(Lambertian::new(solid([0.4, 0.2, 0.1]))),
    )));
    objects.push(Arc::new(Sphere::new(
        Point3::new(4.0, 1.0, 0.0),
        1.0,
        Arc::new(Metal::new(Vector3::new(0.7, 0.6, 0.5), 0.0)),
    )));

    Ok(Scene {
        world: Arc::new(Bvh::build(objects, 0.0, 1.0, rng)?),
        camera: camera_at(Point3::new(13.0, 2.0, 3.0), Point3::origin(), 20.0, 0.1, 10.0),
        background: Background::sky_gradient(),
    })
}

pub fn two_spheres<R: Rng + 'static>(rng: &mut R) -> Result<Scene<R>, BvhError> {
    let mut world = HittableList::new();
    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, -1000.0, 0.0),
        1000.0,
        Arc::new(Lambertian::new(Checker::new(
            solid([0.2, 0.2, 0.2]),
            solid([0.7, 0.7, 0.1]),
        ))),
    )));
    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, 2.0, 0.0),
        2.0,
        Arc::new(Lambertian::new(NoiseTexture::new(4.0, rng))),
    )));
    Ok(Scene {
        world: Arc::new(world),
        camera: camera_at(Point3::new(0.0, 3.0, 6.0), Point3::origin(), 40.0, 0.0, 10.0),
        background: Background::sky_gradient(),
    })
}

fn cornell_walls<R: Rng + 'static>(light_rect: XZRect<R>) -> HittableList<R> {
    let red: BoxedMaterial<R> = Arc::new(Lambertian::new(solid([0.65, 0.05, 0.05])));
    let white: BoxedMaterial<R> = Arc::new(Lambertian::new(solid([0.73, 0.73, 0.73])));
    let green: BoxedMaterial<R> = Arc::new(Lambertian::new(solid([0.12, 0.45, 0.15])));
    let mut world = HittableList::new();
    world.add(Arc::new(FlipNormals::new(YZRect::new(
        0.0, 555.0, 0.0, 555.0, 555.0, green,
    ))));
    world.add(Arc::new(YZRect::new(0.0, 555.0, 0.0, 555.0, 0.0, red)));
    world.add(Arc::new(light_rect));
    world.add(Arc::new(FlipNormals::new(XZRect::new(
        0.0,
        555.0,
        0.0,
        555.0,
        555.0,
        white.clone(),
    ))));
    world.add(Arc::new(XZRect::new(
        0.0,
        555.0,
        0.0,
        555.0,
        1.0,
        white.clone(),
    )));
    world.add(Arc::new(FlipNormals::new(XYRect::new(
        0.0, 555.0, 0.0, 555.0, 555.0, white,
    ))));
    world
}

fn cornell_camera() -> CameraParam {
    camera_at(
        Point3::new(278.0, 278.0, -800.0),
        Point3::new(278.0, 278.0, 0.0),
        40.0,
        0.0,
        10.0,
    )
}

fn cornell_block<R: Rng + 'static>(
    size: Vector3<f32>,
    angle: f32,
    offset: Vector3<f32>,
) -> Translate<RotateY<Cuboid<R>>> {
    let white: BoxedMaterial<R> = Arc::new(Lambertian::new(solid([0.73, 0.73, 0.73])));
    Translate::new(
        RotateY::new(
            Cuboid::new(Point3::origin(), Point3::from(size), white),
            angle,
        ),
        offset,
    )
}

pub fn cornell_box<R: Rng + 'static>(_rng: &mut R) -> Result<Scene<R>, BvhError> {
    let light = XZRect::new(
        213.0,
        343.0,
        227.0,
        332.0,
        554.0,
        Arc::new(DiffuseLight::new(solid([15.0, 15.0, 15.0]))),
    );
    let mut world = cornell_walls(light);
    world.add(Arc::new(cornell_block::<R>(
        Vector3::new(165.0, 165.0, 165.0),
        -18.0,
        Vector3::new(130.0, 0.0, 65.0),
    )));
    world.add(Arc::new(cornell_block::<R>(
        Vector3::new(165.0, 330.0, 165.0),
        15.0,
        Vector3::new(265.0, 0.0, 295.0),
    )));
    Ok(Scene {
        world: Arc::new(world),
        camera: cornell_camera(),
        background: Background::black(),
    })
}

pub fn cornell_smoke<R: Rng + 'static>(_rng: &mut R) -> Result<Scene<R>, BvhError> {
    let light = XZRect::new(
        113.0,
        443.0,
        127.0,
        432.0,
        554.0,
        Arc::new(DiffuseLight::new(solid([7.0, 7.0, 7.0]))),
    );
    let mut world = cornell_walls(light);
    world.add(Arc::new(ConstantMedium::new(
        cornell_block::<R>(
            Vector3::new(165.0, 165.0, 165.0),
            -18.0,
            Vector3::new(130.0, 0.0, 65.0),
        ),
        0.01,
        solid([1.0, 1.0, 1.0]),
    )));
    world.add(Arc::new(ConstantMedium::new(
        cornell_block::<R>(
            Vector3::new(165.0, 330.0, 165.0),
            15.0,
            Vector3::new(265.0, 0.0, 295.0),
        ),
        0.01,
        solid([0.0, 0.0, 0.0]),
    )));
    Ok(Scene {
        world: Arc::new(world),
        camera: cornell_camera(),
        background: Background::black(),
    })
}

pub fn final_scene<R: Rng + 'static>(
    rng: &mut R,
    earth: Option<ImageTexture>,
) -> Result<Scene<R>, BvhError> {
    let white: BoxedMaterial<R> = Arc::new(Lambertian::new(solid([0.73, 0.73, 0.73])));
    let ground: BoxedMaterial<R> = Arc::new(Lambertian::new(solid([0.48, 0.83, 0.53])));

    let boxes_per_side = 20;
    let mut ground_boxes: Vec<BoxedHittable<R>> = Vec::new();
    for (i, j) in iproduct!(0..boxes_per_side, 0..boxes_per_side) {
        let w = 100.0;
        let x0 = -1000.0 + i as f32 * w;
        let z0 = -1000.0 + j as f32 * w;
        let y1 = 100.0 * (rng.gen::<f32>() + 0.01);
        ground_boxes.push(Arc::new(Cuboid::new(
            Point3::new(x0, 0.0, z0),
            Point3::new(x0 + w, y1, z0 + w),
            ground.clone(),
        )));
    }

    let mut world = HittableList::new();
    world.add(Arc::new(Bvh::build(ground_boxes, 0.0, 1.0, rng)?));
    world.add(Arc::new(XZRect::new(
        123.0,
        423.0,
        147.0,
        412.0,
        554.0,
        Arc::new(DiffuseLight::new(solid([7.0, 7.0, 7.0]))),
    )));
    let center = Point3::new(400.0, 400.0, 200.0);
    world.add(Arc::new(MovingSphere::new(
        center,
        0.0,
        center + Vector3::new(30.0, 0.0, 0.0),
        1.0,
        50.0,
        Arc::new(Lambertian::new(solid([0.7, 0.3, 0.1]))),
    )));
    world.add(Arc::new(Sphere::new(
        Point3::new(260.0, 150.0, 45.0),
        50.0,
        Arc::new(Dielectric::new(1.5)),
    )));
    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, 150.0, 145.0),
        50.0,
        Arc::new(Metal::new(Vector3::new(0.8, 0.8, 0.9), 10.0)),
    )));
    // A glass sphere with blue fog inside it.
    let boundary: BoxedHittable<R> = Arc::new(Sphere::new(
        Point3::new(360.0, 150.0, 145.0),
        70.0,
        Arc::new(Dielectric::new(1.5)),
    ));
    world.add(boundary.clone());
    world.add(Arc::new(ConstantMedium::new(
        boundary,
        0.2,
        solid([0.2, 0.4, 0.9]),
    )));
    // Thin global haze across the whole scene.
    let haze_boundary: BoxedHittable<R> = Arc::new(Sphere::new(
        Point3::origin(),
        5000.0,
        Arc::new(Dielectric::new(1.5)),
    ));
    world.add(Arc::new(ConstantMedium::new(
        haze_boundary,
        1e-4,
        solid([1.0, 1.0, 1.0]),
    )));
    let earth_material: BoxedMaterial<R> = match earth {
        Some(texture) => Arc::new(Lambertian::new(texture)),
        None => Arc::new(Lambertian::new(solid([0.2, 0.3, 0.6]))),
    };
    world.add(Arc::new(Sphere::new(
        Point3::new(400.0, 200.0, 400.0),
        100.0,
        earth_material,
    )));
    world.add(Arc::new(Sphere::new(
        Point3::new(220.0, 280.0, 300.0),
        80.0,
        Arc::new(Lambertian::new(NoiseTexture::new(0.1, rng))),
    )));

    let mut cloud: Vec<BoxedHittable<R>> = Vec::new();
    for _ in 0..1000 {
        cloud.push(Arc::new(Sphere::new(
            Point3::new(
                165.0 * rng.gen::<f32>(),
                165.0 * rng.gen::<f32>(),
                165.0 * rng.gen::<f32>(),
            ),
            10.0,
            white.clone(),
        )));
    }
    world.add(Arc::new(Translate::new(
        RotateY::new(Bvh::build(cloud, 0.0, 1.0, rng)?, 15.0),
        Vector3::new(-100.0, 270.0, 395.0),
    )));

    Ok(Scene {
        world: Arc::new(world),
        camera: camera_at(
            Point3::new(478.0, 278.0, -600.0),
            Point3::new(278.0, 278.0, 0.0),
            40.0,
            0.0,
            10.0,
        ),
        background: Background::black(),
    })
}
