use nalgebra::{Point3, Unit, UnitVector3, Vector3};

#[derive(Debug, Clone)]
pub struct Ray {
    origin: Point3<f32>,
    direction: UnitVector3<f32>,
    time: f32,
}

impl Ray {
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>, time: f32) -> Self {
        Ray {
            origin,
            direction: Unit::new_normalize(direction),
            time,
        }
    }
    pub fn at(&self, t: f32) -> Point3<f32> {
        self.origin + self.direction.scale(t)
    }
    pub fn origin(&self) -> &Point3<f32> {
        &self.origin
    }
    pub fn direction(&self) -> &UnitVector3<f32> {
        &self.direction
    }
    pub fn time(&self) -> f32 {
        self.time
    }
}
