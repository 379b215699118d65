use crate::texture::Texture;
use nalgebra::{Point3, Vector2, Vector3};

pub struct Checker<T1, T2> {
    odd: T1,
    even: T2,
}

impl<T1, T2> Checker<T1, T2> {
    pub fn new(odd: T1, even: T2) -> Self {
        Checker { odd, even }
    }
}

impl<T1: Texture, T2: Texture> Texture for Checker<T1, T2> {
    fn value(&self, uv: &Vector2<f32>, p: &Point3<f32>) -> Vector3<f32> {
        let sines = (10.0 * p[0]).sin() * (10.0 * p[1]).sin() * (10.0 * p[2]).sin();
        if sines < 0.0 {
            self.odd.value(uv, p)
        } else {
            self.even.value(uv, p)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::solid_color::SolidColor;

    #[test]
    fn parity_flips_between_cells() {
        let checker = Checker::new(
            SolidColor::new(Vector3::new(1.0, 0.0, 0.0)),
            SolidColor::new(Vector3::new(0.0, 1.0, 0.0)),
        );
        let uv = Vector2::zeros();
        // sin(10 * 0.05)^3 > 0 in the even cell; shifting one axis by pi/10
        // flips the sign.
        let even = checker.value(&uv, &Point3::new(0.05, 0.05, 0.05));
        let odd = checker.value(&uv, &Point3::new(0.05 + std::f32::consts::PI / 10.0, 0.05, 0.05));
        assert_eq!(even, Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(odd, Vector3::new(1.0, 0.0, 0.0));
    }
}
