use std::f64::INFINITY;

use crate::math::{RGBColor, Ray, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f64,
    pub color: RGBColor,
    /// Phong exponent. `None` disables the specular term.
    pub specular: Option<f64>,
    /// Fraction of the final color taken from the mirrored ray, in `[0, 1]`.
    pub reflective: f64,
}

impl Sphere {
    pub fn new(
        center: Vec3,
        radius: f64,
        color: RGBColor,
        specular: Option<f64>,
        reflective: f64,
    ) -> Sphere {
        Sphere {
            center,
            radius,
            color,
            specular,
            reflective,
        }
    }

    /// Both roots of `|o + t*d - c|^2 = r^2`, larger root first.
    /// A miss reports `(INFINITY, INFINITY)`; callers range check both roots.
    pub fn intersect(&self, r: Ray) -> (f64, f64) {
        let oc: Vec3 = r.origin - self.center;
        let a = r.direction.dot(r.direction);
        let b = 2.0 * oc.dot(r.direction);
        let c = oc.dot(oc) - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return (INFINITY, INFINITY);
        }
        let discriminant_sqrt = discriminant.sqrt();
        let t1 = (-b + discriminant_sqrt) / (2.0 * a);
        let t2 = (-b - discriminant_sqrt) / (2.0 * a);
        (t1, t2)
    }

    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalized()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn unit_sphere(center: Vec3, radius: f64) -> Sphere {
        Sphere::new(center, radius, RGBColor::WHITE, None, 0.0)
    }

    #[test]
    fn test_ray_from_center() {
        let sphere = unit_sphere(Vec3::new(1.0, -2.0, 5.0), 2.5);
        for direction in [
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(3.0, 4.0, 0.0),
            Vec3::new(-0.1, 0.7, 2.0),
        ] {
            let (t1, t2) = sphere.intersect(Ray::new(sphere.center, direction));
            let expected = sphere.radius / direction.norm();
            assert!((t1 - expected).abs() < 1e-12, "{} {}", t1, expected);
            assert!((t2 + expected).abs() < 1e-12, "{} {}", t2, expected);
        }
    }

    #[test]
    fn test_miss_reports_infinity() {
        let sphere = unit_sphere(Vec3::new(0.0, 5.0, 0.0), 1.0);
        let (t1, t2) = sphere.intersect(Ray::new(Vec3::ZERO, Vec3::Z));
        assert_eq!(t1, INFINITY);
        assert_eq!(t2, INFINITY);
    }

    #[test]
    fn test_root_order() {
        let sphere = unit_sphere(Vec3::new(0.0, 0.0, 10.0), 1.0);
        let (t1, t2) = sphere.intersect(Ray::new(Vec3::ZERO, Vec3::Z));
        assert_eq!((t1, t2), (11.0, 9.0));

        // behind the origin, both roots are negative
        let (t1, t2) = sphere.intersect(Ray::new(Vec3::ZERO, -Vec3::Z));
        assert_eq!((t1, t2), (-9.0, -11.0));
    }

    #[test]
    fn test_tangent_ray_has_double_root() {
        let sphere = unit_sphere(Vec3::new(0.0, -1.0, 3.0), 1.0);
        let (t1, t2) = sphere.intersect(Ray::new(Vec3::new(0.0, 0.0, -3.0), Vec3::Z));
        assert_eq!(t1, 6.0);
        assert_eq!(t2, 6.0);
    }
}
