use std::error::Error;

use crate::geometry::Sphere;
use crate::light::Light;
use crate::math::{RGBColor, Vec3};

/// Immutable once built. Shared by reference across every render task.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
}

impl Scene {
    pub fn new(spheres: Vec<Sphere>, lights: Vec<Light>) -> Scene {
        Scene { spheres, lights }
    }

    /// Three small spheres above a giant yellow floor sphere, lit by ambient,
    /// point and directional light.
    pub fn sample() -> Scene {
        let spheres = vec![
            Sphere::new(
                Vec3::new(0.0, -1.0, 3.0),
                1.0,
                RGBColor::new(1.0, 0.0, 0.0),
                Some(500.0),
                0.2,
            ),
            Sphere::new(
                Vec3::new(2.0, 0.0, 4.0),
                1.0,
                RGBColor::new(0.0, 0.0, 1.0),
                Some(500.0),
                0.3,
            ),
            Sphere::new(
                Vec3::new(-2.0, 0.0, 4.0),
                1.0,
                RGBColor::new(0.0, 1.0, 0.0),
                Some(10.0),
                0.4,
            ),
            // floor
            Sphere::new(
                Vec3::new(0.0, -5001.0, 0.0),
                5000.0,
                RGBColor::new(1.0, 1.0, 0.0),
                Some(1000.0),
                0.5,
            ),
        ];
        let lights = vec![
            Light::Ambient { intensity: 0.2 },
            Light::Point {
                intensity: 0.6,
                position: Vec3::new(2.0, 1.0, 0.0),
            },
            Light::Directional {
                intensity: 0.2,
                direction: Vec3::new(1.0, 4.0, 4.0),
            },
        ];
        Scene { spheres, lights }
    }

    /// Rejects degenerate spheres, reflectivity outside `[0, 1]`, zero
    /// directional light directions, and point lights sitting on a sphere
    /// surface, where a hit point can coincide with the light.
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        for (i, sphere) in self.spheres.iter().enumerate() {
            if !(sphere.radius > 0.0) || !sphere.center.is_finite() {
                return Err(format!("sphere {} has invalid geometry {:?}", i, sphere).into());
            }
            if !(0.0..=1.0).contains(&sphere.reflective) {
                return Err(format!(
                    "sphere {} reflectivity {} outside [0, 1]",
                    i, sphere.reflective
                )
                .into());
            }
        }
        for (i, light) in self.lights.iter().enumerate() {
            match *light {
                Light::Directional { direction, .. } if direction == Vec3::ZERO => {
                    return Err(format!("directional light {} has zero direction", i).into());
                }
                Light::Point { position, .. } => {
                    if let Some(j) = self.spheres.iter().position(|s| on_surface(s, position)) {
                        return Err(format!(
                            "point light {} at {:?} lies on the surface of sphere {}",
                            i, position, j
                        )
                        .into());
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }
}

fn on_surface(sphere: &Sphere, point: Vec3) -> bool {
    let tolerance = 1e-9 * sphere.radius.max(1.0);
    ((point - sphere.center).norm() - sphere.radius).abs() <= tolerance
}
