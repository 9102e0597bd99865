use std::f64::INFINITY;

use crate::math::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    Ambient { intensity: f64 },
    Point { intensity: f64, position: Vec3 },
    Directional { intensity: f64, direction: Vec3 },
}

impl Light {
    pub fn intensity(&self) -> f64 {
        match *self {
            Light::Ambient { intensity }
            | Light::Point { intensity, .. }
            | Light::Directional { intensity, .. } => intensity,
        }
    }

    /// Unnormalized vector from `point` toward the light, paired with the
    /// shadow ray's upper bound along it. `None` for ambient light.
    ///
    /// For a point light `t = 1` along `L` lands exactly on the light, so
    /// occluders behind the light are ignored.
    pub fn direction_from(&self, point: Vec3) -> Option<(Vec3, f64)> {
        match *self {
            Light::Ambient { .. } => None,
            Light::Point { position, .. } => Some((position - point, 1.0)),
            Light::Directional { direction, .. } => Some((direction, INFINITY)),
        }
    }
}
