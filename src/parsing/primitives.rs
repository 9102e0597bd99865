use serde::{Deserialize, Serialize};

use crate::{
    geometry::Sphere,
    math::{RGBColor, Vec3},
};

/// Specular exponent that marks the highlight as disabled in scene files.
pub const NO_SPECULAR: f64 = -1.0;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PrimitiveData {
    Sphere {
        center: [f64; 3],
        radius: f64,
        color: [f64; 3],
        #[serde(default)]
        specular: Option<f64>,
        #[serde(default)]
        reflective: f64,
    },
}

impl PrimitiveData {
    pub fn transform(self) -> Sphere {
        match self {
            Self::Sphere {
                center,
                radius,
                color,
                specular,
                reflective,
            } => Sphere::new(
                Vec3::from(center),
                radius,
                RGBColor::from(color),
                specular.filter(|&s| s != NO_SPECULAR),
                reflective,
            ),
        }
    }
}
