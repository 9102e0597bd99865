use serde::{Deserialize, Serialize};

use crate::{light::Light, math::Vec3};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LightData {
    Ambient { intensity: f64 },
    Point { intensity: f64, position: [f64; 3] },
    Directional { intensity: f64, direction: [f64; 3] },
}

impl From<LightData> for Light {
    fn from(data: LightData) -> Self {
        match data {
            LightData::Ambient { intensity } => Light::Ambient { intensity },
            LightData::Point {
                intensity,
                position,
            } => Light::Point {
                intensity,
                position: Vec3::from(position),
            },
            LightData::Directional {
                intensity,
                direction,
            } => Light::Directional {
                intensity,
                direction: Vec3::from(direction),
            },
        }
    }
}
