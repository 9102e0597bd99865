use std::{error::Error, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::{camera::Camera, math::Vec3};

/// Render configuration. Every field falls back to the default frame: a
/// 1024x1024 canvas behind a unit viewport at distance 1, eye at `z = -3`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub projection_distance: f64,
    pub max_recursion_depth: i32,
    pub eye: [f64; 3],
    pub threads: Option<usize>,
    pub output: PathBuf,
    pub show_progress: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            canvas_width: 1024,
            canvas_height: 1024,
            viewport_width: 1.0,
            viewport_height: 1.0,
            projection_distance: 1.0,
            max_recursion_depth: 3,
            eye: [0.0, 0.0, -3.0],
            threads: None,
            output: PathBuf::from("out.png"),
            show_progress: true,
        }
    }
}

impl RenderSettings {
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(format!(
                "canvas must be non-empty, got {}x{}",
                self.canvas_width, self.canvas_height
            )
            .into());
        }
        if self.canvas_width > i32::MAX as u32 || self.canvas_height > i32::MAX as u32 {
            return Err("canvas dimensions exceed the signed pixel range".into());
        }
        if !(self.viewport_width > 0.0 && self.viewport_height > 0.0) {
            return Err(format!(
                "viewport must be positive, got {}x{}",
                self.viewport_width, self.viewport_height
            )
            .into());
        }
        if !(self.projection_distance > 0.0) {
            return Err(format!(
                "projection distance must be positive, got {}",
                self.projection_distance
            )
            .into());
        }
        if self.threads == Some(0) {
            return Err("thread count must be at least 1".into());
        }
        Ok(())
    }

    pub fn camera(&self) -> Camera {
        Camera::new(
            Vec3::from(self.eye),
            (self.viewport_width, self.viewport_height),
            self.projection_distance,
            (self.canvas_width, self.canvas_height),
        )
    }
}
