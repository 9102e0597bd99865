use crate::math::{Ray, Vec3};

/// Fixed eye looking down +z through an axis aligned viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub origin: Vec3,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub projection_distance: f64,
    pub canvas_width: u32,
    pub canvas_height: u32,
}

impl Camera {
    pub fn new(
        origin: Vec3,
        viewport: (f64, f64),
        projection_distance: f64,
        canvas: (u32, u32),
    ) -> Camera {
        Camera {
            origin,
            viewport_width: viewport.0,
            viewport_height: viewport.1,
            projection_distance,
            canvas_width: canvas.0,
            canvas_height: canvas.1,
        }
    }

    /// Direction through the viewport point matching canvas pixel `(x, y)`.
    /// Canvas coordinates are centered on the origin with y pointing up.
    pub fn canvas_to_viewport(&self, x: i32, y: i32) -> Vec3 {
        Vec3::new(
            x as f64 * self.viewport_width / self.canvas_width as f64,
            y as f64 * self.viewport_height / self.canvas_height as f64,
            self.projection_distance,
        )
    }

    pub fn get_ray(&self, x: i32, y: i32) -> Ray {
        Ray::new(self.origin, self.canvas_to_viewport(x, y))
    }

    /// Half open centered pixel ranges, `-C/2 .. C - C/2`.
    pub fn x_range(&self) -> std::ops::Range<i32> {
        centered_range(self.canvas_width)
    }

    pub fn y_range(&self) -> std::ops::Range<i32> {
        centered_range(self.canvas_height)
    }
}

fn centered_range(size: u32) -> std::ops::Range<i32> {
    let half = (size / 2) as i32;
    -half..(size as i32 - half)
}
