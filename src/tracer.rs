use std::f64::INFINITY;

use crate::geometry::closest_intersection;
use crate::math::{RGBColor, Ray};
use crate::scene::Scene;
use crate::shading::{lighting, reflect_ray, SELF_INTERSECTION_EPSILON};

pub const BACKGROUND: RGBColor = RGBColor::BLACK;

/// Color seen along `r` within `[t_min, t_max)`.
///
/// `depth` is the number of reflection bounces still allowed. It only
/// decreases on the reflective branch, and at `depth <= 0` the local color is
/// returned as is.
pub fn trace_ray(scene: &Scene, r: Ray, t_min: f64, t_max: f64, depth: i32) -> RGBColor {
    let (sphere, t) = match closest_intersection(&scene.spheres, r, t_min, t_max) {
        Some(hit) => hit,
        None => return BACKGROUND,
    };

    let point = r.point_at_parameter(t);
    let normal = sphere.normal_at(point);
    let intensity = lighting(scene, point, normal, -r.direction, sphere.specular);
    let local_color = sphere.color.weighted(intensity);

    let reflective = sphere.reflective;
    if depth <= 0 || reflective <= 0.0 {
        return local_color;
    }

    let reflected_ray = Ray::new(point, reflect_ray(-r.direction, normal));
    let reflected_color = trace_ray(
        scene,
        reflected_ray,
        SELF_INTERSECTION_EPSILON,
        INFINITY,
        depth - 1,
    );

    local_color.weighted(1.0 - reflective) + reflected_color.weighted(reflective)
}
