use crate::math::Ray;

mod sphere;

pub use sphere::Sphere;

/// Nearest sphere hit by `r` with parameter in `[t_min, t_max)`.
///
/// Brute force over every sphere. `t1` is tested before `t2` and only a
/// strictly smaller root replaces the current best, so on exact ties the
/// first sphere in scene order wins.
pub fn closest_intersection(
    spheres: &[Sphere],
    r: Ray,
    t_min: f64,
    t_max: f64,
) -> Option<(&Sphere, f64)> {
    let mut best_t = t_max;
    let mut best_sphere = None;

    for sphere in spheres.iter() {
        let (t1, t2) = sphere.intersect(r);
        for t in [t1, t2] {
            if t < best_t && t_min <= t && t <= t_max {
                best_t = t;
                best_sphere = Some(sphere);
            }
        }
    }
    best_sphere.map(|sphere| (sphere, best_t))
}
