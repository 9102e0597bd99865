use crate::geometry::closest_intersection;
use crate::math::{Ray, Vec3};
use crate::scene::Scene;

/// Offset keeping shadow and reflection rays from hitting their own surface.
pub const SELF_INTERSECTION_EPSILON: f64 = 0.001;

/// Mirrors `ray` about `normal`. Neither argument is normalized here.
pub fn reflect_ray(ray: Vec3, normal: Vec3) -> Vec3 {
    2.0 * normal.dot(ray) * normal - ray
}

/// Light intensity arriving at `point`, summed over every light in the scene.
///
/// The result is not clamped; clamping happens when it weights a color.
/// `view` points from the surface back toward the viewer.
pub fn lighting(
    scene: &Scene,
    point: Vec3,
    normal: Vec3,
    view: Vec3,
    specular: Option<f64>,
) -> f64 {
    let mut intensity = 0.0;
    for light in scene.lights.iter() {
        let (l, t_max) = match light.direction_from(point) {
            None => {
                intensity += light.intensity();
                continue;
            }
            Some(e) => e,
        };

        // shadows
        let shadow_ray = Ray::new(point, l);
        if closest_intersection(&scene.spheres, shadow_ray, SELF_INTERSECTION_EPSILON, t_max)
            .is_some()
        {
            continue;
        }

        let n = normal.normalized();
        let l = l.normalized();
        intensity += light.intensity() * n.dot(l).max(0.0);

        if let Some(exponent) = specular {
            let r = reflect_ray(l, n).normalized();
            let v = view.normalized();
            intensity += light.intensity() * r.dot(v).max(0.0).powf(exponent);
        }
    }
    intensity
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::Sphere;
    use crate::light::Light;
    use crate::math::RGBColor;

    fn floor_scene(lights: Vec<Light>) -> Scene {
        // the shaded point is (0, 0, 0), on top of this sphere
        let floor = Sphere::new(
            Vec3::new(0.0, -1.0, 0.0),
            1.0,
            RGBColor::WHITE,
            None,
            0.0,
        );
        Scene::new(vec![floor], lights)
    }

    #[test]
    fn test_reflect_ray() {
        let r = reflect_ray(Vec3::new(1.0, 1.0, 0.0), Vec3::Y);
        assert_eq!(r, Vec3::new(-1.0, 1.0, 0.0));
        // along the normal reflects onto itself
        assert_eq!(reflect_ray(Vec3::Y, Vec3::Y), Vec3::Y);
    }

    #[test]
    fn test_ambient_only() {
        let scene = floor_scene(vec![
            Light::Ambient { intensity: 0.2 },
            Light::Ambient { intensity: 0.3 },
        ]);
        let i = lighting(&scene, Vec3::ZERO, Vec3::Y, Vec3::Y, Some(10.0));
        assert_eq!(i, 0.5);
    }

    #[test]
    fn test_diffuse_and_specular_overhead_light() {
        let scene = floor_scene(vec![Light::Point {
            intensity: 0.6,
            position: Vec3::new(0.0, 5.0, 0.0),
        }]);
        // light straight above, viewer straight above: full diffuse and full specular
        let diffuse_only = lighting(&scene, Vec3::ZERO, Vec3::Y, Vec3::Y, None);
        assert!((diffuse_only - 0.6).abs() < 1e-12, "{}", diffuse_only);
        let with_specular = lighting(&scene, Vec3::ZERO, Vec3::Y, Vec3::Y, Some(100.0));
        assert!((with_specular - 1.2).abs() < 1e-12, "{}", with_specular);
    }

    #[test]
    fn test_light_below_surface_contributes_nothing() {
        let scene = Scene::new(
            vec![],
            vec![Light::Directional {
                intensity: 0.4,
                direction: -Vec3::Y,
            }],
        );
        let i = lighting(&scene, Vec3::ZERO, Vec3::Y, Vec3::Y, Some(10.0));
        assert_eq!(i, 0.0);
    }

    #[test]
    fn test_occluder_blocks_point_light_not_ambient() {
        let lights = vec![
            Light::Ambient { intensity: 0.2 },
            Light::Point {
                intensity: 0.6,
                position: Vec3::new(0.0, 5.0, 0.0),
            },
        ];
        let mut scene = floor_scene(lights);
        let unoccluded = lighting(&scene, Vec3::ZERO, Vec3::Y, Vec3::Y, Some(10.0));
        assert!(unoccluded > 0.2);

        scene.spheres.push(Sphere::new(
            Vec3::new(0.0, 2.5, 0.0),
            0.5,
            RGBColor::WHITE,
            None,
            0.0,
        ));
        let occluded = lighting(&scene, Vec3::ZERO, Vec3::Y, Vec3::Y, Some(10.0));
        assert_eq!(occluded, 0.2);
    }

    #[test]
    fn test_occluder_beyond_point_light_is_ignored() {
        let lights = vec![Light::Point {
            intensity: 0.6,
            position: Vec3::new(0.0, 5.0, 0.0),
        }];
        let mut scene = floor_scene(lights);
        scene.spheres.push(Sphere::new(
            Vec3::new(0.0, 8.0, 0.0),
            1.0,
            RGBColor::WHITE,
            None,
            0.0,
        ));
        let i = lighting(&scene, Vec3::ZERO, Vec3::Y, Vec3::Y, None);
        assert!((i - 0.6).abs() < 1e-12, "{}", i);
    }

    #[test]
    fn test_occluder_blocks_directional_light_at_any_distance() {
        let lights = vec![Light::Directional {
            intensity: 0.3,
            direction: Vec3::Y,
        }];
        let mut scene = floor_scene(lights);
        scene.spheres.push(Sphere::new(
            Vec3::new(0.0, 1000.0, 0.0),
            1.0,
            RGBColor::WHITE,
            None,
            0.0,
        ));
        assert_eq!(lighting(&scene, Vec3::ZERO, Vec3::Y, Vec3::Y, None), 0.0);
    }
}
