use std::f64::INFINITY;
use std::io::Stdout;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use log::info;
use pbr::ProgressBar;
use rayon::prelude::*;

use crate::camera::Camera;
use crate::canvas::Canvas;
use crate::math::RGBColor;
use crate::scene::Scene;
use crate::tracer::trace_ray;

#[derive(Copy, Clone, Debug)]
pub struct RenderStats {
    pub pixels: usize,
    pub elapsed: Duration,
}

/// Color of a single canvas pixel, traced from the eye with `t_min = 1`.
pub fn render_pixel(scene: &Scene, camera: &Camera, x: i32, y: i32, max_depth: i32) -> RGBColor {
    trace_ray(scene, camera.get_ray(x, y), 1.0, INFINITY, max_depth)
}

/// Traces every pixel of the camera's canvas and writes it to `canvas`.
///
/// Each pixel is its own rayon task. This returns only once every task has
/// finished, so the canvas is complete when control comes back to the caller.
pub fn render<C: Canvas>(
    scene: &Scene,
    camera: &Camera,
    max_depth: i32,
    canvas: &C,
    show_progress: bool,
) -> RenderStats {
    let xs = camera.x_range();
    let ys = camera.y_range();
    let width = xs.len();
    let height = ys.len();
    let pixels = width * height;

    info!(
        "rendering {}x{} pixels, {} spheres, {} lights, max depth {}, {} threads",
        width,
        height,
        scene.spheres.len(),
        scene.lights.len(),
        max_depth,
        rayon::current_num_threads()
    );

    let progress = if show_progress && width > 0 {
        let mut pb = ProgressBar::new(height as u64);
        pb.message("rows ");
        Some(Mutex::new(pb))
    } else {
        None
    };
    let completed = AtomicUsize::new(0);

    let now = Instant::now();
    (0..pixels).into_par_iter().for_each(|index| {
        let x = xs.start + (index % width) as i32;
        let y = ys.start + (index / width) as i32;

        let color = render_pixel(scene, camera, x, y, max_depth);
        canvas.put_pixel(x, y, color);

        if let Some(progress) = progress.as_ref() {
            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
            if done % width == 0 {
                tick(progress);
            }
        }
    });
    let elapsed = now.elapsed();

    if let Some(progress) = progress {
        if let Ok(mut pb) = progress.into_inner() {
            pb.finish();
        }
    }
    info!(
        "rendered {} pixels in {:.3}s",
        pixels,
        elapsed.as_secs_f64()
    );

    RenderStats { pixels, elapsed }
}

fn tick(progress: &Mutex<ProgressBar<Stdout>>) {
    if let Ok(mut pb) = progress.lock() {
        pb.inc();
    }
}
