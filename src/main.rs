use std::error::Error;
use std::path::PathBuf;

use log::{debug, info};
use structopt::StructOpt;

pub mod camera;
pub mod canvas;
pub mod geometry;
pub mod light;
pub mod math;
pub mod parsing;
pub mod render;
pub mod scene;
pub mod shading;
pub mod tracer;

use canvas::ImageCanvas;
use parsing::{load_json, load_scene, RenderSettings};
use render::render;
use scene::Scene;

#[derive(Debug, StructOpt)]
#[structopt(name = "whitted_rt", about = "Renders a scene of spheres with recursive ray tracing")]
struct Opt {
    /// Render settings as JSON. Unset fields keep their defaults.
    #[structopt(long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// Scene description as JSON. Renders the built-in sample scene if absent.
    #[structopt(long, parse(from_os_str))]
    scene: Option<PathBuf>,

    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    #[structopt(long)]
    threads: Option<usize>,

    #[structopt(long)]
    max_depth: Option<i32>,

    #[structopt(long)]
    no_progress: bool,
}

fn settings_from(opt: &Opt) -> Result<RenderSettings, Box<dyn Error>> {
    let mut settings = match &opt.config {
        Some(path) => load_json::<RenderSettings, _>(path)?,
        None => RenderSettings::default(),
    };
    if let Some(output) = &opt.output {
        settings.output = output.clone();
    }
    if opt.threads.is_some() {
        settings.threads = opt.threads;
    }
    if let Some(depth) = opt.max_depth {
        settings.max_recursion_depth = depth;
    }
    if opt.no_progress {
        settings.show_progress = false;
    }
    settings.validate()?;
    Ok(settings)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opt = Opt::from_args();
    let settings = settings_from(&opt)?;

    let threads = settings.threads.unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()?;

    let scene = match &opt.scene {
        Some(path) => {
            info!("loading scene from {}", path.display());
            load_scene(path)?
        }
        None => Scene::sample(),
    };
    debug!("spheres: {:?}", scene.spheres);
    debug!("lights: {:?}", scene.lights);

    let camera = settings.camera();
    let canvas = ImageCanvas::new(settings.canvas_width, settings.canvas_height);
    let stats = render(
        &scene,
        &camera,
        settings.max_recursion_depth,
        &canvas,
        settings.show_progress,
    );
    debug!(
        "{:.0} pixels/s",
        stats.pixels as f64 / stats.elapsed.as_secs_f64().max(f64::EPSILON)
    );

    canvas.save(&settings.output)?;
    info!("saved {}", settings.output.display());
    Ok(())
}
