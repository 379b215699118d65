use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::info;
use pathtracer::renderer::{Renderer, RendererParam};
use pathtracer::scene::{self, Scene};
use pathtracer::texture::image::ImageTexture;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SceneKind {
    Simple,
    RandomSpheres,
    TwoSpheres,
    Cornell,
    CornellSmoke,
    Final,
}

#[derive(Debug, Parser)]
#[clap(about = "A small Monte-Carlo path tracer emitting plain-text PPM")]
struct Args {
    #[clap(long, value_enum, default_value = "cornell")]
    scene: SceneKind,
    #[clap(long, default_value_t = 500)]
    width: u32,
    #[clap(long, default_value_t = 500)]
    height: u32,
    #[clap(long, default_value_t = 100)]
    samples: u32,
    #[clap(long)]
    max_depth: Option<u32>,
    #[clap(long, default_value_t = 2084)]
    seed: u64,
    /// JSON file with a full RendererParam; overrides the flags above.
    #[clap(long)]
    config: Option<PathBuf>,
    /// Image file mapped onto the globe in the final scene.
    #[clap(long)]
    earth_map: Option<PathBuf>,
    /// Write the PPM here instead of stdout.
    #[clap(long)]
    output: Option<PathBuf>,
}

fn load_param(args: &Args) -> anyhow::Result<RendererParam> {
    match &args.config {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open config {}", path.display()))?;
            serde_json::from_reader(file)
                .with_context(|| format!("malformed config {}", path.display()))
        }
        None => Ok(RendererParam {
            width: args.width,
            height: args.height,
            samples: args.samples,
            max_depth: args.max_depth,
            seed: Some(args.seed),
        }),
    }
}

fn build_scene(args: &Args, rng: &mut Pcg64) -> anyhow::Result<Scene<Pcg64>> {
    let scene = match args.scene {
        SceneKind::Simple => scene::simple(rng)?,
        SceneKind::RandomSpheres => scene::random_spheres(rng)?,
        SceneKind::TwoSpheres => scene::two_spheres(rng)?,
        SceneKind::Cornell => scene::cornell_box(rng)?,
        SceneKind::CornellSmoke => scene::cornell_smoke(rng)?,
        SceneKind::Final => {
            let earth = match &args.earth_map {
                Some(path) => Some(
                    ImageTexture::open(path)
                        .with_context(|| format!("cannot load {}", path.display()))?,
                ),
                None => None,
            };
            scene::final_scene(rng, earth)?
        }
    };
    Ok(scene)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let param = load_param(&args)?;
    let mut rng = Pcg64::seed_from_u64(param.seed.unwrap_or(args.seed));
    let scene = build_scene(&args, &mut rng)?;
    let renderer = Renderer::new(param, scene);

    let start = Instant::now();
    let image = renderer.render()?;
    info!("rendered in {:.1?}", start.elapsed());

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            image.write_ppm(BufWriter::new(file))?;
        }
        None => image.write_ppm(BufWriter::new(io::stdout().lock()))?,
    }
    Ok(())
}
