use phong_tracer::parsing::construct_world;
use phong_tracer::renderer::output_film;

use structopt::StructOpt;
use tracing::{info, Level};

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long, default_value = "data/scenes/phong_spheres.json")]
    pub scene_file: String,
    /// output file stem, written under output/
    #[structopt(long)]
    pub output: Option<String>,
    #[structopt(long)]
    pub threads: Option<usize>,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    /// one of error, warn, info, debug, trace
    #[structopt(long, default_value = "info")]
    pub log_level: Level,
}

fn main() -> anyhow::Result<()> {
    let opts = Opt::from_args();
    tracing_subscriber::fmt()
        .with_max_level(opts.log_level)
        .init();

    let mut world = construct_world(&opts.scene_file)?;

    // command line overrides the scene file's render section
    if opts.threads.is_some() {
        world.settings.threads = opts.threads;
    }
    if opts.output.is_some() {
        world.settings.filename = opts.output.clone();
    }

    let threads = world.settings.threads();
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()?;
    info!("using {} threads", threads);

    if opts.dry_run {
        info!("dry run, skipping render");
        return Ok(());
    }

    let film = world.render(true);
    output_film(&film, world.settings.filename())?;
    Ok(())
}
