use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "brandreel", version)]
struct Cli {
    /// Brand registry JSON replacing the built-in brands.
    #[arg(long, global = true)]
    registry: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered brands.
    Brands,
    /// Print the segment timeline of a composition.
    Timeline(CompArgs),
    /// Evaluate a single frame and print its descriptor as JSON.
    Frame(FrameArgs),
    /// Evaluate a frame range into a JSON-lines file.
    Render(RenderArgs),
    /// Print the voiceover script and pin description.
    Script(CompArgs),
}

#[derive(Args, Debug)]
struct CompArgs {
    /// Brand id.
    #[arg(long)]
    brand: String,

    /// Content override JSON.
    #[arg(long)]
    content: Option<PathBuf>,

    /// Render config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct AssetArgs {
    /// Check that every local image and the voiceover exist under this directory first.
    #[arg(long)]
    assets_root: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    comp: CompArgs,

    #[command(flatten)]
    assets: AssetArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    comp: CompArgs,

    #[command(flatten)]
    assets: AssetArgs,

    /// Output JSON-lines path.
    #[arg(long)]
    out: PathBuf,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive); defaults to the composition end.
    #[arg(long)]
    end: Option<u64>,

    /// Evaluate frames on a rayon thread pool.
    #[arg(long)]
    parallel: bool,

    /// Worker threads (defaults to the number of CPUs).
    #[arg(long)]
    threads: Option<usize>,

    /// Frames per chunk.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let registry = load_registry(cli.registry.as_deref())?;
    match cli.cmd {
        Command::Brands => cmd_brands(&registry),
        Command::Timeline(args) => cmd_timeline(&registry, args),
        Command::Frame(args) => cmd_frame(&registry, args),
        Command::Render(args) => cmd_render(&registry, args),
        Command::Script(args) => cmd_script(&registry, args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn load_registry(path: Option<&Path>) -> anyhow::Result<brandreel::BrandRegistry> {
    match path {
        Some(p) => brandreel::BrandRegistry::from_path(p)
            .with_context(|| format!("load brand registry '{}'", p.display())),
        None => Ok(brandreel::BrandRegistry::builtin()),
    }
}

fn load_composer(
    registry: &brandreel::BrandRegistry,
    args: &CompArgs,
) -> anyhow::Result<brandreel::Composer> {
    let config = match &args.config {
        Some(p) => brandreel::ReelConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display()))?,
        None => brandreel::ReelConfig::default(),
    };
    let over = match &args.content {
        Some(p) => Some(
            brandreel::ContentOverride::from_path(p)
                .with_context(|| format!("load content '{}'", p.display()))?,
        ),
        None => None,
    };
    brandreel::Composer::new(registry, &args.brand, &config, over.as_ref())
        .with_context(|| format!("prepare composition for brand '{}'", args.brand))
}

fn create_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn check_assets(composer: &brandreel::Composer, args: &AssetArgs) -> anyhow::Result<()> {
    match &args.assets_root {
        Some(root) => {
            brandreel::PreparedAssets::prepare(composer.content(), root)
                .with_context(|| format!("prepare assets under '{}'", root.display()))?;
        }
        None => tracing::warn!(
            brand = %composer.brand().id,
            "no --assets-root given; local image and voiceover sources are not checked"
        ),
    }
    Ok(())
}

fn cmd_brands(registry: &brandreel::BrandRegistry) -> anyhow::Result<()> {
    for brand in registry.iter() {
        println!("{}\t{}", brand.id, brand.display_name);
    }
    Ok(())
}

fn cmd_timeline(registry: &brandreel::BrandRegistry, args: CompArgs) -> anyhow::Result<()> {
    let composer = load_composer(registry, &args)?;
    let fps = composer.config().fps;
    for seg in composer.timeline().segments() {
        println!(
            "{:<8} {:>5} {:>5} {:>6.2}s",
            seg.kind.label(),
            seg.range.start.0,
            seg.range.end.0,
            fps.frames_to_secs(seg.duration())
        );
    }
    println!("total    {:>5} frames", composer.duration());
    Ok(())
}

fn cmd_frame(registry: &brandreel::BrandRegistry, args: FrameArgs) -> anyhow::Result<()> {
    let composer = load_composer(registry, &args.comp)?;
    check_assets(&composer, &args.assets)?;
    let frame = composer
        .render(brandreel::FrameIndex(args.frame))
        .with_context(|| format!("render frame {}", args.frame))?;
    let json = serde_json::to_string_pretty(&frame).context("serialize frame descriptor")?;

    match &args.out {
        Some(out) => {
            create_parent_dir(out)?;
            std::fs::write(out, json + "\n")
                .with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }

    let fp = brandreel::fingerprint_frame(&frame)?;
    tracing::info!(frame = args.frame, fingerprint = %fp, "frame rendered");
    Ok(())
}

fn cmd_render(registry: &brandreel::BrandRegistry, args: RenderArgs) -> anyhow::Result<()> {
    let composer = load_composer(registry, &args.comp)?;
    check_assets(&composer, &args.assets)?;

    let end = args.end.unwrap_or_else(|| composer.duration());
    let range = brandreel::FrameRange::new(
        brandreel::FrameIndex(args.start),
        brandreel::FrameIndex(end),
    )?;
    let threading = brandreel::RenderThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };

    create_parent_dir(&args.out)?;
    let mut sink = brandreel::JsonLinesSink::create(&args.out)?;
    let stats = brandreel::render_range_to_sink(&composer, range, &threading, &mut sink)
        .with_context(|| format!("render frames {}..{end}", args.start))?;

    eprintln!(
        "wrote {} frames to {} (digest {})",
        stats.frames_total,
        args.out.display(),
        stats.digest
    );
    Ok(())
}

fn cmd_script(registry: &brandreel::BrandRegistry, args: CompArgs) -> anyhow::Result<()> {
    let composer = load_composer(registry, &args)?;
    println!("{}", brandreel::voiceover_script(composer.content()));
    println!();
    println!(
        "{}",
        brandreel::pin_description(composer.brand(), composer.content())
    );
    Ok(())
}
