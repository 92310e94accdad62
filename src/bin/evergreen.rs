use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "evergreen", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hold a formation state for a while and report the final frame.
    Simulate(SimulateArgs),
    /// Rasterize the silhouette text and write the coverage mask as a PNG.
    Text(TextArgs),
    /// Print the decoded photo manifest.
    Manifest(ManifestArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Engine configuration JSON (defaults to the reference scene).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Target the cone formation instead of the scattered cloud.
    #[arg(long)]
    formed: bool,

    /// Morph the foliage into the text silhouette.
    #[arg(long)]
    text: bool,

    /// Rotation speed while formed (radians per second).
    #[arg(long, default_value_t = 0.3)]
    rotation_speed: f32,

    /// Extra rotation speed while formed.
    #[arg(long, default_value_t = 0.0)]
    boost: f32,

    /// Simulated duration in seconds.
    #[arg(long, default_value_t = 10.0)]
    seconds: f64,

    /// Ticks per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Pointer position `x,y` in `[0, 1]` to click on the final tick.
    #[arg(long, value_parser = parse_pointer)]
    click: Option<evergreen::Vec2>,

    /// Write the final frame as JSON.
    #[arg(long)]
    out_json: Option<PathBuf>,

    /// Write a point-splat preview of the final frame as PNG.
    #[arg(long)]
    out_png: Option<PathBuf>,

    /// Preview size in pixels.
    #[arg(long, default_value_t = 800)]
    size: u32,
}

#[derive(Parser, Debug)]
struct TextArgs {
    /// Engine configuration JSON (defaults to the reference scene).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured text.
    #[arg(long)]
    text: Option<String>,

    /// Bundled font file to use instead of the system lookup.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Output PNG path for the coverage mask.
    #[arg(long)]
    out: PathBuf,

    /// Print the resolved font family and the SHA-256 of the font bytes.
    #[arg(long)]
    dump_font: bool,
}

#[derive(Parser, Debug)]
struct ManifestArgs {
    /// Engine configuration JSON (defaults to the reference scene).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Text(args) => cmd_text(args),
        Command::Manifest(args) => cmd_manifest(args),
    }
}

fn parse_pointer(s: &str) -> Result<evergreen::Vec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got '{s}'"))?;
    let x = x
        .trim()
        .parse::<f32>()
        .map_err(|e| format!("pointer x: {e}"))?;
    let y = y
        .trim()
        .parse::<f32>()
        .map_err(|e| format!("pointer y: {e}"))?;
    Ok(evergreen::Vec2::new(x, y))
}

fn load_config(path: Option<&Path>) -> anyhow::Result<evergreen::EngineConfig> {
    let cfg = match path {
        Some(path) => evergreen::EngineConfig::from_path(path)
            .with_context(|| format!("load engine config '{}'", path.display()))?,
        None => evergreen::EngineConfig::default(),
    };
    cfg.validate()?;
    Ok(cfg)
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let fps = evergreen::Fps::new(args.fps, 1)?;
    if !args.seconds.is_finite() || args.seconds < 0.0 {
        anyhow::bail!("--seconds must be finite and >= 0");
    }

    let snapshot = Arc::new(evergreen::FormationSnapshot::build(&cfg)?);
    if let evergreen::TextSource::TreeFallback { reason } = &snapshot.text_source {
        eprintln!("text formation unavailable, using tree: {reason}");
    }

    let camera = evergreen::Camera::default();
    let mut driver = evergreen::BlendDriver::new(Arc::clone(&snapshot), &cfg);
    let state = if args.formed {
        evergreen::FormationState::Formed
    } else {
        evergreen::FormationState::Scattered
    };
    let dt = fps.frame_duration_secs() as f32;
    let ticks = fps.ticks_for_secs(args.seconds).max(1);

    let mut input = evergreen::TickInput {
        state,
        text_mode: args.text,
        rotation_speed: args.rotation_speed,
        rotation_boost: args.boost,
        view_proj: camera.view_proj(),
        ..evergreen::TickInput::default()
    };
    for tick in 0..ticks {
        input = input.advanced(dt);
        if tick + 1 == ticks
            && let Some(pointer) = args.click
        {
            input.pointer = Some(pointer);
            input.selection_trigger += 1;
        }
        driver.tick(&input);
    }

    let frame = driver.output();
    println!(
        "ticks={} elapsed={:.3}s formed={:.4} text={:.4} rotation={:.4}",
        driver.ticks(),
        frame.elapsed,
        frame.formed_progress,
        frame.text_progress,
        frame.rotation
    );
    println!(
        "foliage={} lights={} photos={} guide={}",
        frame.foliage.len(),
        frame.lights.len(),
        frame.photos.len(),
        frame.guide_visible
    );
    if args.click.is_some() {
        println!("selected={}", driver.selected().unwrap_or("-"));
    }

    if let Some(path) = &args.out_json {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(f), frame)
            .with_context(|| format!("write frame JSON '{}'", path.display()))?;
        eprintln!("wrote {}", path.display());
    }

    if let Some(path) = &args.out_png {
        let img =
            evergreen::render_preview(frame, &camera, cfg.scene_offset, args.size, args.size)?;
        evergreen::write_png(path, &img)?;
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_text(args: TextArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let mut text_cfg = cfg.text.unwrap_or_default();
    if let Some(text) = args.text {
        text_cfg.text = text;
    }
    if let Some(font) = args.font {
        text_cfg.font_path = Some(font);
    }

    let (mask, font) = evergreen::render_mask(&text_cfg)
        .with_context(|| format!("render text '{}'", text_cfg.text))?;

    if args.dump_font {
        eprintln!("text font diagnostics:");
        eprintln!("    family:      {}", font.family);
        eprintln!("    face_index:  {}", font.index);
        eprintln!("    bytes:       {}", font.data.len());
        eprintln!("    sha256:      {}", sha256_hex(font.data.as_slice()));
    }

    let pool = evergreen::CandidatePool::scan(&mask, text_cfg.stride, text_cfg.threshold);
    println!(
        "text='{}' family='{}' lit_pixels={} candidates={}",
        text_cfg.text,
        font.family,
        mask.lit_pixels(),
        pool.len()
    );

    let img = evergreen::mask_image(&mask)?;
    evergreen::write_gray_png(&args.out, &img)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_manifest(args: ManifestArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let photos = evergreen::FormationSnapshot::layout(&cfg)?.photos;

    for p in &photos {
        let t = p.tree_position;
        println!(
            "{:<10} {} y={:>6.2} r={:>5.2} scale={:.3} {}",
            p.id,
            p.image_ref,
            t.y,
            t.x.hypot(t.z),
            p.scale,
            p.label.as_deref().unwrap_or("")
        );
    }
    println!("photos={}", photos.len());
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{b:02x}"));
    }
    out
}
