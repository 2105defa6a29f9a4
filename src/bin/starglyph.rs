use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "starglyph", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the computed grid layout as JSON.
    Layout(LayoutArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a numbered PNG sequence.
    Sequence(SequenceArgs),
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Dataset file (CSV with a header row, or `.json` array of arrays).
    #[arg(long)]
    data: PathBuf,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Viewport height in pixels (the canvas height is derived from the grid).
    #[arg(long, default_value_t = 720.0)]
    height: f64,

    /// Optional JSON file overriding layout, star and palette constants.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    #[command(flatten)]
    scene: SceneArgs,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Elapsed time since start, in milliseconds.
    #[arg(long, default_value_t = 0.0)]
    time_ms: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SequenceArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Number of frames to render.
    #[arg(long)]
    frames: u64,

    /// Frame rate, as `60` or `30000/1001`.
    #[arg(long, default_value = "60")]
    fps: String,

    /// Evaluate stars on the rayon thread pool.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Output directory for `frame_00000.png`, `frame_00001.png`, ...
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(serde::Serialize)]
struct LayoutSummary {
    canvas_width: f64,
    canvas_height: f64,
    columns: usize,
    rows: usize,
    outer_padding_x: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    header: Option<Vec<String>>,
    glyphs: Vec<GlyphSummary>,
}

#[derive(serde::Serialize)]
struct GlyphSummary {
    index: usize,
    center: [f64; 2],
    scale: f64,
    vertices: usize,
}

fn main() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Sequence(args) => cmd_sequence(args),
    }
}

fn load_starfield(args: &SceneArgs) -> anyhow::Result<starglyph::Starfield> {
    let dataset = starglyph::Dataset::from_path(&args.data)
        .with_context(|| format!("load dataset '{}'", args.data.display()))?;
    let config = match &args.config {
        Some(path) => starglyph::SceneConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => starglyph::SceneConfig::default(),
    };
    let viewport = starglyph::Viewport::new(args.width, args.height)?;
    Ok(starglyph::Starfield::new(dataset, viewport, config)?)
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let field = load_starfield(&args.scene)?;
    let generation = field.current();
    let layout = generation.layout();

    let summary = LayoutSummary {
        canvas_width: layout.canvas_width,
        canvas_height: layout.canvas_height,
        columns: layout.columns,
        rows: layout.rows,
        outer_padding_x: layout.outer_padding_x,
        header: field.dataset().header().map(<[String]>::to_vec),
        glyphs: generation
            .glyphs()
            .iter()
            .map(|g| GlyphSummary {
                index: g.index.0,
                center: [g.center.x, g.center.y],
                scale: g.scale,
                vertices: g.vertices.len(),
            })
            .collect(),
    };

    let json = serde_json::to_string_pretty(&summary).context("serialize layout summary")?;
    println!("{json}");
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let field = load_starfield(&args.scene)?;
    let mut renderer = starglyph::CpuRenderer::new();
    let frame = renderer.render_frame(&field.current(), args.time_ms)?;

    write_png(&args.out, &frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    let fps: starglyph::Fps = args.fps.parse()?;
    let field = load_starfield(&args.scene)?;
    let generation = field.current();
    let mut renderer = starglyph::CpuRenderer::new().with_parallel_stars(args.parallel);

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    for i in 0..args.frames {
        let frame = renderer.render_frame(&generation, fps.frames_to_ms(i))?;
        let path = args.out_dir.join(format!("frame_{i:05}.png"));
        write_png(&path, &frame)?;
    }

    eprintln!(
        "wrote {} frames to {}",
        args.frames,
        args.out_dir.display()
    );
    Ok(())
}

fn write_png(path: &Path, frame: &starglyph::FrameRGBA) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let straight = frame.to_straight();
    image::save_buffer_with_format(
        path,
        &straight.data,
        straight.width,
        straight.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}
