use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "seammask", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the seam mask as an RGB PNG.
    Mask(MaskArgs),
    /// Print the tile grids and seam bands as JSON.
    Grid(GridArgs),
}

#[derive(Args, Debug)]
struct ParamArgs {
    /// JSON parameter file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Image width in pixels.
    #[arg(long)]
    image_width: Option<u32>,

    /// Image height in pixels.
    #[arg(long)]
    image_height: Option<u32>,

    /// Tile width of the tiled pass.
    #[arg(long)]
    tile_width: Option<u32>,

    /// Tile height of the tiled pass.
    #[arg(long)]
    tile_height: Option<u32>,

    /// Tile overlap of the tiled pass.
    #[arg(long)]
    overlap: Option<u32>,

    /// Seam band width in pixels.
    #[arg(long)]
    seam_width: Option<u32>,

    /// Band weighting.
    #[arg(long, value_enum)]
    mode: Option<ModeChoice>,

    /// Reject out-of-range values instead of clamping them.
    #[arg(long)]
    no_clamp: bool,
}

#[derive(Args, Debug)]
struct MaskArgs {
    #[command(flatten)]
    params: ParamArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Fill rows in parallel.
    #[arg(long)]
    parallel: bool,

    /// Print the SHA-256 of the raw f32 mask values.
    #[arg(long)]
    digest: bool,
}

#[derive(Args, Debug)]
struct GridArgs {
    #[command(flatten)]
    params: ParamArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Binary,
    Gradient,
}

impl From<ModeChoice> for seammask::MaskMode {
    fn from(m: ModeChoice) -> Self {
        match m {
            ModeChoice::Binary => Self::Binary,
            ModeChoice::Gradient => Self::Gradient,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Mask(args) => cmd_mask(args),
        Command::Grid(args) => cmd_grid(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_params_json(path: &Path) -> anyhow::Result<seammask::SeamMaskParams> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read params '{}'", path.display()))?;
    let params = seammask::SeamMaskParams::from_json_str(&text)
        .with_context(|| format!("parse params '{}'", path.display()))?;
    Ok(params)
}

fn resolve_params(args: &ParamArgs) -> anyhow::Result<seammask::SeamMaskParams> {
    let mut p = match &args.config {
        Some(path) => read_params_json(path)?,
        None => seammask::SeamMaskParams::default(),
    };
    if let Some(v) = args.image_width {
        p.image_width = v;
    }
    if let Some(v) = args.image_height {
        p.image_height = v;
    }
    if let Some(v) = args.tile_width {
        p.tile_width = v;
    }
    if let Some(v) = args.tile_height {
        p.tile_height = v;
    }
    if let Some(v) = args.overlap {
        p.overlap = v;
    }
    if let Some(v) = args.seam_width {
        p.seam_width = v;
    }
    if let Some(m) = args.mode {
        p.mode = m.into();
    }

    if args.no_clamp {
        p.validate()?;
        return Ok(p);
    }
    let clamped = p.clamped();
    if clamped != p {
        tracing::warn!(?p, ?clamped, "parameters clamped into range");
    }
    Ok(clamped)
}

fn cmd_mask(args: MaskArgs) -> anyhow::Result<()> {
    let params = resolve_params(&args.params)?;
    let settings = seammask::RasterSettings {
        parallel: args.parallel,
    };
    let mask = seammask::generate_with(&params, settings);

    if args.digest {
        println!("{}", sha256_hex(&mask.to_le_bytes()));
    }

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let img = mask.to_rgb8()?;
    img.save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_grid(args: GridArgs) -> anyhow::Result<()> {
    let params = resolve_params(&args.params)?;
    let plan = seammask::plan_seams(&params);
    let json = serde_json::to_string_pretty(&plan).context("serialize seam plan")?;
    println!("{json}");
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
