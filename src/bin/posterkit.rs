use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "posterkit", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract a color palette from an image.
    Palette(PaletteArgs),
    /// Find the largest font size that keeps a text line within a width.
    Fit(FitArgs),
    /// Compute the track-list sizing for a poster document.
    Tracks(TracksArgs),
}

#[derive(Parser, Debug)]
struct PaletteArgs {
    /// Input image (any format the `image` crate decodes).
    #[arg(long)]
    image: PathBuf,

    /// Number of colors to extract.
    #[arg(long, default_value_t = 5)]
    colors: usize,

    /// Clustering seed; the same image and seed give the same palette.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Sort the output lightest-first instead of centroid order.
    #[arg(long)]
    sorted: bool,
}

#[derive(Parser, Debug)]
struct FitArgs {
    /// Font file (TTF/OTF) to measure with.
    #[arg(long)]
    font: PathBuf,

    /// Text to fit.
    #[arg(long)]
    text: String,

    /// Target width in pixels.
    #[arg(long)]
    width: f64,

    /// Minimum font size in pixels.
    #[arg(long, default_value_t = posterkit::DEFAULT_MIN_FIT_PX)]
    min: u32,

    /// Treat the width as an explicit cap (container mode) instead of a live
    /// line width.
    #[arg(long)]
    max_width: bool,
}

#[derive(Parser, Debug)]
struct TracksArgs {
    /// Poster document JSON.
    #[arg(long)]
    poster: PathBuf,

    /// Font file (TTF/OTF) to measure with.
    #[arg(long)]
    font: PathBuf,

    /// Track list container width in pixels.
    #[arg(long)]
    width: f64,

    /// Track list container height in pixels.
    #[arg(long)]
    height: f64,

    /// Container root font size in pixels.
    #[arg(long, default_value_t = 16.0)]
    font_px: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Palette(args) => cmd_palette(args),
        Command::Fit(args) => cmd_fit(args),
        Command::Tracks(args) => cmd_tracks(args),
    }
}

fn cmd_palette(args: PaletteArgs) -> anyhow::Result<()> {
    let img = image::open(&args.image)
        .with_context(|| format!("open image '{}'", args.image.display()))?;

    let mut palette = posterkit::extract_palette(&img, args.colors, args.seed);
    if args.sorted {
        posterkit::sort_by_lightness(&mut palette);
    }

    println!("{}", serde_json::to_string_pretty(&palette)?);
    Ok(())
}

fn load_measurer(font_path: &Path, family: &str) -> anyhow::Result<posterkit::ParleyMeasurer> {
    let bytes =
        fs::read(font_path).with_context(|| format!("read font '{}'", font_path.display()))?;
    let mut measurer = posterkit::ParleyMeasurer::new();
    measurer.register_font(family, &bytes)?;
    Ok(measurer)
}

fn cmd_fit(args: FitArgs) -> anyhow::Result<()> {
    let mut measurer = load_measurer(&args.font, "cli")?;
    let ctx = posterkit::MeasurementContext::new("cli", args.text);

    let fitted = if args.max_width {
        posterkit::fit_to_width(&mut measurer, &ctx, args.width, args.min)?
    } else {
        posterkit::fit_to_line(&mut measurer, &ctx, args.width, args.min)?
    };

    match fitted {
        Some(px) => println!("{}", serde_json::json!({ "font_px": px })),
        None => anyhow::bail!("nothing to fit (empty text or non-positive width)"),
    }
    Ok(())
}

fn cmd_tracks(args: TracksArgs) -> anyhow::Result<()> {
    let doc = fs::read_to_string(&args.poster)
        .with_context(|| format!("read poster '{}'", args.poster.display()))?;
    let poster: posterkit::Poster =
        serde_json::from_str(&doc).with_context(|| "parse poster JSON")?;

    let family = poster.font.family_name();
    let mut measurer = load_measurer(&args.font, family)?;

    let titles = poster.album.display_tracks();
    let ctx = posterkit::TrackListContext {
        container_width: args.width,
        container_height: args.height,
        container_font_px: args.font_px,
    };
    let mut list =
        posterkit::ParleyTrackList::new(&mut measurer, &titles, family, args.width, args.height);

    let sizing = posterkit::scale_track_list(&mut list, &titles, &ctx, poster.track_scale)?
        .context("poster has no tracks or the container is unsized")?;

    println!("{}", serde_json::to_string_pretty(&sizing)?);
    Ok(())
}
