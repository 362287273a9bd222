//! dichroma - simulate dichromatic color vision from the command line

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "dichroma")]
#[command(author, version, about = "Simulate how dichromats see colors")]
#[command(long_about = "
Simulates dichromatic color vision (protanopia by default) for single
colors, raw RGBA images and synthetic sweeps of the RGB cube.

Examples:
  dichroma simulate '#ff0000' 0,128,255    # Simulate colors
  dichroma curve                           # Show model constants
  dichroma image photo.rgba -W 640 -H 480  # Raw RGBA image + RMSD score
  dichroma sweep --step 15                 # RMSD over the RGB cube
  dichroma --profile deutan.yaml simulate 10,200,30
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// Dichromacy profile (YAML); protanopia when omitted
    #[arg(long, global = true)]
    profile: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate individual colors
    #[command(visible_alias = "s")]
    Simulate(SimulateArgs),

    /// Print white point, primaries and vision curve
    Curve,

    /// Simulate a raw RGBA8 image and score the difference
    #[command(visible_alias = "i")]
    Image(ImageArgs),

    /// Simulate a synthetic sample of the RGB cube
    Sweep(SweepArgs),
}

/// Arguments for the `simulate` command.
#[derive(Args)]
struct SimulateArgs {
    /// Colors as #rrggbb, rrggbb or r,g,b
    #[arg(required = true)]
    colors: Vec<String>,
}

/// Arguments for the `image` command.
#[derive(Args)]
struct ImageArgs {
    /// Raw RGBA8 input, row-major, no header
    input: PathBuf,

    /// Image width in pixels
    #[arg(short = 'W', long)]
    width: u32,

    /// Image height in pixels
    #[arg(short = 'H', long)]
    height: u32,

    /// Output image (default: <input stem>-proto.rgba)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Score file (default: <input stem>-proto.rmsd); skips work if present
    #[arg(long)]
    score_file: Option<PathBuf>,

    /// Run on one thread
    #[arg(long)]
    sequential: bool,
}

/// Arguments for the `sweep` command.
#[derive(Args)]
struct SweepArgs {
    /// Distance between sampled channel values
    #[arg(short, long, default_value = "17", value_parser = clap::value_parser!(u8).range(1..))]
    step: u8,

    /// Write `<rmsd>,"<label>"` here; skips work if the file exists
    #[arg(long)]
    score_file: Option<PathBuf>,

    /// Label written next to the score
    #[arg(long, default_value = "sweep")]
    label: String,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let simulator = commands::load_simulator(cli.profile.as_deref())?;

    match cli.command {
        Commands::Simulate(args) => commands::simulate::run(args, &simulator, cli.verbose),
        Commands::Curve => commands::curve::run(&simulator),
        Commands::Image(args) => commands::image::run(args, &simulator, cli.verbose),
        Commands::Sweep(args) => commands::sweep::run(args, &simulator, cli.verbose),
    }
}
