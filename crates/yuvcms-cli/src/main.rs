//! yuvcms - recolor raw YUV video through the baked transform table.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "yuvcms")]
#[command(author, version, about = "Bake-and-apply YUV color correction for raw video")]
#[command(long_about = "
Recolors studio-range BT.601 YCbCr video for the reference display by
pushing every pixel through a precomputed 256^3 lookup table.

Examples:
  yuvcms convert in.yuv -o out.yuv -f i420 -W 720 -H 480
  yuvcms table                         # warm the table, print spot checks
  yuvcms matrices                      # dump the composed matrices
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Recolor a raw YUV stream frame by frame
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Build the transform table and print spot-check values
    Table,

    /// Print the composed transform matrices
    Matrices,
}

#[derive(Args)]
struct ConvertArgs {
    /// Input raw YUV file, or `-` for stdin
    input: PathBuf,

    /// Output file
    #[arg(short, long)]
    output: PathBuf,

    /// Pixel layout: i420, yuy2, uyvy, ayuv
    #[arg(short, long)]
    format: String,

    /// Frame width in pixels
    #[arg(short = 'W', long)]
    width: u32,

    /// Frame height in pixels
    #[arg(short = 'H', long)]
    height: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Convert(args) => commands::convert(&args),
        Commands::Table => commands::table(),
        Commands::Matrices => commands::matrices(),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
