mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lumos", about = "Photo enhancement tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upscale, adjust, sharpen and denoise an image
    Enhance(commands::enhance::EnhanceArgs),
    /// Show size and brightness statistics of an image
    Stats(commands::stats::StatsArgs),
    /// Print or save the default enhancement parameters as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Enhance(args) => commands::enhance::run(args),
        Commands::Stats(args) => commands::stats::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
