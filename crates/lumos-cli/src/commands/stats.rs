use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use lumos_core::io::image_io::load_bitmap;
use lumos_core::stats;

use crate::summary::print_stats;

#[derive(Args)]
pub struct StatsArgs {
    /// Input image file (PNG, JPEG or TIFF)
    pub file: PathBuf,
}

pub fn run(args: &StatsArgs) -> Result<()> {
    let bitmap = load_bitmap(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    print_stats(&args.file, bitmap.mode(), &stats::compute(&bitmap));
    Ok(())
}
