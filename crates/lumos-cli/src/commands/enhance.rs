use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use lumos_core::io::image_io::{enhanced_file_name, load_bitmap, save_png};
use lumos_core::pipeline::{run_reported, PipelineStage, ProgressReporter};
use lumos_core::{stats, Interpolation, ParameterSet};

use crate::summary::{print_parameter_summary, print_stats_comparison, print_warnings};

#[derive(Args)]
pub struct EnhanceArgs {
    /// Input image file (PNG, JPEG or TIFF)
    pub file: PathBuf,

    /// Parameter file (TOML); flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Upscale factor (1.0-4.0)
    #[arg(long)]
    pub scale: Option<f32>,

    /// Upscaling kernel: nearest, bilinear, bicubic or lanczos
    #[arg(long)]
    pub interpolation: Option<Interpolation>,

    /// Brightness multiplier (0.5-2.0)
    #[arg(long)]
    pub brightness: Option<f32>,

    /// Contrast multiplier around mid-gray (0.5-2.0)
    #[arg(long)]
    pub contrast: Option<f32>,

    /// Saturation multiplier (0.0-2.0, 0 = grayscale)
    #[arg(long)]
    pub saturation: Option<f32>,

    /// Sharpness (0.5-3.0, values up to 1.0 leave the image unchanged)
    #[arg(long)]
    pub sharpness: Option<f32>,

    /// Noise reduction level (0.0-1.0, 0 = off)
    #[arg(long)]
    pub noise_reduction: Option<f32>,

    /// Output PNG path [default: enhanced_<name>.png next to the input]
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Drives an indicatif spinner from pipeline stage events.
struct SpinnerReporter {
    pb: ProgressBar,
}

impl SpinnerReporter {
    fn new() -> Result<Self> {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}")?);
        pb.enable_steady_tick(Duration::from_millis(80));
        Ok(Self { pb })
    }
}

impl ProgressReporter for SpinnerReporter {
    fn begin_stage(&self, stage: PipelineStage) {
        self.pb.set_message(format!("{stage}..."));
    }

    fn finish_stage(&self) {
        self.pb.inc(1);
    }
}

pub fn run(args: &EnhanceArgs) -> Result<()> {
    let params = build_params(args)?;
    params.validate().context("Invalid enhancement parameters")?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| enhanced_file_name(&args.file));

    let bitmap = load_bitmap(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    print_parameter_summary(&args.file, &output, bitmap.mode(), &params);

    let reporter = SpinnerReporter::new()?;
    let result = run_reported(&bitmap, &params, &reporter);
    let enhanced = match result {
        Ok(enhanced) => {
            reporter
                .pb
                .finish_with_message(format!("Done ({} stages)", enhanced.applied.len()));
            enhanced
        }
        Err(err) => {
            reporter.pb.abandon_with_message("Failed");
            return Err(err).context("Enhancement failed");
        }
    };

    print_stats_comparison(&stats::compute(&bitmap), &stats::compute(&enhanced.bitmap));
    print_warnings(&enhanced.warnings);

    save_png(&enhanced.bitmap, &output)
        .with_context(|| format!("Failed to save {}", output.display()))?;
    println!("Output saved to {}", output.display());

    Ok(())
}

/// Identity defaults, then the TOML file, then individual flags.
fn build_params(args: &EnhanceArgs) -> Result<ParameterSet> {
    let mut params = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid parameter file")?
    } else {
        ParameterSet::defaults()
    };

    if let Some(scale) = args.scale {
        params.scale_factor = scale;
    }
    if let Some(interpolation) = args.interpolation {
        params.interpolation = interpolation;
    }
    if let Some(brightness) = args.brightness {
        params.brightness = brightness;
    }
    if let Some(contrast) = args.contrast {
        params.contrast = contrast;
    }
    if let Some(saturation) = args.saturation {
        params.saturation = saturation;
    }
    if let Some(sharpness) = args.sharpness {
        params.sharpness = sharpness;
    }
    if let Some(noise_reduction) = args.noise_reduction {
        params.noise_reduction = noise_reduction;
    }

    Ok(params)
}
