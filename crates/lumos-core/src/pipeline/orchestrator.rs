use std::borrow::Cow;

use tracing::{debug, info};

use crate::bitmap::Bitmap;
use crate::denoise::DenoiseSelector;
use crate::error::Result;
use crate::filters::levels::{adjust_brightness, adjust_contrast, adjust_saturation};
use crate::filters::resample::resample;
use crate::filters::unsharp_mask::sharpen;

use super::config::ParameterSet;
use super::types::{NoOpReporter, PipelineOutput, PipelineStage, ProgressReporter};

/// Enhance a bitmap. Parameters are validated before any stage runs.
pub fn run(bitmap: &Bitmap, params: &ParameterSet) -> Result<Bitmap> {
    run_detailed(bitmap, params).map(|output| output.bitmap)
}

/// Enhance a bitmap and report which stages ran and any non-fatal warnings.
pub fn run_detailed(bitmap: &Bitmap, params: &ParameterSet) -> Result<PipelineOutput> {
    run_reported(bitmap, params, &NoOpReporter)
}

/// Run the full pipeline with a progress reporter.
///
/// Stages run in a fixed order: resample, brightness, contrast, saturation,
/// sharpen, denoise. A stage whose parameter is at its identity value is
/// skipped, and the bitmap passes through without being copied.
pub fn run_reported(
    bitmap: &Bitmap,
    params: &ParameterSet,
    reporter: &dyn ProgressReporter,
) -> Result<PipelineOutput> {
    params.validate()?;

    if params.is_identity() {
        debug!("Identity parameters, returning input unchanged");
        return Ok(PipelineOutput {
            bitmap: bitmap.clone(),
            applied: Vec::new(),
            warnings: Vec::new(),
        });
    }

    let mut current = Cow::Borrowed(bitmap);
    let mut applied = Vec::new();
    let mut warnings = Vec::new();

    for stage in PipelineStage::ORDER {
        if !stage_enabled(stage, bitmap, params) {
            debug!(%stage, "Skipping identity stage");
            continue;
        }

        reporter.begin_stage(stage);
        let next = match stage {
            PipelineStage::Resample => {
                resample(&current, params.scale_factor, params.interpolation)?
            }
            PipelineStage::Brightness => adjust_brightness(&current, params.brightness)?,
            PipelineStage::Contrast => adjust_contrast(&current, params.contrast)?,
            PipelineStage::Saturation => adjust_saturation(&current, params.saturation)?,
            PipelineStage::Sharpen => sharpen(&current, params.sharpness)?,
            PipelineStage::Denoise => {
                let denoised =
                    DenoiseSelector::default().denoise(&current, params.noise_reduction)?;
                warnings.extend(denoised.warning);
                denoised.bitmap
            }
        };
        reporter.finish_stage();
        debug!(%stage, "Stage applied");

        current = Cow::Owned(next);
        applied.push(stage);
    }

    let bitmap = current.into_owned();
    info!(
        width = bitmap.width(),
        height = bitmap.height(),
        stages = applied.len(),
        "Enhancement complete"
    );

    Ok(PipelineOutput {
        bitmap,
        applied,
        warnings,
    })
}

fn stage_enabled(stage: PipelineStage, bitmap: &Bitmap, params: &ParameterSet) -> bool {
    match stage {
        PipelineStage::Resample => params.scale_factor != 1.0,
        PipelineStage::Brightness => params.brightness != 1.0,
        PipelineStage::Contrast => params.contrast != 1.0,
        PipelineStage::Saturation => params.saturation != 1.0 && bitmap.channels() > 1,
        PipelineStage::Sharpen => params.sharpness > 1.0,
        PipelineStage::Denoise => params.noise_reduction > 0.0,
    }
}
