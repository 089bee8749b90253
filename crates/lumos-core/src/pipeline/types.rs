use crate::bitmap::Bitmap;
use crate::denoise::DenoiseFallbackWarning;

/// Pipeline processing stage, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    Resample,
    Brightness,
    Contrast,
    Saturation,
    Sharpen,
    Denoise,
}

impl PipelineStage {
    pub const ORDER: [PipelineStage; 6] = [
        PipelineStage::Resample,
        PipelineStage::Brightness,
        PipelineStage::Contrast,
        PipelineStage::Saturation,
        PipelineStage::Sharpen,
        PipelineStage::Denoise,
    ];
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resample => write!(f, "Resampling"),
            Self::Brightness => write!(f, "Adjusting brightness"),
            Self::Contrast => write!(f, "Adjusting contrast"),
            Self::Saturation => write!(f, "Adjusting saturation"),
            Self::Sharpen => write!(f, "Sharpening"),
            Self::Denoise => write!(f, "Reducing noise"),
        }
    }
}

/// Result of a pipeline run with its metadata.
#[derive(Clone, Debug)]
pub struct PipelineOutput {
    pub bitmap: Bitmap,
    /// Stages that actually ran, in order. Identity stages are absent.
    pub applied: Vec<PipelineStage>,
    /// Non-fatal notices, such as a denoise fallback.
    pub warnings: Vec<DenoiseFallbackWarning>,
}

/// Thread-safe progress reporting for the pipeline.
///
/// Implementors can use this to drive progress bars, logging, or any other
/// UI feedback. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A stage is about to run. Skipped stages are never announced.
    fn begin_stage(&self, _stage: PipelineStage) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when `run` delegates.
pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
