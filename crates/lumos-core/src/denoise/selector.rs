use thiserror::Error;
use tracing::{debug, warn};

use crate::bitmap::Bitmap;
use crate::consts::{
    HEAVY_FINISH_SIGMA_PER_LEVEL, NLM_MAX_PIXELS, NLM_PATCH_RADIUS, NLM_SEARCH_RADIUS,
    NLM_STRENGTH_PER_LEVEL,
};
use crate::error::{EnhanceError, Result};
use crate::filters::gaussian_blur::gaussian_blur;

use super::bilateral::{bilateral_filter, BilateralParams};
use super::non_local_means::{non_local_means, NlmParams};

/// The heavy denoise algorithm failed and a Gaussian blur was used instead.
///
/// This is reported alongside a successful result, never as an error.
#[derive(Error, Clone, Debug, PartialEq)]
#[error("heavy denoising at level {level} failed ({reason}); used Gaussian blur with sigma {sigma}")]
pub struct DenoiseFallbackWarning {
    pub level: f32,
    pub sigma: f32,
    pub reason: String,
}

/// Output of a denoise pass: the bitmap plus an optional fallback notice.
#[derive(Clone, Debug)]
pub struct Denoised {
    pub bitmap: Bitmap,
    pub warning: Option<DenoiseFallbackWarning>,
}

/// How a tier smooths, and how its strength follows the noise level.
#[derive(Clone, Debug, PartialEq)]
pub enum DenoiseStrategy {
    /// Gaussian blur with `sigma = level * sigma_per_level`.
    Gaussian { sigma_per_level: f32 },
    /// Edge-aware bilateral filter with fixed parameters.
    Bilateral(BilateralParams),
    /// Optional bilateral pre-pass, then non-local means with
    /// `h = strength_per_level * (level - tier.lower)`, then a Gaussian blur
    /// with `sigma = finish_sigma_per_level * (level - tier.lower)`.
    /// The finishing blur keeps output smoothness growing with the level once
    /// non-local means alone has flattened the noise.
    NonLocalMeans {
        prefilter: Option<BilateralParams>,
        strength_per_level: f32,
        finish_sigma_per_level: f32,
        patch_radius: usize,
        search_radius: usize,
        max_pixels: usize,
    },
}

impl std::fmt::Display for DenoiseStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gaussian { .. } => write!(f, "Gaussian blur"),
            Self::Bilateral(_) => write!(f, "Bilateral"),
            Self::NonLocalMeans { .. } => write!(f, "Non-local means"),
        }
    }
}

/// One row of the denoise table, covering levels in `(lower, upper]`.
#[derive(Clone, Debug, PartialEq)]
pub struct DenoiseTier {
    pub lower: f32,
    pub upper: f32,
    pub strategy: DenoiseStrategy,
}

impl DenoiseTier {
    pub fn contains(&self, level: f32) -> bool {
        level > self.lower && level <= self.upper
    }

    /// Run this tier's strategy at `level`, regardless of whether the level
    /// falls inside the tier.
    pub fn apply(&self, bitmap: &Bitmap, level: f32) -> Result<Denoised> {
        match &self.strategy {
            DenoiseStrategy::Gaussian { sigma_per_level } => Ok(Denoised {
                bitmap: gaussian_blur(bitmap, level * sigma_per_level)?,
                warning: None,
            }),
            DenoiseStrategy::Bilateral(params) => Ok(Denoised {
                bitmap: bilateral_filter(bitmap, params)?,
                warning: None,
            }),
            DenoiseStrategy::NonLocalMeans {
                prefilter,
                strength_per_level,
                finish_sigma_per_level,
                patch_radius,
                search_radius,
                max_pixels,
            } => {
                let base = match prefilter {
                    Some(params) => bilateral_filter(bitmap, params)?,
                    None => bitmap.clone(),
                };
                let excess = level - self.lower;
                let params = NlmParams {
                    strength: strength_per_level * excess,
                    patch_radius: *patch_radius,
                    search_radius: *search_radius,
                    max_pixels: *max_pixels,
                };
                match non_local_means(&base, &params) {
                    Ok(smoothed) => Ok(Denoised {
                        bitmap: gaussian_blur(&smoothed, finish_sigma_per_level * excess)?,
                        warning: None,
                    }),
                    Err(err) => {
                        let warning = DenoiseFallbackWarning {
                            level,
                            sigma: level,
                            reason: err.to_string(),
                        };
                        warn!(%warning, "Falling back to Gaussian blur");
                        Ok(Denoised {
                            bitmap: gaussian_blur(&base, level)?,
                            warning: Some(warning),
                        })
                    }
                }
            }
        }
    }
}

/// Ordered table mapping noise-reduction levels to smoothing strategies.
///
/// Tiers are contiguous over `(0.0, 1.0]` and each is stronger than the one
/// before it.
#[derive(Clone, Debug, PartialEq)]
pub struct DenoiseSelector {
    tiers: Vec<DenoiseTier>,
}

impl Default for DenoiseSelector {
    fn default() -> Self {
        Self {
            tiers: vec![
                DenoiseTier {
                    lower: 0.0,
                    upper: 0.3,
                    strategy: DenoiseStrategy::Gaussian {
                        sigma_per_level: 2.0,
                    },
                },
                DenoiseTier {
                    lower: 0.3,
                    upper: 0.6,
                    strategy: DenoiseStrategy::Bilateral(BilateralParams::default()),
                },
                DenoiseTier {
                    lower: 0.6,
                    upper: 1.0,
                    strategy: DenoiseStrategy::NonLocalMeans {
                        prefilter: Some(BilateralParams::default()),
                        strength_per_level: NLM_STRENGTH_PER_LEVEL,
                        finish_sigma_per_level: HEAVY_FINISH_SIGMA_PER_LEVEL,
                        patch_radius: NLM_PATCH_RADIUS,
                        search_radius: NLM_SEARCH_RADIUS,
                        max_pixels: NLM_MAX_PIXELS,
                    },
                },
            ],
        }
    }
}

impl DenoiseSelector {
    /// Build a selector from a custom table.
    ///
    /// Tiers must start at 0.0, end at 1.0, and each tier's lower edge must
    /// equal the previous tier's upper edge.
    pub fn new(tiers: Vec<DenoiseTier>) -> Result<Self> {
        let (Some(first), Some(last)) = (tiers.first(), tiers.last()) else {
            return Err(EnhanceError::invalid("tiers", "[]", "at least one tier is required"));
        };
        if first.lower != 0.0 || last.upper != 1.0 {
            return Err(EnhanceError::invalid(
                "tiers",
                format!("({}, {}]", first.lower, last.upper),
                "tiers must cover (0.0, 1.0]",
            ));
        }
        for tier in &tiers {
            if tier.upper <= tier.lower {
                return Err(EnhanceError::invalid(
                    "tiers",
                    format!("({}, {}]", tier.lower, tier.upper),
                    "tier is empty",
                ));
            }
        }
        for pair in tiers.windows(2) {
            if pair[1].lower != pair[0].upper {
                return Err(EnhanceError::invalid(
                    "tiers",
                    format!("{} -> {}", pair[0].upper, pair[1].lower),
                    "tiers must be contiguous and ordered",
                ));
            }
        }
        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[DenoiseTier] {
        &self.tiers
    }

    /// Find the tier responsible for `level`. Levels outside `(0.0, 1.0]` are rejected.
    pub fn select(&self, level: f32) -> Result<&DenoiseTier> {
        self.tiers
            .iter()
            .find(|tier| tier.contains(level))
            .ok_or_else(|| {
                EnhanceError::invalid("noise_reduction", level, "must be in (0.0, 1.0]")
            })
    }

    /// Denoise `bitmap` with the tier selected by `level`.
    pub fn denoise(&self, bitmap: &Bitmap, level: f32) -> Result<Denoised> {
        let tier = self.select(level)?;
        debug!(level, strategy = %tier.strategy, "Denoising");
        tier.apply(bitmap, level)
    }
}
