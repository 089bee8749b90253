use thiserror::Error;

use crate::bitmap::{quantize, Bitmap};
use crate::consts::{NLM_MAX_PIXELS, NLM_PATCH_RADIUS, NLM_SEARCH_RADIUS};
use crate::error::EnhanceError;

use super::filter_rows;

/// Parameters for non-local means denoising.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NlmParams {
    /// Filtering strength `h`. Larger values average more dissimilar patches.
    pub strength: f32,
    /// Patch radius; patches are `2 * patch_radius + 1` square.
    pub patch_radius: usize,
    /// Search window radius around each pixel.
    pub search_radius: usize,
    /// Refuse to run on bitmaps with more pixels than this.
    pub max_pixels: usize,
}

impl NlmParams {
    pub fn with_strength(strength: f32) -> Self {
        Self {
            strength,
            patch_radius: NLM_PATCH_RADIUS,
            search_radius: NLM_SEARCH_RADIUS,
            max_pixels: NLM_MAX_PIXELS,
        }
    }
}

#[derive(Error, Debug)]
pub enum NlmError {
    #[error("bitmap has {pixels} pixels, over the {max_pixels} pixel budget")]
    TooLarge { pixels: usize, max_pixels: usize },

    #[error("filtering strength {0} is too small or not finite")]
    InvalidStrength(f32),

    #[error(transparent)]
    Bitmap(#[from] EnhanceError),
}

/// Denoise a bitmap by averaging pixels whose surrounding patches look alike.
///
/// Candidate weights are `exp(-d / h^2)` where `d` is the mean squared
/// difference between the two patches over all channels. Patch samples past
/// the border are clamped to the edge; search candidates past the border are
/// skipped.
pub fn non_local_means(bitmap: &Bitmap, params: &NlmParams) -> Result<Bitmap, NlmError> {
    let pixels = bitmap.pixel_count();
    if pixels > params.max_pixels {
        return Err(NlmError::TooLarge {
            pixels,
            max_pixels: params.max_pixels,
        });
    }
    let h2 = params.strength * params.strength;
    // A zero h2 turns the self weight into NaN.
    if !params.strength.is_finite() || params.strength <= 0.0 || !h2.is_normal() {
        return Err(NlmError::InvalidStrength(params.strength));
    }

    let (w, h, c) = (
        bitmap.width() as usize,
        bitmap.height() as usize,
        bitmap.channels(),
    );
    let src = bitmap.as_raw();
    let pr = params.patch_radius as isize;
    let sr = params.search_radius;
    let patch_samples = ((2 * pr + 1) * (2 * pr + 1)) as f32 * c as f32;

    let sample = |y: isize, x: isize, ch: usize| -> f32 {
        let y = y.clamp(0, h as isize - 1) as usize;
        let x = x.clamp(0, w as isize - 1) as usize;
        src[(y * w + x) * c + ch] as f32
    };

    let patch_distance = |ay: usize, ax: usize, by: usize, bx: usize| -> f32 {
        let mut sum = 0.0f32;
        for dy in -pr..=pr {
            for dx in -pr..=pr {
                for ch in 0..c {
                    let d = sample(ay as isize + dy, ax as isize + dx, ch)
                        - sample(by as isize + dy, bx as isize + dx, ch);
                    sum += d * d;
                }
            }
        }
        sum / patch_samples
    };

    let result = filter_rows(bitmap, |row| {
        let mut out = Vec::with_capacity(w * c);
        let mut sums = vec![0.0f32; c];
        for col in 0..w {
            sums.fill(0.0);
            let mut weight_sum = 0.0f32;

            for ny in row.saturating_sub(sr)..(row + sr + 1).min(h) {
                for nx in col.saturating_sub(sr)..(col + sr + 1).min(w) {
                    let weight = (-patch_distance(row, col, ny, nx) / h2).exp();
                    let base = (ny * w + nx) * c;
                    for (ch, s) in sums.iter_mut().enumerate() {
                        *s += src[base + ch] as f32 * weight;
                    }
                    weight_sum += weight;
                }
            }

            // weight_sum >= 1.0: each pixel is its own candidate with weight exp(0) = 1.0.
            out.extend(sums.iter().map(|s| quantize(s / weight_sum)));
        }
        out
    })?;

    Ok(result)
}
