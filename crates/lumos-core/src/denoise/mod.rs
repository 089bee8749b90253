mod bilateral;
mod non_local_means;
mod selector;

use rayon::prelude::*;

use crate::bitmap::Bitmap;
use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::error::Result;

pub use bilateral::{bilateral_filter, BilateralParams};
pub use non_local_means::{non_local_means, NlmError, NlmParams};
pub use selector::{
    DenoiseFallbackWarning, DenoiseSelector, DenoiseStrategy, DenoiseTier, Denoised,
};

/// Build a bitmap of the same size and mode from per-row sample vectors.
///
/// Rows are computed in parallel for large images; every row is produced by a
/// single call, so the output does not depend on scheduling.
fn filter_rows<F>(bitmap: &Bitmap, filter_row: F) -> Result<Bitmap>
where
    F: Fn(usize) -> Vec<u8> + Sync,
{
    let h = bitmap.height() as usize;
    let rows: Vec<Vec<u8>> = if bitmap.pixel_count() >= PARALLEL_PIXEL_THRESHOLD {
        (0..h).into_par_iter().map(&filter_row).collect()
    } else {
        (0..h).map(&filter_row).collect()
    };
    Bitmap::with_mode(bitmap.width(), bitmap.height(), bitmap.mode(), rows.concat())
}
