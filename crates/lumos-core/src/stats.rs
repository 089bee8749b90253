use serde::{Deserialize, Serialize};

use crate::bitmap::Bitmap;

/// Summary statistics of a bitmap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub width: u32,
    pub height: u32,
    pub channels: usize,
    /// Mean over every channel sample combined.
    pub mean_brightness: f64,
    /// Population standard deviation over every channel sample combined.
    pub std_brightness: f64,
    /// Uncompressed size: one byte per channel sample.
    pub byte_size: usize,
}

impl Stats {
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn byte_size_mb(&self) -> f64 {
        self.byte_size as f64 / (1024.0 * 1024.0)
    }
}

/// Compute statistics over all samples of a bitmap.
///
/// Sums are accumulated sequentially in `f64`, so repeated calls give
/// identical results.
pub fn compute(bitmap: &Bitmap) -> Stats {
    let samples = bitmap.as_raw();
    let n = samples.len() as f64;

    let mean = samples.iter().map(|&v| v as f64).sum::<f64>() / n;
    let variance = samples
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;

    Stats {
        width: bitmap.width(),
        height: bitmap.height(),
        channels: bitmap.channels(),
        mean_brightness: mean,
        std_brightness: variance.sqrt(),
        byte_size: samples.len(),
    }
}

/// Change from one set of statistics to another, for before/after reports.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatsDelta {
    pub width: i64,
    pub height: i64,
    pub byte_size: i64,
    pub mean_brightness: f64,
    pub std_brightness: f64,
    /// `after.pixel_count() / before.pixel_count()`.
    pub pixel_ratio: f64,
}

impl StatsDelta {
    pub fn between(before: &Stats, after: &Stats) -> Self {
        Self {
            width: after.width as i64 - before.width as i64,
            height: after.height as i64 - before.height as i64,
            byte_size: after.byte_size as i64 - before.byte_size as i64,
            mean_brightness: after.mean_brightness - before.mean_brightness,
            std_brightness: after.std_brightness - before.std_brightness,
            pixel_ratio: after.pixel_count() as f64 / before.pixel_count() as f64,
        }
    }
}
