use ndarray::Array2;

use crate::bitmap::{quantize, Bitmap};
use crate::consts::{BILATERAL_RADIUS, BILATERAL_SIGMA_RANGE, BILATERAL_SIGMA_SPACE};
use crate::error::Result;

use super::filter_rows;

/// Parameters for the edge-aware bilateral filter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BilateralParams {
    /// Neighborhood radius in pixels; the window is `2 * radius + 1` wide.
    pub radius: usize,
    /// Gaussian sigma of the spatial weight, in pixels.
    pub sigma_space: f32,
    /// Gaussian sigma of the value-similarity weight, in sample units.
    pub sigma_range: f32,
}

impl Default for BilateralParams {
    fn default() -> Self {
        Self {
            radius: BILATERAL_RADIUS,
            sigma_space: BILATERAL_SIGMA_SPACE,
            sigma_range: BILATERAL_SIGMA_RANGE,
        }
    }
}

/// Smooth a bitmap while keeping strong edges.
///
/// Each output pixel is the average of its neighborhood, weighted by spatial
/// distance and by how close each neighbor's color is to the center pixel.
/// Color distance is measured across all channels together, so an RGB edge
/// stays aligned in every channel. Neighbors outside the image are skipped.
pub fn bilateral_filter(bitmap: &Bitmap, params: &BilateralParams) -> Result<Bitmap> {
    let (w, h, c) = (
        bitmap.width() as usize,
        bitmap.height() as usize,
        bitmap.channels(),
    );
    let src = bitmap.as_raw();
    let r = params.radius;
    let spatial = spatial_weights(r, params.sigma_space);
    let range_denom = 2.0 * params.sigma_range * params.sigma_range;

    filter_rows(bitmap, |row| {
        let mut out = Vec::with_capacity(w * c);
        let mut sums = vec![0.0f32; c];
        for col in 0..w {
            sums.fill(0.0);
            let mut weight_sum = 0.0f32;
            let center = &src[(row * w + col) * c..(row * w + col + 1) * c];

            for ny in row.saturating_sub(r)..(row + r + 1).min(h) {
                for nx in col.saturating_sub(r)..(col + r + 1).min(w) {
                    let neighbor = &src[(ny * w + nx) * c..(ny * w + nx + 1) * c];
                    let dist2: f32 = neighbor
                        .iter()
                        .zip(center)
                        .map(|(&n, &m)| {
                            let d = n as f32 - m as f32;
                            d * d
                        })
                        .sum();
                    let weight =
                        spatial[[ny + r - row, nx + r - col]] * (-dist2 / range_denom).exp();
                    for (s, &n) in sums.iter_mut().zip(neighbor) {
                        *s += n as f32 * weight;
                    }
                    weight_sum += weight;
                }
            }

            // weight_sum >= 1.0: the center pixel is in its own window with weight 1.0.
            out.extend(sums.iter().map(|s| quantize(s / weight_sum)));
        }
        out
    })
}

fn spatial_weights(radius: usize, sigma: f32) -> Array2<f32> {
    let size = 2 * radius + 1;
    let denom = 2.0 * sigma * sigma;
    Array2::from_shape_fn((size, size), |(y, x)| {
        let dy = y as f32 - radius as f32;
        let dx = x as f32 - radius as f32;
        (-(dx * dx + dy * dy) / denom).exp()
    })
}
