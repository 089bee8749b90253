use ndarray::Array2;
use rayon::prelude::*;

use crate::bitmap::Bitmap;
use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::error::Result;

/// Apply Gaussian blur to every channel of a bitmap using separable 1D convolution.
pub fn gaussian_blur(bitmap: &Bitmap, sigma: f32) -> Result<Bitmap> {
    let planes: Vec<Array2<f32>> = bitmap
        .planes()
        .iter()
        .map(|plane| gaussian_blur_array(plane, sigma))
        .collect();
    Bitmap::from_planes(&planes, bitmap.mode())
}

/// Apply Gaussian blur to a raw array. Borders are clamped to the edge pixel.
///
/// A non-positive sigma returns the input unchanged.
pub fn gaussian_blur_array(data: &Array2<f32>, sigma: f32) -> Array2<f32> {
    if sigma <= 0.0 {
        return data.clone();
    }
    let kernel = make_gaussian_kernel(sigma);
    let row_pass = convolve_rows(data, &kernel);
    convolve_cols(&row_pass, &kernel)
}

fn make_gaussian_kernel(sigma: f32) -> Vec<f32> {
    let radius = (sigma * 3.0).ceil().max(1.0) as usize;
    let size = 2 * radius + 1;
    let mut kernel = vec![0.0f32; size];
    let s2 = 2.0 * sigma * sigma;
    let mut sum = 0.0f32;

    for (i, k) in kernel.iter_mut().enumerate() {
        let x = i as f32 - radius as f32;
        *k = (-x * x / s2).exp();
        sum += *k;
    }

    for v in &mut kernel {
        *v /= sum;
    }

    kernel
}

fn convolve_rows(data: &Array2<f32>, kernel: &[f32]) -> Array2<f32> {
    let (h, w) = data.dim();
    let radius = kernel.len() / 2;
    let tap = |row: usize, col: usize| {
        let mut sum = 0.0f32;
        for (ki, &kv) in kernel.iter().enumerate() {
            let src_col =
                (col as isize + ki as isize - radius as isize).clamp(0, w as isize - 1) as usize;
            sum += data[[row, src_col]] * kv;
        }
        sum
    };
    collect_rows(h, w, tap)
}

fn convolve_cols(data: &Array2<f32>, kernel: &[f32]) -> Array2<f32> {
    let (h, w) = data.dim();
    let radius = kernel.len() / 2;
    let tap = |row: usize, col: usize| {
        let mut sum = 0.0f32;
        for (ki, &kv) in kernel.iter().enumerate() {
            let src_row =
                (row as isize + ki as isize - radius as isize).clamp(0, h as isize - 1) as usize;
            sum += data[[src_row, col]] * kv;
        }
        sum
    };
    collect_rows(h, w, tap)
}

/// Evaluate `f` at every (row, col), row-parallel for large images.
///
/// Each output value depends only on its own coordinates, so the parallel and
/// sequential paths produce identical arrays.
pub(crate) fn collect_rows<F>(h: usize, w: usize, f: F) -> Array2<f32>
where
    F: Fn(usize, usize) -> f32 + Sync,
{
    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        let rows: Vec<Vec<f32>> = (0..h)
            .into_par_iter()
            .map(|row| (0..w).map(|col| f(row, col)).collect())
            .collect();

        let mut result = Array2::<f32>::zeros((h, w));
        for (row, row_data) in rows.into_iter().enumerate() {
            for (col, val) in row_data.into_iter().enumerate() {
                result[[row, col]] = val;
            }
        }
        result
    } else {
        Array2::from_shape_fn((h, w), |(row, col)| f(row, col))
    }
}
