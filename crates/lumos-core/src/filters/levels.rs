use rayon::prelude::*;

use crate::bitmap::{quantize, Bitmap, ColorMode};
use crate::consts::{
    CONTRAST_PIVOT, LUMINANCE_B, LUMINANCE_G, LUMINANCE_R, PARALLEL_PIXEL_THRESHOLD,
};
use crate::error::Result;

/// Scale every sample: `out = clip(in * factor)`.
pub fn adjust_brightness(bitmap: &Bitmap, factor: f32) -> Result<Bitmap> {
    let lut = build_lut(|v| v * factor);
    apply_lut(bitmap, &lut)
}

/// Push samples away from (factor > 1) or toward (factor < 1) neutral gray:
/// `out = clip(128 + (in - 128) * factor)`.
pub fn adjust_contrast(bitmap: &Bitmap, factor: f32) -> Result<Bitmap> {
    let lut = build_lut(|v| CONTRAST_PIVOT + (v - CONTRAST_PIVOT) * factor);
    apply_lut(bitmap, &lut)
}

/// Blend each RGB pixel with its BT.601 luma: `out = clip(g + (in - g) * factor)`.
///
/// Factor 0.0 yields grayscale, 1.0 is identity. Grayscale bitmaps have no
/// chroma, so they are returned unchanged for any factor.
pub fn adjust_saturation(bitmap: &Bitmap, factor: f32) -> Result<Bitmap> {
    if bitmap.mode() == ColorMode::Gray {
        return Ok(bitmap.clone());
    }
    map_pixels(bitmap, |src, dst| {
        let (r, g, b) = (src[0] as f32, src[1] as f32, src[2] as f32);
        let luma = LUMINANCE_R * r + LUMINANCE_G * g + LUMINANCE_B * b;
        for (out, &v) in dst.iter_mut().zip(src) {
            *out = quantize(luma + (v as f32 - luma) * factor);
        }
    })
}

fn build_lut(f: impl Fn(f32) -> f32) -> [u8; 256] {
    let mut lut = [0u8; 256];
    for (i, out) in lut.iter_mut().enumerate() {
        *out = quantize(f(i as f32));
    }
    lut
}

fn apply_lut(bitmap: &Bitmap, lut: &[u8; 256]) -> Result<Bitmap> {
    map_pixels(bitmap, |src, dst| {
        for (out, &v) in dst.iter_mut().zip(src) {
            *out = lut[v as usize];
        }
    })
}

/// Run a per-pixel transform over the whole bitmap, row-parallel for large images.
fn map_pixels<F>(bitmap: &Bitmap, f: F) -> Result<Bitmap>
where
    F: Fn(&[u8], &mut [u8]) + Sync,
{
    let c = bitmap.channels();
    let row_len = bitmap.width() as usize * c;
    let src = bitmap.as_raw();
    let mut data = vec![0u8; src.len()];

    let map_row = |(src_row, dst_row): (&[u8], &mut [u8])| {
        for (s, d) in src_row.chunks_exact(c).zip(dst_row.chunks_exact_mut(c)) {
            f(s, d);
        }
    };

    if bitmap.pixel_count() >= PARALLEL_PIXEL_THRESHOLD {
        src.par_chunks(row_len)
            .zip(data.par_chunks_mut(row_len))
            .for_each(map_row);
    } else {
        src.chunks(row_len).zip(data.chunks_mut(row_len)).for_each(map_row);
    }

    Bitmap::with_mode(bitmap.width(), bitmap.height(), bitmap.mode(), data)
}
