use image::imageops::{self, FilterType};
use image::{ImageBuffer, Luma, Rgb};
use tracing::debug;

use crate::bitmap::{Bitmap, ColorMode};
use crate::consts::MAX_OUTPUT_BYTES;
use crate::error::{EnhanceError, Result};
use crate::pipeline::config::{validate_scale_factor, Interpolation};

/// Upscale a bitmap by `scale_factor` using the chosen interpolation kernel.
///
/// The output is `floor(width * s) x floor(height * s)`. A factor of exactly
/// 1.0 returns the input unchanged.
pub fn resample(
    bitmap: &Bitmap,
    scale_factor: f32,
    interpolation: Interpolation,
) -> Result<Bitmap> {
    validate_scale_factor(scale_factor)?;
    if scale_factor == 1.0 {
        return Ok(bitmap.clone());
    }

    let (w, h) = scaled_dimensions(bitmap.width(), bitmap.height(), scale_factor)?;
    let bytes = (w as u64) * (h as u64) * bitmap.channels() as u64;
    if bytes > MAX_OUTPUT_BYTES as u64 {
        return Err(EnhanceError::Pipeline(format!(
            "resampled bitmap {w}x{h} needs {bytes} bytes (limit {MAX_OUTPUT_BYTES})"
        )));
    }

    debug!(
        from_width = bitmap.width(),
        from_height = bitmap.height(),
        to_width = w,
        to_height = h,
        kernel = %interpolation,
        "Resampling"
    );

    let filter = filter_type(interpolation);
    let (src_w, src_h) = (bitmap.width(), bitmap.height());
    let data = match bitmap.mode() {
        ColorMode::Gray => {
            let src = ImageBuffer::<Luma<u8>, &[u8]>::from_raw(src_w, src_h, bitmap.as_raw())
                .ok_or_else(buffer_mismatch)?;
            imageops::resize(&src, w, h, filter).into_raw()
        }
        ColorMode::Rgb => {
            let src = ImageBuffer::<Rgb<u8>, &[u8]>::from_raw(src_w, src_h, bitmap.as_raw())
                .ok_or_else(buffer_mismatch)?;
            imageops::resize(&src, w, h, filter).into_raw()
        }
    };

    Bitmap::with_mode(w, h, bitmap.mode(), data)
}

/// Output dimensions for a scale factor: each side is floored.
///
/// The factor is taken as the shortest decimal that prints for it, so a scale
/// of `1.3` turns 10 px into 13 px even though the `f32` is slightly below 1.3.
pub fn scaled_dimensions(width: u32, height: u32, scale_factor: f32) -> Result<(u32, u32)> {
    let (num, den) = decimal_fraction(scale_factor).ok_or_else(|| {
        EnhanceError::Pipeline(format!(
            "scale factor {scale_factor} is not a finite positive decimal"
        ))
    })?;
    let scale = |side: u32| -> Result<u32> {
        let scaled = (side as u128).checked_mul(num).map(|v| v / den);
        match scaled.and_then(|v| u32::try_from(v).ok()) {
            Some(scaled) if scaled >= 1 => Ok(scaled),
            _ => Err(EnhanceError::Pipeline(format!(
                "side {side} scaled by {scale_factor} is out of range"
            ))),
        }
    };
    Ok((scale(width)?, scale(height)?))
}

/// `value` as an exact `num / den` with `den` a power of ten.
fn decimal_fraction(value: f32) -> Option<(u128, u128)> {
    if !value.is_finite() || value <= 0.0 {
        return None;
    }
    let text = value.to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((&text, ""));
    let den = 10u128.checked_pow(u32::try_from(frac_part.len()).ok()?)?;
    let num = format!("{int_part}{frac_part}").parse::<u128>().ok()?;
    Some((num, den))
}

fn filter_type(interpolation: Interpolation) -> FilterType {
    match interpolation {
        Interpolation::Nearest => FilterType::Nearest,
        Interpolation::Bilinear => FilterType::Triangle,
        Interpolation::Bicubic => FilterType::CatmullRom,
        Interpolation::Lanczos => FilterType::Lanczos3,
    }
}

fn buffer_mismatch() -> EnhanceError {
    EnhanceError::Pipeline("bitmap buffer does not match its dimensions".to_string())
}
