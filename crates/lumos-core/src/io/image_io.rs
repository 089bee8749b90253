use std::path::{Path, PathBuf};

use image::{DynamicImage, GrayImage, ImageFormat, RgbImage};

use crate::bitmap::{Bitmap, ColorMode};
use crate::error::{EnhanceError, Result};

/// File extensions accepted for input images (lowercase).
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpeg", "jpg", "tiff", "tif"];

/// Reject paths whose extension is not a supported raster container.
pub fn validate_extension(path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext {
        Some(ext) if SUPPORTED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => Err(EnhanceError::UnsupportedFormat(format!(
            "{} (expected one of: {})",
            path.display(),
            SUPPORTED_EXTENSIONS.join(", ")
        ))),
    }
}

/// Convert a decoded image into a bitmap.
///
/// 8-bit gray and RGB map directly; an alpha channel is dropped. Other bit
/// depths are rejected.
pub fn bitmap_from_dynamic(img: DynamicImage) -> Result<Bitmap> {
    let (width, height) = (img.width(), img.height());
    match img {
        DynamicImage::ImageLuma8(gray) => {
            Bitmap::with_mode(width, height, ColorMode::Gray, gray.into_raw())
        }
        DynamicImage::ImageLumaA8(_) => {
            Bitmap::with_mode(width, height, ColorMode::Gray, img.to_luma8().into_raw())
        }
        DynamicImage::ImageRgb8(rgb) => {
            Bitmap::with_mode(width, height, ColorMode::Rgb, rgb.into_raw())
        }
        DynamicImage::ImageRgba8(_) => {
            Bitmap::with_mode(width, height, ColorMode::Rgb, img.to_rgb8().into_raw())
        }
        other => Err(EnhanceError::UnsupportedFormat(format!(
            "{:?} (only 8 bits per channel is supported)",
            other.color()
        ))),
    }
}

/// Convert a bitmap into a decoded image for encoding or display.
pub fn bitmap_to_dynamic(bitmap: &Bitmap) -> Result<DynamicImage> {
    let (w, h) = (bitmap.width(), bitmap.height());
    let data = bitmap.as_raw().to_vec();
    let mismatch = || EnhanceError::InvalidDimensions {
        width: w,
        height: h,
    };
    Ok(match bitmap.mode() {
        ColorMode::Gray => {
            DynamicImage::ImageLuma8(GrayImage::from_raw(w, h, data).ok_or_else(mismatch)?)
        }
        ColorMode::Rgb => {
            DynamicImage::ImageRgb8(RgbImage::from_raw(w, h, data).ok_or_else(mismatch)?)
        }
    })
}

/// Load a PNG, JPEG or TIFF file into a bitmap.
pub fn load_bitmap(path: &Path) -> Result<Bitmap> {
    validate_extension(path)?;
    let img = image::open(path)?;
    bitmap_from_dynamic(img)
}

/// Save a bitmap as 8-bit PNG.
pub fn save_png(bitmap: &Bitmap, path: &Path) -> Result<()> {
    bitmap_to_dynamic(bitmap)?.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Default output name for an enhanced copy: `enhanced_<stem>.png` next to the input.
pub fn enhanced_file_name(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    input.with_file_name(format!("enhanced_{stem}.png"))
}
