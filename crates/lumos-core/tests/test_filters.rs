#[allow(dead_code)]
mod common;

use ndarray::Array2;

use lumos_core::bitmap::ColorMode;
use lumos_core::filters::gaussian_blur::{gaussian_blur, gaussian_blur_array};
use lumos_core::filters::levels::{adjust_brightness, adjust_contrast, adjust_saturation};
use lumos_core::filters::unsharp_mask::{sharpen, unsharp_mask_array};

// ---------------------------------------------------------------------------
// adjust_brightness
// ---------------------------------------------------------------------------

#[test]
fn test_brightness_scales_samples() {
    let bitmap = common::gray(4, 4, 100);
    let result = adjust_brightness(&bitmap, 1.5).unwrap();
    assert!(result.as_raw().iter().all(|&v| v == 150));
}

#[test]
fn test_brightness_clips_at_white() {
    let bitmap = common::rgb(8, 8, [200, 250, 255]);
    let result = adjust_brightness(&bitmap, 2.0).unwrap();
    assert!(result.as_raw().iter().all(|&v| v == 255));
}

#[test]
fn test_brightness_darkens() {
    let bitmap = common::gray(4, 4, 101);
    let result = adjust_brightness(&bitmap, 0.5).unwrap();
    // 50.5 rounds half away from zero
    assert!(result.as_raw().iter().all(|&v| v == 51));
}

// ---------------------------------------------------------------------------
// adjust_contrast
// ---------------------------------------------------------------------------

#[test]
fn test_contrast_pivot_is_neutral_gray() {
    let bitmap = common::gray(10, 10, 128);
    let result = adjust_contrast(&bitmap, 2.0).unwrap();
    assert_eq!(result, bitmap);
}

#[test]
fn test_contrast_stretches_away_from_pivot() {
    let bitmap = common::gray_step(8, 2, 100, 150);
    let result = adjust_contrast(&bitmap, 2.0).unwrap();
    // 128 + (100 - 128) * 2 = 72, 128 + (150 - 128) * 2 = 172
    assert_eq!(result.pixel(0, 0), &[72]);
    assert_eq!(result.pixel(7, 1), &[172]);
}

#[test]
fn test_contrast_reduction_moves_toward_pivot() {
    let bitmap = common::gray_step(8, 2, 0, 255);
    let result = adjust_contrast(&bitmap, 0.5).unwrap();
    assert_eq!(result.pixel(0, 0), &[64]);
    // 128 + 127 * 0.5 = 191.5 -> 192
    assert_eq!(result.pixel(7, 0), &[192]);
}

#[test]
fn test_contrast_clips() {
    let bitmap = common::gray_step(8, 2, 10, 250);
    let result = adjust_contrast(&bitmap, 2.0).unwrap();
    assert_eq!(result.pixel(0, 0), &[0]);
    assert_eq!(result.pixel(7, 0), &[255]);
}

// ---------------------------------------------------------------------------
// adjust_saturation
// ---------------------------------------------------------------------------

#[test]
fn test_saturation_zero_is_grayscale() {
    let bitmap = common::rgb(4, 4, [200, 100, 50]);
    let result = adjust_saturation(&bitmap, 0.0).unwrap();
    // 0.299 * 200 + 0.587 * 100 + 0.114 * 50 = 124.2
    for px in result.as_raw().chunks(3) {
        assert_eq!(px, &[124, 124, 124]);
    }
}

#[test]
fn test_saturation_boost_spreads_channels() {
    let bitmap = common::rgb(4, 4, [150, 120, 100]);
    let result = adjust_saturation(&bitmap, 2.0).unwrap();
    let px = result.pixel(0, 0);
    assert!(px[0] > 150, "red should move away from luma, got {}", px[0]);
    assert!(px[2] < 100, "blue should move away from luma, got {}", px[2]);
}

#[test]
fn test_saturation_leaves_neutral_pixels() {
    let bitmap = common::rgb(4, 4, [90, 90, 90]);
    let result = adjust_saturation(&bitmap, 1.8).unwrap();
    assert_eq!(result, bitmap);
}

#[test]
fn test_saturation_is_noop_on_grayscale() {
    let bitmap = common::gray_ramp(16, 4);
    let result = adjust_saturation(&bitmap, 1.8).unwrap();
    assert_eq!(result, bitmap);
}

#[test]
fn test_levels_parallel_path_matches_expectation() {
    // 512x512 crosses the parallel threshold
    let bitmap = common::rgb(512, 512, [10, 20, 30]);
    let result = adjust_brightness(&bitmap, 2.0).unwrap();
    for px in result.as_raw().chunks(3) {
        assert_eq!(px, &[20, 40, 60]);
    }
}

// ---------------------------------------------------------------------------
// sharpen / unsharp_mask_array
// ---------------------------------------------------------------------------

#[test]
fn test_sharpen_no_change_on_uniform() {
    let bitmap = common::rgb(32, 32, [120, 60, 200]);
    let result = sharpen(&bitmap, 3.0).unwrap();
    assert_eq!(result, bitmap);
}

#[test]
fn test_sharpen_at_or_below_one_is_noop() {
    let bitmap = common::gray_step(16, 16, 40, 200);
    assert_eq!(sharpen(&bitmap, 1.0).unwrap(), bitmap);
    assert_eq!(sharpen(&bitmap, 0.5).unwrap(), bitmap);
}

#[test]
fn test_sharpen_boosts_edge_contrast() {
    let bitmap = common::gray_step(32, 8, 80, 160);
    let result = sharpen(&bitmap, 2.5).unwrap();
    // Just left of the edge goes darker, just right goes brighter.
    assert!(result.pixel(15, 4)[0] < 80);
    assert!(result.pixel(16, 4)[0] > 160);
    // Far from the edge nothing changes.
    assert_eq!(result.pixel(2, 4), &[80]);
    assert_eq!(result.pixel(29, 4), &[160]);
}

#[test]
fn test_sharpen_clips_to_range() {
    let bitmap = common::gray_step(32, 8, 0, 255);
    let result = sharpen(&bitmap, 3.0).unwrap();
    assert_eq!(result.pixel(15, 4), &[0]);
    assert_eq!(result.pixel(16, 4), &[255]);
}

#[test]
fn test_unsharp_mask_array_is_unclamped() {
    let mut data = Array2::<f32>::zeros((16, 16));
    for row in 0..16 {
        for col in 8..16 {
            data[[row, col]] = 255.0;
        }
    }
    let result = unsharp_mask_array(&data, 1.0, 1.0);
    let max = result.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let min = result.iter().cloned().fold(f32::INFINITY, f32::min);
    assert!(max > 255.0);
    assert!(min < 0.0);
}

// ---------------------------------------------------------------------------
// gaussian_blur / gaussian_blur_array
// ---------------------------------------------------------------------------

#[test]
fn test_gaussian_blur_small_image_preserves_uniform() {
    let bitmap = common::gray(64, 64, 153);
    let result = gaussian_blur(&bitmap, 2.0).unwrap();
    assert_eq!(result, bitmap);
}

#[test]
fn test_gaussian_blur_large_image_preserves_uniform() {
    // 512x512 -> parallel path
    let bitmap = common::rgb(512, 512, [102, 0, 255]);
    let result = gaussian_blur(&bitmap, 2.0).unwrap();
    assert_eq!(result, bitmap);
}

#[test]
fn test_gaussian_blur_keeps_channels_separate() {
    let bitmap = common::rgb(16, 16, [255, 0, 128]);
    let result = gaussian_blur(&bitmap, 3.0).unwrap();
    assert_eq!(result.mode(), ColorMode::Rgb);
    assert_eq!(result, bitmap);
}

#[test]
fn test_gaussian_blur_zero_sigma_is_identity() {
    let data = Array2::from_shape_fn((8, 8), |(r, c)| (r * 8 + c) as f32);
    let result = gaussian_blur_array(&data, 0.0);
    assert_eq!(result, data);
}

#[test]
fn test_gaussian_blur_array_smooths_noise() {
    // After blurring a checkerboard the interior should approach the mean.
    let h = 64usize;
    let w = 64usize;
    let data = Array2::from_shape_fn((h, w), |(r, c)| if (r + c) % 2 == 0 { 255.0 } else { 0.0 });
    let blurred = gaussian_blur_array(&data, 5.0);
    let margin = 16;
    for row in margin..h - margin {
        for col in margin..w - margin {
            let v = blurred[[row, col]];
            assert!(
                (v - 127.5).abs() < 5.0,
                "interior pixel ({row},{col}) should be ~127.5 after blurring, got {v}"
            );
        }
    }
}

#[test]
fn test_gaussian_blur_parallel_matches_sequential() {
    // Same content, once below and once above the parallel threshold; the
    // top-left corner region must agree exactly.
    let small = common::noisy(64, 64, ColorMode::Gray, 50, 7);
    let mut big_data = vec![0u8; 512 * 512];
    for row in 0..64 {
        for col in 0..64 {
            big_data[row * 512 + col] = small.pixel(col as u32, row as u32)[0];
        }
    }
    let big = lumos_core::Bitmap::new(512, 512, 1, big_data).unwrap();

    let small_out = gaussian_blur(&small, 1.0).unwrap();
    let big_out = gaussian_blur(&big, 1.0).unwrap();
    for row in 0..56 {
        for col in 0..56 {
            assert_eq!(small_out.pixel(col, row), big_out.pixel(col, row));
        }
    }
}
