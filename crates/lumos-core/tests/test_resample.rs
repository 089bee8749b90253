#[allow(dead_code)]
mod common;

use lumos_core::bitmap::ColorMode;
use lumos_core::error::EnhanceError;
use lumos_core::filters::resample::{resample, scaled_dimensions};
use lumos_core::pipeline::Interpolation;

#[test]
fn test_resample_unit_scale_is_identity() {
    let bitmap = common::rgb_gradient(17, 9);
    for kernel in Interpolation::ALL {
        let result = resample(&bitmap, 1.0, kernel).unwrap();
        assert_eq!(result, bitmap, "{kernel} at 1.0 should pass through");
    }
}

#[test]
fn test_resample_doubles_dimensions() {
    let bitmap = common::rgb_gradient(50, 40);
    let result = resample(&bitmap, 2.0, Interpolation::Bicubic).unwrap();
    assert_eq!((result.width(), result.height()), (100, 80));
    assert_eq!(result.mode(), ColorMode::Rgb);
}

#[test]
fn test_resample_floors_fractional_dimensions() {
    let bitmap = common::gray(7, 5, 10);
    let result = resample(&bitmap, 1.5, Interpolation::Bilinear).unwrap();
    // 7 * 1.5 = 10.5 -> 10, 5 * 1.5 = 7.5 -> 7
    assert_eq!((result.width(), result.height()), (10, 7));
}

#[test]
fn test_resample_every_kernel_preserves_uniform() {
    let bitmap = common::rgb(12, 8, [30, 140, 250]);
    for kernel in Interpolation::ALL {
        let result = resample(&bitmap, 3.0, kernel).unwrap();
        assert_eq!((result.width(), result.height()), (36, 24));
        for px in result.as_raw().chunks(3) {
            assert_eq!(px, &[30, 140, 250], "{kernel} changed a uniform image");
        }
    }
}

#[test]
fn test_resample_nearest_replicates_pixels() {
    let bitmap = common::gray_step(4, 2, 0, 255);
    let result = resample(&bitmap, 2.0, Interpolation::Nearest).unwrap();
    let row: Vec<u8> = (0..8).map(|x| result.pixel(x, 0)[0]).collect();
    assert_eq!(row, vec![0, 0, 0, 0, 255, 255, 255, 255]);
}

#[test]
fn test_resample_smooth_kernels_blend_edges() {
    let bitmap = common::gray_step(8, 4, 0, 255);
    let result = resample(&bitmap, 4.0, Interpolation::Bilinear).unwrap();
    let has_intermediate = (0..result.width()).any(|x| {
        let v = result.pixel(x, 8)[0];
        v > 0 && v < 255
    });
    assert!(has_intermediate, "bilinear should produce intermediate values at the edge");
}

#[test]
fn test_resample_grayscale_stays_grayscale() {
    let bitmap = common::gray_ramp(10, 10);
    let result = resample(&bitmap, 4.0, Interpolation::Lanczos).unwrap();
    assert_eq!(result.mode(), ColorMode::Gray);
    assert_eq!(result.as_raw().len(), 40 * 40);
}

#[test]
fn test_resample_rejects_out_of_range_scale() {
    let bitmap = common::gray(4, 4, 0);
    for scale in [0.5, 0.999, 4.01, 5.0, f32::NAN, f32::INFINITY] {
        let err = resample(&bitmap, scale, Interpolation::Bicubic).unwrap_err();
        assert!(
            matches!(err, EnhanceError::InvalidParameter { name: "scale_factor", .. }),
            "scale {scale} should be rejected, got {err:?}"
        );
    }
}

#[test]
fn test_resample_is_deterministic() {
    let bitmap = common::noisy(33, 21, ColorMode::Rgb, 80, 3);
    let a = resample(&bitmap, 2.7, Interpolation::Lanczos).unwrap();
    let b = resample(&bitmap, 2.7, Interpolation::Lanczos).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_scaled_dimensions_known_values() {
    let cases: [(u32, f32, u32); 8] = [
        (10, 1.3, 13),
        (23, 1.3, 29),
        (37, 1.25, 46),
        (7, 1.5, 10),
        (10, 2.3, 23),
        (33, 3.3, 108),
        (101, 3.8, 383),
        (11, 4.0, 44),
    ];
    for (side, scale, expected) in cases {
        let (w, h) = scaled_dimensions(side, side, scale).unwrap();
        assert_eq!((w, h), (expected, expected), "{side} px at {scale}");
    }
}

#[test]
fn test_scaled_dimensions_every_tenth_step() {
    // A 10 px side scaled by i / 10 is exactly i px.
    for i in 10u32..=40 {
        let scale = i as f32 / 10.0;
        let (w, h) = scaled_dimensions(10, 20, scale).unwrap();
        assert_eq!(w, i, "width at {scale}");
        assert_eq!(h, 2 * i, "height at {scale}");
    }
}

#[test]
fn test_scaled_dimensions_rejects_non_finite() {
    assert!(scaled_dimensions(10, 10, f32::NAN).is_err());
    assert!(scaled_dimensions(10, 10, f32::INFINITY).is_err());
    assert!(scaled_dimensions(10, 10, -2.0).is_err());
}

#[test]
fn test_resample_tenth_steps_match_decimal_dimensions() {
    let bitmap = common::gray(10, 10, 90);
    for (scale, expected) in [(1.3f32, 13u32), (1.9, 19), (2.6, 26), (3.1, 31), (3.8, 38)] {
        let result = resample(&bitmap, scale, Interpolation::Bilinear).unwrap();
        assert_eq!((result.width(), result.height()), (expected, expected), "scale {scale}");
    }
}
