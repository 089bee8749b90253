use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EnhanceError, Result};

pub const SCALE_FACTOR_RANGE: RangeInclusive<f32> = 1.0..=4.0;
pub const BRIGHTNESS_RANGE: RangeInclusive<f32> = 0.5..=2.0;
pub const CONTRAST_RANGE: RangeInclusive<f32> = 0.5..=2.0;
pub const SATURATION_RANGE: RangeInclusive<f32> = 0.0..=2.0;
pub const SHARPNESS_RANGE: RangeInclusive<f32> = 0.5..=3.0;
pub const NOISE_REDUCTION_RANGE: RangeInclusive<f32> = 0.0..=1.0;

/// Interpolation kernel used when upscaling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interpolation {
    /// Nearest neighbor: no smoothing, blocky.
    Nearest,
    /// Linear blend of the 4 nearest pixels.
    Bilinear,
    /// Cubic blend of the 16 nearest pixels.
    #[default]
    Bicubic,
    /// Windowed sinc: sharpest, may ring near edges.
    Lanczos,
}

impl Interpolation {
    pub const ALL: [Interpolation; 4] = [
        Interpolation::Nearest,
        Interpolation::Bilinear,
        Interpolation::Bicubic,
        Interpolation::Lanczos,
    ];
}

impl std::fmt::Display for Interpolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nearest => write!(f, "Nearest"),
            Self::Bilinear => write!(f, "Bilinear"),
            Self::Bicubic => write!(f, "Bicubic"),
            Self::Lanczos => write!(f, "Lanczos"),
        }
    }
}

impl FromStr for Interpolation {
    type Err = EnhanceError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kernel| kernel.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                EnhanceError::invalid(
                    "interpolation",
                    s,
                    "expected one of Nearest, Bilinear, Bicubic, Lanczos",
                )
            })
    }
}

/// User-facing enhancement parameters.
///
/// Every field has an identity value; `ParameterSet::defaults()` leaves a
/// bitmap untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    /// Upscale factor in [1.0, 4.0].
    pub scale_factor: f32,
    pub interpolation: Interpolation,
    /// Brightness multiplier in [0.5, 2.0].
    pub brightness: f32,
    /// Contrast multiplier around neutral gray, in [0.5, 2.0].
    pub contrast: f32,
    /// Saturation multiplier in [0.0, 2.0]; 0.0 is grayscale.
    pub saturation: f32,
    /// Sharpness in [0.5, 3.0]; values at or below 1.0 have no effect.
    pub sharpness: f32,
    /// Noise reduction level in [0.0, 1.0]; 0.0 disables the stage.
    pub noise_reduction: f32,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::defaults()
    }
}

impl ParameterSet {
    /// Identity parameters.
    pub const fn defaults() -> Self {
        Self {
            scale_factor: 1.0,
            interpolation: Interpolation::Bicubic,
            brightness: 1.0,
            contrast: 1.0,
            saturation: 1.0,
            sharpness: 1.0,
            noise_reduction: 0.0,
        }
    }

    /// Check every field against its range. NaN is always rejected.
    pub fn validate(&self) -> Result<()> {
        validate_scale_factor(self.scale_factor)?;
        check_range("brightness", self.brightness, BRIGHTNESS_RANGE)?;
        check_range("contrast", self.contrast, CONTRAST_RANGE)?;
        check_range("saturation", self.saturation, SATURATION_RANGE)?;
        check_range("sharpness", self.sharpness, SHARPNESS_RANGE)?;
        check_range("noise_reduction", self.noise_reduction, NOISE_REDUCTION_RANGE)
    }

    /// True when every stage would be skipped.
    pub fn is_identity(&self) -> bool {
        self.scale_factor == 1.0
            && self.brightness == 1.0
            && self.contrast == 1.0
            && self.saturation == 1.0
            && self.sharpness <= 1.0
            && self.noise_reduction == 0.0
    }
}

pub fn validate_scale_factor(scale_factor: f32) -> Result<()> {
    check_range("scale_factor", scale_factor, SCALE_FACTOR_RANGE)
}

fn check_range(name: &'static str, value: f32, range: RangeInclusive<f32>) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(EnhanceError::invalid(
            name,
            value,
            format!("must be in [{}, {}]", range.start(), range.end()),
        ))
    }
}
