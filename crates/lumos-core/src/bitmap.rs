use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::consts::{COLOR_CHANNEL_COUNT, MAX_SAMPLE};
use crate::error::{EnhanceError, Result};

/// Channel layout of a bitmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorMode {
    /// Single-channel grayscale.
    Gray,
    /// Interleaved R, G, B.
    Rgb,
}

impl ColorMode {
    pub fn channels(self) -> usize {
        match self {
            Self::Gray => 1,
            Self::Rgb => COLOR_CHANNEL_COUNT,
        }
    }

    /// Map a raw channel count to a mode. Only 1 and 3 are supported.
    pub fn from_channels(channels: usize) -> Result<Self> {
        match channels {
            1 => Ok(Self::Gray),
            COLOR_CHANNEL_COUNT => Ok(Self::Rgb),
            n => Err(EnhanceError::UnsupportedFormat(format!(
                "{n} channels (expected 1 or 3)"
            ))),
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gray => write!(f, "Grayscale"),
            Self::Rgb => write!(f, "RGB"),
        }
    }
}

/// An 8-bit-per-channel raster image.
///
/// Samples are stored row-major and interleaved per pixel. A `Bitmap` is never
/// mutated after construction; every processing step produces a new one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    mode: ColorMode,
    data: Vec<u8>,
}

impl Bitmap {
    /// Build a bitmap from a raw sample buffer with an explicit channel count.
    pub fn new(width: u32, height: u32, channels: usize, data: Vec<u8>) -> Result<Self> {
        let mode = ColorMode::from_channels(channels)?;
        Self::with_mode(width, height, mode, data)
    }

    pub fn with_mode(width: u32, height: u32, mode: ColorMode, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(EnhanceError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize * mode.channels();
        if data.len() != expected {
            return Err(EnhanceError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            mode,
            data,
        })
    }

    /// A bitmap where every sample has the same value.
    pub fn filled(width: u32, height: u32, mode: ColorMode, value: u8) -> Result<Self> {
        let len = width as usize * height as usize * mode.channels();
        Self::with_mode(width, height, mode, vec![value; len])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn channels(&self) -> usize {
        self.mode.channels()
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw interleaved samples.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Samples of the pixel at column `x`, row `y`.
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let c = self.channels();
        let start = (y as usize * self.width as usize + x as usize) * c;
        &self.data[start..start + c]
    }

    /// Split into one `f32` plane per channel, each shaped (height, width).
    pub fn planes(&self) -> Vec<Array2<f32>> {
        let (h, w, c) = (self.height as usize, self.width as usize, self.channels());
        (0..c)
            .map(|ch| Array2::from_shape_fn((h, w), |(row, col)| {
                self.data[(row * w + col) * c + ch] as f32
            }))
            .collect()
    }

    /// Interleave `f32` planes back into a bitmap, clamping to [0, 255] and
    /// rounding to the nearest sample value.
    pub fn from_planes(planes: &[Array2<f32>], mode: ColorMode) -> Result<Self> {
        let c = mode.channels();
        if planes.len() != c {
            return Err(EnhanceError::Pipeline(format!(
                "expected {c} channel planes, got {}",
                planes.len()
            )));
        }
        let (h, w) = planes[0].dim();
        if planes.iter().any(|p| p.dim() != (h, w)) {
            return Err(EnhanceError::Pipeline(
                "channel planes differ in size".to_string(),
            ));
        }

        let mut data = Vec::with_capacity(h * w * c);
        for row in 0..h {
            for col in 0..w {
                for plane in planes {
                    data.push(quantize(plane[[row, col]]));
                }
            }
        }
        Self::with_mode(w as u32, h as u32, mode, data)
    }
}

/// Clamp a sample to the 8-bit range and round half away from zero.
pub fn quantize(value: f32) -> u8 {
    value.clamp(0.0, MAX_SAMPLE).round() as u8
}
