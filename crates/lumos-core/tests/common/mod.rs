use lumos_core::bitmap::{Bitmap, ColorMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform grayscale bitmap.
pub fn gray(width: u32, height: u32, value: u8) -> Bitmap {
    Bitmap::filled(width, height, ColorMode::Gray, value).expect("valid dimensions")
}

/// Uniform RGB bitmap with the same color at every pixel.
pub fn rgb(width: u32, height: u32, color: [u8; 3]) -> Bitmap {
    let data = color
        .iter()
        .copied()
        .cycle()
        .take(width as usize * height as usize * 3)
        .collect();
    Bitmap::with_mode(width, height, ColorMode::Rgb, data).expect("valid dimensions")
}

/// Grayscale horizontal ramp from 0 on the left to 255 on the right.
pub fn gray_ramp(width: u32, height: u32) -> Bitmap {
    let mut data = Vec::with_capacity(width as usize * height as usize);
    for _ in 0..height {
        for col in 0..width {
            data.push((col * 255 / (width - 1).max(1)) as u8);
        }
    }
    Bitmap::with_mode(width, height, ColorMode::Gray, data).expect("valid dimensions")
}

/// RGB image with a distinct, smoothly varying color per pixel.
pub fn rgb_gradient(width: u32, height: u32) -> Bitmap {
    let mut data = Vec::with_capacity(width as usize * height as usize * 3);
    for row in 0..height {
        for col in 0..width {
            data.push((col * 255 / (width - 1).max(1)) as u8);
            data.push((row * 255 / (height - 1).max(1)) as u8);
            data.push(((col + row) * 127 / (width + height).max(1)) as u8);
        }
    }
    Bitmap::with_mode(width, height, ColorMode::Rgb, data).expect("valid dimensions")
}

/// Vertical step edge: left half `low`, right half `high`.
pub fn gray_step(width: u32, height: u32, low: u8, high: u8) -> Bitmap {
    let mut data = Vec::with_capacity(width as usize * height as usize);
    for _ in 0..height {
        for col in 0..width {
            data.push(if col < width / 2 { low } else { high });
        }
    }
    Bitmap::with_mode(width, height, ColorMode::Gray, data).expect("valid dimensions")
}

/// Mid-gray bitmap with reproducible uniform noise of +/- `amplitude`.
pub fn noisy(width: u32, height: u32, mode: ColorMode, amplitude: i32, seed: u64) -> Bitmap {
    let mut rng = StdRng::seed_from_u64(seed);
    let len = width as usize * height as usize * mode.channels();
    let data = (0..len)
        .map(|_| (128 + rng.gen_range(-amplitude..=amplitude)).clamp(0, 255) as u8)
        .collect();
    Bitmap::with_mode(width, height, mode, data).expect("valid dimensions")
}
