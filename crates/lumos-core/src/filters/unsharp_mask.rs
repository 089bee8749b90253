use ndarray::Array2;

use crate::bitmap::Bitmap;
use crate::consts::SHARPEN_SIGMA;
use crate::error::Result;
use crate::filters::gaussian_blur::gaussian_blur_array;

/// Sharpen a bitmap with an unsharp mask.
///
/// The detail layer is `original - gaussian(original, sigma = 1.0)`, added back
/// scaled by `sharpness - 1.0`. Sharpness at or below 1.0 never softens the
/// image: the input is returned unchanged.
pub fn sharpen(bitmap: &Bitmap, sharpness: f32) -> Result<Bitmap> {
    if sharpness <= 1.0 {
        return Ok(bitmap.clone());
    }
    let amount = sharpness - 1.0;
    let planes: Vec<Array2<f32>> = bitmap
        .planes()
        .iter()
        .map(|plane| unsharp_mask_array(plane, SHARPEN_SIGMA, amount))
        .collect();
    Bitmap::from_planes(&planes, bitmap.mode())
}

/// Apply unsharp mask sharpening to a raw plane.
///
/// `radius`: Gaussian blur sigma for the blurred copy.
/// `amount`: strength of sharpening (e.g. 0.5 = 50% of difference added back).
///
/// The result is not clamped; quantizing back into a bitmap clamps it.
pub fn unsharp_mask_array(data: &Array2<f32>, radius: f32, amount: f32) -> Array2<f32> {
    let blurred = gaussian_blur_array(data, radius);

    ndarray::Zip::from(data)
        .and(&blurred)
        .map_collect(|&orig, &blur| orig + (orig - blur) * amount)
}
