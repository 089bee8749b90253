pub mod gaussian_blur;
pub mod levels;
pub mod resample;
pub mod unsharp_mask;
