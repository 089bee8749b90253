/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Largest sample value of an 8-bit channel.
pub const MAX_SAMPLE: f32 = 255.0;

/// Neutral gray used as the contrast pivot.
pub const CONTRAST_PIVOT: f32 = 128.0;

/// Fixed Gaussian sigma of the unsharp-mask blur.
pub const SHARPEN_SIGMA: f32 = 1.0;

/// Largest output bitmap (in bytes) the resampler will allocate. Default: 1 GiB.
pub const MAX_OUTPUT_BYTES: usize = 1_073_741_824;

/// Number of channels in an RGB bitmap.
pub const COLOR_CHANNEL_COUNT: usize = 3;

/// Bilateral filter neighborhood radius (9x9 window).
pub const BILATERAL_RADIUS: usize = 4;

/// Bilateral filter spatial sigma, in pixels.
pub const BILATERAL_SIGMA_SPACE: f32 = 75.0;

/// Bilateral filter range sigma, in 8-bit sample units.
pub const BILATERAL_SIGMA_RANGE: f32 = 75.0;

/// Non-local means filtering strength per unit of noise level above the
/// heavy band's lower edge.
pub const NLM_STRENGTH_PER_LEVEL: f32 = 75.0;

/// Gaussian sigma per unit of noise level above the heavy band's lower edge,
/// applied after non-local means.
pub const HEAVY_FINISH_SIGMA_PER_LEVEL: f32 = 6.0;

/// Non-local means patch radius (3x3 patches).
pub const NLM_PATCH_RADIUS: usize = 1;

/// Non-local means search window radius (11x11 window).
pub const NLM_SEARCH_RADIUS: usize = 5;

/// Pixel budget above which non-local means refuses to run and the
/// Gaussian fallback is used instead. Default: 16 Mpx.
pub const NLM_MAX_PIXELS: usize = 16_777_216;
