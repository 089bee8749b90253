pub mod bitmap;
pub mod consts;
pub mod denoise;
pub mod error;
pub mod filters;
pub mod io;
pub mod pipeline;
pub mod stats;

pub use bitmap::{Bitmap, ColorMode};
pub use error::{EnhanceError, Result};
pub use pipeline::{Interpolation, ParameterSet};
pub use stats::Stats;
