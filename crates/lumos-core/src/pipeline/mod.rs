pub mod config;
mod orchestrator;
mod types;

pub use config::{Interpolation, ParameterSet};
pub use orchestrator::{run, run_detailed, run_reported};
pub use types::{PipelineOutput, PipelineStage, ProgressReporter};
