pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{RenderArgs, RenderSettings};

pub use adapters::{plotters_backend::PlottersBackend, recording::RecordingBackend};
pub use config::{render_config::RenderConfig, OutputFormat};
pub use crate::core::{datasets, engine::ChartEngine, layout::plan};
pub use domain::model::{Chart, RenderPlan};
pub use utils::error::{ChartError, Result};
