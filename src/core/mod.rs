pub mod bar_chart;
pub mod datasets;
pub mod engine;
pub mod layout;
pub mod line_chart;

pub use crate::domain::model::{Chart, RenderPlan};
pub use crate::domain::ports::{RenderBackend, RenderOutput};
pub use crate::utils::error::Result;
