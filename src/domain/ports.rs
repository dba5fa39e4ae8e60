use crate::domain::model::RenderPlan;
use crate::utils::error::Result;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutput {
    File(PathBuf),
    /// The plan was kept in memory, see `RecordingBackend`.
    Recorded { layers: usize },
}

pub trait RenderBackend {
    fn name(&self) -> &str;
    fn render(&self, plan: &RenderPlan) -> Result<RenderOutput>;
}
