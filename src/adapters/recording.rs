use crate::domain::model::RenderPlan;
use crate::domain::ports::{RenderBackend, RenderOutput};
use crate::utils::error::{ChartError, Result};
use std::sync::{Arc, Mutex};

/// Headless backend that keeps every plan it is given. Clones share storage.
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    plans: Arc<Mutex<Vec<RenderPlan>>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plans(&self) -> Vec<RenderPlan> {
        self.plans
            .lock()
            .map(|plans| plans.clone())
            .unwrap_or_default()
    }

    pub fn last_plan(&self) -> Option<RenderPlan> {
        self.plans().pop()
    }
}

impl RenderBackend for RecordingBackend {
    fn name(&self) -> &str {
        "recording"
    }

    fn render(&self, plan: &RenderPlan) -> Result<RenderOutput> {
        let mut plans = self.plans.lock().map_err(|e| ChartError::BackendError {
            message: format!("recording lock poisoned: {}", e),
        })?;
        plans.push(plan.clone());

        Ok(RenderOutput::Recorded {
            layers: plan.layers.len(),
        })
    }
}
