use crate::core::layout;
use crate::domain::model::Chart;
use crate::domain::ports::{RenderBackend, RenderOutput};
use crate::utils::error::Result;

pub struct ChartEngine<B: RenderBackend> {
    backend: B,
}

impl<B: RenderBackend> ChartEngine<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn run(&self, chart: &Chart) -> Result<RenderOutput> {
        tracing::info!("Rendering '{}' with the {} backend", chart.title, self.backend.name());

        // Layout
        let plan = layout::plan(chart)?;
        tracing::debug!(
            "{} categories, {} series, legend at {:?}",
            plan.ticks.len(),
            plan.layers.len(),
            plan.legend
        );

        // Draw
        let output = self.backend.render(&plan)?;
        match &output {
            RenderOutput::File(path) => tracing::info!("Chart written to {}", path.display()),
            RenderOutput::Recorded { layers } => {
                tracing::debug!("Recorded plan with {} layers", layers)
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::recording::RecordingBackend;
    use crate::core::datasets::{block_storage_chart, query_latency_chart};
    use crate::domain::model::LayerShape;

    #[test]
    fn test_engine_hands_plan_to_backend() {
        let backend = RecordingBackend::new();
        let engine = ChartEngine::new(backend.clone());

        let output = engine.run(&block_storage_chart().unwrap()).unwrap();

        assert_eq!(output, RenderOutput::Recorded { layers: 2 });
        let plans = backend.plans();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].title, "Block Storage Consumption");
    }

    #[test]
    fn test_invalid_chart_never_reaches_backend() {
        let backend = RecordingBackend::new();
        let engine = ChartEngine::new(backend.clone());

        let mut chart = query_latency_chart().unwrap();
        chart.series[0].values.pop();

        assert!(engine.run(&chart).is_err());
        assert!(backend.plans().is_empty());
    }

    #[test]
    fn test_latency_plan_is_single_polyline() {
        let backend = RecordingBackend::new();
        ChartEngine::new(backend.clone())
            .run(&query_latency_chart().unwrap())
            .unwrap();

        let plan = backend.last_plan().unwrap();
        assert_eq!(plan.layers.len(), 1);
        assert!(matches!(plan.layers[0].shape, LayerShape::Polyline { .. }));
    }
}
