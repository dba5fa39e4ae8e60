use crate::adapters::plotters_backend::PlottersBackend;
use crate::config::cli::{RenderArgs, RenderSettings};
use crate::config::render_config::RenderConfig;
use crate::core::engine::ChartEngine;
use crate::domain::model::Chart;
use crate::domain::ports::{RenderBackend, RenderOutput};
use crate::utils::error::{ChartError, Result};
use crate::utils::logger;

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Described(String),
    Rendered(RenderOutput),
}

/// Build, validate and render one chart according to the CLI flags.
pub fn run(args: &RenderArgs, build: fn() -> Result<Chart>) -> Result<RunOutcome> {
    let config = args.load_config()?;

    if config.json_logs() {
        logger::init_json_logger(args.verbose, config.log_level());
    } else {
        logger::init_cli_logger(args.verbose, config.log_level());
    }

    tracing::info!("🚀 Starting provenance-charts");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let chart = build()?;
    let outcome = execute(&chart, args, &config)?;

    if let RunOutcome::Rendered(output) = &outcome {
        tracing::info!("✅ Chart '{}' rendered: {:?}", chart.id, output);
    }
    Ok(outcome)
}

/// Everything after logging is set up; kept separate so tests can call it
/// without installing a global subscriber.
pub fn execute(
    chart: &Chart,
    args: &RenderArgs,
    config: &RenderConfig,
) -> Result<RunOutcome> {
    let settings = RenderSettings::resolve(args, config, &chart.id, &chart.title)?;

    if settings.describe {
        let description = serde_json::to_string_pretty(chart)?;
        return Ok(RunOutcome::Described(description));
    }

    if settings.show {
        return show(chart, &settings);
    }

    let backend = PlottersBackend::new(settings.output_path.clone(), settings.format, settings.size);
    render_with(backend, chart).map(RunOutcome::Rendered)
}

fn render_with<B: RenderBackend>(backend: B, chart: &Chart) -> Result<RenderOutput> {
    ChartEngine::new(backend).run(chart)
}

#[cfg(feature = "display")]
fn show(chart: &Chart, settings: &RenderSettings) -> Result<RunOutcome> {
    use crate::adapters::window::WindowBackend;

    let backend = WindowBackend::new(settings.window_title.clone(), settings.size);
    render_with(backend, chart).map(RunOutcome::Rendered)
}

#[cfg(not(feature = "display"))]
fn show(_chart: &Chart, _settings: &RenderSettings) -> Result<RunOutcome> {
    Err(ChartError::DisplayUnavailable {
        message: "this build does not include the `display` feature".to_string(),
    })
}

/// Log a failed run and return the process exit code.
pub fn report_failure(err: &ChartError) -> i32 {
    tracing::error!(
        "❌ Chart rendering failed: {} (Category: {:?}, Severity: {:?})",
        err,
        err.category(),
        err.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", err.recovery_suggestion());

    eprintln!("❌ {}", err.user_friendly_message());
    eprintln!("💡 {}", err.recovery_suggestion());

    err.exit_code()
}
