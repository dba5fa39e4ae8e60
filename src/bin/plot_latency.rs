use clap::Parser;
use provenance_charts::app::runner::{self, RunOutcome};
use provenance_charts::config::cli::RenderArgs;
use provenance_charts::core::datasets;

#[derive(Parser)]
#[command(name = "plot-latency")]
#[command(about = "Query latency per query bucket")]
struct Args {
    #[command(flatten)]
    render: RenderArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    match runner::run(&args.render, datasets::query_latency_chart) {
        Ok(RunOutcome::Described(json)) => println!("{}", json),
        Ok(RunOutcome::Rendered(_)) => {}
        Err(e) => std::process::exit(runner::report_failure(&e)),
    }

    Ok(())
}
