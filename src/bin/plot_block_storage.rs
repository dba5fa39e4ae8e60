use clap::Parser;
use provenance_charts::app::runner::{self, RunOutcome};
use provenance_charts::config::cli::RenderArgs;
use provenance_charts::core::datasets;

#[derive(Parser)]
#[command(name = "plot-block-storage")]
#[command(about = "Block storage consumption with and without provenance enabled")]
struct Args {
    #[command(flatten)]
    render: RenderArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    match runner::run(&args.render, datasets::block_storage_chart) {
        Ok(RunOutcome::Described(json)) => println!("{}", json),
        Ok(RunOutcome::Rendered(_)) => {}
        Err(e) => std::process::exit(runner::report_failure(&e)),
    }

    Ok(())
}
