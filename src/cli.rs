use crate::engine::Engine;
use crate::services::fetch::PageFetcher;
use crate::sources;
use clap::Parser;
use std::process::ExitCode;
use tracing::error;

#[derive(Parser)]
#[command(
    name = "tax-sale-states",
    version,
    about = "Build tax lien and tax deed state tables from public listings"
)]
pub struct Cli {}

/// Runs both known lists. Progress goes to stdout; the exit code tells
/// scripting callers whether every configuration built cleanly.
pub fn run() -> ExitCode {
    Cli::parse();

    let fetcher = match PageFetcher::new() {
        Ok(f) => f,
        Err(e) => {
            error!("could not initialize HTTP client: {e}");
            return ExitCode::FAILURE;
        }
    };

    let engine = Engine::new(&fetcher, "data", "build");
    let summary = engine.run(&sources::all());

    if summary.all_succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
