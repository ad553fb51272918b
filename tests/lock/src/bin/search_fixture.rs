//! Binary that runs the fixture worlds and prints deterministic output
//! lines for cross-process verification.
//!
//! Usage: `search_fixture [OUT_DIR]`
//!
//! Output: `<world>.<mode>.<tie_break>.<key>=<value>` lines on stdout. Logs
//! go to stderr, filtered by `WAYPOINT_LOG` (default `warn`). When `OUT_DIR`
//! is given, the grid batch run is also written there as a run directory.

use std::path::PathBuf;
use std::process::ExitCode;

use lock_tests::fixture_runs;
use tracing::error;
use tracing_subscriber::EnvFilter;
use waypoint_harness::worlds::grid;
use waypoint_harness::{run_world, write_run_dir, SearchMode};
use waypoint_search::SearchPolicy;

fn run() -> Result<(), Box<dyn std::error::Error>> {
    for fixture in fixture_runs::all()? {
        for line in fixture_runs::render(&fixture)? {
            println!("{line}");
        }
    }

    if let Some(dir) = std::env::args_os().nth(1).map(PathBuf::from) {
        let run = run_world(&grid::maze()?, SearchMode::Batch, &SearchPolicy::default())?;
        let digest = write_run_dir(&run, &dir)?;
        println!("run_dir.report_digest={digest}");
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("WAYPOINT_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "search_fixture failed");
            ExitCode::FAILURE
        }
    }
}
