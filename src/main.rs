//! dockyard - replay panel/splitter interactions and print the layout
//!
//! Builds a workspace from YAML configuration, replays an optional script
//! through the runtime, and writes a JSON report to stdout.

use anyhow::{Context, Result};
use clap::Parser;

use dockyard::cli::{CliArgs, Report};
use dockyard::runtime::Runtime;

fn main() -> Result<()> {
    dockyard::tracing::init();

    let args = CliArgs::parse();
    let config = args.load_config().context("loading workspace config")?;
    let script = args.load_script().context("loading script")?;

    let mut runtime = Runtime::from_config(&config).context("building workspace")?;
    runtime.run_microtasks();
    script.run(&mut runtime);

    let report = Report {
        workspace: runtime.model().report(),
        events: runtime.take_events(),
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json);

    Ok(())
}
