// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod report;
pub mod types;

use anyhow::Result;
use tracing::debug;

use crate::cli::{CliArgs, OutputFormat};
use crate::config::load_problem;
use crate::dag::Scheduler;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - loading the task and resource files
/// - validation + priority ordering (inside [`Scheduler::from_problem`])
/// - simulation
/// - report rendering
pub fn run(args: CliArgs) -> Result<()> {
    let problem = load_problem(&args.tasks, &args.resources)?;
    let scheduler = Scheduler::from_problem(&problem)?;

    if args.dry_run {
        println!("{}", report::render_priority(scheduler.priority_order()));
        debug!("dry-run complete (no simulation)");
        return Ok(());
    }

    let schedule = scheduler.simulate();

    match args.format {
        OutputFormat::Text => print!("{}", report::render_text(&schedule, args.quiet)),
        OutputFormat::Json => println!("{}", report::render_json(&schedule)?),
    }

    Ok(())
}
