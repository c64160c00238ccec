//! Print the six-step timeline for a deal snapshot.

use std::path::PathBuf;

use dealflow_engine::{project, resolve_deal, StepState};

use crate::read_snapshot;

/// Arguments for `dealflow timeline`.
#[derive(clap::Args, Debug)]
pub struct TimelineArgs {
    /// Path to a deal snapshot JSON file, or `-` for stdin.
    pub input: PathBuf,
}

/// Handler for `dealflow timeline`.
pub fn run(args: &TimelineArgs) -> anyhow::Result<()> {
    let raw = read_snapshot(&args.input)?;
    let stage = resolve_deal(&raw);

    println!("stage: {stage}");
    for step in project(stage) {
        let marker = match step.state {
            StepState::Completed => "[x]",
            StepState::Current => "[>]",
            StepState::Upcoming => "[ ]",
        };
        println!("{marker} {}", step.milestone.label_key());
    }
    Ok(())
}
