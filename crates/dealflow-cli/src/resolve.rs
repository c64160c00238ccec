//! Resolve a deal snapshot to its canonical stage.

use std::path::PathBuf;

use anyhow::Context;

use dealflow_engine::{presentation, DealProjection};

use crate::read_snapshot;

/// Arguments for `dealflow resolve`.
#[derive(clap::Args, Debug)]
pub struct ResolveArgs {
    /// Path to a deal snapshot JSON file, or `-` for stdin.
    pub input: PathBuf,

    /// Emit the full projection (stage, category, timeline, navigation) as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Handler for `dealflow resolve`.
pub fn run(args: &ResolveArgs) -> anyhow::Result<()> {
    let raw = read_snapshot(&args.input)?;
    let projection = DealProjection::from_raw(&raw);

    if args.json {
        let out =
            serde_json::to_string_pretty(&projection).context("serializing projection")?;
        println!("{out}");
        return Ok(());
    }

    let display = presentation(projection.stage);
    println!("deal:     {}", projection.deal_id.as_uuid());
    println!("stage:    {}", projection.stage);
    println!("category: {}", projection.category);
    println!("label:    {}", display.label_key);
    if let Some(action) = display.action_key {
        println!("action:   {action}");
    }
    Ok(())
}
