//! # dealflow-cli — Deal Lifecycle Command-Line Interface
//!
//! Developer/ops inspection tool for the lifecycle engine. Feed it a deal
//! snapshot as JSON and it prints what every view would render: the
//! canonical stage, the list-tab category, the timeline spine, and the
//! stage-picker entries.
//!
//! ## Subcommands
//!
//! - `resolve` — Resolve a snapshot to its stage and category
//! - `timeline` — Print the six-step progress spine for a snapshot
//! - `stages` — Print the canonical stage table
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to `dealflow-engine` — no lifecycle rules
//!   here.

use std::io::Read;
use std::path::Path;

use anyhow::Context;

use dealflow_engine::RawDealState;

pub mod resolve;
pub mod stages;
pub mod timeline;

/// Read a deal snapshot from a JSON file, or from stdin when `path` is `-`.
pub(crate) fn read_snapshot(path: &Path) -> anyhow::Result<RawDealState> {
    let contents = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading snapshot from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("reading snapshot file {}", path.display()))?
    };

    let raw: RawDealState = serde_json::from_str(&contents)
        .with_context(|| format!("parsing deal snapshot from {}", path.display()))?;
    tracing::debug!(deal = %raw.id, escrow_status = %raw.escrow_status, "parsed snapshot");
    Ok(raw)
}
