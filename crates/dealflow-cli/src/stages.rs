//! Print the canonical stage table.

use dealflow_engine::{classify, presentation, timeline_index, Stage};

/// Arguments for `dealflow stages`.
#[derive(clap::Args, Debug)]
pub struct StagesArgs {
    /// Only print stages in this category (PENDING, ACTIVE, COMPLETED).
    #[arg(long)]
    pub category: Option<String>,
}

/// Handler for `dealflow stages`.
pub fn run(args: &StagesArgs) -> anyhow::Result<()> {
    let filter = args
        .category
        .as_deref()
        .map(str::parse::<dealflow_engine::Category>)
        .transpose()
        .map_err(anyhow::Error::new)?;

    println!(
        "{:<20} {:<10} {:<9} {:<8} label",
        "stage", "category", "timeline", "terminal"
    );
    for stage in Stage::all() {
        let category = classify(*stage);
        if filter.is_some_and(|f| f != category) {
            continue;
        }
        println!(
            "{:<20} {:<10} {:<9} {:<8} {}",
            stage.as_str(),
            category.as_str(),
            timeline_index(*stage),
            stage.is_terminal(),
            presentation(*stage).label_key,
        );
    }
    Ok(())
}
