//! # dealflow CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Deal lifecycle inspector.
///
/// Resolves raw deal snapshots to their canonical stage and prints the
/// derived views (category, timeline, stage picker) the UI would render.
#[derive(Parser, Debug)]
#[command(name = "dealflow", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Resolve a snapshot to its canonical stage and category.
    Resolve(dealflow_cli::resolve::ResolveArgs),
    /// Print the six-step timeline for a snapshot.
    Timeline(dealflow_cli::timeline::TimelineArgs),
    /// Print the canonical stage table.
    Stages(dealflow_cli::stages::StagesArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve(args) => dealflow_cli::resolve::run(&args),
        Commands::Timeline(args) => dealflow_cli::timeline::run(&args),
        Commands::Stages(args) => dealflow_cli::stages::run(&args),
    }
}
