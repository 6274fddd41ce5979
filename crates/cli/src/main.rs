use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod report;

#[derive(Parser)]
#[command(name = "polyrel")]
#[command(about = "Pairwise polygon relationship reporter")]
struct Cmd {
    /// JSON shapes file: {"geometry": {"shape": [...]}}
    input: PathBuf,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let shapes = input::load_shapes(&cmd.input)?;
    tracing::info!(shapes = shapes.len(), input = %cmd.input.display(), "loaded");
    let lines = report::relation_lines(&shapes);
    for line in &lines {
        println!("{line}");
    }
    tracing::info!(lines = lines.len(), "report complete");
    Ok(())
}
