mod cli;

use anyhow::Result;
use clap::Parser;
use formdemo::FormState;
use formdemo_egui::EguiBackend;
use formdemo_ratatui::RatatuiFormBackend;
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Frontend};

fn main() -> Result<()> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut form = FormState::builder()
        .definition(args.definition())
        .values(args.initial_values())
        .build();

    tracing::info!(frontend = ?args.frontend, "starting form");
    match args.frontend {
        Frontend::Egui => form.run(&EguiBackend::new().with_title(args.title.as_str()))?,
        Frontend::Tui => form.run(&RatatuiFormBackend::new().with_title(args.title.as_str()))?,
    }

    if !form.display().is_empty() {
        println!("{}", form.display());
    }
    Ok(())
}
