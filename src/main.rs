//! CLI entry point for the photomosaic builder

use clap::Parser;
use colormosaic::io::cli::{Cli, MosaicCommand};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.quiet {
        "colormosaic=warn"
    } else {
        "colormosaic=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match MosaicCommand::new(cli).process() {
        Ok(output_path) => {
            tracing::info!(path = %output_path.display(), "Mosaic saved");
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}
