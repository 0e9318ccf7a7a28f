use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use favicon_gen_lib::cli::{Cli, Mode};
use favicon_gen_lib::config::AppConfig;
use favicon_gen_lib::services::GenerateError;

fn main() -> anyhow::Result<ExitCode> {
    let dotenv = favicon_gen_lib::load_dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match dotenv {
        Some(path) => tracing::debug!("Loaded .env from: {path}"),
        None => tracing::debug!("No .env file found, using system environment variables"),
    }

    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    cli.apply(&mut config);

    let mode = cli.mode();
    match mode {
        Mode::Text => println!("Generating text-only favicons ({})...", config.text),
        Mode::CircleLogo => {
            println!("Generating circle logo favicons...");
            println!("(Use --text flag for text-only version)");
        }
    }

    match favicon_gen_lib::run(mode, &config) {
        Ok(files) => {
            tracing::info!(count = files.len(), "Favicons generated");
            println!("\n✓ Favicons generated successfully!");
            println!("Run 'make build' to include them in the build.");
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ GenerateError::SourceNotFound(_)) => {
            println!("Error: {e}");
            println!("\n✗ Failed to generate favicons");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            println!("\n✗ Failed to generate favicons");
            Err(e.into())
        }
    }
}
