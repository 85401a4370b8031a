use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use qrcraft_bootstrap::ContextOptions;

#[derive(Parser, Debug)]
#[command(name = "qrcraft")]
#[command(about = "QRCraft Studio console", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keep history and theme in memory only
    #[arg(long)]
    ephemeral: bool,

    /// Seed for the scan simulator
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let options = ContextOptions {
        config_path: args.config,
        ephemeral: args.ephemeral,
        seed: args.seed,
    };

    qrcraft_bootstrap::run_console(options).await
}
