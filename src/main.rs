use clap::Parser;
use tracing_subscriber::EnvFilter;

use yt_yoga::commands;
use yt_yoga::config::{Config, load_env};
use yt_yoga::error::Result;
use yt_yoga::input::parse_minutes;

#[derive(Parser)]
#[command(name = "yt-yoga")]
#[command(about = "Open a random yoga video that fits in the time you have")]
#[command(version)]
struct Cli {
    /// Available time in minutes
    #[arg(short = 'n', long = "minutes", allow_hyphen_values = true)]
    minutes: String,
}

async fn run(cli: Cli) -> Result<()> {
    let minutes = parse_minutes(&cli.minutes)?;
    let config = Config::from_env()?;
    commands::pick::run(&config, minutes).await
}

#[tokio::main]
async fn main() {
    // Load environment variables
    load_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{}", e.report_line());
        std::process::exit(1);
    }
}
