mod output;
mod run;

use std::path::PathBuf;

use clap::Parser;
use game_harness_shared::config::{
    HarnessConfig, DEFAULT_ENGINE, DEFAULT_REPEATS, DEFAULT_WIN_THRESHOLD,
};

#[derive(Parser)]
#[command(
    name = "game-harness",
    about = "Play repeated games against the engine and check the strategy's win rate"
)]
struct Cli {
    /// Folder holding config.json; the engine writes res.json here
    folder: PathBuf,
    /// Number of games to play
    #[arg(default_value_t = DEFAULT_REPEATS, value_parser = clap::value_parser!(u32).range(1..))]
    repeats: u32,
    /// Required share of top-2 finishes, in percent
    #[arg(default_value_t = DEFAULT_WIN_THRESHOLD, value_parser = clap::value_parser!(u8).range(0..=100))]
    win_threshold: u8,
    /// Game engine binary, run in batch mode once per game
    #[arg(long, env = "GAME_HARNESS_ENGINE", default_value = DEFAULT_ENGINE)]
    engine: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = HarnessConfig {
        engine: cli.engine,
        folder: cli.folder,
        repeats: cli.repeats,
        win_threshold: cli.win_threshold,
    };

    let verdict = run::run(&config)?;
    if let Some(failure) = verdict.failure() {
        anyhow::bail!("{}", failure);
    }

    println!("Run is successful :)");
    Ok(())
}

/// Logs go to stderr so stdout carries only the report.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
