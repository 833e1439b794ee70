use clap::Parser;
use costars::pipeline::{PipelineConfig, run};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Builds the co-star graph of the actors and actresses in an IMDb-style dump.
#[derive(Parser, Debug)]
#[command(version, long_about = None)]
struct Cli {
    /// People dump (name.basics.tsv layout).
    people: PathBuf,

    /// Credits dump grouped by work (title.principals.tsv layout).
    credits: PathBuf,

    /// Titles dump (title.basics.tsv layout); only checked for readability.
    titles: Option<PathBuf>,

    /// Directory receiving nomi.txt, grafo.txt and partecipazioni.txt.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => err.exit(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stdout)
        .with_target(false)
        .init();

    match &cli.titles {
        Some(_) => info!("3 inputs: people, credits and titles"),
        None => info!("2 inputs: people and credits"),
    }

    let cfg = PipelineConfig {
        titles: cli.titles,
        out_dir: cli.out_dir,
        ..PipelineConfig::new(cli.people, cli.credits)
    };
    run(&cfg)?;
    Ok(ExitCode::SUCCESS)
}
