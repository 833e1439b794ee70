use anyhow::Context;
use clap::Parser;
use costars::analysis::collaborations::{load_participations, write_report};
use costars::core::ids::PersonId;
use costars::ingest::titles::load_titles;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Lists the works shared by each consecutive pair of the given people.
#[derive(Parser, Debug)]
#[command(version, long_about = None)]
struct Cli {
    /// Participation listing written by `costars` (partecipazioni.txt).
    participations: PathBuf,

    /// Titles dump (title.basics.tsv layout).
    titles: PathBuf,

    /// Numeric person ids, without the `nm` prefix.
    #[arg(required = true, num_args = 2..)]
    ids: Vec<PersonId>,
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
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let file = File::open(&cli.titles)
        .with_context(|| format!("opening titles file {}", cli.titles.display()))?;
    let (titles, _) = load_titles(file)
        .with_context(|| format!("reading titles file {}", cli.titles.display()))?;
    info!("loaded {} titles", titles.len());

    let file = File::open(&cli.participations).with_context(|| {
        format!("opening participation file {}", cli.participations.display())
    })?;
    let participations = load_participations(BufReader::new(file)).with_context(|| {
        format!("reading participation file {}", cli.participations.display())
    })?;
    info!("loaded participations for {} people", participations.len());

    write_report(io::stdout().lock(), &cli.ids, &participations, &titles)?;
    Ok(ExitCode::SUCCESS)
}
