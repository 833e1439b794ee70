use crate::core::graph::RecordStore;
use crate::core::memory::estimate_store_memory;
use crate::emit::listings::{write_graph, write_names, write_participations};
use crate::ingest::credits::scan_credits;
use crate::ingest::people::{FilterConfig, admit_people};
use crate::ingest::titles::scan_titles;
use anyhow::Context;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

pub const NAMES_FILE: &str = "nomi.txt";
pub const GRAPH_FILE: &str = "grafo.txt";
pub const PARTICIPATIONS_FILE: &str = "partecipazioni.txt";

pub struct PipelineConfig {
    pub people: PathBuf,
    pub credits: PathBuf,
    pub titles: Option<PathBuf>,
    pub out_dir: PathBuf,
    pub filter: FilterConfig,
}

impl PipelineConfig {
    pub fn new(people: impl Into<PathBuf>, credits: impl Into<PathBuf>) -> Self {
        Self {
            people: people.into(),
            credits: credits.into(),
            titles: None,
            out_dir: PathBuf::from("."),
            filter: FilterConfig::default(),
        }
    }
}

#[derive(Debug)]
pub struct PipelineSummary {
    pub people: usize,
    pub edges: u64,
    pub casts: u64,
    pub titles: Option<u64>,
}

fn open(path: &Path, what: &str) -> anyhow::Result<File> {
    File::open(path).with_context(|| format!("opening {what} file {}", path.display()))
}

fn create(dir: &Path, name: &str) -> anyhow::Result<BufWriter<File>> {
    let path = dir.join(name);
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Admits the population, writes the name listing, streams the credits into the co-star graph,
/// then writes the graph and participation listings. Stops at the first I/O failure, leaving
/// listings written so far in place.
pub fn run(cfg: &PipelineConfig) -> anyhow::Result<PipelineSummary> {
    let started = Instant::now();
    let mut store = RecordStore::new();

    let titles = match &cfg.titles {
        Some(path) => {
            let rows = scan_titles(open(path, "titles")?)
                .with_context(|| format!("reading titles file {}", path.display()))?;
            info!("scanned {rows} title rows from {} (not kept)", path.display());
            Some(rows)
        }
        None => None,
    };

    info!("reading people from {}", cfg.people.display());
    let people_stats = admit_people(open(&cfg.people, "people")?, &cfg.filter, &mut store)
        .with_context(|| format!("reading people file {}", cfg.people.display()))?;
    info!("admitted {} people", store.len());
    debug!(
        "people rows parsed: {}, skipped: {}",
        people_stats.parsed, people_stats.skipped
    );

    let lines = write_names(create(&cfg.out_dir, NAMES_FILE)?, &store)
        .with_context(|| format!("writing {NAMES_FILE}"))?;
    info!("wrote {NAMES_FILE} with {lines} lines");

    info!("building graph from {}", cfg.credits.display());
    let scan = scan_credits(open(&cfg.credits, "credits")?, &mut store)
        .with_context(|| format!("reading credits file {}", cfg.credits.display()))?;
    info!("graph and participations built from {} casts", scan.casts);
    debug!(
        "credit rows: {}, credited: {}, not admitted: {}, skipped: {}",
        scan.rows, scan.credited, scan.not_admitted, scan.skipped
    );

    let edges = write_graph(create(&cfg.out_dir, GRAPH_FILE)?, &store)
        .with_context(|| format!("writing {GRAPH_FILE}"))?;
    info!("wrote {GRAPH_FILE}");
    info!("unique edges: {edges}");

    write_participations(create(&cfg.out_dir, PARTICIPATIONS_FILE)?, &store)
        .with_context(|| format!("writing {PARTICIPATIONS_FILE}"))?;
    info!("wrote {PARTICIPATIONS_FILE}");

    let memory = estimate_store_memory(&store);
    info!(
        "people: {}, links: {}, approx memory: {} MB",
        memory.people,
        memory.links,
        memory.bytes / (1024 * 1024)
    );
    info!("done in {:.3}s", started.elapsed().as_secs_f64());

    Ok(PipelineSummary {
        people: store.len(),
        edges,
        casts: scan.casts,
        titles,
    })
}
