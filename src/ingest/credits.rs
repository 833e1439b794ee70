use crate::core::graph::RecordStore;
use crate::core::ids::{PersonId, parse_prefixed_bytes};
use crate::ingest::tsv::{is_fatal, tsv_reader};
use csv::ByteRecord;
use std::io::Read;

const MIN_FIELDS: usize = 3;
const WORK: usize = 0;
const PERSON: usize = 2;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    pub rows: u64,
    pub credited: u64,
    pub not_admitted: u64,
    pub skipped: u64,
    pub casts: u64,
}

/// Rebuilds the cast of one work at a time from credits that arrive grouped by work. A group
/// ends when the raw work field changes; the accumulator never sorts, so a work split across
/// non-adjacent blocks is seen as several smaller casts.
#[derive(Debug, Default)]
pub struct CastAccumulator {
    current_work: Option<Vec<u8>>,
    cast: Vec<PersonId>,
    casts: u64,
}

impl CastAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, store: &mut RecordStore, work_raw: &[u8], person: PersonId) {
        if self.current_work.as_deref() != Some(work_raw) {
            self.flush(store);
            match self.current_work.as_mut() {
                Some(current) => {
                    current.clear();
                    current.extend_from_slice(work_raw);
                }
                None => self.current_work = Some(work_raw.to_vec()),
            }
        }
        if !self.cast.contains(&person) {
            self.cast.push(person);
        }
    }

    /// Expands the last open group and returns how many casts were expanded overall.
    pub fn finish(mut self, store: &mut RecordStore) -> u64 {
        self.flush(store);
        self.casts
    }

    fn flush(&mut self, store: &mut RecordStore) {
        if self.cast.len() >= 2 {
            store.expand_cast(&self.cast);
            self.casts += 1;
        }
        self.cast.clear();
    }
}

pub fn scan_credits<R: Read>(reader: R, store: &mut RecordStore) -> anyhow::Result<ScanStats> {
    let mut tsv = tsv_reader(reader)?;
    let mut record = ByteRecord::new();
    let mut accumulator = CastAccumulator::new();
    let mut stats = ScanStats::default();

    loop {
        match tsv.read_byte_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) if is_fatal(&err) => return Err(err.into()),
            Err(_) => {
                stats.rows += 1;
                stats.skipped += 1;
                continue;
            }
        }
        stats.rows += 1;

        if record.len() < MIN_FIELDS {
            stats.skipped += 1;
            continue;
        }
        let Some(person) = parse_prefixed_bytes(&record[PERSON]) else {
            stats.skipped += 1;
            continue;
        };
        if !store.contains(person) {
            stats.not_admitted += 1;
            continue;
        }
        let work_raw = &record[WORK];
        let Some(work) = parse_prefixed_bytes(work_raw) else {
            stats.skipped += 1;
            continue;
        };

        store.record_work(person, work);
        accumulator.push(store, work_raw, person);
        stats.credited += 1;
    }

    stats.casts = accumulator.finish(store);
    Ok(stats)
}
