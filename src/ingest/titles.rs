use crate::core::ids::{WorkId, parse_prefixed_bytes};
use crate::ingest::tsv::{IngestStats, is_fatal, tsv_reader};
use csv::ByteRecord;
use rustc_hash::FxHashMap;
use std::io::Read;

const WORK: usize = 0;
const PRIMARY_TITLE: usize = 2;

/// Walks the titles dump without keeping anything; only confirms it is readable.
pub fn scan_titles<R: Read>(reader: R) -> anyhow::Result<u64> {
    let mut tsv = tsv_reader(reader)?;
    let mut record = ByteRecord::new();
    let mut rows = 0;
    loop {
        match tsv.read_byte_record(&mut record) {
            Ok(true) => rows += 1,
            Ok(false) => break,
            Err(err) if is_fatal(&err) => return Err(err.into()),
            Err(_) => rows += 1,
        }
    }
    Ok(rows)
}

pub fn load_titles<R: Read>(reader: R) -> anyhow::Result<(FxHashMap<WorkId, String>, IngestStats)> {
    let mut tsv = tsv_reader(reader)?;
    let mut record = ByteRecord::new();
    let mut titles = FxHashMap::default();
    let mut stats = IngestStats::default();

    loop {
        match tsv.read_byte_record(&mut record) {
            Ok(true) if record.len() > PRIMARY_TITLE => match parse_prefixed_bytes(&record[WORK]) {
                Some(work) => {
                    let title = String::from_utf8_lossy(&record[PRIMARY_TITLE]).into_owned();
                    titles.insert(work, title);
                    stats.parsed += 1;
                }
                None => stats.skipped += 1,
            },
            Ok(true) => stats.skipped += 1,
            Ok(false) => break,
            Err(err) if is_fatal(&err) => return Err(err.into()),
            Err(_) => stats.skipped += 1,
        }
    }

    Ok((titles, stats))
}
