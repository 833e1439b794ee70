use crate::core::ids::{PersonId, WorkId};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::io::{BufRead, Write};

const UNKNOWN_TITLE: &str = "Unknown title";

/// Reads a participation listing (`id \t count \t work...`) back into sorted work lists. The count
/// column is not trusted; the works that follow it are.
pub fn load_participations<R: BufRead>(reader: R) -> anyhow::Result<FxHashMap<PersonId, Vec<WorkId>>> {
    let mut participations = FxHashMap::default();
    for line in reader.lines() {
        let line = line?;
        let mut fields = line.split('\t');
        let Some(Ok(id)) = fields.next().map(str::parse::<PersonId>) else {
            continue;
        };
        if fields.next().is_none() {
            continue;
        }
        let mut works = fields
            .filter_map(|w| w.parse::<WorkId>().ok())
            .collect::<Vec<_>>();
        works.sort_unstable();
        works.dedup();
        participations.insert(id, works);
    }
    Ok(participations)
}

/// Ascending intersection of two ascending lists.
pub fn shared_works(a: &[WorkId], b: &[WorkId]) -> Vec<WorkId> {
    let mut result = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                result.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    result
}

/// Reports the shared works of each consecutive pair in `ids`.
pub fn write_report<W: Write>(
    mut out: W,
    ids: &[PersonId],
    participations: &FxHashMap<PersonId, Vec<WorkId>>,
    titles: &FxHashMap<WorkId, String>,
) -> anyhow::Result<()> {
    for pair in ids.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let works_of = |id: PersonId| participations.get(&id).map(Vec::as_slice).unwrap_or(&[]);
        let shared = shared_works(works_of(a), works_of(b));

        if shared.is_empty() {
            writeln!(out, "{a}.{b} no collaborations")?;
        } else {
            writeln!(out, "{a}.{b}: {} collaborations:", shared.len())?;
            for work in shared {
                let title = titles.get(&work).map_or(UNKNOWN_TITLE, String::as_str);
                writeln!(out, " {work} {title}")?;
            }
        }
        writeln!(out)?;
    }
    writeln!(out, "=== End")?;
    Ok(())
}
