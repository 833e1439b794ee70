use crate::core::graph::{Person, RecordStore};
use crate::core::ids::parse_prefixed_bytes;
use crate::ingest::tsv::{IngestStats, is_fatal, tsv_reader};
use csv::ByteRecord;
use std::io::Read;

const MIN_FIELDS: usize = 5;
const ID: usize = 0;
const NAME: usize = 1;
const BIRTH_YEAR: usize = 2;
const PROFESSIONS: usize = 4;

pub struct FilterConfig {
    pub unknown_year: String,
    pub professions: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            unknown_year: "\\N".to_string(),
            professions: vec!["actor".to_string(), "actress".to_string()],
        }
    }
}

impl FilterConfig {
    /// Plain substring test, so "actor" also matches inside a longer token.
    fn is_wanted_profession(&self, professions: &[u8]) -> bool {
        let professions = String::from_utf8_lossy(professions);
        self.professions.iter().any(|p| professions.contains(p.as_str()))
    }
}

pub fn admit_people<R: Read>(
    reader: R,
    cfg: &FilterConfig,
    store: &mut RecordStore,
) -> anyhow::Result<IngestStats> {
    let mut tsv = tsv_reader(reader)?;
    let mut record = ByteRecord::new();
    let mut stats = IngestStats::default();

    loop {
        match tsv.read_byte_record(&mut record) {
            Ok(true) => match admit_row(&record, cfg) {
                Some(person) => {
                    store.admit(person);
                    stats.parsed += 1;
                }
                None => stats.skipped += 1,
            },
            Ok(false) => break,
            Err(err) if is_fatal(&err) => return Err(err.into()),
            Err(_) => stats.skipped += 1,
        }
    }

    Ok(stats)
}

/// Works on raw bytes so a badly encoded name does not cost the row; the name is kept with
/// replacement characters.
fn admit_row(record: &ByteRecord, cfg: &FilterConfig) -> Option<Person> {
    if record.len() < MIN_FIELDS {
        return None;
    }
    let birth_year = &record[BIRTH_YEAR];
    if birth_year == cfg.unknown_year.as_bytes() || !cfg.is_wanted_profession(&record[PROFESSIONS])
    {
        return None;
    }
    let id = parse_prefixed_bytes(&record[ID])?;
    let birth_year = std::str::from_utf8(birth_year).ok()?.parse::<i32>().ok()?;
    let name = String::from_utf8_lossy(&record[NAME]);
    Some(Person::new(id, name, birth_year))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "nconst\tprimaryName\tbirthYear\tdeathYear\tprimaryProfession\n";

    fn admit(rows: &[&str]) -> (RecordStore, IngestStats) {
        let data = format!("{HEADER}{}\n", rows.join("\n"));
        let mut store = RecordStore::new();
        let stats = admit_people(data.as_bytes(), &FilterConfig::default(), &mut store).unwrap();
        (store, stats)
    }

    #[test]
    fn test_admits_actor_and_actress() {
        let (store, stats) = admit(&["nm01\tAda\t1815\t\t actress", "nm02\tBob\t1900\t\tactor"]);

        assert_eq!(IngestStats { parsed: 2, skipped: 0 }, stats);
        assert_eq!("Ada", store.get(1).unwrap().name);
        assert_eq!(1815, store.get(1).unwrap().birth_year);
        assert_eq!("Bob", store.get(2).unwrap().name);
        assert_eq!(1900, store.get(2).unwrap().birth_year);
    }

    #[test]
    fn test_rejects_unknown_birth_year() {
        let (store, stats) = admit(&["nm01\tAda\t\\N\t\tactress"]);

        assert!(!store.contains(1));
        assert_eq!(1, stats.skipped);
    }

    #[test]
    fn test_rejects_other_professions() {
        let (store, _) = admit(&[
            "nm01\tAda\t1815\t\tdirector,writer",
            "nm02\tBob\t1900\t\t",
            "nm03\tCy\t1900\t\tACTOR",
        ]);

        assert!(store.is_empty());
    }

    #[test]
    fn test_profession_is_substring_match() {
        let (store, _) = admit(&[
            "nm01\tAda\t1815\t\tproducer,actor,writer",
            "nm02\tBob\t1900\t\treactorengineer",
        ]);

        assert!(store.contains(1));
        assert!(store.contains(2));
    }

    #[test]
    fn test_rejects_short_rows() {
        let (store, stats) = admit(&["nm01\tAda\t1815\tactor"]);

        assert!(store.is_empty());
        assert_eq!(1, stats.skipped);
    }

    #[test]
    fn test_rejects_unparseable_fields() {
        let (store, stats) = admit(&[
            "nmX1\tAda\t1815\t\tactress",
            "nm02\tBob\tc.1900\t\tactor",
            "n\tCy\t1900\t\tactor",
            "nm04\tDee\t1950\t\tactress",
        ]);

        assert_eq!(1, store.len());
        assert!(store.contains(4));
        assert_eq!(IngestStats { parsed: 1, skipped: 3 }, stats);
    }

    #[test]
    fn test_duplicate_id_last_wins() {
        let (store, stats) = admit(&["nm01\tAda\t1815\t\tactress", "nm01\tAdele\t1988\t\tactress"]);

        assert_eq!(1, store.len());
        assert_eq!("Adele", store.get(1).unwrap().name);
        assert_eq!(2, stats.parsed);
    }

    #[test]
    fn test_latin1_name_is_admitted() {
        let rows: &[u8] = b"nm01\tZo\xe9\t1900\t\\N\tactress\nnm02\tBob\t1900\t\tactor\n";
        let data = [HEADER.as_bytes(), rows].concat();
        let mut store = RecordStore::new();
        let stats = admit_people(data.as_slice(), &FilterConfig::default(), &mut store).unwrap();

        assert_eq!(2, stats.parsed);
        assert_eq!("Zo\u{fffd}", store.get(1).unwrap().name);
        assert_eq!(1900, store.get(1).unwrap().birth_year);
        assert!(store.contains(2));
    }

    #[test]
    fn test_blank_first_line_is_the_header() {
        let data = "\nnm01\tAda\t1815\t\tactress\nnm02\tBob\t1900\t\tactor\n";
        let mut store = RecordStore::new();
        admit_people(data.as_bytes(), &FilterConfig::default(), &mut store).unwrap();

        assert!(store.contains(1));
        assert!(store.contains(2));
    }

    #[test]
    fn test_header_only() {
        let mut store = RecordStore::new();
        let stats = admit_people(HEADER.as_bytes(), &FilterConfig::default(), &mut store).unwrap();

        assert!(store.is_empty());
        assert_eq!(IngestStats::default(), stats);
    }

    #[test]
    fn test_custom_professions() {
        let cfg = FilterConfig {
            professions: vec!["director".to_string()],
            ..FilterConfig::default()
        };
        let data = format!("{HEADER}nm01\tAda\t1815\t\tdirector\nnm02\tBob\t1900\t\tactor\n");
        let mut store = RecordStore::new();
        admit_people(data.as_bytes(), &cfg, &mut store).unwrap();

        assert!(store.contains(1));
        assert!(!store.contains(2));
    }
}
