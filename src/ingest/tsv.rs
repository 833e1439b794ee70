use std::io::{self, BufRead, BufReader, Read};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestStats {
    pub parsed: u64,
    pub skipped: u64,
}

/// Tab-separated reader over the IMDb-style dumps: the first line is dropped whatever it holds,
/// ragged rows are allowed and quotes are taken literally.
pub fn tsv_reader<R: Read>(reader: R) -> io::Result<csv::Reader<BufReader<R>>> {
    let mut reader = BufReader::new(reader);
    reader.read_until(b'\n', &mut Vec::new())?;
    Ok(csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader))
}

/// I/O failures end the pass; anything else is a malformed row.
pub fn is_fatal(err: &csv::Error) -> bool {
    matches!(err.kind(), csv::ErrorKind::Io(_))
}
