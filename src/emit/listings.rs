use crate::core::graph::{Person, RecordStore};
use std::io::Write;

fn tsv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(writer)
}

/// `id \t name \t birthYear`, ascending id.
pub fn write_names<W: Write>(writer: W, store: &RecordStore) -> anyhow::Result<usize> {
    let mut tsv = tsv_writer(writer);
    let mut lines = 0;
    for person in store.iter_sorted() {
        tsv.write_field(person.id.to_string())?;
        tsv.write_field(&person.name)?;
        tsv.write_field(person.birth_year.to_string())?;
        tsv.write_record(None::<&[u8]>)?;
        lines += 1;
    }
    tsv.flush()?;
    Ok(lines)
}

/// `id \t degree \t coStar...`, ascending id and co-star. Returns the number of unique undirected
/// edges, i.e. half the degree sum.
pub fn write_graph<W: Write>(writer: W, store: &RecordStore) -> anyhow::Result<u64> {
    let mut tsv = tsv_writer(writer);
    let mut degree_sum = 0;
    for person in store.iter_sorted() {
        let co_stars = person.sorted_co_stars();
        degree_sum += co_stars.len() as u64;
        write_adjacency(&mut tsv, person, &co_stars)?;
    }
    tsv.flush()?;
    Ok(degree_sum / 2)
}

/// `id \t count \t work...`, ascending id and work.
pub fn write_participations<W: Write>(writer: W, store: &RecordStore) -> anyhow::Result<usize> {
    let mut tsv = tsv_writer(writer);
    let mut lines = 0;
    for person in store.iter_sorted() {
        write_adjacency(&mut tsv, person, &person.sorted_works())?;
        lines += 1;
    }
    tsv.flush()?;
    Ok(lines)
}

fn write_adjacency<W: Write>(
    tsv: &mut csv::Writer<W>,
    person: &Person,
    targets: &[u32],
) -> anyhow::Result<()> {
    tsv.write_field(person.id.to_string())?;
    tsv.write_field(targets.len().to_string())?;
    for target in targets {
        tsv.write_field(target.to_string())?;
    }
    tsv.write_record(None::<&[u8]>)?;
    Ok(())
}
