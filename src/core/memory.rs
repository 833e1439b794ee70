use crate::core::graph::{Person, RecordStore};
use crate::core::ids::PersonId;

pub struct MemoryStats {
    pub people: usize,
    pub links: usize,
    pub bytes: usize,
}

/// Rough resident size of the store: one record per person plus one slot per co-star and work
/// entry. Hash table overhead is ignored.
pub fn estimate_store_memory(store: &RecordStore) -> MemoryStats {
    let mut links = 0;
    let mut name_bytes = 0;
    for person in store.people() {
        links += person.degree() + person.work_count();
        name_bytes += person.name.len();
    }
    MemoryStats {
        people: store.len(),
        links,
        bytes: store.len() * (size_of::<PersonId>() + size_of::<Person>())
            + links * size_of::<u32>()
            + name_bytes,
    }
}
