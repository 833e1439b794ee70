use crate::core::ids::{PersonId, WorkId};
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Debug)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub birth_year: i32,
    co_stars: FxHashSet<PersonId>,
    works: FxHashSet<WorkId>,
}

impl Person {
    pub fn new(id: PersonId, name: impl Into<String>, birth_year: i32) -> Self {
        Self {
            id,
            name: name.into(),
            birth_year,
            co_stars: FxHashSet::default(),
            works: FxHashSet::default(),
        }
    }

    pub fn degree(&self) -> usize {
        self.co_stars.len()
    }

    pub fn work_count(&self) -> usize {
        self.works.len()
    }

    pub fn has_co_star(&self, other: PersonId) -> bool {
        self.co_stars.contains(&other)
    }

    pub fn sorted_co_stars(&self) -> Vec<PersonId> {
        sorted(&self.co_stars)
    }

    pub fn sorted_works(&self) -> Vec<WorkId> {
        sorted(&self.works)
    }
}

fn sorted(set: &FxHashSet<u32>) -> Vec<u32> {
    let mut result = set.iter().copied().collect::<Vec<_>>();
    result.sort_unstable();
    result
}

/// Owns every admitted person. Built by the people pass, mutated by the credits pass and read by
/// the emitters.
#[derive(Debug, Default)]
pub struct RecordStore {
    people: FxHashMap<PersonId, Person>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `person`, replacing and returning any earlier record with the same id.
    pub fn admit(&mut self, person: Person) -> Option<Person> {
        self.people.insert(person.id, person)
    }

    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.people.get(&id)
    }

    pub fn contains(&self, id: PersonId) -> bool {
        self.people.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn record_work(&mut self, id: PersonId, work: WorkId) -> bool {
        match self.people.get_mut(&id) {
            Some(person) => {
                person.works.insert(work);
                true
            }
            None => false,
        }
    }

    /// Links every unordered pair of the cast in both directions. Members missing from the store
    /// and repeated members are ignored, so no person ever becomes its own co-star.
    pub fn expand_cast(&mut self, cast: &[PersonId]) {
        for (i, &a) in cast.iter().enumerate() {
            for &b in &cast[i + 1..] {
                if a == b || !self.contains(a) || !self.contains(b) {
                    continue;
                }
                if let Some(person) = self.people.get_mut(&a) {
                    person.co_stars.insert(b);
                }
                if let Some(person) = self.people.get_mut(&b) {
                    person.co_stars.insert(a);
                }
            }
        }
    }

    pub fn sorted_ids(&self) -> Vec<PersonId> {
        let mut ids = self.people.keys().copied().collect::<Vec<_>>();
        ids.sort_unstable();
        ids
    }

    pub fn iter_sorted(&self) -> impl Iterator<Item = &Person> {
        self.sorted_ids()
            .into_iter()
            .filter_map(|id| self.people.get(&id))
    }

    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    pub fn degree_sum(&self) -> u64 {
        self.people.values().map(|p| p.degree() as u64).sum()
    }

    pub fn edge_count(&self) -> u64 {
        self.degree_sum() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(ids: &[PersonId]) -> RecordStore {
        let mut store = RecordStore::new();
        for &id in ids {
            store.admit(Person::new(id, format!("p{id}"), 1900));
        }
        store
    }

    #[test]
    fn test_empty_store() {
        let store = RecordStore::new();
        assert!(store.is_empty());
        assert_eq!(0, store.edge_count());
        assert_eq!(0, store.iter_sorted().count());
    }

    #[test]
    fn test_admit_last_wins() {
        let mut store = RecordStore::new();
        assert!(store.admit(Person::new(1, "first", 1900)).is_none());
        let previous = store.admit(Person::new(1, "second", 1901));

        assert_eq!("first", previous.unwrap().name);
        assert_eq!(1, store.len());
        assert_eq!("second", store.get(1).unwrap().name);
        assert_eq!(1901, store.get(1).unwrap().birth_year);
    }

    #[test]
    fn test_single_pair() {
        let mut store = store_with(&[1, 2]);
        store.expand_cast(&[1, 2]);

        assert_eq!(vec![2], store.get(1).unwrap().sorted_co_stars());
        assert_eq!(vec![1], store.get(2).unwrap().sorted_co_stars());
        assert_eq!(1, store.edge_count());
    }

    #[test]
    fn test_full_clique() {
        let ids = [5, 3, 9, 1, 7];
        let mut store = store_with(&ids);
        store.expand_cast(&ids);

        for &id in &ids {
            let person = store.get(id).unwrap();
            assert_eq!(ids.len() - 1, person.degree());
            assert!(!person.has_co_star(id));
        }
        assert_eq!(10, store.edge_count());
    }

    #[test]
    fn test_expand_is_idempotent() {
        let mut store = store_with(&[1, 2, 3]);
        store.expand_cast(&[1, 2, 3]);
        let before = store
            .iter_sorted()
            .map(|p| p.sorted_co_stars())
            .collect::<Vec<_>>();

        store.expand_cast(&[3, 1, 2]);
        let after = store
            .iter_sorted()
            .map(|p| p.sorted_co_stars())
            .collect::<Vec<_>>();

        assert_eq!(before, after);
        assert_eq!(3, store.edge_count());
    }

    #[test]
    fn test_repeated_member_is_not_a_self_loop() {
        let mut store = store_with(&[1, 2]);
        store.expand_cast(&[1, 1, 2]);

        assert!(!store.get(1).unwrap().has_co_star(1));
        assert_eq!(1, store.get(1).unwrap().degree());
    }

    #[test]
    fn test_unknown_member_is_ignored() {
        let mut store = store_with(&[1, 2]);
        store.expand_cast(&[1, 99, 2]);

        assert!(store.get(99).is_none());
        assert_eq!(vec![2], store.get(1).unwrap().sorted_co_stars());
    }

    #[test]
    fn test_overlapping_casts_are_symmetric() {
        let mut store = store_with(&[1, 2, 3, 4]);
        store.expand_cast(&[1, 2, 3]);
        store.expand_cast(&[3, 4]);

        for a in store.people() {
            for b in store.people() {
                assert_eq!(a.has_co_star(b.id), b.has_co_star(a.id));
            }
        }
        assert_eq!(vec![1, 2, 4], store.get(3).unwrap().sorted_co_stars());
        assert_eq!(4, store.edge_count());
    }

    #[test]
    fn test_record_work() {
        let mut store = store_with(&[1]);
        assert!(store.record_work(1, 30));
        assert!(store.record_work(1, 10));
        assert!(store.record_work(1, 30));
        assert!(!store.record_work(2, 10));

        assert_eq!(vec![10, 30], store.get(1).unwrap().sorted_works());
        assert_eq!(0, store.get(1).unwrap().degree());
    }

    #[test]
    fn test_iter_sorted() {
        let store = store_with(&[30, 4, 17]);
        assert_eq!(
            vec![4, 17, 30],
            store.iter_sorted().map(|p| p.id).collect::<Vec<_>>()
        );
    }
}
