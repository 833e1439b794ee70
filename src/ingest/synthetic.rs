use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::iter;

pub struct SyntheticConfig {
    pub people: u32,
    pub works: u32,
    pub max_cast: u32,
    pub seed: u64,
}

const PROFESSIONS: [&str; 5] = [
    "actor",
    "actress",
    "actor,producer",
    "director,writer",
    "composer",
];

/// People dump rows, header first. Roughly one in ten has an unknown birth year and some carry
/// non-acting professions.
pub fn people_rows(cfg: &SyntheticConfig) -> impl Iterator<Item = String> {
    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let header = "nconst\tprimaryName\tbirthYear\tdeathYear\tprimaryProfession".to_string();

    iter::once(header).chain((1..=cfg.people).map(move |id| {
        let birth_year = if rng.random_range(0..10) == 0 {
            "\\N".to_string()
        } else {
            rng.random_range(1850..2010).to_string()
        };
        let profession = PROFESSIONS[rng.random_range(0..PROFESSIONS.len())];
        format!("nm{id:07}\tPerson {id}\t{birth_year}\t\\N\t{profession}")
    }))
}

/// Credits dump rows, header first, grouped by work. Casts may name people that the filter
/// rejects or that do not exist at all.
pub fn credit_rows(cfg: &SyntheticConfig) -> impl Iterator<Item = String> {
    let mut rng = StdRng::seed_from_u64(cfg.seed.wrapping_add(1));
    let people = cfg.people.max(1);
    let max_cast = cfg.max_cast.max(1);
    let header = "tconst\tordering\tnconst\tcategory".to_string();

    iter::once(header).chain((1..=cfg.works).flat_map(move |work| {
        let cast_size = rng.random_range(1..=max_cast);
        let cast = (1..=cast_size)
            .map(|ordering| {
                let person = rng.random_range(1..=people + people / 10);
                format!("tt{work:07}\t{ordering}\tnm{person:07}\tactor")
            })
            .collect::<Vec<_>>();
        cast.into_iter()
    }))
}
