pub mod credits;
pub mod people;
pub mod synthetic;
pub mod titles;
pub mod tsv;
