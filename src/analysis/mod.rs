pub mod collaborations;
