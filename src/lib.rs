pub mod analysis;
pub mod core;
pub mod emit;
pub mod ingest;
pub mod pipeline;
