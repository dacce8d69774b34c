mod config;
mod terrain;

// Re-export test fixtures
pub use config::*;
pub use terrain::*;
