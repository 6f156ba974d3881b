//! Seeds `stats.ron` files for the survivor roster.

pub mod config;
pub mod error;
pub mod generator;
pub mod stats;
pub mod types;

pub use config::{GeneratorConfig, Roster};
pub use error::{GenError, GenResult};
pub use generator::{
    stats_path, write_stats_file, GenerationReport, StatsFileGenerator, WrittenFile,
};
