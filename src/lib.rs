pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalStorage;
pub use config::toml_config::TomlConfig;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{
    document::{DocumentExporter, DocumentLoader},
    engine::Engine,
    pipeline::RecordPipeline,
    store::RecordStore,
};
pub use domain::model::{Grouping, ProcessingReport, Record, Statistics};
pub use utils::error::{RecordError, Result};
