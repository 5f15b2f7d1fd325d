pub mod catalog;
pub mod config;
pub mod core;
pub mod domain;
pub mod services;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use catalog::{CatalogStore, ScholarshipCatalog};
pub use config::SearchConfig;
pub use crate::core::{
    engine::{MatchEngine, MatchReport},
    matching::{filter_catalog, GPA_TOLERANCE},
    ranking::rank_results,
};
pub use crate::domain::{
    model::UniversityRecord,
    ports::CatalogSource,
    profile::ProfileInput,
    search::{CountryFilter, SearchOptions, SortKey},
};
pub use utils::error::{MatchError, Result};
