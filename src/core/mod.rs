pub mod engine;
pub mod export;
pub mod facets;
pub mod matching;
pub mod ranking;

pub use crate::domain::model::UniversityRecord;
pub use crate::domain::ports::{CatalogSource, ProfileProvider};
pub use crate::domain::profile::ProfileInput;
pub use crate::domain::search::{CountryFilter, SearchOptions, SortKey};
pub use crate::utils::error::Result;
