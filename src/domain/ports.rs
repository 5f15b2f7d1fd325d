use crate::domain::model::UniversityRecord;
use crate::domain::profile::ProfileInput;
use crate::domain::search::SearchOptions;
use crate::utils::error::{MatchError, Result};

/// Read-only access to a university catalog.
pub trait CatalogSource: Send + Sync {
    fn universities(&self) -> &[UniversityRecord];

    fn find_by_id(&self, id: &str) -> Option<&UniversityRecord> {
        self.universities().iter().find(|u| u.id == id)
    }

    fn require_by_id(&self, id: &str) -> Result<&UniversityRecord> {
        self.find_by_id(id).ok_or_else(|| MatchError::NotFound { id: id.to_string() })
    }
}

/// Anything that can hand the engine a profile and search options.
pub trait ProfileProvider {
    fn profile(&self) -> ProfileInput;
    fn search_options(&self) -> SearchOptions;
}
