pub mod scholarships;
mod universities;

use crate::domain::model::UniversityRecord;
use crate::domain::ports::CatalogSource;
use crate::utils::error::{MatchError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range};
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

pub use scholarships::ScholarshipCatalog;

/// Immutable, ordered university reference table.
///
/// Built once and shared by reference; nothing in the crate mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStore {
    records: Vec<UniversityRecord>,
}

impl CatalogStore {
    /// Builds a catalog, rejecting duplicate ids and malformed records.
    pub fn new(records: Vec<UniversityRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            check_record(record)?;
            if !seen.insert(record.id.as_str()) {
                return Err(MatchError::DuplicateIdError {
                    id: record.id.clone(),
                });
            }
        }

        tracing::debug!("Catalog loaded with {} universities", records.len());
        Ok(Self { records })
    }

    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Process-wide built-in catalog.
    pub fn builtin() -> &'static CatalogStore {
        static BUILTIN: OnceLock<CatalogStore> = OnceLock::new();
        BUILTIN.get_or_init(|| CatalogStore {
            records: universities::reference_universities(),
        })
    }

    /// The given catalog, or the built-in one when none was loaded.
    pub fn or_builtin(custom: Option<&CatalogStore>) -> &CatalogStore {
        match custom {
            Some(catalog) => catalog,
            None => Self::builtin(),
        }
    }

    /// 從 JSON 字串載入 (陣列格式)
    pub fn from_json_str(content: &str) -> Result<Self> {
        let records: Vec<UniversityRecord> = serde_json::from_str(content)?;
        Self::new(records)
    }

    /// 從 JSON 檔案載入
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::info!("📚 Loading catalog from {}", path.as_ref().display());
        Self::from_json_str(&content)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UniversityRecord> {
        self.records.iter()
    }
}

impl CatalogSource for CatalogStore {
    fn universities(&self) -> &[UniversityRecord] {
        &self.records
    }
}

fn check_record(record: &UniversityRecord) -> Result<()> {
    validate_non_empty_string("id", &record.id)?;
    validate_non_empty_string("name", &record.name)?;

    if record.programs.is_empty() {
        return Err(MatchError::validation(
            "programs",
            &record.id,
            "University must offer at least one program",
        ));
    }

    validate_range("ranking", record.ranking, 1, u32::MAX)?;
    validate_range("acceptanceRate", record.acceptance_rate, 0.0, 100.0)?;
    validate_range("requirements.gpa", record.requirements.gpa, 0.0, 4.0)?;

    if !record.requirements.ielts.is_finite() || record.requirements.ielts < 0.0 {
        return Err(MatchError::validation(
            "requirements.ielts",
            record.requirements.ielts,
            "Value must be a non-negative number",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_passes_checks() {
        let builtin = CatalogStore::builtin();
        assert_eq!(builtin.len(), 6);

        let rebuilt = CatalogStore::new(builtin.universities().to_vec()).unwrap();
        assert_eq!(&rebuilt, builtin);
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(std::ptr::eq(CatalogStore::builtin(), CatalogStore::builtin()));
    }

    #[test]
    fn test_or_builtin() {
        assert!(std::ptr::eq(
            CatalogStore::or_builtin(None),
            CatalogStore::builtin()
        ));

        let custom = CatalogStore::empty();
        assert!(CatalogStore::or_builtin(Some(&custom)).is_empty());
    }

    #[test]
    fn test_zero_ranking_is_rejected() {
        let mut record = CatalogStore::builtin().universities()[0].clone();
        record.ranking = 0;
        match CatalogStore::new(vec![record]) {
            Err(MatchError::ValidationError { field, .. }) => assert_eq!(field, "ranking"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_find_by_id() {
        let catalog = CatalogStore::builtin();
        assert_eq!(catalog.find_by_id("3").unwrap().name, "University of Toronto");
        assert!(catalog.find_by_id("99").is_none());
        assert!(matches!(
            catalog.require_by_id("99"),
            Err(MatchError::NotFound { .. })
        ));
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let mut records = CatalogStore::builtin().universities().to_vec();
        let mut copy = records[0].clone();
        copy.name = "Stanford Clone".to_string();
        records.push(copy);

        match CatalogStore::new(records) {
            Err(MatchError::DuplicateIdError { id }) => assert_eq!(id, "1"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_program_set_is_rejected() {
        let mut record = CatalogStore::builtin().universities()[0].clone();
        record.programs.clear();
        assert!(CatalogStore::new(vec![record]).is_err());
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"[
            {
                "id": "u-1",
                "name": "Test University",
                "location": "Testville",
                "country": "Canada",
                "ranking": 40,
                "tuitionFee": 20000,
                "acceptanceRate": 55,
                "programs": ["Arts"],
                "requirements": { "gpa": 3.0, "ielts": 6.0, "toefl": 80 },
                "scholarships": false
            }
        ]"#;

        let catalog = CatalogStore::from_json_str(json).unwrap();
        let record = catalog.find_by_id("u-1").unwrap();
        assert_eq!(record.tuition_fee, 20000);
        assert_eq!(record.requirements.sat, None);
        assert!(record.features.is_empty());
    }
}
