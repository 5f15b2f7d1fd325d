use crate::domain::model::{ScholarshipRecord, ScholarshipType};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Scholarship browser criteria. `None` (or an empty search) means "all".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScholarshipQuery {
    pub search: Option<String>,
    pub country: Option<String>,
    pub field: Option<String>,
    pub kind: Option<ScholarshipType>,
    pub max_amount: Option<u32>,
}

impl ScholarshipQuery {
    pub fn matches(&self, scholarship: &ScholarshipRecord) -> bool {
        let matches_search = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(text) => {
                let needle = text.to_lowercase();
                scholarship.name.to_lowercase().contains(&needle)
                    || scholarship.provider.to_lowercase().contains(&needle)
                    || scholarship.description.to_lowercase().contains(&needle)
            }
        };

        let matches_country = self
            .country
            .as_ref()
            .map_or(true, |c| scholarship.countries.contains(c));
        let matches_field = self
            .field
            .as_ref()
            .map_or(true, |f| scholarship.fields.contains(f));
        let matches_kind = self.kind.map_or(true, |k| scholarship.kind == k);
        let matches_amount = self.max_amount.map_or(true, |max| scholarship.amount <= max);

        matches_search && matches_country && matches_field && matches_kind && matches_amount
    }
}

pub fn filter_scholarships<'a>(
    scholarships: &'a [ScholarshipRecord],
    query: &ScholarshipQuery,
) -> Vec<&'a ScholarshipRecord> {
    let results: Vec<&ScholarshipRecord> = scholarships
        .iter()
        .filter(|s| query.matches(s))
        .collect();
    tracing::debug!(
        "Scholarship query kept {} of {}",
        results.len(),
        scholarships.len()
    );
    results
}

fn distinct<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(v.as_str()))
        .cloned()
        .collect()
}

/// Countries across all scholarships, first-seen order.
pub fn country_options(scholarships: &[ScholarshipRecord]) -> Vec<String> {
    distinct(scholarships.iter().flat_map(|s| s.countries.iter()))
}

/// Fields of study across all scholarships, first-seen order.
pub fn field_options(scholarships: &[ScholarshipRecord]) -> Vec<String> {
    distinct(scholarships.iter().flat_map(|s| s.fields.iter()))
}

/// Whole days from `today` to `deadline`; negative once it has passed.
pub fn days_until_deadline(deadline: NaiveDate, today: NaiveDate) -> i64 {
    (deadline - today).num_days()
}

/// Bookmarked scholarship ids, in the order they were saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedScholarships {
    ids: Vec<String>,
}

impl SavedScholarships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the id if absent, removes it otherwise. Returns whether it is now saved.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|saved| saved == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|saved| saved == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
