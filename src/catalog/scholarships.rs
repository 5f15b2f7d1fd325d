use crate::domain::model::{ScholarshipRecord, ScholarshipType};
use chrono::NaiveDate;
use std::sync::OnceLock;

/// Static list of scholarships shown in the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct ScholarshipCatalog {
    records: Vec<ScholarshipRecord>,
}

impl ScholarshipCatalog {
    pub fn new(records: Vec<ScholarshipRecord>) -> Self {
        Self { records }
    }

    pub fn builtin() -> &'static ScholarshipCatalog {
        static BUILTIN: OnceLock<ScholarshipCatalog> = OnceLock::new();
        BUILTIN.get_or_init(|| ScholarshipCatalog::new(reference_scholarships()))
    }

    pub fn records(&self) -> &[ScholarshipRecord] {
        &self.records
    }

    pub fn find_by_id(&self, id: &str) -> Option<&ScholarshipRecord> {
        self.records.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn reference_scholarships() -> Vec<ScholarshipRecord> {
    vec![
        ScholarshipRecord {
            id: "1".to_string(),
            name: "Global Excellence Scholarship".to_string(),
            provider: "Stanford University".to_string(),
            amount: 50000,
            deadline: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap_or_default(),
            eligibility: strings(&["GPA 3.8+", "International Student", "STEM Field"]),
            description: "Full tuition scholarship for outstanding international students in STEM fields.".to_string(),
            countries: strings(&["Global"]),
            fields: strings(&["Computer Science", "Engineering", "Mathematics"]),
            kind: ScholarshipType::Merit,
        },
        ScholarshipRecord {
            id: "2".to_string(),
            name: "Commonwealth Scholarship".to_string(),
            provider: "UK Government".to_string(),
            amount: 30000,
            deadline: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap_or_default(),
            eligibility: strings(&["Commonwealth Country", "Masters/PhD", "GPA 3.5+"]),
            description: "Scholarships for students from Commonwealth countries to study in the UK.".to_string(),
            countries: strings(&["United Kingdom"]),
            fields: strings(&["All Fields"]),
            kind: ScholarshipType::CountrySpecific,
        },
        ScholarshipRecord {
            id: "3".to_string(),
            name: "Fulbright Program".to_string(),
            provider: "US State Department".to_string(),
            amount: 45000,
            deadline: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap_or_default(),
            eligibility: strings(&["Graduate Student", "Research Focus", "Academic Excellence"]),
            description: "Prestigious scholarship program for international educational exchange.".to_string(),
            countries: strings(&["United States"]),
            fields: strings(&["All Fields"]),
            kind: ScholarshipType::Merit,
        },
    ]
}
