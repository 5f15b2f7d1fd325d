use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Admission requirements published for a university.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirements {
    /// Minimum GPA on the 4.0 scale.
    pub gpa: f64,
    pub ielts: f64,
    pub toefl: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sat: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampusType {
    Urban,
    Suburban,
    Rural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampusSize {
    Small,
    Medium,
    Large,
}

/// One entry of the university catalog. Never mutated after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniversityRecord {
    pub id: String,
    pub name: String,
    pub location: String,
    pub country: String,
    /// Global ranking, lower is better.
    pub ranking: u32,
    /// Annual tuition in whole currency units.
    pub tuition_fee: u32,
    /// Percentage, 0-100.
    pub acceptance_rate: f64,
    pub programs: Vec<String>,
    pub requirements: Requirements,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub description: String,
    pub scholarships: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campus_type: Option<CampusType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<CampusSize>,
}

impl UniversityRecord {
    pub fn offers_any(&self, programs: &[String]) -> bool {
        self.programs.iter().any(|p| programs.contains(p))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScholarshipType {
    Merit,
    #[serde(rename = "Need-based")]
    NeedBased,
    #[serde(rename = "Country-specific")]
    CountrySpecific,
    #[serde(rename = "Field-specific")]
    FieldSpecific,
}

impl ScholarshipType {
    pub fn label(&self) -> &'static str {
        match self {
            ScholarshipType::Merit => "Merit",
            ScholarshipType::NeedBased => "Need-based",
            ScholarshipType::CountrySpecific => "Country-specific",
            ScholarshipType::FieldSpecific => "Field-specific",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "merit" => Some(ScholarshipType::Merit),
            "need-based" => Some(ScholarshipType::NeedBased),
            "country-specific" => Some(ScholarshipType::CountrySpecific),
            "field-specific" => Some(ScholarshipType::FieldSpecific),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScholarshipRecord {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub amount: u32,
    pub deadline: NaiveDate,
    pub eligibility: Vec<String>,
    pub description: String,
    pub countries: Vec<String>,
    pub fields: Vec<String>,
    #[serde(rename = "type")]
    pub kind: ScholarshipType,
}
