use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordering applied to matched universities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Ascending global ranking.
    #[default]
    Ranking,
    /// Ascending tuition.
    TuitionLow,
    /// Descending tuition.
    TuitionHigh,
    /// Descending acceptance rate.
    Acceptance,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Ranking,
        SortKey::TuitionLow,
        SortKey::TuitionHigh,
        SortKey::Acceptance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Ranking => "ranking",
            SortKey::TuitionLow => "tuition-low",
            SortKey::TuitionHigh => "tuition-high",
            SortKey::Acceptance => "acceptance",
        }
    }

    /// Parses a sort key name. Unknown names fall back to `Ranking`.
    pub fn from_key(key: &str) -> Self {
        match key.trim() {
            "ranking" => SortKey::Ranking,
            "tuition-low" => SortKey::TuitionLow,
            "tuition-high" => SortKey::TuitionHigh,
            "acceptance" => SortKey::Acceptance,
            other => {
                tracing::warn!("Unknown sort key '{}', falling back to ranking", other);
                SortKey::Ranking
            }
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Secondary country narrowing chosen from the result facets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CountryFilter {
    #[default]
    All,
    Only(String),
}

impl CountryFilter {
    /// `None`, empty and `"all"` all mean no narrowing.
    pub fn from_option(country: Option<&str>) -> Self {
        match country.map(str::trim) {
            None | Some("") => CountryFilter::All,
            Some(c) if c.eq_ignore_ascii_case("all") => CountryFilter::All,
            Some(c) => CountryFilter::Only(c.to_string()),
        }
    }

    pub fn admits(&self, country: &str) -> bool {
        match self {
            CountryFilter::All => true,
            CountryFilter::Only(selected) => selected == country,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub sort_key: SortKey,
    pub country: CountryFilter,
    /// Keep only the first N ranked matches.
    pub limit: Option<usize>,
}
