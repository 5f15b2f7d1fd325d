use crate::domain::model::UniversityRecord;
use crate::domain::search::CountryFilter;
use std::borrow::Borrow;
use std::collections::HashSet;

/// Distinct countries in first-seen order.
pub fn country_facets<T>(records: &[T]) -> Vec<String>
where
    T: Borrow<UniversityRecord>,
{
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|r| Borrow::<UniversityRecord>::borrow(r).country.as_str())
        .filter(|country| seen.insert(*country))
        .map(str::to_string)
        .collect()
}

pub fn narrow_by_country<T>(records: Vec<T>, filter: &CountryFilter) -> Vec<T>
where
    T: Borrow<UniversityRecord>,
{
    match filter {
        CountryFilter::All => records,
        CountryFilter::Only(_) => records
            .into_iter()
            .filter(|r| filter.admits(&Borrow::<UniversityRecord>::borrow(r).country))
            .collect(),
    }
}
