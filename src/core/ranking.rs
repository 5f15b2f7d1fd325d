use crate::domain::model::UniversityRecord;
use crate::domain::search::SortKey;
use std::borrow::Borrow;
use std::cmp::Ordering;

pub fn compare(key: SortKey, a: &UniversityRecord, b: &UniversityRecord) -> Ordering {
    match key {
        SortKey::Ranking => a.ranking.cmp(&b.ranking),
        SortKey::TuitionLow => a.tuition_fee.cmp(&b.tuition_fee),
        SortKey::TuitionHigh => b.tuition_fee.cmp(&a.tuition_fee),
        SortKey::Acceptance => b.acceptance_rate.total_cmp(&a.acceptance_rate),
    }
}

/// Orders records by `key`. Stable: ties keep their input order.
pub fn rank_results<T>(mut records: Vec<T>, key: SortKey) -> Vec<T>
where
    T: Borrow<UniversityRecord>,
{
    records.sort_by(|a, b| compare(key, a.borrow(), b.borrow()));
    tracing::debug!("Ranked {} universities by {}", records.len(), key);
    records
}
