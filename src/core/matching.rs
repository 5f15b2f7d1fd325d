use crate::domain::model::UniversityRecord;
use crate::domain::ports::CatalogSource;
use crate::domain::profile::ProfileInput;

/// Slack added to the student's GPA before comparing it with a university's
/// minimum. 0.3 on the 4.0 scale.
pub const GPA_TOLERANCE: f64 = 0.3;

/// Whether a single university is compatible with the profile.
///
/// All active constraints must hold:
/// - tuition at or under `max_tuition` (when set)
/// - country listed in `preferred_countries` (when non-empty)
/// - at least one shared program with `preferred_programs` (when non-empty)
/// - required GPA at most `profile.gpa + GPA_TOLERANCE`
pub fn is_match(profile: &ProfileInput, university: &UniversityRecord) -> bool {
    if let Some(max_tuition) = profile.max_tuition {
        if f64::from(university.tuition_fee) > max_tuition {
            return false;
        }
    }

    if !profile.preferred_countries.is_empty()
        && !profile.preferred_countries.contains(&university.country)
    {
        return false;
    }

    if !profile.preferred_programs.is_empty() && !university.offers_any(&profile.preferred_programs)
    {
        return false;
    }

    university.requirements.gpa <= profile.gpa + GPA_TOLERANCE
}

/// Compatible universities, in catalog order. Pure; no validation.
pub fn filter_catalog<'a, C>(catalog: &'a C, profile: &ProfileInput) -> Vec<&'a UniversityRecord>
where
    C: CatalogSource + ?Sized,
{
    let universities = catalog.universities();
    let matches: Vec<&UniversityRecord> = universities
        .iter()
        .filter(|u| is_match(profile, u))
        .collect();

    tracing::debug!(
        "Matched {} of {} universities",
        matches.len(),
        universities.len()
    );
    matches
}
