use anyhow::Result;
use chrono::NaiveDate;
use uniquest::domain::model::ScholarshipType;
use uniquest::domain::profile::Exam;
use uniquest::services::assistant::{ScriptedAssistant, FALLBACK};
use uniquest::services::cv::{extract_profile_hints, CvUpload};
use uniquest::services::scholarships::{
    days_until_deadline, filter_scholarships, SavedScholarships, ScholarshipQuery,
};
use uniquest::{
    CatalogStore, CountryFilter, MatchEngine, MatchError, ProfileInput, ScholarshipCatalog,
    SearchOptions, SortKey,
};

/// CV 上傳預填後直接搜尋
#[test]
fn test_cv_prefill_then_search() -> Result<()> {
    let upload = CvUpload::from_file_name("transcript.pdf", 512 * 1024);
    let hints = extract_profile_hints(&upload)?;

    let mut profile = ProfileInput {
        max_tuition: Some(50000.0),
        ..ProfileInput::default()
    };
    profile.apply_hints(&hints);
    assert_eq!(profile.score_for(Exam::Gmat), Some(720.0));

    let options = SearchOptions {
        sort_key: SortKey::TuitionLow,
        country: CountryFilter::All,
        limit: None,
    };
    let report = MatchEngine::new(CatalogStore::builtin()).search(&profile, &options)?;

    // GPA 3.8 + 0.3 covers everyone; the cap drops Stanford; every
    // remaining school offers Engineering or Computer Science.
    let ids: Vec<&str> = report.matches.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["5", "4", "3", "6", "2"]);
    Ok(())
}

#[test]
fn test_oversized_cv_is_rejected() {
    let upload = CvUpload {
        file_name: "portfolio.pdf".to_string(),
        content_type: "application/pdf".to_string(),
        size_bytes: 11 * 1024 * 1024,
    };
    let err = extract_profile_hints(&upload).unwrap_err();
    assert!(matches!(err, MatchError::UnsupportedUploadError { .. }));
    assert_eq!(err.user_friendly_message(), "File size must be less than 10MB");
}

#[test]
fn test_scholarship_browsing_session() -> Result<()> {
    let catalog = ScholarshipCatalog::builtin();
    let mut saved = SavedScholarships::new();

    let query = ScholarshipQuery {
        search: Some("scholarship".to_string()),
        kind: Some(ScholarshipType::Merit),
        ..ScholarshipQuery::default()
    };
    let results = filter_scholarships(catalog.records(), &query);
    // Global Excellence 名稱含 scholarship；Fulbright 說明含 scholarship
    let ids: Vec<&str> = results.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);

    for scholarship in &results {
        saved.toggle(&scholarship.id);
    }
    assert_eq!(saved.len(), 2);
    saved.toggle("1");
    assert_eq!(saved.ids(), &["3".to_string()]);

    let fulbright = catalog.find_by_id("3").expect("built-in scholarship");
    let today = NaiveDate::from_ymd_opt(2025, 2, 1).expect("valid date");
    assert_eq!(days_until_deadline(fulbright.deadline, today), 28);
    Ok(())
}

#[test]
fn test_assistant_conversation() {
    let assistant = ScriptedAssistant::default();
    assert_eq!(assistant.rules().len(), 5);

    let reply = assistant
        .reply("What IELTS score does Stanford want?")
        .expect("non-blank message");
    assert!(reply.content.contains("IELTS score of 7.0+"));

    let reply = assistant.reply("Where can I park?").expect("non-blank message");
    assert_eq!(reply.content, FALLBACK);
}
