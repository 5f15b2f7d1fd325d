use anyhow::Result;
use uniquest::{
    filter_catalog, rank_results, CatalogSource, CatalogStore, ProfileInput, SortKey,
    UniversityRecord, GPA_TOLERANCE,
};

/// Stanford, Oxford and Toronto from the built-in catalog.
fn three_university_catalog() -> Result<CatalogStore> {
    let records = CatalogStore::builtin()
        .universities()
        .iter()
        .filter(|u| ["1", "2", "3"].contains(&u.id.as_str()))
        .cloned()
        .collect();
    Ok(CatalogStore::new(records)?)
}

fn names(records: &[&UniversityRecord]) -> Vec<String> {
    records.iter().map(|r| r.name.clone()).collect()
}

/// A spread of profiles used for property checks.
fn sample_profiles() -> Vec<ProfileInput> {
    let mut profiles = Vec::new();
    for gpa in [0.0, 2.5, 3.0, 3.4, 3.5, 3.6, 3.9, 4.0] {
        for max_tuition in [None, Some(1500.0), Some(36000.0), Some(60000.0)] {
            profiles.push(ProfileInput {
                max_tuition,
                ..ProfileInput::with_gpa(gpa)
            });
            profiles.push(ProfileInput {
                max_tuition,
                preferred_countries: vec!["Canada".to_string(), "Switzerland".to_string()],
                preferred_programs: vec!["Computer Science".to_string()],
                ..ProfileInput::with_gpa(gpa)
            });
            profiles.push(ProfileInput {
                max_tuition,
                preferred_programs: vec!["Law".to_string(), "Arts".to_string()],
                ..ProfileInput::with_gpa(gpa)
            });
        }
    }
    profiles
}

#[test]
fn test_tuition_cap_excludes_expensive_universities() -> Result<()> {
    let catalog = three_university_catalog()?;
    let profile = ProfileInput {
        max_tuition: Some(40000.0),
        ..ProfileInput::with_gpa(3.6)
    };

    let matches = filter_catalog(&catalog, &profile);
    assert_eq!(names(&matches), vec!["University of Toronto"]);
    Ok(())
}

#[test]
fn test_gpa_tolerance_boundary() -> Result<()> {
    let catalog = three_university_catalog()?;

    // 3.5 + 0.3 = 3.8: Oxford 剛好符合，Stanford 3.9 不符合
    let matches = filter_catalog(&catalog, &ProfileInput::with_gpa(3.5));
    assert_eq!(
        names(&matches),
        vec!["University of Oxford", "University of Toronto"]
    );
    Ok(())
}

#[test]
fn test_acceptance_ranking_scenario() -> Result<()> {
    let catalog = three_university_catalog()?;
    let oxford = catalog.find_by_id("2").unwrap();
    let toronto = catalog.find_by_id("3").unwrap();

    let ranked = rank_results(vec![oxford, toronto], SortKey::Acceptance);
    assert_eq!(
        names(&ranked),
        vec!["University of Toronto", "University of Oxford"]
    );
    Ok(())
}

#[test]
fn test_every_match_satisfies_active_constraints() {
    let catalog = CatalogStore::builtin();

    for profile in sample_profiles() {
        for record in filter_catalog(catalog, &profile) {
            if let Some(max) = profile.max_tuition {
                assert!(f64::from(record.tuition_fee) <= max, "{} over cap", record.name);
            }
            if !profile.preferred_countries.is_empty() {
                assert!(profile.preferred_countries.contains(&record.country));
            }
            if !profile.preferred_programs.is_empty() {
                assert!(record
                    .programs
                    .iter()
                    .any(|p| profile.preferred_programs.contains(p)));
            }
            assert!(record.requirements.gpa <= profile.gpa + GPA_TOLERANCE);
        }
    }
}

#[test]
fn test_filter_is_an_ordered_subset_of_the_catalog() {
    let catalog = CatalogStore::builtin();
    let position = |id: &str| catalog.universities().iter().position(|u| u.id == id);

    for profile in sample_profiles() {
        let matches = filter_catalog(catalog, &profile);
        let positions: Vec<usize> = matches.iter().filter_map(|m| position(&m.id)).collect();
        assert_eq!(positions.len(), matches.len());
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_filter_is_idempotent() {
    let catalog = CatalogStore::builtin();
    for profile in sample_profiles() {
        assert_eq!(
            filter_catalog(catalog, &profile),
            filter_catalog(catalog, &profile)
        );
    }
}

#[test]
fn test_ranking_keeps_every_record() {
    let catalog = CatalogStore::builtin();

    for profile in sample_profiles() {
        let matches = filter_catalog(catalog, &profile);
        for key in SortKey::ALL {
            let ranked = rank_results(matches.clone(), key);
            assert_eq!(ranked.len(), matches.len());

            let mut before: Vec<&str> = matches.iter().map(|m| m.id.as_str()).collect();
            let mut after: Vec<&str> = ranked.iter().map(|m| m.id.as_str()).collect();
            before.sort_unstable();
            after.sort_unstable();
            assert_eq!(before, after);
        }
    }
}

#[test]
fn test_ranking_orders_are_monotonic() {
    let all: Vec<&UniversityRecord> = CatalogStore::builtin().universities().iter().collect();

    let by_rank = rank_results(all.clone(), SortKey::Ranking);
    assert!(by_rank.windows(2).all(|w| w[0].ranking <= w[1].ranking));

    let by_tuition_high = rank_results(all.clone(), SortKey::TuitionHigh);
    assert!(by_tuition_high
        .windows(2)
        .all(|w| w[0].tuition_fee >= w[1].tuition_fee));

    let by_tuition_low = rank_results(all.clone(), SortKey::TuitionLow);
    assert!(by_tuition_low
        .windows(2)
        .all(|w| w[0].tuition_fee <= w[1].tuition_fee));

    let by_acceptance = rank_results(all, SortKey::Acceptance);
    assert!(by_acceptance
        .windows(2)
        .all(|w| w[0].acceptance_rate >= w[1].acceptance_rate));
}

#[test]
fn test_unknown_sort_key_behaves_like_ranking() {
    let all: Vec<&UniversityRecord> = CatalogStore::builtin().universities().iter().collect();
    assert_eq!(
        rank_results(all.clone(), SortKey::from_key("most-popular")),
        rank_results(all, SortKey::Ranking)
    );
}
