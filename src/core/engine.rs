use crate::core::facets::{country_facets, narrow_by_country};
use crate::core::matching::filter_catalog;
use crate::core::ranking::rank_results;
use crate::domain::model::UniversityRecord;
use crate::domain::ports::{CatalogSource, ProfileProvider};
use crate::domain::profile::ProfileInput;
use crate::domain::search::{SearchOptions, SortKey};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use serde::Serialize;

/// Outcome of one profile search.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport<'a> {
    pub sort_key: SortKey,
    /// Matches before country narrowing and limit.
    pub total_matching: usize,
    /// Countries among all matches, for the refinement control.
    pub countries: Vec<String>,
    pub matches: Vec<&'a UniversityRecord>,
}

impl MatchReport<'_> {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }
}

pub struct MatchEngine<'a, C: CatalogSource + ?Sized> {
    catalog: &'a C,
}

impl<'a, C: CatalogSource + ?Sized> MatchEngine<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a C {
        self.catalog
    }

    /// Validate, filter, facet, narrow, rank, then truncate.
    pub fn search(&self, profile: &ProfileInput, options: &SearchOptions) -> Result<MatchReport<'a>> {
        profile.validate()?;

        let matching = filter_catalog(self.catalog, profile);
        let countries = country_facets(&matching);
        let total_matching = matching.len();

        let narrowed = narrow_by_country(matching, &options.country);
        let mut matches = rank_results(narrowed, options.sort_key);

        if let Some(limit) = options.limit {
            matches.truncate(limit);
        }

        tracing::info!(
            "🎓 Found {} universities matching the profile ({} shown, sorted by {})",
            total_matching,
            matches.len(),
            options.sort_key
        );

        Ok(MatchReport {
            sort_key: options.sort_key,
            total_matching,
            countries,
            matches,
        })
    }

    pub fn run<P: ProfileProvider>(&self, provider: &P) -> Result<MatchReport<'a>> {
        let profile = provider.profile();
        let options = provider.search_options();
        tracing::debug!("Profile: {:?}", profile);
        tracing::debug!("Search options: {:?}", options);
        self.search(&profile, &options)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&'a UniversityRecord> {
        self.catalog.find_by_id(id)
    }
}
