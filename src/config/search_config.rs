use crate::catalog::CatalogStore;
use crate::core::export::OutputFormat;
use crate::domain::ports::ProfileProvider;
use crate::domain::profile::ProfileInput;
use crate::domain::search::{CountryFilter, SearchOptions, SortKey};
use crate::utils::error::{MatchError, Result};
use crate::utils::validation::{
    validate_file_extension, validate_path, validate_range, validate_required_field, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub profile: ProfileInput,
    pub search: SearchSection,
    pub catalog: Option<CatalogSection>,
    pub output: OutputSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSection {
    pub sort: Option<String>,
    pub country: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSection {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub format: Option<String>,
}

impl SearchConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MatchError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MatchError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MAX_TUITION})，找不到的保留原字串
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MatchError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        self.profile.validate()?;

        if let Some(limit) = self.search.limit {
            validate_range("search.limit", limit, 1, usize::MAX)?;
        }

        if let Some(catalog) = &self.catalog {
            let path = validate_required_field("catalog.path", &catalog.path)?;
            validate_path("catalog.path", path)?;
            validate_file_extension("catalog.path", path, &["json"])?;
        }

        self.output_format()?;
        Ok(())
    }

    pub fn sort_key(&self) -> SortKey {
        self.search
            .sort
            .as_deref()
            .map(SortKey::from_key)
            .unwrap_or_default()
    }

    pub fn country_filter(&self) -> CountryFilter {
        CountryFilter::from_option(self.search.country.as_deref())
    }

    pub fn output_format(&self) -> Result<OutputFormat> {
        self.output
            .format
            .as_deref()
            .map(OutputFormat::parse)
            .unwrap_or(Ok(OutputFormat::Table))
    }

    pub fn catalog_path(&self) -> Option<&str> {
        self.catalog.as_ref().and_then(|c| c.path.as_deref())
    }

    /// Loads the configured catalog file; `None` means use the built-in one.
    pub fn load_catalog(&self) -> Result<Option<CatalogStore>> {
        self.catalog_path()
            .map(CatalogStore::from_json_file)
            .transpose()
    }
}

impl ProfileProvider for SearchConfig {
    fn profile(&self) -> ProfileInput {
        self.profile.clone()
    }

    fn search_options(&self) -> SearchOptions {
        SearchOptions {
            sort_key: self.sort_key(),
            country: self.country_filter(),
            limit: self.search.limit,
        }
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
