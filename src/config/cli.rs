use crate::config::search_config::{CatalogSection, SearchConfig};
use crate::domain::model::ScholarshipType;
use crate::services::cv::CvUpload;
use crate::services::scholarships::ScholarshipQuery;
use crate::utils::error::{MatchError, Result};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "uniquest")]
#[command(about = "Match a student profile against the university catalog")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Find universities compatible with a profile
    Match(MatchArgs),
    /// Show one university by id
    Show {
        id: String,
        /// JSON catalog file to use instead of the built-in one
        #[arg(long)]
        catalog: Option<String>,
    },
    /// Browse scholarships
    Scholarships(ScholarshipArgs),
    /// Ask the scripted assistant a question
    Chat { message: Vec<String> },
    /// Prefill a profile from a CV upload
    Cv(CvArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct MatchArgs {
    /// Path to a TOML search configuration
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub gpa: Option<f64>,

    #[arg(long)]
    pub max_tuition: Option<f64>,

    #[arg(long = "country", value_delimiter = ',')]
    pub countries: Vec<String>,

    #[arg(long = "program", value_delimiter = ',')]
    pub programs: Vec<String>,

    /// ranking | tuition-low | tuition-high | acceptance
    #[arg(long)]
    pub sort: Option<String>,

    /// Narrow the matches to one country
    #[arg(long)]
    pub only_country: Option<String>,

    #[arg(long)]
    pub limit: Option<usize>,

    /// table | json | csv | tsv
    #[arg(long)]
    pub format: Option<String>,

    /// JSON catalog file to use instead of the built-in one
    #[arg(long)]
    pub catalog: Option<String>,
}

impl MatchArgs {
    /// Loads the config file (if any) and applies flag overrides on top.
    pub fn to_search_config(&self) -> Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::from_file(path)?,
            None => SearchConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut SearchConfig) {
        if let Some(gpa) = self.gpa {
            config.profile.gpa = gpa;
        }
        if let Some(max_tuition) = self.max_tuition {
            config.profile.max_tuition = Some(max_tuition);
        }
        if !self.countries.is_empty() {
            config.profile.preferred_countries = self.countries.clone();
        }
        if !self.programs.is_empty() {
            config.profile.preferred_programs = self.programs.clone();
        }
        if let Some(sort) = &self.sort {
            config.search.sort = Some(sort.clone());
        }
        if let Some(country) = &self.only_country {
            config.search.country = Some(country.clone());
        }
        if let Some(limit) = self.limit {
            config.search.limit = Some(limit);
        }
        if let Some(format) = &self.format {
            config.output.format = Some(format.clone());
        }
        if let Some(path) = &self.catalog {
            config.catalog = Some(CatalogSection {
                path: Some(path.clone()),
            });
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct ScholarshipArgs {
    #[arg(long)]
    pub search: Option<String>,

    #[arg(long)]
    pub country: Option<String>,

    #[arg(long)]
    pub field: Option<String>,

    /// Merit | Need-based | Country-specific | Field-specific
    #[arg(long = "type")]
    pub kind: Option<String>,

    #[arg(long)]
    pub max_amount: Option<u32>,

    #[arg(long, help = "Print each deadline as days remaining")]
    pub countdown: bool,
}

impl ScholarshipArgs {
    pub fn to_query(&self) -> Result<ScholarshipQuery> {
        let kind = self
            .kind
            .as_deref()
            .map(|k| {
                ScholarshipType::parse(k).ok_or_else(|| {
                    MatchError::validation(
                        "type",
                        k,
                        "Valid types: Merit, Need-based, Country-specific, Field-specific",
                    )
                })
            })
            .transpose()?;

        Ok(ScholarshipQuery {
            search: self.search.clone(),
            country: self.country.clone(),
            field: self.field.clone(),
            kind,
            max_amount: self.max_amount,
        })
    }
}

#[derive(Debug, Clone, Args)]
pub struct CvArgs {
    #[arg(long)]
    pub file_name: String,

    /// MIME type; guessed from the file extension when omitted
    #[arg(long)]
    pub content_type: Option<String>,

    #[arg(long)]
    pub size: u64,
}

impl CvArgs {
    pub fn to_upload(&self) -> CvUpload {
        let mut upload = CvUpload::from_file_name(&self.file_name, self.size);
        if let Some(content_type) = &self.content_type {
            upload.content_type = content_type.clone();
        }
        upload
    }
}
