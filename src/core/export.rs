use crate::core::engine::MatchReport;
use crate::domain::model::UniversityRecord;
use crate::utils::error::{MatchError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
    Tsv,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            other => Err(MatchError::validation(
                "output.format",
                other,
                "Unsupported format. Valid formats: table, json, csv, tsv",
            )),
        }
    }
}

const HEADER: [&str; 9] = [
    "id",
    "name",
    "country",
    "ranking",
    "tuition_fee",
    "acceptance_rate",
    "required_gpa",
    "programs",
    "scholarships",
];

pub fn render_report(report: &MatchReport<'_>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Csv => render_delimited(&report.matches, b','),
        OutputFormat::Tsv => render_delimited(&report.matches, b'\t'),
    }
}

fn render_delimited(records: &[&UniversityRecord], delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for record in records {
        writer.write_record([
            record.id.clone(),
            record.name.clone(),
            record.country.clone(),
            record.ranking.to_string(),
            record.tuition_fee.to_string(),
            record.acceptance_rate.to_string(),
            record.requirements.gpa.to_string(),
            record.programs.join(";"),
            record.scholarships.to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| MatchError::IoError(std::io::Error::new(e.error().kind(), e.to_string())))?;
    String::from_utf8(bytes).map_err(|e| {
        MatchError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

fn render_table(report: &MatchReport<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Found {} universities matching your profile (showing {}, sorted by {})",
        report.total_matching,
        report.len(),
        report.sort_key
    );
    if !report.countries.is_empty() {
        let _ = writeln!(out, "Countries: {}", report.countries.join(", "));
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<4} {:<34} {:<16} {:>5} {:>9} {:>7} {:>5}",
        "ID", "NAME", "COUNTRY", "RANK", "TUITION", "ACCEPT", "GPA"
    );
    for record in &report.matches {
        let _ = writeln!(
            out,
            "{:<4} {:<34} {:<16} {:>5} {:>9} {:>6}% {:>5.1}",
            record.id,
            record.name,
            record.country,
            record.ranking,
            record.tuition_fee,
            record.acceptance_rate,
            record.requirements.gpa
        );
    }
    out
}

/// Multi-line description of a single university.
pub fn render_university(record: &UniversityRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (#{} globally)", record.name, record.ranking);
    let _ = writeln!(out, "  Location:        {}, {}", record.location, record.country);
    let _ = writeln!(out, "  Tuition:         ${} / year", record.tuition_fee);
    let _ = writeln!(out, "  Acceptance rate: {}%", record.acceptance_rate);
    let _ = writeln!(out, "  Programs:        {}", record.programs.join(", "));

    let req = &record.requirements;
    let _ = write!(
        out,
        "  Requirements:    GPA {:.1}, IELTS {:.1}, TOEFL {}",
        req.gpa, req.ielts, req.toefl
    );
    if let Some(sat) = req.sat {
        let _ = write!(out, ", SAT {}", sat);
    }
    let _ = writeln!(out);

    if !record.features.is_empty() {
        let _ = writeln!(out, "  Features:        {}", record.features.join(", "));
    }
    let _ = writeln!(
        out,
        "  Scholarships:    {}",
        if record.scholarships { "available" } else { "none" }
    );
    if !record.description.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "  {}", record.description);
    }
    out
}
