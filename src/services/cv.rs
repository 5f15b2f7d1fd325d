use crate::domain::profile::{AcademicLevel, Exam, ProfileHints, TestScore};
use crate::utils::error::{MatchError, Result};
use crate::utils::validation::validate_non_empty_string;

pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

pub const ALLOWED_CONTENT_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvUpload {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

impl CvUpload {
    /// Guesses the content type from the file extension.
    pub fn from_file_name(file_name: &str, size_bytes: u64) -> Self {
        let extension = std::path::Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let content_type = match extension.as_deref() {
            Some("pdf") => ALLOWED_CONTENT_TYPES[0],
            Some("doc") => ALLOWED_CONTENT_TYPES[1],
            Some("docx") => ALLOWED_CONTENT_TYPES[2],
            _ => "application/octet-stream",
        };

        Self {
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            size_bytes,
        }
    }

    pub fn check(&self) -> Result<()> {
        validate_non_empty_string("file_name", &self.file_name)?;

        if !ALLOWED_CONTENT_TYPES.contains(&self.content_type.as_str()) {
            return Err(MatchError::UnsupportedUploadError {
                reason: "Please upload a PDF or Word document".to_string(),
            });
        }

        if self.size_bytes > MAX_UPLOAD_BYTES {
            return Err(MatchError::UnsupportedUploadError {
                reason: "File size must be less than 10MB".to_string(),
            });
        }

        Ok(())
    }
}

/// Accepts a CV and returns fixed profile hints. The document is not read.
pub fn extract_profile_hints(upload: &CvUpload) -> Result<ProfileHints> {
    upload.check()?;
    tracing::info!("📄 Accepted CV '{}' ({} bytes)", upload.file_name, upload.size_bytes);

    Ok(ProfileHints {
        academic_level: Some(AcademicLevel::Undergraduate),
        gpa: Some(3.8),
        test_scores: vec![
            TestScore {
                exam: Exam::Ielts,
                score: 7.5,
            },
            TestScore {
                exam: Exam::Toefl,
                score: 105.0,
            },
            TestScore {
                exam: Exam::Sat,
                score: 1450.0,
            },
            TestScore {
                exam: Exam::Gmat,
                score: 720.0,
            },
        ],
        preferred_programs: vec!["Computer Science".to_string(), "Engineering".to_string()],
    })
}
