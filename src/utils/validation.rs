use crate::utils::error::{MatchError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(MatchError::validation(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(MatchError::validation(
            field_name,
            path,
            "Path contains null bytes",
        ));
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, file: &str, allowed_extensions: &[&str]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_set.contains(extension.to_ascii_lowercase().as_str()) => Ok(()),
        Some(extension) => Err(MatchError::validation(
            field_name,
            file,
            format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        )),
        None => Err(MatchError::validation(
            field_name,
            file,
            "File has no extension or invalid filename",
        )),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| MatchError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MatchError::validation(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// Rejects NaN, infinities and negative amounts.
pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(MatchError::validation(
            field_name,
            value,
            "Value must be a non-negative number",
        ));
    }
    Ok(())
}

/// Rejects NaN, infinities, zero and negative amounts.
pub fn validate_positive(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(MatchError::validation(
            field_name,
            value,
            "Value must be a positive number",
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN 與任何值比較皆為 false，所以用反向條件
    if !(value >= min && value <= max) {
        return Err(MatchError::validation(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_range() {
        assert!(validate_range("gpa", 3.5, 0.0, 4.0).is_ok());
        assert!(validate_range("gpa", 0.0, 0.0, 4.0).is_ok());
        assert!(validate_range("gpa", 4.0, 0.0, 4.0).is_ok());
        assert!(validate_range("gpa", 4.1, 0.0, 4.0).is_err());
        assert!(validate_range("gpa", -0.1, 0.0, 4.0).is_err());
        assert!(validate_range("gpa", f64::NAN, 0.0, 4.0).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("max_tuition", 0.0).is_ok());
        assert!(validate_non_negative("max_tuition", 40000.0).is_ok());
        assert!(validate_non_negative("max_tuition", -1.0).is_err());
        assert!(validate_non_negative("max_tuition", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("max_tuition", 0.01).is_ok());
        assert!(validate_positive("max_tuition", 0.0).is_err());
        assert!(validate_positive("max_tuition", -5.0).is_err());
        assert!(validate_positive("max_tuition", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("catalog.path", "unis.json", &["json"]).is_ok());
        assert!(validate_file_extension("catalog.path", "UNIS.JSON", &["json"]).is_ok());
        assert!(validate_file_extension("catalog.path", "unis.csv", &["json"]).is_err());
        assert!(validate_file_extension("catalog.path", "unis", &["json"]).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(3.2);
        let absent: Option<f64> = None;
        assert_eq!(*validate_required_field("profile.gpa", &present).unwrap(), 3.2);
        assert!(validate_required_field("profile.gpa", &absent).is_err());
    }
}
