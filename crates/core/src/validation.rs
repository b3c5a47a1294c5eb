//! Field validation and normalisation rules shared by every entity.
//!
//! Handlers call these before touching the database so that range and
//! enum violations surface as `400` with a message naming the field. The
//! migrations repeat the important ones as `CHECK` constraints.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

pub const FEATURE_STATUS_BACKLOG: &str = "backlog";
pub const FEATURE_STATUS_IN_PROGRESS: &str = "in-progress";
pub const FEATURE_STATUS_DONE: &str = "done";
pub const FEATURE_STATUS_CANCELLED: &str = "cancelled";

/// All valid feature statuses, in board order.
pub const VALID_FEATURE_STATUSES: &[&str] = &[
    FEATURE_STATUS_BACKLOG,
    FEATURE_STATUS_IN_PROGRESS,
    FEATURE_STATUS_DONE,
    FEATURE_STATUS_CANCELLED,
];

/// All valid cost item types.
pub const VALID_COST_TYPES: &[&str] = &["license", "equipment", "contractor", "other"];

/// All valid absence types.
pub const VALID_ABSENCE_TYPES: &[&str] = &["holiday", "sick", "other"];

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

static CURRENCY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}$").expect("valid regex"));

// ---------------------------------------------------------------------------
// Primitive rules
// ---------------------------------------------------------------------------

/// Reject empty or whitespace-only strings.
pub fn validate_required(value: &str, name: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{name} is required")));
    }
    Ok(())
}

/// Validate that a numeric value is finite and `>= 0`.
pub fn validate_non_negative(value: f64, name: &str) -> Result<(), CoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::Validation(format!(
            "{name} must be a non-negative number, got {value}"
        )));
    }
    Ok(())
}

/// Validate that an integer count is `>= 0`.
pub fn validate_non_negative_count(value: i32, name: &str) -> Result<(), CoreError> {
    if value < 0 {
        return Err(CoreError::Validation(format!(
            "{name} must be >= 0, got {value}"
        )));
    }
    Ok(())
}

/// Validate that a value falls within `[0, 100]`.
pub fn validate_percentage(value: f64, name: &str) -> Result<(), CoreError> {
    if !(0.0..=100.0).contains(&value) {
        return Err(CoreError::Validation(format!(
            "{name} must be between 0 and 100, got {value}"
        )));
    }
    Ok(())
}

/// Sprint length must be at least one day.
pub fn validate_sprint_length(days: i32) -> Result<(), CoreError> {
    if days < 1 {
        return Err(CoreError::Validation(format!(
            "sprintLengthDays must be >= 1, got {days}"
        )));
    }
    Ok(())
}

/// Validate that `value` is one of `valid`.
pub fn validate_one_of(value: &str, valid: &[&str], name: &str) -> Result<(), CoreError> {
    if valid.contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid {name} '{value}'. Must be one of: {}",
            valid.join(", ")
        )))
    }
}

pub fn validate_feature_status(status: &str) -> Result<(), CoreError> {
    validate_one_of(status, VALID_FEATURE_STATUSES, "status")
}

pub fn validate_cost_type(cost_type: &str) -> Result<(), CoreError> {
    validate_one_of(cost_type, VALID_COST_TYPES, "type")
}

pub fn validate_absence_type(absence_type: &str) -> Result<(), CoreError> {
    validate_one_of(absence_type, VALID_ABSENCE_TYPES, "type")
}

// ---------------------------------------------------------------------------
// Normalisation
// ---------------------------------------------------------------------------

/// Trim and lowercase an email address. Emails compare case-insensitively.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Trim and uppercase a project code, rejecting an empty result.
pub fn normalize_project_code(code: &str) -> Result<String, CoreError> {
    validate_required(code, "code")?;
    Ok(code.trim().to_uppercase())
}

/// Trim and uppercase a currency code, which must then be three ASCII letters.
pub fn normalize_currency(currency: &str) -> Result<String, CoreError> {
    let upper = currency.trim().to_uppercase();
    if !CURRENCY_RE.is_match(&upper) {
        return Err(CoreError::Validation(format!(
            "currency must be a 3-letter code, got '{currency}'"
        )));
    }
    Ok(upper)
}

/// Trim skill tags, drop blanks and duplicates, keep first-seen order.
pub fn normalize_skill_tags(tags: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !out.iter().any(|t| t == tag) {
            out.push(tag.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn required_rejects_blank() {
        assert!(validate_required("Alpha", "name").is_ok());
        assert_matches!(validate_required("   ", "name"), Err(CoreError::Validation(msg)) if msg == "name is required");
        assert!(validate_required("", "name").is_err());
    }

    #[test]
    fn non_negative_boundaries() {
        assert!(validate_non_negative(0.0, "dayRate").is_ok());
        assert!(validate_non_negative(650.5, "dayRate").is_ok());
        assert!(validate_non_negative(-0.01, "dayRate").is_err());
        assert!(validate_non_negative(f64::NAN, "dayRate").is_err());
        assert!(validate_non_negative(f64::INFINITY, "dayRate").is_err());
    }

    #[test]
    fn percentage_boundaries() {
        assert!(validate_percentage(0.0, "allocationPct").is_ok());
        assert!(validate_percentage(100.0, "allocationPct").is_ok());
        assert!(validate_percentage(100.5, "allocationPct").is_err());
        assert!(validate_percentage(-1.0, "allocationPct").is_err());
    }

    #[test]
    fn sprint_length_must_be_positive() {
        assert!(validate_sprint_length(1).is_ok());
        assert!(validate_sprint_length(14).is_ok());
        assert!(validate_sprint_length(0).is_err());
    }

    #[test]
    fn enums_accept_only_known_values() {
        assert!(validate_feature_status("in-progress").is_ok());
        assert!(validate_feature_status("in_progress").is_err());
        assert!(validate_cost_type("contractor").is_ok());
        assert!(validate_cost_type("travel").is_err());
        assert!(validate_absence_type("sick").is_ok());
        assert!(validate_absence_type("vacation").is_err());
    }

    #[test]
    fn project_code_is_uppercased() {
        assert_eq!(normalize_project_code("  ph-01 ").unwrap(), "PH-01");
        assert!(normalize_project_code(" ").is_err());
    }

    #[test]
    fn currency_is_normalised() {
        assert_eq!(normalize_currency("gbp").unwrap(), "GBP");
        assert_eq!(normalize_currency(" usd ").unwrap(), "USD");
        assert!(normalize_currency("£").is_err());
        assert!(normalize_currency("EURO").is_err());
    }

    #[test]
    fn email_is_lowercased_and_trimmed() {
        assert_eq!(normalize_email("  Jane.Doe@Example.COM "), "jane.doe@example.com");
    }

    #[test]
    fn skill_tags_are_deduplicated() {
        let tags = vec![
            "rust".to_string(),
            " sql ".to_string(),
            "rust".to_string(),
            "".to_string(),
        ];
        assert_eq!(normalize_skill_tags(&tags), vec!["rust", "sql"]);
    }
}
