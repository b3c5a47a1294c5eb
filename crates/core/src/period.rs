//! Reporting periods (`YYYY-MM`) and month-based utilisation helpers.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::CoreError;

static PERIOD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}$").expect("valid regex"));

/// A parsed calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    /// Parse a zero-padded `YYYY-MM` string. The month must be `01..=12`.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        let malformed = || CoreError::Validation(format!("period must match YYYY-MM, got '{value}'"));
        if !PERIOD_RE.is_match(value) {
            return Err(malformed());
        }
        let (year, month) = value.split_once('-').ok_or_else(malformed)?;
        let year: i32 = year
            .parse()
            .map_err(|_| CoreError::Validation(format!("Invalid period year in '{value}'")))?;
        let month: u32 = month
            .parse()
            .map_err(|_| CoreError::Validation(format!("Invalid period month in '{value}'")))?;
        if !(1..=12).contains(&month) {
            return Err(CoreError::Validation(format!(
                "period month must be 01-12, got '{value}'"
            )));
        }
        Ok(Self { year, month })
    }

    /// Number of days in this calendar month (28-31).
    pub fn days_in_month(self) -> u32 {
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1);
        let next = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        match (first, next) {
            (Some(first), Some(next)) => (next - first).num_days() as u32,
            _ => 30,
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Validate a period string without keeping the parsed value.
pub fn validate_period(value: &str) -> Result<(), CoreError> {
    Period::parse(value).map(|_| ())
}

/// Express `days` as a percentage of the days in `period`, capped at 100.
pub fn month_share_pct(days: f64, period: Period) -> f64 {
    let total = f64::from(period.days_in_month());
    if total <= 0.0 || days <= 0.0 {
        return 0.0;
    }
    (days / total * 100.0).min(100.0)
}
