//! Forecast-versus-actual cost aggregation for a project.
//!
//! Labour forecast comes from monthly records (`forecastDays × dayRate`),
//! labour actual is the recorded `actualCost`, and non-personnel spend is the
//! sum of the project's cost items. All amounts are in the project currency.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::period::{month_share_pct, Period};
use crate::types::DbId;

/// Currency assumed when the stored value is neither a code nor a known symbol.
pub const DEFAULT_CURRENCY: &str = "GBP";

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// The parts of a monthly record that feed the aggregation.
#[derive(Debug, Clone)]
pub struct LabourRecord {
    pub resource_id: DbId,
    pub period: String,
    pub forecast_days: f64,
    pub actual_cost: f64,
}

/// Day rates keyed by resource id. A record whose resource is missing
/// contributes a forecast cost of zero.
pub type DayRates = HashMap<DbId, f64>;

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// Forecast and actual labour cost for one reporting period.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodRollup {
    pub period: String,
    pub forecast_cost: f64,
    pub actual_cost: f64,
    /// `actual - forecast`; positive means overspend.
    pub diff_cost: f64,
    pub pct_diff: f64,
}

/// Full financial picture for one project.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub currency_code: String,
    pub budget: f64,
    pub labour_forecast: f64,
    pub labour_actual: f64,
    pub non_personnel: f64,
    pub total_forecast: f64,
    pub total_actual: f64,
    pub remaining_budget: f64,
    pub forecast_variance_pct: f64,
    pub budget_variance_pct: f64,
    /// Share of budget consumed, clamped to `[0, 100]` for display.
    pub budget_utilisation_pct: f64,
    pub periods: Vec<PeriodRollup>,
}

/// One resource's forecast and actual effort within a single period.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePeriodLine {
    pub resource_id: DbId,
    pub name: String,
    pub role: String,
    pub day_rate: f64,
    pub forecast_days: f64,
    pub actual_days: f64,
    pub forecast_cost: f64,
    pub actual_cost: f64,
    /// Forecast days as a share of the calendar month, capped at 100.
    pub forecast_month_pct: f64,
    /// Actual days as a share of the calendar month, capped at 100.
    pub actual_month_pct: f64,
}

// ---------------------------------------------------------------------------
// Pure calculations
// ---------------------------------------------------------------------------

/// Relative variance of `actual` against `forecast`, in percent.
///
/// Returns `0.0` when the forecast is zero (or negative) instead of dividing.
pub fn pct_variance(actual: f64, forecast: f64) -> f64 {
    if forecast > 0.0 {
        (actual / forecast - 1.0) * 100.0
    } else {
        0.0
    }
}

/// Budget consumed as a percentage, clamped to `[0, 100]`.
pub fn budget_utilisation_pct(actual: f64, budget: f64) -> f64 {
    if budget > 0.0 {
        (actual / budget * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Map a stored currency value to an ISO code.
///
/// Three uppercase letters are used as-is; `£`, `$` and `€` map to GBP, USD
/// and EUR; anything else falls back to [`DEFAULT_CURRENCY`].
pub fn currency_code(stored: &str) -> String {
    let is_code = stored.len() == 3 && stored.chars().all(|c| c.is_ascii_uppercase());
    if is_code {
        return stored.to_string();
    }
    match stored {
        "£" => "GBP",
        "$" => "USD",
        "€" => "EUR",
        _ => DEFAULT_CURRENCY,
    }
    .to_string()
}

/// Convert an actual cost back into days at the given rate.
pub fn actual_days(actual_cost: f64, day_rate: f64) -> f64 {
    if day_rate > 0.0 {
        actual_cost / day_rate
    } else {
        0.0
    }
}

/// Group labour records by period, sorted by period string.
///
/// `YYYY-MM` is zero-padded so lexicographic order is chronological.
pub fn roll_up_periods(records: &[LabourRecord], rates: &DayRates) -> Vec<PeriodRollup> {
    let mut by_period: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for rec in records {
        let rate = rates.get(&rec.resource_id).copied().unwrap_or(0.0);
        let entry = by_period.entry(rec.period.as_str()).or_insert((0.0, 0.0));
        entry.0 += rec.forecast_days * rate;
        entry.1 += rec.actual_cost;
    }

    by_period
        .into_iter()
        .map(|(period, (forecast_cost, actual_cost))| PeriodRollup {
            period: period.to_string(),
            forecast_cost,
            actual_cost,
            diff_cost: actual_cost - forecast_cost,
            pct_diff: pct_variance(actual_cost, forecast_cost),
        })
        .collect()
}

impl FinancialSummary {
    /// Aggregate a project's labour records and cost item amounts.
    pub fn compute(
        budget: f64,
        stored_currency: &str,
        records: &[LabourRecord],
        rates: &DayRates,
        cost_amounts: impl IntoIterator<Item = f64>,
    ) -> Self {
        let periods = roll_up_periods(records, rates);
        let labour_forecast: f64 = periods.iter().map(|p| p.forecast_cost).sum();
        let labour_actual: f64 = periods.iter().map(|p| p.actual_cost).sum();
        let non_personnel: f64 = cost_amounts.into_iter().sum();

        let total_forecast = labour_forecast + non_personnel;
        let total_actual = labour_actual + non_personnel;

        Self {
            currency_code: currency_code(stored_currency),
            budget,
            labour_forecast,
            labour_actual,
            non_personnel,
            total_forecast,
            total_actual,
            remaining_budget: budget - total_actual,
            forecast_variance_pct: pct_variance(labour_actual, labour_forecast),
            budget_variance_pct: pct_variance(total_actual, budget),
            budget_utilisation_pct: budget_utilisation_pct(total_actual, budget),
            periods,
        }
    }
}

impl ResourcePeriodLine {
    /// Build a breakdown line for one resource's record in `period`.
    pub fn new(
        resource_id: DbId,
        name: String,
        role: String,
        day_rate: f64,
        forecast_days: f64,
        actual_cost: f64,
        period: Period,
    ) -> Self {
        let actual_days = actual_days(actual_cost, day_rate);
        Self {
            resource_id,
            name,
            role,
            day_rate,
            forecast_days,
            actual_days,
            forecast_cost: forecast_days * day_rate,
            actual_cost,
            forecast_month_pct: month_share_pct(forecast_days, period),
            actual_month_pct: month_share_pct(actual_days, period),
        }
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn record(resource_id: DbId, period: &str, days: f64, cost: f64) -> LabourRecord {
        LabourRecord {
            resource_id,
            period: period.to_string(),
            forecast_days: days,
            actual_cost: cost,
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn single_period_variance() {
        let alice = Uuid::new_v4();
        let rates = DayRates::from([(alice, 100.0)]);
        let periods = roll_up_periods(&[record(alice, "2025-06", 10.0, 900.0)], &rates);

        assert_eq!(periods.len(), 1);
        let p = &periods[0];
        assert_eq!(p.period, "2025-06");
        assert!(approx(p.forecast_cost, 1000.0));
        assert!(approx(p.actual_cost, 900.0));
        assert!(approx(p.diff_cost, -100.0));
        assert!(approx(p.pct_diff, -10.0));
    }

    #[test]
    fn periods_are_sorted_and_summed() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let rates = DayRates::from([(a, 500.0), (b, 250.0)]);
        let records = vec![
            record(a, "2025-11", 2.0, 1000.0),
            record(b, "2025-02", 4.0, 800.0),
            record(a, "2025-02", 1.0, 600.0),
        ];

        let periods = roll_up_periods(&records, &rates);
        let order: Vec<&str> = periods.iter().map(|p| p.period.as_str()).collect();
        assert_eq!(order, vec!["2025-02", "2025-11"]);
        assert!(approx(periods[0].forecast_cost, 1500.0));
        assert!(approx(periods[0].actual_cost, 1400.0));
    }

    #[test]
    fn unknown_resource_contributes_zero_forecast() {
        let rates = DayRates::new();
        let periods = roll_up_periods(&[record(Uuid::new_v4(), "2025-01", 5.0, 300.0)], &rates);
        assert!(approx(periods[0].forecast_cost, 0.0));
        assert!(approx(periods[0].pct_diff, 0.0));
        assert!(approx(periods[0].diff_cost, 300.0));
    }

    #[test]
    fn zero_forecast_variance_is_zero() {
        assert_eq!(pct_variance(120.0, 0.0), 0.0);
        assert!(approx(pct_variance(110.0, 100.0), 10.0));
    }

    #[test]
    fn utilisation_is_clamped() {
        assert_eq!(budget_utilisation_pct(150.0, 100.0), 100.0);
        assert!(approx(budget_utilisation_pct(25.0, 100.0), 25.0));
        assert_eq!(budget_utilisation_pct(10.0, 0.0), 0.0);
        assert_eq!(budget_utilisation_pct(-10.0, 100.0), 0.0);
    }

    #[test]
    fn currency_mapping() {
        assert_eq!(currency_code("USD"), "USD");
        assert_eq!(currency_code("£"), "GBP");
        assert_eq!(currency_code("$"), "USD");
        assert_eq!(currency_code("€"), "EUR");
        assert_eq!(currency_code("usd"), "GBP");
        assert_eq!(currency_code(""), "GBP");
    }

    #[test]
    fn summary_totals_include_non_personnel() {
        let a = Uuid::new_v4();
        let rates = DayRates::from([(a, 100.0)]);
        let summary = FinancialSummary::compute(
            5000.0,
            "EUR",
            &[record(a, "2025-06", 10.0, 900.0)],
            &rates,
            [200.0, 300.0],
        );

        assert_eq!(summary.currency_code, "EUR");
        assert!(approx(summary.labour_forecast, 1000.0));
        assert!(approx(summary.labour_actual, 900.0));
        assert!(approx(summary.non_personnel, 500.0));
        assert!(approx(summary.total_forecast, 1500.0));
        assert!(approx(summary.total_actual, 1400.0));
        assert!(approx(summary.remaining_budget, 3600.0));
        assert!(approx(summary.forecast_variance_pct, -10.0));
        assert!(approx(summary.budget_variance_pct, -72.0));
        assert!(approx(summary.budget_utilisation_pct, 28.0));
    }

    #[test]
    fn breakdown_line_derives_days_from_cost() {
        let june = Period::parse("2025-06").unwrap();
        let line = ResourcePeriodLine::new(
            Uuid::new_v4(),
            "Ada".into(),
            "Engineer".into(),
            400.0,
            15.0,
            1200.0,
            june,
        );
        assert!(approx(line.actual_days, 3.0));
        assert!(approx(line.forecast_cost, 6000.0));
        assert!(approx(line.forecast_month_pct, 50.0));
        assert!(approx(line.actual_month_pct, 10.0));

        let free = ResourcePeriodLine::new(
            Uuid::new_v4(),
            "Volunteer".into(),
            "Tester".into(),
            0.0,
            2.0,
            50.0,
            june,
        );
        assert_eq!(free.actual_days, 0.0);
    }
}
