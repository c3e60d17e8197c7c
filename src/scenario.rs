//! Scenario records as read from CSV, and their validated form.

use crate::config::DEFAULT_ANNUAL_RETURN;
use crate::error::{ProjectionError, Result};
use crate::money::Money;
use crate::projection::ProjectionInput;
use serde::Deserialize;
use std::str::FromStr;

/// Raw scenario row as read from CSV.
///
/// Everything is kept as text: amounts arrive formatted the way the
/// calculator form shows them (`R$ 1.234,56`) and the annual return may
/// be missing.
#[derive(Debug, Deserialize)]
pub struct ScenarioRecord {
    /// Caller-chosen label, echoed in every output row
    pub id: String,

    /// Initial investment
    #[serde(default)]
    pub initial_amount: Option<String>,

    /// Planned monthly contribution
    #[serde(default)]
    pub monthly_contribution: Option<String>,

    /// Horizon in whole years
    #[serde(default)]
    pub years: Option<String>,

    /// Annual return as a fraction (`0.1`) or percentage (`10%`)
    #[serde(default)]
    pub annual_return: Option<String>,
}

impl ScenarioRecord {
    /// Parses the raw CSV record into a validated scenario.
    ///
    /// Unparsable amounts become zero. A missing or invalid horizon, or an
    /// out-of-range rate, rejects the row.
    pub fn parse(&self, row: usize) -> Result<Scenario> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err(ProjectionError::InvalidRecord {
                row,
                message: "missing scenario id".to_string(),
            });
        }

        self.parse_input()
            .map(|input| Scenario {
                id: id.to_string(),
                input,
            })
            .map_err(|e| ProjectionError::InvalidRecord {
                row,
                message: e.to_string(),
            })
    }

    fn parse_input(&self) -> Result<ProjectionInput> {
        let initial = parse_amount(self.initial_amount.as_deref());
        let monthly = parse_amount(self.monthly_contribution.as_deref());
        let years = parse_years(self.years.as_deref().unwrap_or(""))?;
        let rate = parse_annual_return(self.annual_return.as_deref())?;

        ProjectionInput::new(initial.to_f64(), monthly.to_f64(), years, rate)
    }
}

/// A parsed and validated scenario ready for projection.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub id: String,
    pub input: ProjectionInput,
}

fn parse_amount(field: Option<&str>) -> Money {
    field.map(Money::parse_lenient).unwrap_or(Money::ZERO)
}

/// Parses a horizon in whole years. Zero is rejected.
pub fn parse_years(field: &str) -> Result<u32> {
    let trimmed = field.trim();
    let years = u32::from_str(trimmed).map_err(|_| {
        ProjectionError::invalid(
            "years",
            format!("expected a whole number of years, got '{}'", trimmed),
        )
    })?;

    if years == 0 {
        return Err(ProjectionError::invalid("years", "must be at least 1"));
    }
    Ok(years)
}

/// Parses an annual return written as `0.1`, `0,1` or `10%`.
///
/// A missing or blank value means [`DEFAULT_ANNUAL_RETURN`].
pub fn parse_annual_return(field: Option<&str>) -> Result<f64> {
    let trimmed = match field.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return Ok(DEFAULT_ANNUAL_RETURN),
    };

    let (number, percent) = match trimmed.strip_suffix('%') {
        Some(rest) => (rest.trim(), true),
        None => (trimmed, false),
    };

    let value = f64::from_str(&number.replace(',', ".")).map_err(|_| {
        ProjectionError::invalid(
            "annual_return",
            format!("expected a rate such as 0.1 or 10%, got '{}'", trimmed),
        )
    })?;

    Ok(if percent { value / 100.0 } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        id: &str,
        initial: Option<&str>,
        monthly: Option<&str>,
        years: Option<&str>,
        rate: Option<&str>,
    ) -> ScenarioRecord {
        ScenarioRecord {
            id: id.to_string(),
            initial_amount: initial.map(str::to_string),
            monthly_contribution: monthly.map(str::to_string),
            years: years.map(str::to_string),
            annual_return: rate.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_formatted_amounts() {
        let scenario = record(
            "plan",
            Some("R$ 1.000,00"),
            Some("R$ 500,00"),
            Some("20"),
            Some("0.10"),
        )
        .parse(2)
        .unwrap();

        assert_eq!(scenario.id, "plan");
        assert_eq!(scenario.input.initial_amount(), 1000.0);
        assert_eq!(scenario.input.monthly_contribution(), 500.0);
        assert_eq!(scenario.input.years(), 20);
        assert_eq!(scenario.input.annual_return_rate(), 0.10);
    }

    #[test]
    fn test_missing_rate_uses_default() {
        let scenario = record("a", Some("0"), Some("0"), Some("5"), None)
            .parse(2)
            .unwrap();
        assert_eq!(scenario.input.annual_return_rate(), DEFAULT_ANNUAL_RETURN);

        let scenario = record("a", Some("0"), Some("0"), Some("5"), Some("  "))
            .parse(2)
            .unwrap();
        assert_eq!(scenario.input.annual_return_rate(), DEFAULT_ANNUAL_RETURN);
    }

    #[test]
    fn test_unparsable_amounts_default_to_zero() {
        let scenario = record("a", Some("lots"), None, Some("5"), None)
            .parse(2)
            .unwrap();
        assert_eq!(scenario.input.initial_amount(), 0.0);
        assert_eq!(scenario.input.monthly_contribution(), 0.0);
    }

    #[test]
    fn test_rejects_bad_years() {
        for years in [None, Some(""), Some("0"), Some("ten"), Some("-3"), Some("2.5")] {
            let err = record("a", Some("0"), Some("0"), years, None)
                .parse(7)
                .unwrap_err();
            assert!(matches!(err, ProjectionError::InvalidRecord { row: 7, .. }));
        }
    }

    #[test]
    fn test_rejects_missing_id() {
        let err = record("  ", Some("0"), Some("0"), Some("5"), None)
            .parse(3)
            .unwrap_err();
        assert!(err.to_string().contains("missing scenario id"));
    }

    #[test]
    fn test_rejects_rate_at_minus_one_hundred_percent() {
        assert!(record("a", None, None, Some("5"), Some("-100%"))
            .parse(2)
            .is_err());
    }

    #[test]
    fn test_parse_annual_return_forms() {
        assert_eq!(parse_annual_return(Some("0.08")).unwrap(), 0.08);
        assert_eq!(parse_annual_return(Some("0,08")).unwrap(), 0.08);
        assert_eq!(parse_annual_return(Some("12%")).unwrap(), 0.12);
        assert_eq!(parse_annual_return(Some("-5 %")).unwrap(), -0.05);
        assert!(parse_annual_return(Some("fast")).is_err());
    }

    #[test]
    fn test_parse_years_trims() {
        assert_eq!(parse_years(" 30 ").unwrap(), 30);
    }
}
