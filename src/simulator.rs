//! Forward simulation of monthly-compounded savings.
//!
//! Each month the contribution is added first and the monthly growth is
//! applied afterwards. Balances are recorded at the end of every year.

use crate::config::ProjectionConfig;
use log::{debug, warn};
use serde::Serialize;

/// Months simulated per projection year.
pub const MONTHS_PER_YEAR: u32 = 12;

/// End-of-year balance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearPoint {
    /// Years elapsed since the start (0 is the initial amount).
    pub year: u32,

    /// Balance at the end of `year`.
    pub amount: f64,
}

/// When, if ever, the balance reached the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetOutcome {
    /// First year whose end-of-year balance was at or above the target.
    /// Year 0 means the initial amount already met it.
    Reached { year: u32 },

    /// The simulation ran `cap` years without reaching the target.
    NotReachedWithinCap { cap: u32 },
}

impl TargetOutcome {
    /// Returns the year the target was reached, if it was.
    pub fn year(&self) -> Option<u32> {
        match self {
            TargetOutcome::Reached { year } => Some(*year),
            TargetOutcome::NotReachedWithinCap { .. } => None,
        }
    }

    /// Returns `true` if the target was reached at all.
    pub fn is_reached(&self) -> bool {
        matches!(self, TargetOutcome::Reached { .. })
    }

    /// Returns `true` if the target was reached no later than `horizon`.
    pub fn reached_within(&self, horizon: u32) -> bool {
        self.year().is_some_and(|year| year <= horizon)
    }

    /// Single-number form: the reached year, or the cap when the target
    /// was never reached.
    pub fn reported_years(&self) -> u32 {
        match self {
            TargetOutcome::Reached { year } => *year,
            TargetOutcome::NotReachedWithinCap { cap } => *cap,
        }
    }
}

/// Output of a forward simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    /// Year-end balances, starting at year 0.
    pub series: Vec<YearPoint>,

    /// Target detection result.
    pub outcome: TargetOutcome,

    /// Balance when the simulation stopped.
    pub final_amount: f64,
}

/// Converts an annual rate into the monthly rate that compounds to it
/// over twelve months.
pub fn monthly_rate(annual_rate: f64) -> f64 {
    (1.0 + annual_rate).powf(1.0 / MONTHS_PER_YEAR as f64) - 1.0
}

/// Advances a balance by one year of contributions and growth.
pub fn advance_year(balance: f64, contribution: f64, monthly_rate: f64) -> f64 {
    let mut balance = balance;
    for _ in 0..MONTHS_PER_YEAR {
        balance += contribution;
        balance *= 1.0 + monthly_rate;
    }
    balance
}

/// Balance after exactly `years` years.
pub fn balance_at_horizon(initial: f64, contribution: f64, monthly_rate: f64, years: u32) -> f64 {
    (0..years).fold(initial, |balance, _| {
        advance_year(balance, contribution, monthly_rate)
    })
}

/// Simulates year by year until the horizon has been covered and the
/// target has been found, or until the cap is hit.
pub fn simulate(
    initial: f64,
    contribution: f64,
    years: u32,
    monthly_rate: f64,
    config: &ProjectionConfig,
) -> Trajectory {
    let cap = config.effective_cap(years);

    let mut balance = initial;
    let mut series = Vec::with_capacity(cap as usize + 1);
    series.push(YearPoint {
        year: 0,
        amount: balance,
    });

    let mut reached = if balance >= config.target {
        Some(0)
    } else {
        None
    };

    for year in 1..=cap {
        balance = advance_year(balance, contribution, monthly_rate);
        series.push(YearPoint {
            year,
            amount: balance,
        });

        if reached.is_none() && balance >= config.target {
            debug!("Target {} reached in year {}", config.target, year);
            reached = Some(year);
        }

        if year >= years && reached.is_some() {
            break;
        }
    }

    let outcome = match reached {
        Some(year) => TargetOutcome::Reached { year },
        None => {
            warn!(
                "Target {} not reached within {} years (balance {:.2})",
                config.target, cap, balance
            );
            TargetOutcome::NotReachedWithinCap { cap }
        }
    };

    Trajectory {
        series,
        outcome,
        final_amount: balance,
    }
}
