//! Projection inputs, results and the `compute` entry point.
//!
//! `compute` is pure: it holds no state between calls and cannot fail for
//! a validated [`ProjectionInput`].

use crate::config::{ProjectionConfig, MAX_HORIZON_YEARS};
use crate::error::{ProjectionError, Result};
use crate::simulator::{self, TargetOutcome, YearPoint};
use crate::solver::{self, ContributionPlan};
use log::debug;

/// Validated inputs for a single projection.
///
/// # Invariants
///
/// - `initial_amount` and `monthly_contribution` are finite and `>= 0`
/// - `1 <= years <= MAX_HORIZON_YEARS`
/// - `annual_return_rate` is finite and `> -1`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionInput {
    initial_amount: f64,
    monthly_contribution: f64,
    years: u32,
    annual_return_rate: f64,
}

impl ProjectionInput {
    /// Validates and creates a projection input.
    pub fn new(
        initial_amount: f64,
        monthly_contribution: f64,
        years: u32,
        annual_return_rate: f64,
    ) -> Result<Self> {
        check_amount("initial_amount", initial_amount)?;
        check_amount("monthly_contribution", monthly_contribution)?;

        if years == 0 {
            return Err(ProjectionError::invalid("years", "must be at least 1"));
        }

        if years > MAX_HORIZON_YEARS {
            return Err(ProjectionError::invalid(
                "years",
                format!("{} exceeds the maximum of {}", years, MAX_HORIZON_YEARS),
            ));
        }

        if !annual_return_rate.is_finite() || annual_return_rate <= -1.0 {
            return Err(ProjectionError::invalid(
                "annual_return",
                format!("{} must be a finite rate above -100%", annual_return_rate),
            ));
        }

        Ok(ProjectionInput {
            initial_amount,
            monthly_contribution,
            years,
            annual_return_rate,
        })
    }

    pub fn initial_amount(&self) -> f64 {
        self.initial_amount
    }

    pub fn monthly_contribution(&self) -> f64 {
        self.monthly_contribution
    }

    /// Requested horizon in years.
    pub fn years(&self) -> u32 {
        self.years
    }

    pub fn annual_return_rate(&self) -> f64 {
        self.annual_return_rate
    }
}

fn check_amount(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ProjectionError::invalid(
            field,
            format!("{} must be a finite, non-negative amount", value),
        ));
    }
    Ok(())
}

/// Outcome of a projection.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionResult {
    /// When the target was reached, or that it was not within the cap.
    pub years_to_target: TargetOutcome,

    /// Balance when the simulation stopped. This is the horizon balance
    /// only when the target was reached by then.
    pub final_amount: f64,

    /// Contribution needed to reach the target within the horizon.
    pub contribution: ContributionPlan,

    /// The contribution the projection was run with.
    pub current_monthly_contribution: f64,

    /// Year-end balances from year 0.
    pub series: Vec<YearPoint>,
}

impl ProjectionResult {
    /// Monthly contribution that reaches the target within the horizon.
    ///
    /// Returns `None` when the search ceiling is not enough.
    pub fn required_monthly_contribution(&self) -> Option<f64> {
        self.contribution.required(self.current_monthly_contribution)
    }

    /// How much the monthly contribution has to grow. Zero when already
    /// on track.
    pub fn suggested_increase(&self) -> Option<f64> {
        self.required_monthly_contribution()
            .map(|required| (required - self.current_monthly_contribution).max(0.0))
    }
}

/// Runs a projection with explicit limits.
pub fn compute(input: &ProjectionInput, config: &ProjectionConfig) -> ProjectionResult {
    let rate = simulator::monthly_rate(input.annual_return_rate);

    let trajectory = simulator::simulate(
        input.initial_amount,
        input.monthly_contribution,
        input.years,
        rate,
        config,
    );

    // The series always covers the horizon. Reaching the target earlier
    // is not enough: with a negative rate the balance can fall back
    // below it by the end of the horizon.
    let horizon_balance = trajectory
        .series
        .get(input.years as usize)
        .map(|point| point.amount);

    let contribution = if horizon_balance.is_some_and(|amount| amount >= config.target) {
        ContributionPlan::OnTrack
    } else {
        solver::solve_required_contribution(
            input.initial_amount,
            input.monthly_contribution,
            input.years,
            rate,
            config,
        )
    };

    debug!(
        "Projection over {} years: {:?}, final {:.2}, plan {:?}",
        input.years, trajectory.outcome, trajectory.final_amount, contribution
    );

    ProjectionResult {
        years_to_target: trajectory.outcome,
        final_amount: trajectory.final_amount,
        contribution,
        current_monthly_contribution: input.monthly_contribution,
        series: trajectory.series,
    }
}

/// Runs a projection with the default target, ceiling and cap.
pub fn compute_default(input: &ProjectionInput) -> ProjectionResult {
    compute(input, &ProjectionConfig::default())
}
