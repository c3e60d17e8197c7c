//! Required-contribution search.
//!
//! Inverts the forward simulation: finds the smallest whole monthly
//! contribution that reaches the target within a fixed horizon.

use crate::config::ProjectionConfig;
use crate::simulator::balance_at_horizon;
use log::{debug, warn};

/// What the saver has to contribute to reach the target in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContributionPlan {
    /// The current contribution already reaches the target within the
    /// horizon.
    OnTrack,

    /// The target is reached within the horizon at `required` per month.
    Increase { required: f64 },

    /// Not even the ceiling reaches the target within the horizon.
    ExceedsCeiling { ceiling: f64 },
}

impl ContributionPlan {
    /// Monthly contribution the plan asks for, or `None` when it cannot
    /// be met.
    pub fn required(&self, current: f64) -> Option<f64> {
        match self {
            ContributionPlan::OnTrack => Some(current),
            ContributionPlan::Increase { required } => Some(*required),
            ContributionPlan::ExceedsCeiling { .. } => None,
        }
    }
}

/// Binary search over `[current, ceiling]` in whole currency units.
///
/// Each step re-runs the simulation for exactly `years` years.
pub fn solve_required_contribution(
    initial: f64,
    current: f64,
    years: u32,
    monthly_rate: f64,
    config: &ProjectionConfig,
) -> ContributionPlan {
    let reaches = |contribution: f64| {
        balance_at_horizon(initial, contribution, monthly_rate, years) >= config.target
    };

    if reaches(current) {
        return ContributionPlan::OnTrack;
    }

    let ceiling = config.contribution_ceiling.floor();
    if current >= ceiling {
        warn!(
            "Contribution {:.2} is already at or above the ceiling {} and misses the target",
            current, ceiling
        );
        return ContributionPlan::ExceedsCeiling { ceiling };
    }

    let mut low = current;
    let mut high = ceiling;
    let mut steps = 0u32;

    while high - low > 1.0 {
        let mid = ((low + high) / 2.0).floor();
        steps += 1;
        if reaches(mid) {
            high = mid;
        } else {
            low = mid;
        }
    }

    debug!(
        "Contribution search over {} years settled at {} after {} steps",
        years, high, steps
    );

    // `high` only moves to feasible midpoints, so it is unverified only
    // when it never left the ceiling.
    if high < ceiling || reaches(high) {
        ContributionPlan::Increase { required: high }
    } else {
        warn!(
            "Target {} unreachable in {} years even at {} per month",
            config.target, years, ceiling
        );
        ContributionPlan::ExceedsCeiling { ceiling }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::monthly_rate;

    fn solve(initial: f64, current: f64, years: u32, annual: f64) -> ContributionPlan {
        solve_required_contribution(
            initial,
            current,
            years,
            monthly_rate(annual),
            &ProjectionConfig::default(),
        )
    }

    #[test]
    fn test_reference_scenario() {
        assert_eq!(
            solve(1000.0, 500.0, 20, 0.10),
            ContributionPlan::Increase { required: 1372.0 }
        );
    }

    #[test]
    fn test_search_is_tight() {
        let m = monthly_rate(0.10);
        assert!(balance_at_horizon(1000.0, 1372.0, m, 20) >= 1_000_000.0);
        assert!(balance_at_horizon(1000.0, 1371.0, m, 20) < 1_000_000.0);
    }

    #[test]
    fn test_already_on_track() {
        assert_eq!(solve(50_000.0, 2000.0, 15, 0.12), ContributionPlan::OnTrack);
    }

    #[test]
    fn test_zero_growth_needs_plain_savings() {
        // 1,000,000 / 12 rounded up to the next whole unit
        assert_eq!(
            solve(0.0, 0.0, 1, 0.0),
            ContributionPlan::Increase { required: 83_334.0 }
        );
    }

    #[test]
    fn test_ceiling_is_reported_not_returned() {
        assert_eq!(
            solve(0.0, 0.0, 1, -0.5),
            ContributionPlan::ExceedsCeiling { ceiling: 100_000.0 }
        );
    }

    #[test]
    fn test_current_above_ceiling() {
        assert_eq!(
            solve(0.0, 200_000.0, 1, -0.9),
            ContributionPlan::ExceedsCeiling { ceiling: 100_000.0 }
        );
    }

    #[test]
    fn test_fractional_current_below_ceiling() {
        assert_eq!(
            solve(0.0, 99_999.5, 1, -0.5),
            ContributionPlan::ExceedsCeiling { ceiling: 100_000.0 }
        );
    }

    #[test]
    fn test_custom_ceiling() {
        let config = ProjectionConfig {
            contribution_ceiling: 1000.0,
            ..ProjectionConfig::default()
        };
        let plan = solve_required_contribution(1000.0, 500.0, 20, monthly_rate(0.10), &config);
        assert_eq!(plan, ContributionPlan::ExceedsCeiling { ceiling: 1000.0 });
    }

    #[test]
    fn test_required_by_plan() {
        assert_eq!(ContributionPlan::OnTrack.required(500.0), Some(500.0));
        assert_eq!(
            ContributionPlan::Increase { required: 1372.0 }.required(500.0),
            Some(1372.0)
        );
        assert_eq!(
            ContributionPlan::ExceedsCeiling { ceiling: 100_000.0 }.required(500.0),
            None
        );
    }
}
