//! Projection limits and defaults.

/// Net worth the projection measures time-to-reach against.
pub const DEFAULT_TARGET: f64 = 1_000_000.0;

/// Highest monthly contribution the solver will consider.
pub const DEFAULT_CONTRIBUTION_CEILING: f64 = 100_000.0;

/// Maximum number of simulated years when the target is not reached.
pub const DEFAULT_HORIZON_CAP_YEARS: u32 = 100;

/// Longest horizon accepted as input. Bounds the work of a single
/// projection.
pub const MAX_HORIZON_YEARS: u32 = 1_000;

/// Annual return used when a scenario does not state one (10%).
pub const DEFAULT_ANNUAL_RETURN: f64 = 0.10;

/// Limits applied to a single projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConfig {
    /// Target balance.
    pub target: f64,

    /// Upper bound of the required-contribution search.
    pub contribution_ceiling: f64,

    /// Simulation stops after this many years unless the requested
    /// horizon is longer.
    pub horizon_cap_years: u32,
}

impl ProjectionConfig {
    /// Number of years the simulator may run for a given horizon.
    ///
    /// The requested horizon is always simulated in full, even when it
    /// exceeds the cap.
    pub fn effective_cap(&self, years: u32) -> u32 {
        self.horizon_cap_years.max(years)
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        ProjectionConfig {
            target: DEFAULT_TARGET,
            contribution_ceiling: DEFAULT_CONTRIBUTION_CEILING,
            horizon_cap_years: DEFAULT_HORIZON_CAP_YEARS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let config = ProjectionConfig::default();
        assert_eq!(config.target, 1_000_000.0);
        assert_eq!(config.contribution_ceiling, 100_000.0);
        assert_eq!(config.horizon_cap_years, 100);
    }

    #[test]
    fn test_effective_cap_never_cuts_the_horizon() {
        let config = ProjectionConfig::default();
        assert_eq!(config.effective_cap(20), 100);
        assert_eq!(config.effective_cap(100), 100);
        assert_eq!(config.effective_cap(120), 120);
    }
}
