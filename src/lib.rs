//! # Wealth Projection
//!
//! Projects a savings plan month by month to find when it reaches a net
//! worth target, and what monthly contribution would reach it within a
//! chosen horizon.
//!
//! ## Design Principles
//!
//! - **Pure core**: [`compute`] has no state and no I/O; identical inputs
//!   give identical results
//! - **Contribute, then grow**: each month the contribution is added
//!   before the effective monthly rate is applied
//! - **Bounded work**: a year cap and an integer binary search bound
//!   every projection
//! - **Explicit outcomes**: an unreached target and an unreachable
//!   contribution are variants, not magic numbers
//! - **Exact money at the edges**: amounts are parsed and reported with
//!   `rust_decimal` to the cent
//!
//! ## Example
//!
//! ```
//! use wealth_projection::{compute_default, ProjectionInput, TargetOutcome};
//!
//! let input = ProjectionInput::new(1000.0, 500.0, 20, 0.10).unwrap();
//! let result = compute_default(&input);
//!
//! assert_eq!(result.years_to_target, TargetOutcome::Reached { year: 30 });
//! assert_eq!(result.required_monthly_contribution(), Some(1372.0));
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod money;
pub mod projection;
pub mod scenario;
pub mod simulator;
pub mod solver;

pub use config::{
    ProjectionConfig, DEFAULT_ANNUAL_RETURN, DEFAULT_CONTRIBUTION_CEILING,
    DEFAULT_HORIZON_CAP_YEARS, DEFAULT_TARGET, MAX_HORIZON_YEARS,
};
pub use engine::{ProjectionEngine, ScenarioProjection};
pub use error::{ProjectionError, Result};
pub use money::Money;
pub use projection::{compute, compute_default, ProjectionInput, ProjectionResult};
pub use scenario::{Scenario, ScenarioRecord};
pub use simulator::{TargetOutcome, YearPoint};
pub use solver::ContributionPlan;
