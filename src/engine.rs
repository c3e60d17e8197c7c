//! Batch projection of scenarios read from CSV.
//!
//! Rows are read one at a time, validated, projected and kept in input
//! order. Invalid rows are logged and skipped so one bad scenario does
//! not abort the batch.

use crate::config::ProjectionConfig;
use crate::error::Result;
use crate::money::Money;
use crate::projection::{compute, ProjectionResult};
use crate::scenario::{Scenario, ScenarioRecord};
use crate::simulator::TargetOutcome;
use crate::solver::ContributionPlan;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use serde::Serialize;
use std::collections::HashSet;
use std::io::{Read, Write};

/// A scenario together with its projection.
#[derive(Debug, Clone)]
pub struct ScenarioProjection {
    pub scenario: Scenario,
    pub result: ProjectionResult,
}

/// Runs projections for a batch of scenarios.
///
/// # Output Ordering
///
/// Results are written in the order scenarios appeared in the input.
pub struct ProjectionEngine {
    config: ProjectionConfig,

    /// Completed projections in input order.
    projections: Vec<ScenarioProjection>,

    /// Scenario ids seen so far.
    seen_ids: HashSet<String>,
}

/// One line of the series report.
#[derive(Debug, Serialize)]
struct SeriesRow<'a> {
    id: &'a str,
    year: u32,
    amount: String,
}

impl ProjectionEngine {
    /// Creates an empty engine using the given limits.
    pub fn new(config: ProjectionConfig) -> Self {
        ProjectionEngine {
            config,
            projections: Vec::new(),
            seen_ids: HashSet::new(),
        }
    }

    /// Projects every scenario in a CSV reader.
    ///
    /// Invalid records are logged at warn level and skipped.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<ScenarioRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            match result {
                Ok(record) => match record.parse(row_num) {
                    Ok(scenario) => self.process_scenario(scenario, row_num),
                    Err(e) => warn!("{}", e),
                },
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                }
            }
        }

        Ok(())
    }

    /// Projects a single validated scenario.
    pub fn process_scenario(&mut self, scenario: Scenario, row: usize) {
        if !self.seen_ids.insert(scenario.id.clone()) {
            warn!(
                "Row {}: Duplicate scenario id '{}', ignoring",
                row, scenario.id
            );
            return;
        }

        let result = compute(&scenario.input, &self.config);
        debug!(
            "Row {}: Scenario '{}' reaches target: {:?}",
            row, scenario.id, result.years_to_target
        );

        self.projections.push(ScenarioProjection { scenario, result });
    }

    /// Completed projections in input order.
    pub fn projections(&self) -> &[ScenarioProjection] {
        &self.projections
    }

    /// Writes one summary row per scenario.
    ///
    /// Money columns have exactly 2 decimal places. Amounts too large for
    /// cents are written in scientific notation. Values that do not exist
    /// for a plan are left empty.
    pub fn write_summary<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record([
            "id",
            "status",
            "years_to_target",
            "final_amount",
            "plan",
            "required_monthly_contribution",
            "suggested_increase",
        ])?;

        for projection in &self.projections {
            let result = &projection.result;
            let status = match result.years_to_target {
                TargetOutcome::Reached { .. } => "reached",
                TargetOutcome::NotReachedWithinCap { .. } => "not_reached",
            };
            let plan = match result.contribution {
                ContributionPlan::OnTrack => "on_track",
                ContributionPlan::Increase { .. } => "increase",
                ContributionPlan::ExceedsCeiling { .. } => "exceeds_ceiling",
            };

            csv_writer.write_record([
                projection.scenario.id.clone(),
                status.to_string(),
                result.years_to_target.reported_years().to_string(),
                amount_cell(result.final_amount),
                plan.to_string(),
                money_or_empty(result.required_monthly_contribution()),
                money_or_empty(result.suggested_increase()),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Writes every scenario's year-end balances.
    pub fn write_series<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        for projection in &self.projections {
            for point in &projection.result.series {
                csv_writer.serialize(SeriesRow {
                    id: &projection.scenario.id,
                    year: point.year,
                    amount: amount_cell(point.amount),
                })?;
            }
        }

        csv_writer.flush()?;
        Ok(())
    }
}

fn money_or_empty(value: Option<f64>) -> String {
    value.map(amount_cell).unwrap_or_default()
}

/// Renders an amount to the cent, or as a plain float when it is beyond
/// what `Money` can hold.
fn amount_cell(value: f64) -> String {
    match Money::from_f64(value) {
        Some(money) => money.to_string(),
        None => {
            warn!("Amount {:e} is out of range for cents, written as a float", value);
            format!("{:e}", value)
        }
    }
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self::new(ProjectionConfig::default())
    }
}
