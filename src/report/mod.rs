pub mod json;
pub mod md;

use crate::engine::simulate::SimulationOutcome;
use crate::error::RoleFitError;
use crate::types::scoring::ScoringResult;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render_score(result: &ScoringResult, format: OutputFormat) -> Result<String, RoleFitError> {
    match format {
        OutputFormat::Json => json::to_json(result).map_err(RoleFitError::Json),
        OutputFormat::Md => Ok(md::score_markdown(result)),
    }
}

pub fn render_ranking(
    results: &[ScoringResult],
    format: OutputFormat,
) -> Result<String, RoleFitError> {
    match format {
        OutputFormat::Json => json::to_json(&results).map_err(RoleFitError::Json),
        OutputFormat::Md => Ok(md::ranking_markdown(results)),
    }
}

pub fn render_simulation(
    outcomes: &[SimulationOutcome],
    format: OutputFormat,
) -> Result<String, RoleFitError> {
    match format {
        OutputFormat::Json => json::to_json(&outcomes).map_err(RoleFitError::Json),
        OutputFormat::Md => Ok(md::simulation_markdown(outcomes)),
    }
}
