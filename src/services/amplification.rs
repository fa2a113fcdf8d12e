use thiserror::Error;

use crate::domain::scenario::Scenario;
use crate::services::amplification_types::AmplificationResult;

#[derive(Error, Debug)]
pub enum AmplificationError {
    #[error("a supply chain needs at least two stages, got {0}")]
    TooFewStages(usize),
    #[error("base demand must be positive, got {0}")]
    NonPositiveBaseDemand(f64),
}

/// Compounds a one-time demand spike through the supply chain.
///
/// The first stage orders the post-spike demand; every later stage adds the
/// safety buffer on top of what the stage below ordered. The baseline stays
/// flat at the pre-spike base demand, so the spike itself counts toward the
/// excess. Negative percentages are allowed and produce a dampening series.
pub fn compute_amplification(
    scenario: &Scenario,
) -> Result<AmplificationResult, AmplificationError> {
    let stage_count = scenario.stages.len();
    if stage_count < 2 {
        return Err(AmplificationError::TooFewStages(stage_count));
    }
    if scenario.base_demand <= 0.0 {
        return Err(AmplificationError::NonPositiveBaseDemand(
            scenario.base_demand,
        ));
    }

    let spike_factor = 1.0 + scenario.demand_spike_pct / 100.0;
    let buffer_factor = 1.0 + scenario.safety_buffer_pct / 100.0;

    let mut amplified = Vec::with_capacity(stage_count);
    amplified.push(scenario.base_demand * spike_factor);
    for i in 1..stage_count {
        amplified.push(amplified[i - 1] * buffer_factor);
    }

    let baseline = vec![scenario.base_demand; stage_count];

    let amplified_total: f64 = amplified.iter().sum();
    let baseline_total: f64 = baseline.iter().sum();
    let excess_inventory = amplified_total - baseline_total;
    let trapped_capital = excess_inventory * scenario.unit_price;
    let final_overproduction_pct =
        (amplified[stage_count - 1] / scenario.base_demand - 1.0) * 100.0;

    Ok(AmplificationResult {
        baseline,
        amplified,
        excess_inventory,
        trapped_capital,
        final_overproduction_pct,
    })
}
