use serde::Serialize;

use crate::domain::scenario::Scenario;

/// Raw engine output: one value per stage plus the derived scalars.
#[derive(Debug, Clone, PartialEq)]
pub struct AmplificationResult {
    pub baseline: Vec<f64>,
    pub amplified: Vec<f64>,
    pub excess_inventory: f64,
    pub trapped_capital: f64,
    pub final_overproduction_pct: f64,
}

#[derive(Serialize, Debug, Clone)]
pub struct StageOrders {
    pub stage: String,
    pub baseline: f64,
    pub amplified: f64,
}

#[derive(Serialize, Debug, Clone)]
pub struct AmplificationReport {
    pub scenario: String,
    pub base_demand: f64,
    pub demand_spike_pct: f64,
    pub safety_buffer_pct: f64,
    pub unit_price: f64,
    pub stages: Vec<StageOrders>,
    pub excess_inventory: f64,
    pub trapped_capital: f64,
    pub final_overproduction_pct: f64,
}

impl AmplificationReport {
    pub fn build(scenario: &Scenario, result: &AmplificationResult) -> AmplificationReport {
        let stages = scenario
            .stages
            .iter()
            .zip(result.baseline.iter().zip(result.amplified.iter()))
            .map(|(stage, (baseline, amplified))| StageOrders {
                stage: stage.clone(),
                baseline: *baseline,
                amplified: *amplified,
            })
            .collect();

        AmplificationReport {
            scenario: scenario.name.clone(),
            base_demand: scenario.base_demand,
            demand_spike_pct: scenario.demand_spike_pct,
            safety_buffer_pct: scenario.safety_buffer_pct,
            unit_price: scenario.unit_price,
            stages,
            excess_inventory: result.excess_inventory,
            trapped_capital: result.trapped_capital,
            final_overproduction_pct: result.final_overproduction_pct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_pairs_stages_with_series_values() {
        let scenario = Scenario {
            name: "pairing".to_string(),
            stages: vec!["Customer".to_string(), "Factory".to_string()],
            base_demand: 100.0,
            demand_spike_pct: 0.0,
            safety_buffer_pct: 10.0,
            unit_price: 2.0,
        };
        let result = AmplificationResult {
            baseline: vec![100.0, 100.0],
            amplified: vec![100.0, 110.0],
            excess_inventory: 10.0,
            trapped_capital: 20.0,
            final_overproduction_pct: 10.0,
        };

        let report = AmplificationReport::build(&scenario, &result);

        assert_eq!(report.scenario, "pairing");
        assert_eq!(report.stages.len(), 2);
        assert_eq!(report.stages[1].stage, "Factory");
        assert_eq!(report.stages[1].baseline, 100.0);
        assert_eq!(report.stages[1].amplified, 110.0);
        assert_eq!(report.trapped_capital, 20.0);
    }
}
