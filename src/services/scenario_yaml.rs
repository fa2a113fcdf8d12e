use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::scenario::{DEFAULT_UNIT_PRICE, Scenario};

#[derive(Error, Debug)]
pub enum ScenarioYamlError {
    #[error("failed to read scenario yaml: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse scenario yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("scenario contains a blank stage label")]
    BlankStageLabel,
}

#[derive(Serialize, Deserialize)]
struct ScenarioRecord {
    name: Option<String>,
    stages: Option<Vec<String>>,
    base_demand: f64,
    demand_spike_pct: f64,
    safety_buffer_pct: f64,
    unit_price: Option<f64>,
}

pub fn load_scenario_from_yaml_file(path: &str) -> Result<Scenario, ScenarioYamlError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_scenario_from_yaml_str(&contents)
}

pub fn deserialize_scenario_from_yaml_str(input: &str) -> Result<Scenario, ScenarioYamlError> {
    let record: ScenarioRecord = serde_yaml::from_str(input)?;

    let stages = record.stages.unwrap_or_else(Scenario::default_stages);
    if stages.iter().any(|stage| stage.trim().is_empty()) {
        return Err(ScenarioYamlError::BlankStageLabel);
    }

    Ok(Scenario {
        name: record.name.unwrap_or_default(),
        stages,
        base_demand: record.base_demand,
        demand_spike_pct: record.demand_spike_pct,
        safety_buffer_pct: record.safety_buffer_pct,
        unit_price: record.unit_price.unwrap_or(DEFAULT_UNIT_PRICE),
    })
}

pub fn serialize_scenario_to_yaml<W: Write>(
    writer: &mut W,
    scenario: &Scenario,
) -> io::Result<()> {
    let record = ScenarioRecord {
        name: Some(scenario.name.clone()),
        stages: Some(scenario.stages.clone()),
        base_demand: scenario.base_demand,
        demand_spike_pct: scenario.demand_spike_pct,
        safety_buffer_pct: scenario.safety_buffer_pct,
        unit_price: Some(scenario.unit_price),
    };

    let yaml =
        serde_yaml::to_string(&record).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    writer.write_all(yaml.as_bytes())
}
