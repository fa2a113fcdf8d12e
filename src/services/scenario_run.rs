use thiserror::Error;

use crate::domain::scenario::{Scenario, ScenarioOverrides};
use crate::services::amplification::{AmplificationError, compute_amplification};
use crate::services::amplification_types::AmplificationReport;
use crate::services::chain_plot::{ChainPlotError, render_chain_png};
use crate::services::scenario_yaml::{ScenarioYamlError, load_scenario_from_yaml_file};

#[derive(Error, Debug)]
pub enum ScenarioRunError {
    #[error("failed to load scenario: {0}")]
    LoadScenario(#[from] ScenarioYamlError),
    #[error("invalid scenario: {0}")]
    InvalidScenario(#[from] AmplificationError),
    #[error("failed to render chain plot: {0}")]
    Chart(#[from] ChainPlotError),
}

/// Loads a scenario (or the defaults when no file is given), applies CLI
/// overrides, runs the amplification and writes the chart.
pub fn run_from_scenario_file(
    scenario_path: Option<&str>,
    overrides: &ScenarioOverrides,
    chart_path: &str,
) -> Result<AmplificationReport, ScenarioRunError> {
    let mut scenario = load_scenario_if_provided(scenario_path)?;
    overrides.apply(&mut scenario);
    if scenario.name.is_empty() {
        scenario.name = scenario_name(scenario_path);
    }

    let result = compute_amplification(&scenario)?;
    render_chain_png(chart_path, &scenario.stages, &result)?;
    Ok(AmplificationReport::build(&scenario, &result))
}

fn load_scenario_if_provided(
    scenario_path: Option<&str>,
) -> Result<Scenario, ScenarioYamlError> {
    if let Some(path) = scenario_path {
        load_scenario_from_yaml_file(path)
    } else {
        Ok(Scenario::default())
    }
}

fn scenario_name(scenario_path: Option<&str>) -> String {
    let path = match scenario_path {
        Some(path) => path,
        None => return "default".to_string(),
    };
    std::path::Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn run_from_scenario_file_uses_file_name_when_scenario_is_unnamed() {
        let scenario_yaml = "base_demand: 100\ndemand_spike_pct: 10\nsafety_buffer_pct: 20\n";
        let input_file = assert_fs::NamedTempFile::new("pharmacy.yaml").unwrap();
        input_file.write_str(scenario_yaml).unwrap();
        let chart_file = assert_fs::NamedTempFile::new("pharmacy.png").unwrap();

        let report = run_from_scenario_file(
            Some(input_file.path().to_str().unwrap()),
            &ScenarioOverrides::default(),
            chart_file.path().to_str().unwrap(),
        )
        .unwrap();

        assert_eq!(report.scenario, "pharmacy.yaml");
        assert_eq!(report.stages.len(), 5);
    }

    #[test]
    fn run_from_scenario_file_defaults_when_no_file_given() {
        let chart_file = assert_fs::NamedTempFile::new("default.png").unwrap();

        let report = run_from_scenario_file(
            None,
            &ScenarioOverrides::default(),
            chart_file.path().to_str().unwrap(),
        )
        .unwrap();

        assert_eq!(report.scenario, "default");
        assert_eq!(report.base_demand, 100.0);
        assert_eq!(report.stages.last().unwrap().stage, "Factory");
    }

    #[test]
    fn run_from_scenario_file_applies_overrides_before_computing() {
        let chart_file = assert_fs::NamedTempFile::new("override.png").unwrap();
        let overrides = ScenarioOverrides {
            demand_spike_pct: Some(0.0),
            safety_buffer_pct: Some(0.0),
            ..ScenarioOverrides::default()
        };

        let report = run_from_scenario_file(
            None,
            &overrides,
            chart_file.path().to_str().unwrap(),
        )
        .unwrap();

        assert_eq!(report.excess_inventory, 0.0);
        assert_eq!(report.trapped_capital, 0.0);
    }

    #[test]
    fn run_from_scenario_file_propagates_invalid_base_demand() {
        let chart_file = assert_fs::NamedTempFile::new("invalid.png").unwrap();
        let overrides = ScenarioOverrides {
            base_demand: Some(0.0),
            ..ScenarioOverrides::default()
        };

        let error = run_from_scenario_file(
            None,
            &overrides,
            chart_file.path().to_str().unwrap(),
        )
        .expect_err("expected invalid base demand");

        assert!(matches!(
            error,
            ScenarioRunError::InvalidScenario(AmplificationError::NonPositiveBaseDemand(_))
        ));
    }
}
