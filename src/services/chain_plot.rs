use plotters::prelude::*;
use thiserror::Error;

use crate::services::amplification::AmplificationError;
use crate::services::amplification_types::AmplificationResult;
use crate::services::scenario_yaml::ScenarioYamlError;

#[derive(Error, Debug)]
pub enum ChainPlotError {
    #[error("failed to load scenario: {0}")]
    Scenario(#[from] ScenarioYamlError),
    #[error("invalid scenario: {0}")]
    InvalidScenario(#[from] AmplificationError),
    #[error("failed to render chain plot: {0}")]
    Plot(String),
}

pub fn plot_chain_from_scenario_file(
    input_path: &str,
    output_path: &str,
) -> Result<(), ChainPlotError> {
    let scenario = crate::services::scenario_yaml::load_scenario_from_yaml_file(input_path)?;
    let result = crate::services::amplification::compute_amplification(&scenario)?;
    render_chain_png(output_path, &scenario.stages, &result)?;
    Ok(())
}

pub fn render_chain_png(
    output_path: &str,
    stages: &[String],
    result: &AmplificationResult,
) -> Result<(), ChainPlotError> {
    if stages.is_empty() {
        return Ok(());
    }

    let max_value = result
        .amplified
        .iter()
        .chain(result.baseline.iter())
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max);
    let min_value = result
        .amplified
        .iter()
        .chain(result.baseline.iter())
        .cloned()
        .fold(f64::INFINITY, f64::min);
    let max_y = max_value * 1.1;
    let min_y = min_value.min(0.0);
    let max_x = (stages.len() - 1).max(1) as i32;

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChainPlotError::Plot(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Order Amplification Up the Supply Chain", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0..max_x, min_y..max_y)
        .map_err(|e| ChainPlotError::Plot(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Supply chain stage")
        .y_desc("Units ordered")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(stages.len())
        .x_label_formatter(&|index| {
            if *index < 0 {
                return String::new();
            }
            stages
                .get(*index as usize)
                .cloned()
                .unwrap_or_default()
        })
        .draw()
        .map_err(|e| ChainPlotError::Plot(e.to_string()))?;

    let baseline_color = RGBColor(128, 128, 128);
    let amplified_color = RGBColor(31, 119, 180);

    chart
        .draw_series(LineSeries::new(
            result
                .baseline
                .iter()
                .enumerate()
                .map(|(idx, value)| (idx as i32, *value)),
            ShapeStyle::from(&baseline_color).stroke_width(2),
        ))
        .map_err(|e| ChainPlotError::Plot(e.to_string()))?
        .label("Normal demand")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], ShapeStyle::from(&baseline_color))
        });

    chart
        .draw_series(LineSeries::new(
            result
                .amplified
                .iter()
                .enumerate()
                .map(|(idx, value)| (idx as i32, *value)),
            ShapeStyle::from(&amplified_color).stroke_width(4),
        ))
        .map_err(|e| ChainPlotError::Plot(e.to_string()))?
        .label("Amplified orders")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], ShapeStyle::from(&amplified_color))
        });

    chart
        .draw_series(result.amplified.iter().enumerate().map(|(idx, value)| {
            Circle::new((idx as i32, *value), 4, ShapeStyle::from(&amplified_color).filled())
        }))
        .map_err(|e| ChainPlotError::Plot(e.to_string()))?;

    chart
        .configure_series_labels()
        .background_style(&WHITE)
        .border_style(&BLACK)
        .label_font(("sans-serif", 18))
        .draw()
        .map_err(|e| ChainPlotError::Plot(e.to_string()))?;

    root.present()
        .map_err(|e| ChainPlotError::Plot(e.to_string()))?;
    Ok(())
}
