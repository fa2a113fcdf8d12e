use crate::services::amplification_types::{AmplificationReport, StageOrders};

/// Display rounding: units as whole numbers, currency to two decimals, the
/// overproduction ratio to one decimal place.
pub fn format_amplification_report(report: &AmplificationReport) -> String {
    let mut lines = Vec::new();
    lines.push("Bullwhip Amplification Report".to_string());
    lines.push(format!("Scenario: {}", report.scenario));
    lines.push(format!("Base demand: {} units", report.base_demand.round()));
    lines.push(format!("Demand spike: {}%", report.demand_spike_pct));
    lines.push(format!("Safety buffer: {}%", report.safety_buffer_pct));
    lines.push(format!("Unit price: {:.2}", report.unit_price));
    lines.push(String::new());
    lines.push("Orders per stage:".to_string());
    lines.push("Stage | Baseline | Amplified".to_string());
    lines.push("------|----------|----------".to_string());
    for stage in &report.stages {
        lines.push(format_stage_row(stage));
    }
    lines.push(String::new());
    lines.push(format!(
        "Excess inventory: {} units",
        report.excess_inventory.round()
    ));
    lines.push(format!("Trapped capital: {:.2}", report.trapped_capital));
    lines.push(format!(
        "{} overproduction: {:.1}%",
        final_stage_label(report),
        report.final_overproduction_pct
    ));

    lines.join("\n")
}

fn format_stage_row(stage: &StageOrders) -> String {
    format!(
        "{} | {} | {}",
        stage.stage,
        stage.baseline.round(),
        stage.amplified.round()
    )
}

fn final_stage_label(report: &AmplificationReport) -> &str {
    report
        .stages
        .last()
        .map(|stage| stage.stage.as_str())
        .unwrap_or("Final stage")
}
