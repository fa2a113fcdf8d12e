use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_amplification_report;
use crate::domain::scenario::ScenarioOverrides;
use crate::services::scenario_run::run_from_scenario_file;

pub fn simulate_command(cmd: Commands) {
    if let Commands::Simulate {
        input,
        output,
        base_demand,
        demand_spike,
        safety_buffer,
        unit_price,
    } = cmd
    {
        let overrides = ScenarioOverrides {
            base_demand,
            demand_spike_pct: demand_spike,
            safety_buffer_pct: safety_buffer,
            unit_price,
        };

        let chart_path = format!("{output}.png");
        let report = match run_from_scenario_file(input.as_deref(), &overrides, &chart_path) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("Failed to simulate amplification: {e:?}");
                return;
            }
        };

        let yaml = match serde_yaml::to_string(&report) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize amplification report: {e:?}");
                return;
            }
        };

        if let Err(e) = std::fs::write(&output, yaml) {
            eprintln!("Failed to write amplification report: {e:?}");
            return;
        }

        println!("{}", format_amplification_report(&report));
        println!();
        println!("Amplification report written to {output}");
        println!("Amplification chart written to {chart_path}");
    }
}
