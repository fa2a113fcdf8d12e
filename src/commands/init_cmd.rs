use crate::commands::base_commands::Commands;
use crate::domain::scenario::Scenario;
use crate::services::scenario_yaml::serialize_scenario_to_yaml;

pub fn init_command(cmd: Commands) {
    if let Commands::Init { output } = cmd {
        let scenario = Scenario::default();

        let mut buffer = Vec::new();
        if let Err(e) = serialize_scenario_to_yaml(&mut buffer, &scenario) {
            eprintln!("Failed to serialize scenario to YAML: {e:?}");
            return;
        }

        if let Err(e) = std::fs::write(&output, buffer) {
            eprintln!("Failed to write output file: {e:?}");
        } else {
            println!("Starter scenario written to {output}");
        }
    }
}
