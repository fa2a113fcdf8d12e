use crate::commands::base_commands::Commands;
use crate::services::chain_plot::plot_chain_from_scenario_file;

pub fn plot_chain_command(cmd: Commands) {
    if let Commands::PlotChain { input, output } = cmd {
        match plot_chain_from_scenario_file(&input, &output) {
            Ok(()) => println!("Chain plot written to {output}"),
            Err(e) => eprintln!("Failed to plot chain: {e:?}"),
        }
    }
}
