mod commands;
mod domain;
mod services;

use clap::{CommandFactory, Parser};

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::init_cmd::init_command;
use crate::commands::plot_chain_cmd::plot_chain_command;
use crate::commands::simulate_cmd::simulate_command;

fn main() {
    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Init { .. } => init_command(cmd),
        cmd @ Commands::Simulate { .. } => simulate_command(cmd),
        cmd @ Commands::PlotChain { .. } => plot_chain_command(cmd),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            clap_complete::generate(shell, &mut command, "bullwhip", &mut std::io::stdout());
        }
    }
}
