use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a starter scenario YAML with default parameters
    Init {
        /// Output YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Compute order amplification and write a report plus chart
    Simulate {
        /// Scenario YAML file; built-in defaults are used when omitted
        #[arg(short, long)]
        input: Option<String>,
        /// Output YAML file; the chart is written next to it as <output>.png
        #[arg(short, long)]
        output: String,
        /// Override the base customer demand in units
        #[arg(short, long)]
        base_demand: Option<f64>,
        /// Override the one-time demand spike percentage
        #[arg(short, long)]
        demand_spike: Option<f64>,
        /// Override the per-stage safety buffer percentage
        #[arg(short, long)]
        safety_buffer: Option<f64>,
        /// Override the holding cost per excess unit
        #[arg(short, long)]
        unit_price: Option<f64>,
    },
    /// Plot baseline and amplified orders for a scenario as a PNG chart
    PlotChain {
        /// Scenario YAML file
        #[arg(short, long)]
        input: String,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
