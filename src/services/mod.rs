pub mod amplification;
pub mod amplification_types;
pub mod chain_plot;
pub mod scenario_run;
pub mod scenario_yaml;
