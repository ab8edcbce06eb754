use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "evcast")]
#[command(about = "EV sales and charging-demand forecast dashboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base URL of the prediction service (overrides env and config file)
    #[arg(long, global = true)]
    pub service_url: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive forecast dashboard (the default when no command is given)
    Dashboard {
        /// Horizon in months preloaded into the input field
        #[arg(long)]
        horizon: Option<u32>,
    },

    /// One-shot forecast printed to the console
    Forecast {
        /// Months ahead to forecast
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        months: u32,
    },

    /// Model performance metrics per vehicle category
    Metrics,

    /// Check that the prediction service is reachable and healthy
    Doctor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}
