use anyhow::Result;

use evcast_client::ServiceClient;
use evcast_runtime::{Config, resolve_service_url};

use super::args::{Cli, Commands};
use super::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let service_url = resolve_service_url(cli.service_url.as_deref(), &config);
    let client = ServiceClient::new(&service_url)?;
    let runtime = tokio::runtime::Runtime::new()?;

    match cli.command.unwrap_or(Commands::Dashboard { horizon: None }) {
        Commands::Dashboard { horizon } => {
            handlers::dashboard::handle(&runtime, client, horizon.or(config.default_horizon))
        }
        Commands::Forecast { months } => {
            handlers::forecast::handle(&runtime, &client, months, cli.format)
        }
        Commands::Metrics => handlers::metrics::handle(&runtime, &client, cli.format),
        Commands::Doctor => handlers::doctor::handle(&runtime, &client, cli.format),
    }
}
