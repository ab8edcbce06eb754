use anyhow::Result;
use tokio::runtime::Runtime;

use evcast_client::ServiceClient;

use crate::args::OutputFormat;
use crate::presentation::presenters::report::present_forecast_report;
use crate::presentation::renderers::console;

pub fn handle(
    runtime: &Runtime,
    client: &ServiceClient,
    months: u32,
    format: OutputFormat,
) -> Result<()> {
    let points = runtime.block_on(client.forecast(months))?;
    let report = present_forecast_report(months, &points);

    match format {
        OutputFormat::Json => console::print_json(&report),
        OutputFormat::Plain => console::render_forecast_report(&report),
    }
}
