use anyhow::Result;
use tokio::runtime::Runtime;

use evcast_client::ServiceClient;

use crate::args::OutputFormat;
use crate::presentation::presenters::report::present_metrics_report;
use crate::presentation::renderers::console;

pub fn handle(runtime: &Runtime, client: &ServiceClient, format: OutputFormat) -> Result<()> {
    let records = runtime.block_on(client.model_metrics())?;
    let report = present_metrics_report(&records);

    match format {
        OutputFormat::Json => console::print_json(&report),
        OutputFormat::Plain => console::render_metrics_report(&report),
    }
}
