use anyhow::Result;
use tokio::runtime::Runtime;

use evcast_client::ServiceClient;

use crate::args::OutputFormat;
use crate::presentation::presenters::report::present_doctor_report;
use crate::presentation::renderers::console;

pub fn handle(runtime: &Runtime, client: &ServiceClient, format: OutputFormat) -> Result<()> {
    let health = runtime.block_on(client.health())?;
    let report = present_doctor_report(client.base_url(), &health);

    match format {
        OutputFormat::Json => console::print_json(&report)?,
        OutputFormat::Plain => console::render_doctor_report(&report)?,
    }

    if !report.healthy {
        anyhow::bail!("prediction service is degraded");
    }
    Ok(())
}
