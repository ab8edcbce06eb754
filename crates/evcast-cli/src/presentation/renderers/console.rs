//! Plain-text renderers for the one-shot commands. Coloring only; every
//! string arrives pre-formatted from the presenters.

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::presentation::view_models::{
    DoctorReportViewModel, ForecastReportViewModel, MetricsReportViewModel,
};

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn render_forecast_report(report: &ForecastReportViewModel) -> Result<()> {
    if let Some(message) = &report.empty_message {
        println!("{}", message.dimmed());
        return Ok(());
    }

    println!(
        "{}",
        format!("Forecast for the next {} month(s)", report.months_requested).bold()
    );
    println!();

    for row in &report.rows {
        println!("{}  {}", row.date.cyan().bold(), row.headline);
        for line in &row.category_lines {
            println!("    {}", line.dimmed());
        }
    }

    Ok(())
}

pub fn render_metrics_report(report: &MetricsReportViewModel) -> Result<()> {
    if let Some(message) = &report.empty_message {
        println!("{}", message.dimmed());
        return Ok(());
    }

    println!("{}", "Model performance metrics".bold());
    for card in &report.cards {
        println!("  {:<10} {}", card.category.cyan(), card.detail);
    }

    Ok(())
}

pub fn render_doctor_report(report: &DoctorReportViewModel) -> Result<()> {
    println!("Prediction service: {}", report.service_url);
    if report.healthy {
        println!("Status: {}", report.status.green());
    } else {
        println!("Status: {}", report.status.yellow());
    }

    for check in &report.checks {
        if check.ok {
            println!("  {} {}", "ok".green(), check.label);
        } else {
            println!("  {} {}", "!!".red(), check.label);
        }
    }

    if let Some(date) = &report.last_historical_date {
        println!("  Last historical month: {}", date);
    }
    if !report.categories_loaded.is_empty() {
        println!("  Categories: {}", report.categories_loaded.join(", "));
    }
    if let Some(errors) = &report.errors {
        println!("  {}", errors.red());
    }

    Ok(())
}
