//! Dashboard handler.
//!
//! The controller thread: owns the `DashboardController`, executes its fetch
//! commands as tokio tasks, consumes their outcomes and the renderer's input
//! signals, and ships a fresh ViewModel to the TUI after every transition.
//! All state mutation is linearized here; fetch tasks only report back.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use is_terminal::IsTerminal;
use tokio::runtime::Runtime;

use evcast_client::ServiceClient;
use evcast_runtime::{Command, DashboardController, RequestToken};
use evcast_types::{ForecastPoint, MetricRecord};

use crate::presentation::presenters::dashboard::build_screen_view_model;
use crate::presentation::renderers::tui::{RendererSignal, TuiRenderer};
use crate::presentation::view_models::ScreenViewModel;

/// A completed fetch flowing back into the handler loop. The token lets the
/// controller discard superseded responses.
enum FetchOutcome {
    Forecast {
        token: RequestToken,
        result: Result<Vec<ForecastPoint>, String>,
    },
    Metrics {
        token: RequestToken,
        result: Result<Vec<MetricRecord>, String>,
    },
}

pub fn handle(runtime: &Runtime, client: ServiceClient, initial_horizon: Option<u32>) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        anyhow::bail!(
            "the dashboard needs an interactive terminal; use 'evcast forecast --months N' for console output"
        );
    }

    let (event_tx, event_rx) = mpsc::channel::<Box<ScreenViewModel>>();
    let (signal_tx, signal_rx) = mpsc::channel::<RendererSignal>();
    let (outcome_tx, outcome_rx) = mpsc::channel::<FetchOutcome>();

    let renderer = TuiRenderer::new(signal_tx);
    let tui_handle = thread::spawn(move || renderer.run(event_rx));

    let result = run_handler(
        runtime,
        &client,
        initial_horizon,
        event_tx,
        signal_rx,
        outcome_tx,
        outcome_rx,
    );

    match tui_handle.join() {
        Ok(render_result) => render_result?,
        Err(panic) => eprintln!("TUI thread panicked: {:?}", panic),
    }

    result
}

fn run_handler(
    runtime: &Runtime,
    client: &ServiceClient,
    initial_horizon: Option<u32>,
    event_tx: Sender<Box<ScreenViewModel>>,
    signal_rx: Receiver<RendererSignal>,
    outcome_tx: Sender<FetchOutcome>,
    outcome_rx: Receiver<FetchOutcome>,
) -> Result<()> {
    let mut controller = DashboardController::new();
    if let Some(months) = initial_horizon {
        controller.set_horizon_field(months.to_string());
    }

    // Metrics load once, before any user interaction.
    if let Some(command) = controller.start() {
        execute(runtime, client, &outcome_tx, command);
    }
    send_update(&event_tx, &controller, client);

    let poll_timeout = Duration::from_millis(100);

    loop {
        let mut dirty = false;
        let mut quit = false;

        // Drain all pending input signals before waiting on fetches.
        loop {
            match signal_rx.try_recv() {
                Ok(RendererSignal::Quit) => {
                    quit = true;
                    break;
                }
                Ok(RendererSignal::HorizonChar(ch)) => {
                    controller.push_horizon_char(ch);
                    dirty = true;
                }
                Ok(RendererSignal::HorizonBackspace) => {
                    controller.pop_horizon_char();
                    dirty = true;
                }
                Ok(RendererSignal::Submit) => {
                    // The trigger is disabled while a request is in flight.
                    let submit_enabled = controller.snapshot().submit_enabled;
                    if submit_enabled
                        && let Some(command) = controller.submit()
                    {
                        execute(runtime, client, &outcome_tx, command);
                    }
                    dirty = true;
                }
                Ok(RendererSignal::ToggleMetrics) => {
                    controller.toggle_metrics();
                    dirty = true;
                }
                Ok(RendererSignal::DismissError) => {
                    controller.dismiss_forecast_error();
                    dirty = true;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    quit = true;
                    break;
                }
            }
        }
        if quit {
            break;
        }

        match outcome_rx.recv_timeout(poll_timeout) {
            Ok(FetchOutcome::Forecast { token, result }) => {
                controller.apply_forecast(token, result);
                dirty = true;
            }
            Ok(FetchOutcome::Metrics { token, result }) => {
                controller.apply_metrics(token, result);
                dirty = true;
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        if dirty {
            send_update(&event_tx, &controller, client);
        }
    }

    Ok(())
}

fn send_update(
    tx: &Sender<Box<ScreenViewModel>>,
    controller: &DashboardController,
    client: &ServiceClient,
) {
    let vm = build_screen_view_model(&controller.snapshot(), client.base_url());
    // Ignore send failures: the renderer has already quit.
    let _ = tx.send(Box::new(vm));
}

/// Run one fetch command as a tokio task reporting back over the channel.
fn execute(
    runtime: &Runtime,
    client: &ServiceClient,
    outcome_tx: &Sender<FetchOutcome>,
    command: Command,
) {
    match command {
        Command::FetchForecast { token, months } => {
            let client = client.clone();
            let tx = outcome_tx.clone();
            runtime.spawn(async move {
                let result = client.forecast(months).await.map_err(|e| e.to_string());
                let _ = tx.send(FetchOutcome::Forecast { token, result });
            });
        }
        Command::FetchMetrics { token } => {
            let client = client.clone();
            let tx = outcome_tx.clone();
            runtime.spawn(async move {
                let result = client.model_metrics().await.map_err(|e| e.to_string());
                let _ = tx.send(FetchOutcome::Metrics { token, result });
            });
        }
    }
}
