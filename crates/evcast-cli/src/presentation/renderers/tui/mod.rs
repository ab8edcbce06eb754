//! TUI renderer thread.
//!
//! Owns the terminal: raw mode, the draw loop, and key handling. Receives
//! complete `ScreenViewModel`s from the dashboard handler and forwards user
//! input back as semantic signals. No dashboard logic lives here.

mod components;
mod ui;

use std::io;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::presentation::view_models::ScreenViewModel;

/// Input signals the renderer forwards to the dashboard handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererSignal {
    Quit,
    HorizonChar(char),
    HorizonBackspace,
    Submit,
    ToggleMetrics,
    DismissError,
}

pub struct TuiRenderer {
    signal_tx: Sender<RendererSignal>,
}

impl TuiRenderer {
    pub fn new(signal_tx: Sender<RendererSignal>) -> Self {
        Self { signal_tx }
    }

    /// Run the draw/input loop until the user quits or the handler hangs up.
    pub fn run(self, rx: Receiver<Box<ScreenViewModel>>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let mut screen: Option<Box<ScreenViewModel>> = None;
        let mut should_quit = false;
        let tick_rate = Duration::from_millis(100);

        while !should_quit {
            // Drain pending updates; only the latest frame matters.
            loop {
                match rx.try_recv() {
                    Ok(vm) => screen = Some(vm),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        should_quit = true;
                        break;
                    }
                }
            }

            if let Some(vm) = &screen {
                terminal.draw(|f| ui::draw(f, vm))?;
            }

            if event::poll(tick_rate)?
                && let Event::Key(key) = event::read()?
            {
                let signal = match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        should_quit = true;
                        Some(RendererSignal::Quit)
                    }
                    KeyCode::Enter => Some(RendererSignal::Submit),
                    KeyCode::Backspace => Some(RendererSignal::HorizonBackspace),
                    KeyCode::Char('m') => Some(RendererSignal::ToggleMetrics),
                    KeyCode::Char('x') => Some(RendererSignal::DismissError),
                    KeyCode::Char(ch) if ch.is_ascii_digit() => {
                        Some(RendererSignal::HorizonChar(ch))
                    }
                    _ => None,
                };

                if let Some(signal) = signal
                    && self.signal_tx.send(signal).is_err()
                {
                    should_quit = true;
                }
            }
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }
}
