use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io::{self, Write};
use std::time::{Duration, Instant};

use crate::mpris::PlayerProxy;

mod controller;
mod timer;
mod view;

pub use controller::PlayerController;
use controller::Flow;
use timer::RefreshTimer;

const REFRESH_INTERVAL: Duration = Duration::from_secs(1);

/// Puts the terminal back when dropped, however `run` exits.
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.out, LeaveAlternateScreen, DisableMouseCapture, Show);
    }
}

/// Take over the terminal and run until the user quits.
pub fn run<P: PlayerProxy>(mut controller: PlayerController<P>) -> Result<()> {
    enable_raw_mode()?;
    let _guard = TerminalGuard { out: io::stdout() };
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    event_loop(&mut terminal, &mut controller)
}

fn event_loop<B: Backend, P: PlayerProxy>(
    terminal: &mut Terminal<B>,
    controller: &mut PlayerController<P>,
) -> Result<()> {
    let mut timer = RefreshTimer::new(REFRESH_INTERVAL, Instant::now());
    let mut clock = Instant::now;

    loop {
        tick(&mut timer, terminal, controller, &mut clock)?;

        if event::poll(timer.time_until_due(Instant::now()))? {
            let event = event::read()?;
            if let Event::Resize(..) = event {
                terminal.draw(|f| view::render(f, controller.state()))?;
                continue;
            }
            let flow = controller
                .handle_event(&event)
                .context("Failed to send command to player")?;
            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }
}

/// Run the refresh cycle if the timer is due: poll, render, then re-arm
/// from the time the render finished. Returns whether it ran.
fn tick<B: Backend, P: PlayerProxy>(
    timer: &mut RefreshTimer,
    terminal: &mut Terminal<B>,
    controller: &mut PlayerController<P>,
    clock: &mut impl FnMut() -> Instant,
) -> Result<bool> {
    if !timer.is_due(clock()) {
        return Ok(false);
    }

    controller
        .refresh()
        .context("Failed to refresh player state")?;
    terminal.draw(|f| view::render(f, controller.state()))?;
    timer.rearm(clock());
    Ok(true)
}
