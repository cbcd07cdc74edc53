// Copyright (C) 2026  Footswitch Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Dispatch monitor.
//!
//! A small terminal harness for exercising the dispatch layer against real
//! input: it wires both dispatchers to raw-mode crossterm events and prints
//! every action they emit. Arrow keys, enter, space and the D-pad codes of
//! a paired controller drive the controller dispatcher; the primary key
//! mapping listens on page-up/page-down/space. Press `q` to quit.

use std::io::{self, Write};
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode},
};

use footswitch::{
    Action, ConfyStore, ControllerDispatcher, ControllerService, KeyChannel, KeyDispatcher,
    KeyMapping, TerminalCapabilities, from_crossterm,
    util::clock::SystemClock,
};

/// The entry point of the monitor.
///
/// Builds both dispatchers, manages the terminal lifecycle, and returns an
/// error if any part of the execution fails.
fn main() -> Result<()> {
    env_logger::init();

    let caps = Rc::new(TerminalCapabilities);
    let clock = Rc::new(SystemClock::new());

    let (action_tx, action_rx) = mpsc::channel();

    let mut keys = KeyDispatcher::new(caps.clone(), clock.clone());
    keys.set_key_mapping(KeyMapping {
        next_song: Some(34),
        prev_song: Some(33),
        pause: Some(32),
    });
    let key_tx = action_tx.clone();
    keys.on_action(move |action| {
        let _ = key_tx.send(action);
    });
    keys.initialize();

    let mut service = ControllerService::new(
        ControllerDispatcher::new(caps, clock),
        Box::new(ConfyStore),
    );
    service.start();
    // The monitor is only useful with a live controller, so force it on for
    // this session without persisting the change.
    let mut config = service.dispatcher().get_config().unwrap_or_default();
    config.enabled = true;
    service.dispatcher_mut().set_config(config);
    service.set_action_sink(action_tx);

    setup_terminal()?;
    let res = run(&mut keys, &mut service, &action_rx);
    restore_terminal();
    service.stop();
    keys.cleanup();

    res.context("Dispatch monitor error occurred")
}

fn setup_terminal() -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    execute!(io::stdout(), EnableMouseCapture).context("Failed to enable mouse capture")?;
    Ok(())
}

/// Best-effort teardown, also reached after errors in the main loop.
fn restore_terminal() {
    execute!(io::stdout(), DisableMouseCapture).ok();
    disable_raw_mode().ok();
}

/// Polls the terminal, feeds every raw event through both dispatchers, and
/// prints the actions that come out the other end.
fn run(
    keys: &mut KeyDispatcher,
    service: &mut ControllerService,
    action_rx: &Receiver<Action>,
) -> Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "dispatch monitor running, q to quit\r\n")?;
    stdout.flush()?;

    loop {
        if event::poll(Duration::from_millis(100))? {
            let raw = event::read()?;
            if let Event::Key(key) = &raw {
                if key.code == KeyCode::Char('q') {
                    break;
                }
            }

            let width = crossterm::terminal::size()?.0;
            if let Some(input) = from_crossterm(&raw, KeyChannel::Native, width) {
                keys.handle_event(&input);
                service.dispatcher_mut().handle_event(&input);
            }
        }

        while let Ok(action) = action_rx.try_recv() {
            write!(stdout, "action: {action:?}\r\n")?;
            stdout.flush()?;
        }
    }

    Ok(())
}
