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

//! Foot-controller dispatcher.
//!
//! The same capture → debounce → resolve → invoke pipeline as the key
//! dispatcher, generalized over two trigger geometries (pointer zones and
//! key codes) and five logical buttons, plus a bounded "press the button
//! you want to test" facility.
//!
//! State machine: uninitialized (no config, no listener) → disabled
//! (config present, everything suppressed) → active (one listener matching
//! the configured mode). `initialize` always detaches the previous listener
//! first; `cleanup` returns to uninitialized from anywhere.

use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::{
    actions::{Action, ButtonType},
    config::{ClickZones, ControllerConfig, ControllerMode},
    dispatch::debounce::GlobalDebounce,
    events::{InputEvent, KeyChannel},
    platform::Capabilities,
    util::clock::Clock,
};

/// How long a button test watches before settling `false`.
pub const TEST_BUTTON_TIMEOUT_MS: u64 = 5_000;

type ActionCallback = Box<dyn FnMut(Action)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Listener {
    Pointer,
    Keys(KeyChannel),
}

struct TestWatch {
    button: ButtonType,
    expires_at_ms: u64,
    outcome: Sender<bool>,
}

/// Pending outcome of [`ControllerDispatcher::test_button`].
///
/// Always settles: `true` when the watched button is seen within the
/// timeout, `false` on timeout or when the watch is displaced by a newer
/// one or by `cleanup`.
pub struct ButtonTest {
    rx: Receiver<bool>,
    deadline: Instant,
}

impl ButtonTest {
    /// Blocks until the watch settles or the deadline passes.
    pub fn wait(self) -> bool {
        let remaining = self.deadline.saturating_duration_since(Instant::now());
        match self.rx.recv_timeout(remaining) {
            Ok(matched) => matched,
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }

    /// Non-blocking probe for callers polling from an event loop. `None`
    /// means the watch is still pending.
    pub fn try_wait(&self) -> Option<bool> {
        match self.rx.try_recv() {
            Ok(matched) => Some(matched),
            Err(TryRecvError::Empty) => (Instant::now() >= self.deadline).then_some(false),
            Err(TryRecvError::Disconnected) => Some(false),
        }
    }
}

/// The foot-controller dispatcher.
///
/// One instance drives the real input surface. The configuration is
/// replaced wholesale through [`initialize`](Self::initialize) or
/// [`set_config`](Self::set_config); nothing mutates it in place.
pub struct ControllerDispatcher {
    caps: Rc<dyn Capabilities>,
    clock: Rc<dyn Clock>,
    config: Option<ControllerConfig>,
    listener: Option<Listener>,
    callback: Option<ActionCallback>,
    debounce: GlobalDebounce,
    test_watch: Option<TestWatch>,
}

impl ControllerDispatcher {
    pub fn new(caps: Rc<dyn Capabilities>, clock: Rc<dyn Clock>) -> Self {
        Self {
            caps,
            clock,
            config: None,
            listener: None,
            callback: None,
            debounce: GlobalDebounce::default(),
            test_watch: None,
        }
    }

    /// Adopts `config`, tearing down any previously attached listener
    /// first. Attaches a listener for the configured mode only when the
    /// config is enabled and the environment supports that mode; otherwise
    /// the dispatcher holds the config but stays inert. Never fails.
    pub fn initialize(&mut self, config: ControllerConfig) {
        self.listener = None;
        if config.enabled {
            self.attach(config.mode);
        }
        self.config = Some(config);
    }

    fn attach(&mut self, mode: ControllerMode) {
        self.listener = match mode {
            ControllerMode::Pointer => {
                if self.caps.supports_pointer() {
                    Some(Listener::Pointer)
                } else {
                    warn!("pointer input is not supported here; controller stays inert");
                    None
                }
            }
            ControllerMode::Keycode => {
                if self.caps.is_editing_host() {
                    Some(Listener::Keys(KeyChannel::Ambient))
                } else if self.caps.supports_native_keys() {
                    Some(Listener::Keys(KeyChannel::Native))
                } else {
                    warn!("key events are not supported here; controller stays inert");
                    None
                }
            }
        };
    }

    /// Full teardown and reinitialization. Callbacks do not survive this;
    /// callers re-register their action subscriber afterwards.
    pub fn set_config(&mut self, config: ControllerConfig) {
        self.cleanup();
        self.initialize(config);
    }

    /// Defensive copy of the live config, `None` when uninitialized.
    pub fn get_config(&self) -> Option<ControllerConfig> {
        self.config
    }

    /// Registers the single action subscriber. A second registration
    /// silently replaces the first.
    pub fn on_action(&mut self, callback: impl FnMut(Action) + 'static) {
        self.callback = Some(Box::new(callback));
    }

    /// Back to uninitialized: listener, config, callback, debounce history
    /// and any pending test watch are all dropped. A displaced watch
    /// settles `false`. Safe to call repeatedly and before `initialize`.
    pub fn cleanup(&mut self) {
        self.listener = None;
        self.config = None;
        self.callback = None;
        self.test_watch = None;
        self.debounce.clear();
    }

    pub fn is_supported(&self) -> bool {
        self.caps.supports_pointer() || self.caps.supports_native_keys()
    }

    /// Capability heuristic independent of any live config: pointer when
    /// the environment is pointer-capable, keycode when native key events
    /// are available, `None` when neither can be determined.
    pub fn detect_mode(caps: &dyn Capabilities) -> Option<ControllerMode> {
        if caps.supports_pointer() {
            Some(ControllerMode::Pointer)
        } else if caps.supports_native_keys() {
            Some(ControllerMode::Keycode)
        } else {
            None
        }
    }

    /// Starts watching for `button`. Only one watch runs at a time; a new
    /// call displaces the old watch, whose handle settles `false`.
    ///
    /// The watch observes raw button identity before the debounce gate and
    /// before mapping resolution, so a press that is suppressed as an
    /// action still confirms the button under test.
    pub fn test_button(&mut self, button: ButtonType) -> ButtonTest {
        let (outcome, rx) = mpsc::channel();
        self.test_watch = Some(TestWatch {
            button,
            expires_at_ms: self.clock.now_ms() + TEST_BUTTON_TIMEOUT_MS,
            outcome,
        });
        ButtonTest {
            rx,
            deadline: Instant::now() + Duration::from_millis(TEST_BUTTON_TIMEOUT_MS),
        }
    }

    /// Feeds one raw event through the pipeline. Inert unless a listener
    /// is attached and the event matches its geometry.
    pub fn handle_event(&mut self, event: &InputEvent) {
        let Some(listener) = self.listener else {
            return;
        };
        let Some(config) = self.config else {
            return;
        };

        let button = match (listener, *event) {
            (Listener::Pointer, InputEvent::PointerClick { x, screen_width }) => {
                if screen_width <= 0.0 {
                    return;
                }
                resolve_zone(&config.click_zones, x / screen_width)
            }
            (Listener::Keys(attached), InputEvent::Key { code, channel }) => {
                if channel != attached {
                    return;
                }
                button_for_code(code)
            }
            _ => return,
        };
        let Some(button) = button else {
            return;
        };

        self.offer_to_watch(button);

        if !self.debounce.accept(self.clock.now_ms()) {
            debug!("controller button {button:?} debounced");
            return;
        }
        let action = config.button_mapping.action_for(button);
        if let Some(callback) = self.callback.as_mut() {
            callback(action);
        }
    }

    fn offer_to_watch(&mut self, button: ButtonType) {
        let Some(watch) = self.test_watch.as_ref() else {
            return;
        };
        if self.clock.now_ms() >= watch.expires_at_ms {
            if let Some(watch) = self.test_watch.take() {
                let _ = watch.outcome.send(false);
            }
            return;
        }
        if watch.button == button {
            if let Some(watch) = self.test_watch.take() {
                let _ = watch.outcome.send(true);
            }
        }
    }
}

// The center zone deliberately resolves the touch button, not a dedicated
// "center" binding.
fn resolve_zone(zones: &ClickZones, relative_x: f32) -> Option<ButtonType> {
    if zones.left.contains(relative_x) {
        Some(ButtonType::Left)
    } else if zones.center.contains(relative_x) {
        Some(ButtonType::Touch)
    } else if zones.right.contains(relative_x) {
        Some(ButtonType::Right)
    } else {
        None
    }
}

// Two code spaces map onto the same five buttons: conventional
// arrow/enter/space codes, and the D-pad constants some controllers emit
// through the native channel.
fn button_for_code(code: u16) -> Option<ButtonType> {
    match code {
        38 | 19 => Some(ButtonType::Up),
        40 | 20 => Some(ButtonType::Down),
        37 | 21 => Some(ButtonType::Left),
        39 | 22 => Some(ButtonType::Right),
        13 | 32 | 23 | 66 => Some(ButtonType::Touch),
        _ => None,
    }
}
