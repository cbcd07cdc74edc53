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

//! # Footswitch
//!
//! Input-to-action dispatch for a live performance song prompter.
//!
//! Heterogeneous raw input (platform key codes, pointer clicks, Bluetooth
//! foot-controller codes) is translated into a small closed set of semantic
//! actions: advance song, go back, pause, change scroll speed. Two
//! structurally parallel dispatchers do the work:
//!
//! * [`KeyDispatcher`] carries the primary navigation mapping (three
//!   actions over raw key codes, debounced per code).
//! * [`ControllerDispatcher`] interprets a foot controller through either
//!   pointer click zones or key codes (five logical buttons, one global
//!   debounce window), and offers a bounded button test facility.
//!
//! ## Architecture
//!
//! The dispatchers are push-driven and single-threaded: the embedding event
//! loop translates its platform's events into [`InputEvent`]s and feeds
//! them in. Each dispatcher owns its own mutable state behind an explicit
//! `initialize` → `cleanup` lifecycle, emits actions through a single
//! registered callback (last registration wins), and absorbs every abnormal
//! condition into a silent no-op — a stray event must never crash the
//! surrounding UI. [`ControllerService`] composes the controller dispatcher
//! with a persisted configuration.

pub mod actions;
pub mod config;
pub mod dispatch;
pub mod events;
pub mod platform;
pub mod service;
pub mod util;

pub use actions::{Action, ButtonType};
pub use config::{
    ButtonMapping, ClickZone, ClickZones, ConfigStore, ConfyStore, ControllerConfig,
    ControllerMode, KeyMapping, StoreError,
};
pub use dispatch::{ButtonTest, ControllerDispatcher, KeyDispatcher};
pub use events::{InputEvent, KeyChannel, from_crossterm};
pub use platform::{Capabilities, TerminalCapabilities};
pub use service::ControllerService;
