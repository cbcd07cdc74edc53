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

//! Input-to-action dispatchers.
//!
//! Two structurally parallel dispatchers share one capture → debounce →
//! resolve → invoke pipeline:
//!
//! * [`KeyDispatcher`]: the primary navigation mapping, three actions over
//!   raw key codes, debounced per key code.
//! * [`ControllerDispatcher`]: the foot-controller mapping, five logical
//!   buttons over either pointer zones or key codes, debounced globally,
//!   with a bounded button test facility.
//!
//! Neither dispatcher wraps the other. Each is a long-lived, explicitly
//! owned instance with a single-writer lifecycle: `initialize` attaches it
//! to its input surface, `cleanup` returns it to the uninitialized state,
//! and both are safe to call at any point in any order.

mod controller;
mod debounce;
mod keys;

pub use controller::{ButtonTest, ControllerDispatcher, TEST_BUTTON_TIMEOUT_MS};
pub use debounce::DEBOUNCE_WINDOW_MS;
pub use keys::KeyDispatcher;
