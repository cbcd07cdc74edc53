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

//! Debounce gates.
//!
//! The two dispatchers deliberately debounce differently: the key
//! dispatcher gates each key code independently, the controller dispatcher
//! gates all buttons behind one timestamp. Both use the same 300 ms window
//! and the same comparison.

use std::collections::HashMap;

/// Minimum spacing between accepted triggers.
pub const DEBOUNCE_WINDOW_MS: u64 = 300;

/// Per-code gate: each key code debounces independently of the others.
#[derive(Debug, Default)]
pub(crate) struct PerCodeDebounce {
    last_press_ms: HashMap<u16, u64>,
}

impl PerCodeDebounce {
    /// Returns `false` when `code` was accepted less than the window ago,
    /// leaving its timestamp untouched. Otherwise records `now_ms` for
    /// `code` and returns `true`. A code never seen before is accepted.
    pub(crate) fn accept(&mut self, code: u16, now_ms: u64) -> bool {
        if let Some(&last) = self.last_press_ms.get(&code) {
            if now_ms.saturating_sub(last) < DEBOUNCE_WINDOW_MS {
                return false;
            }
        }
        self.last_press_ms.insert(code, now_ms);
        true
    }

    pub(crate) fn clear(&mut self) {
        self.last_press_ms.clear();
    }
}

/// Global gate: one timestamp across every trigger source.
#[derive(Debug, Default)]
pub(crate) struct GlobalDebounce {
    last_ms: Option<u64>,
}

impl GlobalDebounce {
    pub(crate) fn accept(&mut self, now_ms: u64) -> bool {
        if let Some(last) = self.last_ms {
            if now_ms.saturating_sub(last) < DEBOUNCE_WINDOW_MS {
                return false;
            }
        }
        self.last_ms = Some(now_ms);
        true
    }

    pub(crate) fn clear(&mut self) {
        self.last_ms = None;
    }
}
