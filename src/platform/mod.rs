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

//! Platform capability flags.
//!
//! The dispatchers only ever read these flags; nothing in this crate sets
//! them. A host embeds the dispatch layer by answering three questions about
//! the environment it runs in.

/// Read-only capability queries answered by the embedding host.
pub trait Capabilities {
    /// Whether the native key-event channel delivers events here.
    fn supports_native_keys(&self) -> bool;

    /// Whether pointer clicks (including short-range wireless pointers)
    /// arrive here.
    fn supports_pointer(&self) -> bool;

    /// Whether this is the editing host, which exposes the ambient
    /// keyboard surface instead of the native channel.
    fn is_editing_host(&self) -> bool;
}

/// Capabilities of a raw-mode terminal performance host.
///
/// A terminal delivers key events natively and, with mouse capture enabled,
/// pointer clicks as well. It is never the editing host.
pub struct TerminalCapabilities;

impl Capabilities for TerminalCapabilities {
    fn supports_native_keys(&self) -> bool {
        true
    }

    fn supports_pointer(&self) -> bool {
        true
    }

    fn is_editing_host(&self) -> bool {
        false
    }
}
