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

//! Semantic actions and controller buttons.
//!
//! These types are the vocabulary shared between the dispatch layer and its
//! consumers. An [`Action`] is a pure signal carrying no payload; whatever
//! raw event produced it (a key press, a pointer click, a foot-controller
//! button) is deliberately erased by the time it reaches a subscriber.

use serde::{Deserialize, Serialize};

/// A semantic application command, abstracted away from any physical input.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    NextSong,
    PrevSong,
    Pause,
    IncreaseSpeed,
    DecreaseSpeed,
    ResetSpeed,
}

/// A logical button on the foot controller, independent of the key code or
/// click coordinate that triggered it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
    Up,
    Down,
    Left,
    Right,
    Touch,
}
