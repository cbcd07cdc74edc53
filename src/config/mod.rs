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

//! Mapping configuration and its persistence.
//!
//! This module defines the key and button mappings consumed by the
//! dispatchers, together with the [`ConfigStore`] load/save contract and a
//! `confy`-backed implementation of it. The dispatchers never touch the
//! store themselves; the service hook composes the two.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::actions::{Action, ButtonType};

const CONFIG_NAME: &str = "footswitch";

/// Key bindings for the primary navigation actions.
///
/// Every binding is optional; an unbound action simply never fires. Codes
/// need not be unique: when the same code is bound to several actions, the
/// next/prev/pause priority order decides which one wins.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct KeyMapping {
    pub next_song: Option<u16>,
    pub prev_song: Option<u16>,
    pub pause: Option<u16>,
}

impl KeyMapping {
    /// Resolves `code` against the bindings, checking next song, then
    /// previous song, then pause. First match wins on collisions.
    pub fn action_for(&self, code: u16) -> Option<Action> {
        if self.next_song == Some(code) {
            return Some(Action::NextSong);
        }
        if self.prev_song == Some(code) {
            return Some(Action::PrevSong);
        }
        if self.pause == Some(code) {
            return Some(Action::Pause);
        }
        None
    }
}

/// Total mapping from every controller button to an action.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ButtonMapping {
    pub up: Action,
    pub down: Action,
    pub left: Action,
    pub right: Action,
    pub touch: Action,
}

impl ButtonMapping {
    pub fn action_for(&self, button: ButtonType) -> Action {
        match button {
            ButtonType::Up => self.up,
            ButtonType::Down => self.down,
            ButtonType::Left => self.left,
            ButtonType::Right => self.right,
            ButtonType::Touch => self.touch,
        }
    }
}

impl Default for ButtonMapping {
    fn default() -> Self {
        Self {
            up: Action::IncreaseSpeed,
            down: Action::DecreaseSpeed,
            left: Action::PrevSong,
            right: Action::NextSong,
            touch: Action::Pause,
        }
    }
}

/// A horizontal band of the screen, in fractions of total width.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ClickZone {
    pub x: f32,
    pub width: f32,
}

impl ClickZone {
    /// Half-open containment: `[x, x + width)`.
    pub fn contains(&self, relative_x: f32) -> bool {
        relative_x >= self.x && relative_x < self.x + self.width
    }
}

/// The three named zones used in pointer mode.
///
/// Zones are expected to partition the screen left to right, but nothing
/// enforces coverage or non-overlap; a click outside every zone produces no
/// action.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ClickZones {
    pub left: ClickZone,
    pub center: ClickZone,
    pub right: ClickZone,
}

impl Default for ClickZones {
    fn default() -> Self {
        Self {
            left: ClickZone { x: 0.0, width: 0.33 },
            center: ClickZone {
                x: 0.33,
                width: 0.34,
            },
            right: ClickZone {
                x: 0.67,
                width: 0.33,
            },
        }
    }
}

/// Which trigger geometry the controller dispatcher listens with.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ControllerMode {
    Pointer,
    Keycode,
}

/// The whole controller configuration, replaced wholesale on every update.
///
/// `sensitivity` is stored and round-tripped for consumers outside the
/// dispatch core; the dispatchers never interpret it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ControllerConfig {
    pub version: u32,
    pub enabled: bool,
    pub mode: ControllerMode,
    pub button_mapping: ButtonMapping,
    pub click_zones: ClickZones,
    pub sensitivity: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            enabled: false,
            mode: ControllerMode::Keycode,
            button_mapping: ButtonMapping::default(),
            click_zones: ClickZones::default(),
            sensitivity: 1.0,
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to load controller configuration: {0}")]
    Load(String),
    #[error("failed to save controller configuration: {0}")]
    Save(String),
}

/// Load/save contract for controller configuration.
///
/// `load` returns `Ok(None)` when no configuration has ever been stored so
/// the caller can fall back to defaults without treating absence as an
/// error.
pub trait ConfigStore {
    fn load(&self) -> Result<Option<ControllerConfig>, StoreError>;
    fn save(&self, config: &ControllerConfig) -> Result<(), StoreError>;
}

/// Configuration store backed by the platform config directory via `confy`.
#[derive(Default)]
pub struct ConfyStore;

impl ConfigStore for ConfyStore {
    fn load(&self) -> Result<Option<ControllerConfig>, StoreError> {
        let path = confy::get_configuration_file_path(CONFIG_NAME, None)
            .map_err(|e| StoreError::Load(e.to_string()))?;
        if !path.exists() {
            return Ok(None);
        }
        confy::load(CONFIG_NAME, None)
            .map(Some)
            .map_err(|e| StoreError::Load(e.to_string()))
    }

    fn save(&self, config: &ControllerConfig) -> Result<(), StoreError> {
        confy::store(CONFIG_NAME, None, config).map_err(|e| StoreError::Save(e.to_string()))
    }
}
