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

//! Controller service hook.
//!
//! Thin composition of the [`ControllerDispatcher`] with a [`ConfigStore`]:
//! loads the stored configuration on start (falling back to defaults),
//! persists configuration updates, and keeps the action sink registered
//! across the full reinitialization that every config update performs.

use std::sync::mpsc::Sender;

use log::warn;

use crate::{
    actions::Action,
    config::{ConfigStore, ControllerConfig, StoreError},
    dispatch::ControllerDispatcher,
};

pub struct ControllerService {
    dispatcher: ControllerDispatcher,
    store: Box<dyn ConfigStore>,
    sink: Option<Sender<Action>>,
}

impl ControllerService {
    pub fn new(dispatcher: ControllerDispatcher, store: Box<dyn ConfigStore>) -> Self {
        Self {
            dispatcher,
            store,
            sink: None,
        }
    }

    /// Loads the stored configuration and initializes the dispatcher with
    /// it. Absent or unreadable configuration falls back to the defaults;
    /// a load failure is logged, never propagated.
    pub fn start(&mut self) {
        let config = match self.store.load() {
            Ok(Some(config)) => config,
            Ok(None) => ControllerConfig::default(),
            Err(e) => {
                warn!("{e}; using default controller configuration");
                ControllerConfig::default()
            }
        };
        self.dispatcher.initialize(config);
        self.register_sink();
    }

    /// Routes dispatched actions into `sink`. Re-registered automatically
    /// after every configuration update.
    pub fn set_action_sink(&mut self, sink: Sender<Action>) {
        self.sink = Some(sink);
        self.register_sink();
    }

    /// Applies `config` wholesale, then persists it. The in-memory state
    /// keeps the new config even when the save fails; the failure is
    /// returned to the caller.
    pub fn update_config(&mut self, config: ControllerConfig) -> Result<(), StoreError> {
        self.dispatcher.set_config(config);
        self.register_sink();
        self.store.save(&config)
    }

    pub fn stop(&mut self) {
        self.dispatcher.cleanup();
    }

    pub fn dispatcher(&self) -> &ControllerDispatcher {
        &self.dispatcher
    }

    pub fn dispatcher_mut(&mut self) -> &mut ControllerDispatcher {
        &mut self.dispatcher
    }

    fn register_sink(&mut self) {
        if let Some(sink) = self.sink.clone() {
            self.dispatcher.on_action(move |action| {
                let _ = sink.send(action);
            });
        }
    }
}
