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

//! Primary key dispatcher.
//!
//! Turns raw key-down events into at most one [`Action`] per debounce
//! window, per key code, under the three-action navigation mapping.

use std::rc::Rc;

use log::{debug, warn};

use crate::{
    actions::Action,
    config::KeyMapping,
    dispatch::debounce::PerCodeDebounce,
    events::{InputEvent, KeyChannel},
    platform::Capabilities,
    util::clock::Clock,
};

type ActionCallback = Box<dyn FnMut(Action)>;

/// The primary navigation dispatcher.
///
/// Lifecycle: construct, [`initialize`](Self::initialize) once to attach to
/// the environment-appropriate key channel, feed events through
/// [`handle_event`](Self::handle_event), and [`cleanup`](Self::cleanup) to
/// detach. Exactly one instance should drive the real input surface.
pub struct KeyDispatcher {
    caps: Rc<dyn Capabilities>,
    clock: Rc<dyn Clock>,
    attached: Option<KeyChannel>,
    mapping: KeyMapping,
    callback: Option<ActionCallback>,
    debounce: PerCodeDebounce,
}

impl KeyDispatcher {
    pub fn new(caps: Rc<dyn Capabilities>, clock: Rc<dyn Clock>) -> Self {
        Self {
            caps,
            clock,
            attached: None,
            mapping: KeyMapping::default(),
            callback: None,
            debounce: PerCodeDebounce::default(),
        }
    }

    /// Attaches to the key channel the environment provides: the ambient
    /// surface on the editing host, the native channel elsewhere. When
    /// neither is available this logs a warning and leaves the dispatcher
    /// inert; it never fails.
    pub fn initialize(&mut self) {
        if self.caps.is_editing_host() {
            self.attached = Some(KeyChannel::Ambient);
        } else if self.caps.supports_native_keys() {
            self.attached = Some(KeyChannel::Native);
        } else {
            warn!("key events are not supported here; key dispatcher stays inert");
        }
    }

    /// Replaces the whole mapping. No merging with the previous one.
    pub fn set_key_mapping(&mut self, mapping: KeyMapping) {
        self.mapping = mapping;
    }

    /// Registers the single action subscriber. A second registration
    /// silently replaces the first.
    pub fn on_action(&mut self, callback: impl FnMut(Action) + 'static) {
        self.callback = Some(Box::new(callback));
    }

    /// Detaches and forgets the callback and all debounce history. Safe to
    /// call repeatedly and before `initialize`.
    pub fn cleanup(&mut self) {
        self.attached = None;
        self.callback = None;
        self.debounce.clear();
    }

    pub fn is_supported(&self) -> bool {
        self.caps.supports_native_keys()
    }

    /// Feeds one raw event through the pipeline.
    ///
    /// Returns `true` when the event is a key press on the attached channel
    /// whose code is bound in the mapping, regardless of whether the
    /// debounce gate let it through; the embedder uses this to suppress the
    /// platform's default handling of bound keys. Unbound codes and foreign
    /// events return `false` and are left untouched.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        let Some(attached) = self.attached else {
            return false;
        };
        let InputEvent::Key { code, channel } = *event else {
            return false;
        };
        if channel != attached {
            return false;
        }

        let action = self.mapping.action_for(code);
        if !self.debounce.accept(code, self.clock.now_ms()) {
            debug!("key {code} debounced");
            return action.is_some();
        }
        if let (Some(action), Some(callback)) = (action, self.callback.as_mut()) {
            callback(action);
        }
        action.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::util::clock::ManualClock;

    struct TestCaps {
        native_keys: bool,
        editing: bool,
    }

    impl Capabilities for TestCaps {
        fn supports_native_keys(&self) -> bool {
            self.native_keys
        }
        fn supports_pointer(&self) -> bool {
            false
        }
        fn is_editing_host(&self) -> bool {
            self.editing
        }
    }

    fn performance_caps() -> TestCaps {
        TestCaps {
            native_keys: true,
            editing: false,
        }
    }

    fn mapping() -> KeyMapping {
        KeyMapping {
            next_song: Some(39),
            prev_song: Some(37),
            pause: Some(32),
        }
    }

    fn dispatcher(caps: TestCaps) -> (KeyDispatcher, Rc<ManualClock>, Rc<RefCell<Vec<Action>>>) {
        let clock = Rc::new(ManualClock::new());
        let mut dispatcher = KeyDispatcher::new(Rc::new(caps), clock.clone());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        dispatcher.on_action(move |action| sink.borrow_mut().push(action));
        dispatcher.set_key_mapping(mapping());
        dispatcher.initialize();
        (dispatcher, clock, seen)
    }

    fn key(code: u16) -> InputEvent {
        InputEvent::Key {
            code,
            channel: KeyChannel::Native,
        }
    }

    #[test]
    fn bound_key_triggers_action_once() {
        let (mut d, _clock, seen) = dispatcher(performance_caps());
        assert!(d.handle_event(&key(39)));
        assert_eq!(*seen.borrow(), vec![Action::NextSong]);
    }

    #[test]
    fn unbound_key_triggers_nothing() {
        let (mut d, _clock, seen) = dispatcher(performance_caps());
        assert!(!d.handle_event(&key(65)));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn same_code_inside_window_is_suppressed() {
        let (mut d, clock, seen) = dispatcher(performance_caps());
        d.handle_event(&key(39));
        clock.advance(299);
        d.handle_event(&key(39));
        assert_eq!(*seen.borrow(), vec![Action::NextSong]);

        clock.advance(1);
        d.handle_event(&key(39));
        assert_eq!(*seen.borrow(), vec![Action::NextSong, Action::NextSong]);
    }

    #[test]
    fn distinct_codes_inside_window_both_fire() {
        let (mut d, clock, seen) = dispatcher(performance_caps());
        d.handle_event(&key(39));
        clock.advance(100);
        d.handle_event(&key(37));
        assert_eq!(*seen.borrow(), vec![Action::NextSong, Action::PrevSong]);
    }

    #[test]
    fn colliding_codes_resolve_next_then_prev_then_pause() {
        let (mut d, _clock, seen) = dispatcher(performance_caps());
        d.set_key_mapping(KeyMapping {
            next_song: Some(32),
            prev_song: None,
            pause: Some(32),
        });
        d.handle_event(&key(32));
        assert_eq!(*seen.borrow(), vec![Action::NextSong]);
    }

    #[test]
    fn unbound_press_still_records_a_debounce_timestamp() {
        let (mut d, clock, seen) = dispatcher(performance_caps());
        d.handle_event(&key(65));
        d.set_key_mapping(KeyMapping {
            next_song: Some(65),
            ..KeyMapping::default()
        });
        clock.advance(100);
        d.handle_event(&key(65));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn second_subscriber_replaces_the_first() {
        let (mut d, _clock, first) = dispatcher(performance_caps());
        let second = Rc::new(RefCell::new(Vec::new()));
        let sink = second.clone();
        d.on_action(move |action| sink.borrow_mut().push(action));
        d.handle_event(&key(39));
        assert!(first.borrow().is_empty());
        assert_eq!(*second.borrow(), vec![Action::NextSong]);
    }

    #[test]
    fn bound_key_is_consumed_even_when_debounced() {
        let (mut d, clock, _seen) = dispatcher(performance_caps());
        assert!(d.handle_event(&key(39)));
        clock.advance(50);
        assert!(d.handle_event(&key(39)));
    }

    #[test]
    fn cleanup_is_idempotent_and_safe_before_initialize() {
        let clock = Rc::new(ManualClock::new());
        let mut d = KeyDispatcher::new(Rc::new(performance_caps()), clock);
        d.cleanup();
        d.cleanup();

        let (mut d, _clock, seen) = dispatcher(performance_caps());
        d.cleanup();
        d.cleanup();
        assert!(!d.handle_event(&key(39)));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn unsupported_environment_stays_inert() {
        let (mut d, _clock, seen) = dispatcher(TestCaps {
            native_keys: false,
            editing: false,
        });
        assert!(!d.handle_event(&key(39)));
        assert!(seen.borrow().is_empty());
        assert!(!d.is_supported());
    }

    #[test]
    fn editing_host_listens_on_the_ambient_channel() {
        let (mut d, _clock, seen) = dispatcher(TestCaps {
            native_keys: true,
            editing: true,
        });
        assert!(!d.handle_event(&key(39)));
        assert!(d.handle_event(&InputEvent::Key {
            code: 39,
            channel: KeyChannel::Ambient,
        }));
        assert_eq!(*seen.borrow(), vec![Action::NextSong]);
    }

    #[test]
    fn set_key_mapping_replaces_wholesale() {
        let (mut d, _clock, seen) = dispatcher(performance_caps());
        d.set_key_mapping(KeyMapping {
            pause: Some(13),
            ..KeyMapping::default()
        });
        assert!(!d.handle_event(&key(39)));
        assert!(d.handle_event(&key(13)));
        assert_eq!(*seen.borrow(), vec![Action::Pause]);
    }
}
