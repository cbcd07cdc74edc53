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

//! Raw input events.
//!
//! The dispatchers are push-driven: the embedding event loop captures
//! whatever its platform produces and feeds it in as an [`InputEvent`].
//! Key events are tagged with the channel they arrived on, since the same
//! logical press can surface either through the ambient keyboard surface of
//! the editing host or through the native key channel of a performance
//! device, and each dispatcher attaches to exactly one of the two.

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};

/// The surface a key event arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyChannel {
    /// The ambient keyboard surface of the editing host.
    Ambient,
    /// The native key-event channel of a performance device.
    Native,
}

/// A raw input event, before any mapping or debouncing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key { code: u16, channel: KeyChannel },
    PointerClick { x: f32, screen_width: f32 },
}

/// Translates a crossterm event into an [`InputEvent`].
///
/// Key releases and repeats are dropped; only presses dispatch. Pointer
/// clicks carry the column of the press and the current terminal width so
/// zone resolution can work in screen fractions.
pub fn from_crossterm(event: &Event, channel: KeyChannel, screen_width: u16) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_code(key.code).map(|code| InputEvent::Key { code, channel })
        }
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            Some(InputEvent::PointerClick {
                x: f32::from(mouse.column),
                screen_width: f32::from(screen_width),
            })
        }
        _ => None,
    }
}

// Conventional key codes, as emitted by keyboard-style controllers.
fn key_code(code: KeyCode) -> Option<u16> {
    match code {
        KeyCode::Enter => Some(13),
        KeyCode::Char(' ') => Some(32),
        KeyCode::PageUp => Some(33),
        KeyCode::PageDown => Some(34),
        KeyCode::Left => Some(37),
        KeyCode::Up => Some(38),
        KeyCode::Right => Some(39),
        KeyCode::Down => Some(40),
        KeyCode::Char(c) if c.is_ascii_alphanumeric() => Some(c.to_ascii_uppercase() as u16),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers, MouseEvent};

    #[test]
    fn key_press_translates_to_conventional_code() {
        let event = Event::Key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        assert_eq!(
            from_crossterm(&event, KeyChannel::Native, 80),
            Some(InputEvent::Key {
                code: 38,
                channel: KeyChannel::Native
            })
        );
    }

    #[test]
    fn key_release_is_dropped() {
        let mut key = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(from_crossterm(&Event::Key(key), KeyChannel::Native, 80), None);
    }

    #[test]
    fn left_mouse_down_becomes_pointer_click() {
        let event = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 40,
            row: 10,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            from_crossterm(&event, KeyChannel::Native, 80),
            Some(InputEvent::PointerClick {
                x: 40.0,
                screen_width: 80.0
            })
        );
    }

    #[test]
    fn letters_map_to_uppercase_ascii_codes() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE));
        assert_eq!(
            from_crossterm(&event, KeyChannel::Ambient, 80),
            Some(InputEvent::Key {
                code: b'N' as u16,
                channel: KeyChannel::Ambient
            })
        );
    }
}
