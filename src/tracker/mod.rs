// SPDX-License-Identifier: GPL-3.0-only

//! Key-state tracking for the active keyboard.
//!
//! The tracker owns one [`Keyboard`] and applies the per-key state machine:
//!
//! ```text
//! NeverPressed --down--> Down --up--> Pressed --down--> Down --up--> ...
//!        ^                                                   |
//!        +------------------------ clear --------------------+
//! ```
//!
//! Events for identifiers the keyboard does not have are dropped; not every
//! physical key exists on every modeled layout.

pub mod render;

pub use render::{NullRenderer, RenderSink, TextRenderer};

use serde::Serialize;
use std::collections::BTreeMap;

use crate::layout::{Key, KeyState, Keyboard};

/// Read-only snapshot of every key's state, ordered by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeyStates(BTreeMap<String, KeyState>);

impl KeyStates {
    pub fn get(&self, identifier: &str) -> Option<KeyState> {
        self.0.get(identifier).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of keys currently in `state`.
    pub fn count(&self, state: KeyState) -> usize {
        self.0.values().filter(|&&s| s == state).count()
    }

    /// Identifiers of keys that have not registered yet.
    pub fn untested(&self) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(_, s)| **s == KeyState::NeverPressed)
            .map(|(id, _)| id.as_str())
            .collect()
    }
}

/// Authoritative key state for one keyboard.
#[derive(Debug, Clone)]
pub struct KeyTracker {
    keyboard: Keyboard,
}

impl KeyTracker {
    /// Takes ownership of a freshly built keyboard.
    ///
    /// The index is rebuilt so that a keyboard whose keys were relabeled
    /// without going through `customize_key` is still looked up correctly.
    pub fn new(mut keyboard: Keyboard) -> Self {
        keyboard.rebuild_index();
        keyboard.reset_states();
        Self { keyboard }
    }

    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    /// Marks a key as held. Returns the key if the identifier is known.
    ///
    /// Repeated down events (key auto-repeat) leave the key `Down` but still
    /// return it so the caller refreshes the display.
    pub fn key_down(&mut self, identifier: &str) -> Option<&Key> {
        self.transition(identifier, KeyState::Down)
    }

    /// Marks a key as released. Once pressed, a key never reverts to
    /// `NeverPressed` except through [`KeyTracker::clear_all`].
    pub fn key_up(&mut self, identifier: &str) -> Option<&Key> {
        self.transition(identifier, KeyState::Pressed)
    }

    /// Resets every key to `NeverPressed`.
    pub fn clear_all(&mut self) {
        self.keyboard.reset_states();
        tracing::debug!("Cleared state of {} keys", self.keyboard.len());
    }

    pub fn state(&self, identifier: &str) -> Option<KeyState> {
        self.keyboard.key(identifier).map(Key::state)
    }

    pub fn states(&self) -> KeyStates {
        KeyStates(
            self.keyboard
                .keys()
                .iter()
                .map(|key| (key.identifier().to_string(), key.state()))
                .collect(),
        )
    }

    /// Consumes the tracker, clearing all state, and hands back the keyboard.
    pub fn into_keyboard(mut self) -> Keyboard {
        self.clear_all();
        self.keyboard
    }

    fn transition(&mut self, identifier: &str, next: KeyState) -> Option<&Key> {
        let Some(key) = self.keyboard.key_mut(identifier) else {
            tracing::trace!("Ignoring event for unknown key '{}'", identifier);
            return None;
        };
        if key.state() != next {
            tracing::debug!("Key '{}': {} -> {}", identifier, key.state(), next);
        }
        key.set_state(next);
        Some(&*key)
    }
}

// ============================================================================
// Tests
// ============================================================================
