// SPDX-License-Identifier: GPL-3.0-only

//! Tester facade.
//!
//! [`KeyTester`] is the surface exposed to event sources: it lists and selects
//! keyboard models, routes raw key events into the active [`KeyTracker`], and
//! asks its [`RenderSink`] to repaint whatever changed.

use std::fmt;

use crate::catalog;
use crate::tracker::{KeyStates, KeyTracker, RenderSink};

/// Messages driving the tester.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Replace the active keyboard with a fresh one of this model.
    SelectModel(String),
    /// A physical key went down.
    KeyDown(String),
    /// A physical key was released.
    KeyUp(String),
    /// Reset every key to never pressed.
    ClearAll,
}

/// Errors returned by the tester facade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TesterError {
    /// No catalog entry has this id.
    UnknownModel {
        /// The requested model id
        id: String,
    },
}

impl fmt::Display for TesterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TesterError::UnknownModel { id } => {
                write!(f, "Unknown keyboard model '{}'", id)?;
                let known: Vec<&str> = catalog::models().iter().map(|m| m.id).collect();
                write!(f, "\n  Suggestion: choose one of {}", known.join(", "))
            }
        }
    }
}

impl std::error::Error for TesterError {}

/// The application model: the active tracker plus its render sink.
#[derive(Debug)]
pub struct KeyTester<R: RenderSink> {
    tracker: Option<KeyTracker>,
    model_id: Option<&'static str>,
    sink: R,
}

impl<R: RenderSink> KeyTester<R> {
    /// Creates a tester with no keyboard selected.
    pub fn new(sink: R) -> Self {
        Self {
            tracker: None,
            model_id: None,
            sink,
        }
    }

    /// `(id, display name)` of every model, in display order.
    pub fn list_models(&self) -> Vec<(&'static str, &'static str)> {
        catalog::models().iter().map(|m| (m.id, m.name)).collect()
    }

    /// Discards the current keyboard and builds a fresh one for `id`.
    ///
    /// The new keyboard is fully built and indexed before this returns, so no
    /// later event can reach a half-built or already replaced keyboard. An
    /// unknown id leaves the current keyboard in place.
    pub fn select_model(&mut self, id: &str) -> Result<(), TesterError> {
        let model = catalog::find(id).ok_or_else(|| TesterError::UnknownModel { id: id.to_string() })?;

        if let Some(previous) = self.tracker.take() {
            drop(previous.into_keyboard());
        }

        let tracker = KeyTracker::new((model.factory)());
        tracing::info!(
            "Selected keyboard model '{}' ({} keys)",
            model.name,
            tracker.keyboard().len()
        );
        self.sink.render_keyboard(tracker.keyboard());
        self.tracker = Some(tracker);
        self.model_id = Some(model.id);
        Ok(())
    }

    /// Id of the active model, if one has been selected.
    pub fn model_id(&self) -> Option<&'static str> {
        self.model_id
    }

    pub fn dispatch_key_down(&mut self, identifier: &str) {
        let Some(tracker) = self.tracker.as_mut() else {
            tracing::debug!("Key down '{}' before any model was selected", identifier);
            return;
        };
        if tracker.key_down(identifier).is_some() {
            let keyboard = tracker.keyboard();
            if let Some(key) = keyboard.key(identifier) {
                self.sink.render_key(keyboard, key);
            }
        }
    }

    pub fn dispatch_key_up(&mut self, identifier: &str) {
        let Some(tracker) = self.tracker.as_mut() else {
            tracing::debug!("Key up '{}' before any model was selected", identifier);
            return;
        };
        if tracker.key_up(identifier).is_some() {
            let keyboard = tracker.keyboard();
            if let Some(key) = keyboard.key(identifier) {
                self.sink.render_key(keyboard, key);
            }
        }
    }

    pub fn clear_all(&mut self) {
        if let Some(tracker) = self.tracker.as_mut() {
            tracker.clear_all();
            self.sink.render_keyboard(tracker.keyboard());
        }
    }

    /// Snapshot of the active keyboard's key states; empty before selection.
    pub fn key_states(&self) -> KeyStates {
        self.tracker
            .as_ref()
            .map(KeyTracker::states)
            .unwrap_or_default()
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    /// Applies one message.
    pub fn update(&mut self, message: Message) -> Result<(), TesterError> {
        match message {
            Message::SelectModel(id) => self.select_model(&id)?,
            Message::KeyDown(id) => self.dispatch_key_down(&id),
            Message::KeyUp(id) => self.dispatch_key_up(&id),
            Message::ClearAll => self.clear_all(),
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Key, KeyState, Keyboard};

    /// Counts paint requests.
    #[derive(Debug, Default)]
    struct CountingSink {
        keys: Vec<String>,
        keyboards: usize,
    }

    impl RenderSink for CountingSink {
        fn render_key(&mut self, _keyboard: &Keyboard, key: &Key) {
            self.keys.push(key.identifier().to_string());
        }

        fn render_keyboard(&mut self, _keyboard: &Keyboard) {
            self.keyboards += 1;
        }
    }

    #[test]
    fn test_list_models_matches_catalog() {
        let tester = KeyTester::new(CountingSink::default());
        let models = tester.list_models();
        assert_eq!(models.len(), 5);
        assert_eq!(models[0].0, catalog::DEFAULT_MODEL);
    }

    #[test]
    fn test_events_before_selection_are_dropped() {
        let mut tester = KeyTester::new(CountingSink::default());
        tester.dispatch_key_down("KeyQ");
        tester.dispatch_key_up("KeyQ");
        tester.clear_all();

        assert!(tester.key_states().is_empty());
        assert!(tester.sink().keys.is_empty());
        assert_eq!(tester.sink().keyboards, 0);
    }

    #[test]
    fn test_unknown_model_keeps_current_keyboard() {
        let mut tester = KeyTester::new(CountingSink::default());
        tester.select_model("windows-tkl").unwrap();
        tester.dispatch_key_up("KeyA");

        let err = tester.select_model("typewriter").unwrap_err();
        assert_eq!(err, TesterError::UnknownModel { id: "typewriter".into() });
        assert!(err.to_string().contains("windows-full"), "Error lists known models");
        assert_eq!(tester.model_id(), Some("windows-tkl"));
        assert_eq!(tester.key_states().get("KeyA"), Some(KeyState::Pressed));
    }

    #[test]
    fn test_model_switch_resets_state() {
        let mut tester = KeyTester::new(CountingSink::default());
        tester.select_model("windows-full").unwrap();
        tester.dispatch_key_up("KeyQ");

        tester.select_model("windows-full").unwrap();

        assert_eq!(tester.key_states().get("KeyQ"), Some(KeyState::NeverPressed));
        assert_eq!(tester.sink().keyboards, 2);
    }

    #[test]
    fn test_sink_sees_repeats_but_not_unknown_keys() {
        let mut tester = KeyTester::new(CountingSink::default());
        tester.select_model("laptop-compact").unwrap();

        tester.dispatch_key_down("KeyZ");
        tester.dispatch_key_down("KeyZ");
        tester.dispatch_key_down("Numpad5");

        assert_eq!(tester.sink().keys, vec!["KeyZ", "KeyZ"]);
    }

    #[test]
    fn test_update_routes_messages() {
        let mut tester = KeyTester::new(CountingSink::default());
        tester.update(Message::SelectModel("apple-full".into())).unwrap();
        tester.update(Message::KeyDown("Fn".into())).unwrap();
        assert_eq!(tester.key_states().get("Fn"), Some(KeyState::Down));

        tester.update(Message::KeyUp("Fn".into())).unwrap();
        assert_eq!(tester.key_states().get("Fn"), Some(KeyState::Pressed));

        tester.update(Message::ClearAll).unwrap();
        assert_eq!(tester.key_states().get("Fn"), Some(KeyState::NeverPressed));

        assert!(tester.update(Message::SelectModel("nope".into())).is_err());
    }
}
