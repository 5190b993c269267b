// SPDX-License-Identifier: GPL-3.0-only

//! Row-oriented geometric placement of keys.
//!
//! A [`Keyboard`] keeps a vertical cursor. Each call to
//! [`Keyboard::start_row`] hands out a [`Row`] that places keys left to right
//! from the left margin, advancing a horizontal cursor by each key's width or
//! by explicit gaps.

use std::collections::HashMap;

use crate::app_settings;
use crate::layout::types::{Key, KeyState, LayoutError, Position, Size};

/// Shared geometry defaults for one keyboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSettings {
    pub default_key_width: f32,
    pub default_key_height: f32,
    pub margin_left: f32,
    pub margin_top: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            default_key_width: app_settings::DEFAULT_KEY_WIDTH,
            default_key_height: app_settings::DEFAULT_KEY_HEIGHT,
            margin_left: app_settings::MARGIN_LEFT,
            margin_top: app_settings::MARGIN_TOP,
        }
    }
}

/// A complete keyboard layout instance.
///
/// Owns its keys exclusively. Keys are only added while rows are being
/// built; afterwards the set is fixed and only key state changes.
#[derive(Debug, Clone)]
pub struct Keyboard {
    settings: LayoutSettings,
    keys: Vec<Key>,
    index: HashMap<String, usize>,
    cursor_y: f32,
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new(LayoutSettings::default())
    }
}

impl Keyboard {
    pub fn new(settings: LayoutSettings) -> Self {
        Self {
            settings,
            keys: Vec::new(),
            index: HashMap::new(),
            cursor_y: settings.margin_top,
        }
    }

    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    /// Starts a new row below the previous one.
    ///
    /// The row begins at `(margin_left, current_y + extra_gap_above)` and the
    /// vertical cursor moves down by `extra_gap_above + default_key_height`.
    pub fn start_row(&mut self, extra_gap_above: f32) -> Row<'_> {
        let y = self.cursor_y + extra_gap_above;
        self.cursor_y = y + self.settings.default_key_height;
        Row {
            x: self.settings.margin_left,
            y,
            keyboard: self,
        }
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Looks up a key by its physical identifier.
    pub fn key(&self, identifier: &str) -> Option<&Key> {
        self.index.get(identifier).map(|&i| &self.keys[i])
    }

    pub(crate) fn key_mut(&mut self, identifier: &str) -> Option<&mut Key> {
        let i = *self.index.get(identifier)?;
        Some(&mut self.keys[i])
    }

    /// Applies `customize` to the key with `identifier`, then rebuilds the
    /// identifier index so a relabeled key is found under its new code.
    ///
    /// Used by derived layouts. A missing key leaves the keyboard untouched.
    pub fn customize_key<F>(&mut self, identifier: &str, customize: F) -> Result<(), LayoutError>
    where
        F: FnOnce(&mut Key),
    {
        let i = *self
            .index
            .get(identifier)
            .ok_or_else(|| LayoutError::unknown_key(identifier))?;
        customize(&mut self.keys[i]);
        self.rebuild_index();
        Ok(())
    }

    /// Rebuilds the identifier index from scratch.
    ///
    /// When two keys share an identifier the first one wins.
    pub fn rebuild_index(&mut self) {
        self.index.clear();
        for (i, key) in self.keys.iter().enumerate() {
            self.index.entry(key.identifier().to_string()).or_insert(i);
        }
    }

    /// Returns identifiers used by more than one key, in placement order.
    pub fn duplicate_identifiers(&self) -> Vec<&str> {
        let mut seen = HashMap::new();
        let mut duplicates = Vec::new();
        for key in &self.keys {
            let count = seen.entry(key.identifier()).or_insert(0usize);
            *count += 1;
            if *count == 2 {
                duplicates.push(key.identifier());
            }
        }
        duplicates
    }

    /// Overall size including margins on every side.
    pub fn bounds(&self) -> Size {
        let right = self.keys.iter().map(Key::right).fold(0.0_f32, f32::max);
        let bottom = self
            .keys
            .iter()
            .map(Key::bottom)
            .fold(self.cursor_y, f32::max);
        Size {
            width: right + self.settings.margin_left,
            height: bottom + self.settings.margin_top,
        }
    }

    /// Resets every key to [`KeyState::NeverPressed`].
    pub fn reset_states(&mut self) {
        for key in &mut self.keys {
            key.set_state(KeyState::NeverPressed);
        }
    }

    fn push_key(&mut self, key: Key) -> &mut Key {
        let i = self.keys.len();
        if self.index.contains_key(key.identifier()) {
            tracing::warn!(
                "Duplicate key identifier '{}' in layout; keeping the first key in the index",
                key.identifier()
            );
        } else {
            self.index.insert(key.identifier().to_string(), i);
        }
        self.keys.push(key);
        &mut self.keys[i]
    }
}

/// Transient placement cursor for one row of keys.
///
/// Borrows its keyboard mutably, so it cannot outlive layout construction.
#[derive(Debug)]
pub struct Row<'a> {
    keyboard: &'a mut Keyboard,
    x: f32,
    y: f32,
}

impl Row<'_> {
    /// Places a key at the cursor and advances the cursor by its width.
    ///
    /// `None` or a non-positive width selects the keyboard's default width.
    /// The height is always the keyboard default; callers override it on the
    /// returned key.
    pub fn add_key(
        &mut self,
        label: &str,
        identifier: &str,
        width: Option<f32>,
        shift_label: Option<&str>,
    ) -> &mut Key {
        let settings = self.keyboard.settings;
        let width = match width {
            Some(w) if w > 0.0 => w,
            _ => settings.default_key_width,
        };
        let key = Key::new(
            label,
            shift_label,
            identifier,
            Size {
                width,
                height: settings.default_key_height,
            },
            Position {
                x: self.x,
                y: self.y,
            },
        );
        self.x += width;
        self.keyboard.push_key(key)
    }

    /// Places a default-width key.
    pub fn key(&mut self, label: &str, identifier: &str) -> &mut Key {
        self.add_key(label, identifier, None, None)
    }

    pub fn wide_key(&mut self, label: &str, identifier: &str, width: f32) -> &mut Key {
        self.add_key(label, identifier, Some(width), None)
    }

    /// Places a default-width key with a shifted label.
    pub fn shifted_key(&mut self, label: &str, shift_label: &str, identifier: &str) -> &mut Key {
        self.add_key(label, identifier, None, Some(shift_label))
    }

    /// Advances the cursor without placing a key.
    pub fn add_gap(&mut self, width: f32) -> &mut Self {
        self.x += width;
        self
    }

    pub fn y(&self) -> f32 {
        self.y
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_stack_top_to_bottom() {
        let mut kb = Keyboard::default();
        let first = kb.start_row(0.0).y();
        let second = kb.start_row(0.0).y();
        let third = kb.start_row(20.0).y();

        assert_eq!(first, 10.0, "First row starts at the top margin");
        assert_eq!(second, 50.0, "Second row sits one key height lower");
        assert_eq!(third, 110.0, "Extra gap pushes the row further down");
    }

    #[test]
    fn test_keys_advance_cursor_by_width() {
        let mut kb = Keyboard::default();
        {
            let mut row = kb.start_row(0.0);
            row.key("Esc", "Escape");
            row.add_gap(40.0);
            row.key("F1", "F1");
            row.wide_key("Tab", "Tab", 60.0);
            row.key("Q", "KeyQ");
        }

        let x = |id: &str| kb.key(id).unwrap().position().x;
        assert_eq!(x("Escape"), 10.0);
        assert_eq!(x("F1"), 90.0, "Gap should shift the next key");
        assert_eq!(x("Tab"), 130.0);
        assert_eq!(x("KeyQ"), 190.0, "Wide key advances by its own width");
        assert_eq!(kb.key("Tab").unwrap().size().width, 60.0);
    }

    #[test]
    fn test_non_positive_width_uses_default() {
        let mut kb = Keyboard::default();
        {
            let mut row = kb.start_row(0.0);
            row.add_key("A", "KeyA", None, None);
            row.add_key("B", "KeyB", Some(0.0), None);
            row.add_key("C", "KeyC", Some(-5.0), None);
        }

        for id in ["KeyA", "KeyB", "KeyC"] {
            assert_eq!(
                kb.key(id).unwrap().size().width,
                app_settings::DEFAULT_KEY_WIDTH,
                "{} should use the default width",
                id
            );
        }
        assert_eq!(kb.key("KeyC").unwrap().position().x, 90.0);
    }

    #[test]
    fn test_height_override_on_returned_key() {
        let mut kb = Keyboard::default();
        kb.start_row(0.0)
            .key("+", "NumpadAdd")
            .set_height(80.0)
            .set_stack_order(2);

        let key = kb.key("NumpadAdd").unwrap();
        assert_eq!(key.size().height, 80.0);
        assert_eq!(key.stack_order(), Some(2));
        assert_eq!(kb.bounds().height, 100.0, "Tall key extends the bounds");
    }

    #[test]
    fn test_customize_key_rebuilds_index() {
        let mut kb = Keyboard::default();
        kb.start_row(0.0).key("Menu", "ContextMenu");

        kb.customize_key("ContextMenu", |key| {
            key.set_label("Fn").set_identifier("Fn");
        })
        .unwrap();

        assert!(kb.key("ContextMenu").is_none(), "Old identifier must be gone");
        assert_eq!(kb.key("Fn").unwrap().label(), "Fn");
    }

    #[test]
    fn test_customize_unknown_key_is_reported() {
        let mut kb = Keyboard::default();
        kb.start_row(0.0).key("Q", "KeyQ");

        let result = kb.customize_key("Missing", |key| {
            key.set_label("X");
        });

        assert_eq!(result, Err(LayoutError::unknown_key("Missing")));
        assert_eq!(kb.key("KeyQ").unwrap().label(), "Q", "Keyboard is unchanged");
    }

    #[test]
    fn test_duplicate_identifier_keeps_first() {
        let mut kb = Keyboard::default();
        {
            let mut row = kb.start_row(0.0);
            row.key("1", "Digit1");
            row.key("!", "Digit1");
        }

        assert_eq!(kb.duplicate_identifiers(), vec!["Digit1"]);
        assert_eq!(kb.key("Digit1").unwrap().label(), "1");
        assert_eq!(kb.len(), 2, "Duplicate is still placed");
    }

    #[test]
    fn test_bounds_of_empty_keyboard() {
        let kb = Keyboard::default();
        assert!(kb.is_empty());
        let bounds = kb.bounds();
        assert_eq!(bounds.width, 10.0);
        assert_eq!(bounds.height, 20.0);
    }
}
