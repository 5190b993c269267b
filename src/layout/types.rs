// SPDX-License-Identifier: GPL-3.0-only

//! Core data types for keyboard layouts.
//!
//! This module defines the key record, its geometry, the three display states
//! a key can be in, and the error type used while authoring layouts.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::app_settings;

// ============================================================================
// Error Handling Types
// ============================================================================

/// Error type for layout construction.
///
/// Layout errors are configuration mistakes made while authoring a layout.
/// They are reported but never abort construction of a keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A derived layout referenced a key identifier the base layout lacks
    UnknownKey {
        /// The identifier that could not be found
        identifier: String,
        /// Optional suggestion for fixing the layout definition
        suggestion: Option<String>,
    },
}

impl LayoutError {
    /// Creates an unknown key error.
    pub fn unknown_key(identifier: impl Into<String>) -> Self {
        Self::UnknownKey {
            identifier: identifier.into(),
            suggestion: Some("Check the identifier against the base layout's key codes".into()),
        }
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::UnknownKey {
                identifier,
                suggestion,
            } => {
                write!(f, "No key with identifier '{}' in layout", identifier)?;
                if let Some(hint) = suggestion {
                    write!(f, "\n  Suggestion: {}", hint)?;
                }
            }
        }
        Ok(())
    }
}

impl std::error::Error for LayoutError {}

// ============================================================================
// Key State
// ============================================================================

/// Display state of a key under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyState {
    /// The key has not registered since the last clear
    #[default]
    NeverPressed,
    /// The key is currently held down
    Down,
    /// The key has been released at least once
    Pressed,
}

impl fmt::Display for KeyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyState::NeverPressed => "never pressed",
            KeyState::Down => "down",
            KeyState::Pressed => "pressed",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// Width and height in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// Absolute top-left corner in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

// ============================================================================
// Key
// ============================================================================

/// One physical key's test record.
///
/// Geometry and labels are fixed once the owning keyboard is built. The only
/// field that changes afterwards is `state`, and only the tracker changes it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Key {
    label: String,
    shift_label: String,
    identifier: String,
    size: Size,
    position: Position,
    #[serde(skip_serializing_if = "Option::is_none")]
    stack_order: Option<i32>,
    state: KeyState,
}

impl Key {
    pub(crate) fn new(
        label: impl Into<String>,
        shift_label: Option<&str>,
        identifier: impl Into<String>,
        size: Size,
        position: Position,
    ) -> Self {
        Self {
            label: label.into(),
            shift_label: shift_label.unwrap_or_default().to_string(),
            identifier: identifier.into(),
            size,
            position,
            stack_order: None,
            state: KeyState::NeverPressed,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn shift_label(&self) -> &str {
        &self.shift_label
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn stack_order(&self) -> Option<i32> {
        self.stack_order
    }

    pub fn state(&self) -> KeyState {
        self.state
    }

    /// Returns `true` if the key is short enough to be painted as a label strip.
    pub fn is_short(&self) -> bool {
        self.size.height <= app_settings::SHORT_KEY_HEIGHT
    }

    /// Right edge of the key in layout units.
    pub fn right(&self) -> f32 {
        self.position.x + self.size.width
    }

    /// Bottom edge of the key in layout units.
    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.height
    }

    // ------------------------------------------------------------------------
    // Construction-time customization
    // ------------------------------------------------------------------------

    /// Overrides the key height (double-height Enter, numpad plus, ...).
    pub fn set_height(&mut self, height: f32) -> &mut Self {
        self.size.height = height;
        self
    }

    /// Overrides the key width without moving the row cursor.
    pub fn set_width(&mut self, width: f32) -> &mut Self {
        self.size.width = width;
        self
    }

    /// Shifts the key relative to where the row placed it.
    pub fn offset(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.position.x += dx;
        self.position.y += dy;
        self
    }

    /// Sets an explicit paint priority. Lower values are painted first.
    pub fn set_stack_order(&mut self, order: i32) -> &mut Self {
        self.stack_order = Some(order);
        self
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.label = label.into();
        self
    }

    pub fn set_shift_label(&mut self, shift_label: impl Into<String>) -> &mut Self {
        self.shift_label = shift_label.into();
        self
    }

    /// Changes the physical key code.
    ///
    /// The owning keyboard's index goes stale until it is rebuilt, which
    /// `Keyboard::customize_key` does automatically.
    pub fn set_identifier(&mut self, identifier: impl Into<String>) -> &mut Self {
        self.identifier = identifier.into();
        self
    }

    pub(crate) fn set_state(&mut self, state: KeyState) {
        self.state = state;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_key(height: f32) -> Key {
        Key::new(
            "Q",
            None,
            "KeyQ",
            Size {
                width: 40.0,
                height,
            },
            Position { x: 10.0, y: 20.0 },
        )
    }

    #[test]
    fn test_new_key_starts_never_pressed_with_blank_shift_label() {
        let key = sample_key(40.0);
        assert_eq!(key.state(), KeyState::NeverPressed);
        assert_eq!(key.shift_label(), "", "Shift label should default to blank");
        assert_eq!(key.stack_order(), None);
    }

    #[test]
    fn test_short_key_threshold_is_inclusive() {
        assert!(sample_key(10.0).is_short(), "Height equal to threshold is short");
        assert!(sample_key(5.0).is_short());
        assert!(!sample_key(10.5).is_short());
        assert!(!sample_key(40.0).is_short());
    }

    #[test]
    fn test_offset_and_edges() {
        let mut key = sample_key(20.0);
        key.offset(0.0, 20.0);
        assert_eq!(key.position(), Position { x: 10.0, y: 40.0 });
        assert_eq!(key.right(), 50.0);
        assert_eq!(key.bottom(), 60.0);
    }

    #[test]
    fn test_unknown_key_error_display() {
        let err = LayoutError::unknown_key("ContextMenu");
        let msg = err.to_string();
        assert!(msg.contains("'ContextMenu'"), "Message should name the key: {}", msg);
        assert!(msg.contains("Suggestion"), "Message should carry a suggestion");
    }

    #[test]
    fn test_key_state_serializes_snake_case() {
        let json = serde_json::to_string(&KeyState::NeverPressed).unwrap();
        assert_eq!(json, "\"never_pressed\"");
    }
}
