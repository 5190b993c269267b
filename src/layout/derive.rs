// SPDX-License-Identifier: GPL-3.0-only

//! Derived layouts.
//!
//! A derived layout is built by running an existing layout factory and then
//! relabeling a few of its keys in place. This avoids repeating the whole row
//! sequence for near-duplicate keyboards.

use crate::layout::builder::Keyboard;
use crate::layout::types::{Key, LayoutError};

/// A single relabeling applied on top of a base layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyOverride {
    /// Identifier of the key in the base layout
    pub identifier: &'static str,
    /// Replacement primary label
    pub label: Option<&'static str>,
    /// Replacement shifted label
    pub shift_label: Option<&'static str>,
    /// Replacement physical key code
    pub new_identifier: Option<&'static str>,
}

impl KeyOverride {
    /// Relabels a key and gives it a new physical code.
    pub const fn replace(
        identifier: &'static str,
        label: &'static str,
        new_identifier: &'static str,
    ) -> Self {
        Self {
            identifier,
            label: Some(label),
            shift_label: None,
            new_identifier: Some(new_identifier),
        }
    }

    /// Changes only the printed labels of a key.
    pub const fn relabel(
        identifier: &'static str,
        label: &'static str,
        shift_label: Option<&'static str>,
    ) -> Self {
        Self {
            identifier,
            label: Some(label),
            shift_label,
            new_identifier: None,
        }
    }

    fn apply(&self, key: &mut Key) {
        if let Some(label) = self.label {
            key.set_label(label);
        }
        if let Some(shift_label) = self.shift_label {
            key.set_shift_label(shift_label);
        }
        if let Some(identifier) = self.new_identifier {
            key.set_identifier(identifier);
        }
    }
}

/// Builds `base` and applies `overrides` in order.
///
/// Overrides naming a key the base layout does not have are logged and
/// skipped; the resulting keyboard simply lacks that customization. The
/// skipped overrides are returned so callers and tests can inspect them.
pub fn derive_layout(
    base: fn() -> Keyboard,
    overrides: &[KeyOverride],
) -> (Keyboard, Vec<LayoutError>) {
    let mut keyboard = base();
    let mut errors = Vec::new();

    for key_override in overrides {
        if let Err(e) = keyboard.customize_key(key_override.identifier, |key| key_override.apply(key)) {
            tracing::error!("Derived layout override skipped: {}", e);
            errors.push(e);
        }
    }

    (keyboard, errors)
}

// ============================================================================
// Tests
// ============================================================================
