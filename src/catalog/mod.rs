// SPDX-License-Identifier: GPL-3.0-only

//! Catalog of selectable keyboard models.
//!
//! Each entry pairs a stable id and a display name with a factory that builds
//! a fresh [`Keyboard`]. The catalog is static and read-only.

mod apple;
mod blocks;
mod laptop;
mod windows;

pub use apple::apple_full;
pub use laptop::{laptop_compact, laptop_fn};
pub use windows::{windows_full, windows_tkl};

use crate::layout::Keyboard;

/// One selectable layout.
#[derive(Debug, Clone, Copy)]
pub struct KeyboardModel {
    /// Stable identifier used by `select_model`
    pub id: &'static str,
    /// Human-readable name for selection controls
    pub name: &'static str,
    /// Builds a fresh keyboard with every key `NeverPressed`
    pub factory: fn() -> Keyboard,
}

/// Model selected when nothing else is configured.
pub const DEFAULT_MODEL: &str = "windows-full";

static MODELS: &[KeyboardModel] = &[
    KeyboardModel {
        id: "windows-full",
        name: "Windows (full size)",
        factory: windows_full,
    },
    KeyboardModel {
        id: "windows-tkl",
        name: "Windows (tenkeyless)",
        factory: windows_tkl,
    },
    KeyboardModel {
        id: "apple-full",
        name: "Apple extended",
        factory: apple_full,
    },
    KeyboardModel {
        id: "laptop-compact",
        name: "Compact laptop",
        factory: laptop_compact,
    },
    KeyboardModel {
        id: "laptop-fn",
        name: "Compact laptop with Fn key",
        factory: laptop_fn,
    },
];

/// All models in display order.
pub fn models() -> &'static [KeyboardModel] {
    MODELS
}

pub fn find(id: &str) -> Option<&'static KeyboardModel> {
    MODELS.iter().find(|model| model.id == id)
}
