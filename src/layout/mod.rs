// SPDX-License-Identifier: GPL-3.0-only

//! Keyboard layout builder.
//!
//! Layouts are described declaratively, one row at a time, and converted into
//! absolute key geometry in layout units.
//!
//! # Example Usage
//!
//! ```rust
//! use keytester::layout::Keyboard;
//!
//! let mut keyboard = Keyboard::default();
//! {
//!     let mut row = keyboard.start_row(0.0);
//!     row.key("Esc", "Escape");
//!     row.add_gap(40.0);
//!     row.key("F1", "F1");
//! }
//! {
//!     let mut row = keyboard.start_row(10.0);
//!     row.shifted_key("1", "!", "Digit1");
//!     row.wide_key("Enter", "Enter", 60.0).set_height(80.0);
//! }
//!
//! assert_eq!(keyboard.key("F1").unwrap().position().x, 90.0);
//! assert_eq!(keyboard.key("Enter").unwrap().size().height, 80.0);
//! ```
//!
//! # Derived Layouts
//!
//! Near-duplicate keyboards reuse an existing factory and relabel keys:
//!
//! ```rust,ignore
//! use keytester::layout::{derive_layout, KeyOverride};
//!
//! let (keyboard, skipped) = derive_layout(
//!     laptop_compact,
//!     &[KeyOverride::replace("ContextMenu", "Fn", "Fn")],
//! );
//! ```

// Sub-modules
pub mod builder;
pub mod derive;
pub mod types;

// Re-export public API
pub use builder::{Keyboard, LayoutSettings, Row};
pub use derive::{derive_layout, KeyOverride};
pub use types::{Key, KeyState, LayoutError, Position, Size};
