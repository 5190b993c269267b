// SPDX-License-Identifier: GPL-3.0-only

//! Compact laptop keyboards.
//!
//! Laptops use a half-height function row, a tall Enter key overlapping the
//! backslash key, and an inverted-T arrow cluster squeezed into a single row.

use crate::catalog::blocks;
use crate::layout::{derive_layout, KeyOverride, Keyboard};

/// Height of the half-height function row and arrow keys.
const HALF_HEIGHT: f32 = 20.0;

/// Laptop keyboard whose Fn key reports as a context-menu key.
pub fn laptop_compact() -> Keyboard {
    let mut kb = Keyboard::default();

    {
        let mut row = kb.start_row(0.0);
        row.key("Esc", "Escape").set_height(HALF_HEIGHT);
        for n in 1..=12 {
            let name = format!("F{}", n);
            row.key(&name, &name).set_height(HALF_HEIGHT);
        }
        row.key("Del", "Delete").set_height(HALF_HEIGHT);
    }

    {
        let mut row = kb.start_row(0.0);
        blocks::number_row(&mut row, "Backspace");
    }

    {
        let mut row = kb.start_row(0.0);
        blocks::top_letter_row(&mut row, "Tab");
        row.wide_key("Enter", "Enter", 60.0)
            .set_height(80.0)
            .set_stack_order(1);
    }

    {
        let mut row = kb.start_row(0.0);
        blocks::home_letter_row(&mut row, "Caps");
        // Extends under the tall Enter key; only its left part stays visible.
        row.add_key("\\", "Backslash", Some(90.0), Some("|"))
            .set_stack_order(-1);
    }

    {
        let mut row = kb.start_row(0.0);
        blocks::shift_letter_row(&mut row, "Shift");
    }

    {
        let mut row = kb.start_row(0.0);
        row.key("Ctrl", "ControlLeft");
        row.key("Win", "MetaLeft");
        row.key("Alt", "AltLeft");
        row.wide_key("", "Space", 200.0);
        row.key("Alt", "AltRight");
        row.key("Menu", "ContextMenu");
        row.key("Ctrl", "ControlRight");
        row.key("←", "ArrowLeft")
            .set_height(HALF_HEIGHT)
            .offset(0.0, HALF_HEIGHT);
        row.key("↑", "ArrowUp").set_height(HALF_HEIGHT);
        row.key("→", "ArrowRight")
            .set_height(HALF_HEIGHT)
            .offset(0.0, HALF_HEIGHT);
        // Sits beneath ArrowUp rather than after ArrowRight.
        row.key("↓", "ArrowDown")
            .set_height(HALF_HEIGHT)
            .offset(-80.0, HALF_HEIGHT);
    }

    kb
}

/// Same laptop whose firmware reports the Fn key instead of a context menu key.
pub fn laptop_fn() -> Keyboard {
    let (kb, skipped) = derive_layout(
        laptop_compact,
        &[KeyOverride::replace("ContextMenu", "Fn", "Fn")],
    );
    if !skipped.is_empty() {
        tracing::error!("Laptop Fn layout built with {} missing override(s)", skipped.len());
    }
    kb
}
