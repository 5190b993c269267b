// SPDX-License-Identifier: GPL-3.0-only

//! Generic Windows keyboards (ANSI, full size and tenkeyless).

use crate::catalog::blocks::{self, CLUSTER_GAP, CLUSTER_WIDTH};
use crate::layout::{Keyboard, Row};

/// Full-size 104-key keyboard.
pub fn windows_full() -> Keyboard {
    ansi(true)
}

/// Full-size keyboard without the numeric pad.
pub fn windows_tkl() -> Keyboard {
    ansi(false)
}

fn ansi(numpad: bool) -> Keyboard {
    let mut kb = Keyboard::default();

    {
        let mut row = kb.start_row(0.0);
        row.key("Esc", "Escape");
        row.add_gap(40.0);
        blocks::function_keys(&mut row, 20.0);
        row.add_gap(CLUSTER_GAP);
        row.key("PrtSc", "PrintScreen");
        row.key("ScrLk", "ScrollLock");
        row.key("Pause", "Pause");
    }

    {
        let mut row = kb.start_row(20.0);
        blocks::number_row(&mut row, "Backspace");
        nav_cluster(&mut row, [("Ins", "Insert"), ("Home", "Home"), ("PgUp", "PageUp")]);
        if numpad {
            row.add_gap(CLUSTER_GAP);
            row.key("Num", "NumLock");
            row.key("/", "NumpadDivide");
            row.key("*", "NumpadMultiply");
            row.key("-", "NumpadSubtract");
        }
    }

    {
        let mut row = kb.start_row(0.0);
        blocks::top_letter_row(&mut row, "Tab");
        row.add_key("\\", "Backslash", Some(60.0), Some("|"));
        nav_cluster(&mut row, [("Del", "Delete"), ("End", "End"), ("PgDn", "PageDown")]);
        if numpad {
            row.add_gap(CLUSTER_GAP);
            numpad_digits(&mut row, ["7", "8", "9"]);
            row.key("+", "NumpadAdd").set_height(80.0);
        }
    }

    {
        let mut row = kb.start_row(0.0);
        blocks::home_letter_row(&mut row, "Caps Lock");
        row.wide_key("Enter", "Enter", 90.0);
        if numpad {
            row.add_gap(CLUSTER_GAP + CLUSTER_WIDTH + CLUSTER_GAP);
            numpad_digits(&mut row, ["4", "5", "6"]);
        }
    }

    {
        let mut row = kb.start_row(0.0);
        blocks::shift_letter_row(&mut row, "Shift");
        row.add_gap(CLUSTER_GAP + 40.0);
        row.key("↑", "ArrowUp");
        row.add_gap(40.0);
        if numpad {
            row.add_gap(CLUSTER_GAP);
            numpad_digits(&mut row, ["1", "2", "3"]);
            row.key("Enter", "NumpadEnter").set_height(80.0);
        }
    }

    {
        let mut row = kb.start_row(0.0);
        row.wide_key("Ctrl", "ControlLeft", 50.0);
        row.wide_key("Win", "MetaLeft", 50.0);
        row.wide_key("Alt", "AltLeft", 50.0);
        row.wide_key("", "Space", 250.0);
        row.wide_key("Alt", "AltRight", 50.0);
        row.wide_key("Win", "MetaRight", 50.0);
        row.wide_key("Menu", "ContextMenu", 50.0);
        row.wide_key("Ctrl", "ControlRight", 50.0);
        row.add_gap(CLUSTER_GAP);
        row.key("←", "ArrowLeft");
        row.key("↓", "ArrowDown");
        row.key("→", "ArrowRight");
        if numpad {
            row.add_gap(CLUSTER_GAP);
            row.wide_key("0", "Numpad0", 80.0);
            row.key(".", "NumpadDecimal");
        }
    }

    kb
}

fn nav_cluster(row: &mut Row<'_>, keys: [(&str, &str); 3]) {
    row.add_gap(CLUSTER_GAP);
    for (label, id) in keys {
        row.key(label, id);
    }
}

pub(crate) fn numpad_digits(row: &mut Row<'_>, digits: [&str; 3]) {
    for digit in digits {
        row.key(digit, &format!("Numpad{}", digit));
    }
}
