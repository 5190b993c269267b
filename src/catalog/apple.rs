// SPDX-License-Identifier: GPL-3.0-only

//! Apple extended keyboard with a full numeric pad.

use crate::catalog::blocks::{self, CLUSTER_GAP, CLUSTER_WIDTH};
use crate::catalog::windows::numpad_digits;
use crate::layout::Keyboard;

pub fn apple_full() -> Keyboard {
    let mut kb = Keyboard::default();

    {
        let mut row = kb.start_row(0.0);
        row.key("esc", "Escape");
        row.add_gap(40.0);
        blocks::function_keys(&mut row, 20.0);
        row.add_gap(CLUSTER_GAP);
        for n in 13..=19 {
            if n == 16 {
                row.add_gap(CLUSTER_GAP);
            }
            let name = format!("F{}", n);
            row.key(&name, &name);
        }
    }

    {
        let mut row = kb.start_row(20.0);
        blocks::number_row(&mut row, "delete");
        row.add_gap(CLUSTER_GAP);
        row.key("fn", "Fn");
        row.key("home", "Home");
        row.key("page up", "PageUp");
        row.add_gap(CLUSTER_GAP);
        row.key("clear", "NumLock");
        row.key("=", "NumpadEqual");
        row.key("/", "NumpadDivide");
        row.key("*", "NumpadMultiply");
    }

    {
        let mut row = kb.start_row(0.0);
        blocks::top_letter_row(&mut row, "tab");
        row.add_key("\\", "Backslash", Some(60.0), Some("|"));
        row.add_gap(CLUSTER_GAP);
        row.key("⌦", "Delete");
        row.key("end", "End");
        row.key("page down", "PageDown");
        row.add_gap(CLUSTER_GAP);
        numpad_digits(&mut row, ["7", "8", "9"]);
        row.key("-", "NumpadSubtract");
    }

    {
        let mut row = kb.start_row(0.0);
        blocks::home_letter_row(&mut row, "caps lock");
        row.wide_key("return", "Enter", 90.0);
        row.add_gap(CLUSTER_GAP + CLUSTER_WIDTH + CLUSTER_GAP);
        numpad_digits(&mut row, ["4", "5", "6"]);
        row.key("+", "NumpadAdd");
    }

    {
        let mut row = kb.start_row(0.0);
        blocks::shift_letter_row(&mut row, "shift");
        row.add_gap(CLUSTER_GAP + 40.0);
        row.key("↑", "ArrowUp");
        row.add_gap(40.0 + CLUSTER_GAP);
        numpad_digits(&mut row, ["1", "2", "3"]);
        row.key("enter", "NumpadEnter").set_height(80.0);
    }

    {
        let mut row = kb.start_row(0.0);
        row.wide_key("control", "ControlLeft", 50.0);
        row.wide_key("option", "AltLeft", 50.0);
        row.wide_key("command", "MetaLeft", 60.0);
        row.wide_key("", "Space", 280.0);
        row.wide_key("command", "MetaRight", 60.0);
        row.wide_key("option", "AltRight", 50.0);
        row.wide_key("control", "ControlRight", 50.0);
        row.add_gap(CLUSTER_GAP);
        row.key("←", "ArrowLeft");
        row.key("↓", "ArrowDown");
        row.key("→", "ArrowRight");
        row.add_gap(CLUSTER_GAP);
        row.wide_key("0", "Numpad0", 80.0);
        row.key(".", "NumpadDecimal");
    }

    kb
}
