// SPDX-License-Identifier: GPL-3.0-only

//! Row fragments shared by the ANSI-style layouts.
//!
//! Every fragment spans 600 layout units so the clusters to its right line up
//! across rows.

use crate::layout::Row;

/// Width of the alphanumeric block.
pub const TYPING_WIDTH: f32 = 600.0;

/// Gap between the alphanumeric block, navigation cluster and numeric pad.
pub const CLUSTER_GAP: f32 = 10.0;

/// Width of a three-key cluster (navigation block, arrows).
pub const CLUSTER_WIDTH: f32 = 120.0;

const DIGITS: [(&str, &str, &str); 10] = [
    ("1", "!", "Digit1"),
    ("2", "@", "Digit2"),
    ("3", "#", "Digit3"),
    ("4", "$", "Digit4"),
    ("5", "%", "Digit5"),
    ("6", "^", "Digit6"),
    ("7", "&", "Digit7"),
    ("8", "*", "Digit8"),
    ("9", "(", "Digit9"),
    ("0", ")", "Digit0"),
];

fn letters(row: &mut Row<'_>, chars: &str) {
    for ch in chars.chars() {
        let label = ch.to_string();
        row.key(&label, &format!("Key{}", ch));
    }
}

/// `~ 1 2 ... 0 - =` and a double-width backspace.
pub fn number_row(row: &mut Row<'_>, backspace: &str) {
    row.shifted_key("`", "~", "Backquote");
    for (label, shift, id) in DIGITS {
        row.shifted_key(label, shift, id);
    }
    row.shifted_key("-", "_", "Minus");
    row.shifted_key("=", "+", "Equal");
    row.wide_key(backspace, "Backspace", 80.0);
}

/// Tab through the closing bracket. The caller finishes the row with the
/// backslash or an Enter key.
pub fn top_letter_row(row: &mut Row<'_>, tab: &str) {
    row.wide_key(tab, "Tab", 60.0);
    letters(row, "QWERTYUIOP");
    row.shifted_key("[", "{", "BracketLeft");
    row.shifted_key("]", "}", "BracketRight");
}

/// Caps lock through the quote key. The caller adds the row's last key.
pub fn home_letter_row(row: &mut Row<'_>, caps: &str) {
    row.wide_key(caps, "CapsLock", 70.0);
    letters(row, "ASDFGHJKL");
    row.shifted_key(";", ":", "Semicolon");
    row.shifted_key("'", "\"", "Quote");
}

/// Both shift keys and everything between them.
pub fn shift_letter_row(row: &mut Row<'_>, shift: &str) {
    row.wide_key(shift, "ShiftLeft", 90.0);
    letters(row, "ZXCVBNM");
    row.shifted_key(",", "<", "Comma");
    row.shifted_key(".", ">", "Period");
    row.shifted_key("/", "?", "Slash");
    row.wide_key(shift, "ShiftRight", 110.0);
}

/// Twelve function keys in groups of four, after `Escape`.
pub fn function_keys(row: &mut Row<'_>, group_gap: f32) {
    for group in 0..3 {
        if group > 0 {
            row.add_gap(group_gap);
        }
        for n in 1..=4 {
            let name = format!("F{}", group * 4 + n);
            row.key(&name, &name);
        }
    }
}
