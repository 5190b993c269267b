// SPDX-License-Identifier: GPL-3.0-only

//! Render sinks for keyboard state.
//!
//! A sink paints a key or a whole keyboard. It only ever sees shared
//! references, so painting cannot change key state.
//!
//! [`TextRenderer`] paints into a character grid:
//!
//! ```text
//! +------++------+
//! |Q     ||W     |
//! |######||......|
//! +------++------+
//! ```
//!
//! The interior glyph shows the key's state: blank for never pressed, `#`
//! while held and `.` once pressed.

use crate::app_settings;
use crate::layout::{Key, KeyState, Keyboard};

/// Receives paint requests from the tester.
pub trait RenderSink {
    /// Repaints one key of `keyboard` after its state changed.
    fn render_key(&mut self, keyboard: &Keyboard, key: &Key);

    /// Repaints every key of a keyboard.
    fn render_keyboard(&mut self, keyboard: &Keyboard);
}

/// A sink that paints nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl RenderSink for NullRenderer {
    fn render_key(&mut self, _keyboard: &Keyboard, _key: &Key) {}

    fn render_keyboard(&mut self, _keyboard: &Keyboard) {}
}

/// Character-grid painter.
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    grid: Vec<Vec<char>>,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the painted grid with trailing blanks trimmed from each line.
    pub fn output(&self) -> String {
        let mut out = String::new();
        for line in &self.grid {
            let text: String = line.iter().collect();
            out.push_str(text.trim_end());
            out.push('\n');
        }
        out
    }

    /// Character at `(column, line)`, if inside the grid.
    pub fn cell(&self, column: usize, line: usize) -> Option<char> {
        self.grid.get(line).and_then(|l| l.get(column)).copied()
    }

    fn paint(&mut self, key: &Key, clip: Option<CellRect>) {
        let rect = cell_rect(key);
        if rect.is_empty() {
            return;
        }
        self.ensure(rect.col + rect.cols, rect.line + rect.lines);

        if key.is_short() || rect.lines < 3 || rect.cols < 3 {
            self.paint_strip(key, rect, clip);
            return;
        }

        let fill = state_glyph(key.state());
        let right = rect.col + rect.cols - 1;
        let bottom = rect.line + rect.lines - 1;
        for y in rect.line..=bottom {
            for x in rect.col..=right {
                let ch = match (y == rect.line || y == bottom, x == rect.col || x == right) {
                    (true, true) => '+',
                    (true, false) => '-',
                    (false, true) => '|',
                    (false, false) => fill,
                };
                self.put(clip, x, y, ch);
            }
        }

        let inner = rect.cols - 2;
        self.write_text(clip, rect.col + 1, rect.line + 1, key.label(), inner);
        if !key.shift_label().is_empty() && rect.lines > 3 {
            self.write_text(clip, rect.col + 1, rect.line + 2, key.shift_label(), inner);
        }
    }

    /// Short keys get their label on a single bracketed strip.
    fn paint_strip(&mut self, key: &Key, rect: CellRect, clip: Option<CellRect>) {
        let fill = state_glyph(key.state());
        for y in rect.line..rect.line + rect.lines {
            for x in rect.col..rect.col + rect.cols {
                self.put(clip, x, y, fill);
            }
        }
        self.put(clip, rect.col, rect.line, '[');
        self.put(clip, rect.col + rect.cols - 1, rect.line, ']');
        if rect.cols > 2 {
            self.write_text(clip, rect.col + 1, rect.line, key.label(), rect.cols - 2);
        }
    }

    fn write_text(&mut self, clip: Option<CellRect>, col: usize, line: usize, text: &str, max: usize) {
        for (i, ch) in text.chars().take(max).enumerate() {
            self.put(clip, col + i, line, ch);
        }
    }

    fn put(&mut self, clip: Option<CellRect>, col: usize, line: usize, ch: char) {
        if clip.is_none_or(|c| c.contains(col, line)) {
            self.grid[line][col] = ch;
        }
    }

    fn ensure(&mut self, columns: usize, lines: usize) {
        if self.grid.len() < lines {
            self.grid.resize(lines, Vec::new());
        }
        for line in &mut self.grid {
            if line.len() < columns {
                line.resize(columns, ' ');
            }
        }
    }
}

impl RenderSink for TextRenderer {
    /// Repaints the cells `key` covers, together with every key overlapping
    /// them, so stacking matches a full repaint.
    fn render_key(&mut self, keyboard: &Keyboard, key: &Key) {
        let target = cell_rect(key);
        for other in paint_order(keyboard) {
            if cell_rect(other).overlaps(&target) {
                self.paint(other, Some(target));
            }
        }
    }

    fn render_keyboard(&mut self, keyboard: &Keyboard) {
        self.grid.clear();
        for key in paint_order(keyboard) {
            self.paint(key, None);
        }
    }
}

/// Keys sorted by ascending stack order, placement order breaking ties.
pub fn paint_order(keyboard: &Keyboard) -> Vec<&Key> {
    let mut keys: Vec<(usize, &Key)> = keyboard.keys().iter().enumerate().collect();
    keys.sort_by_key(|(i, key)| (key.stack_order().unwrap_or(0), *i));
    keys.into_iter().map(|(_, key)| key).collect()
}

fn state_glyph(state: KeyState) -> char {
    match state {
        KeyState::NeverPressed => ' ',
        KeyState::Down => '#',
        KeyState::Pressed => '.',
    }
}

/// A key's footprint in grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellRect {
    col: usize,
    line: usize,
    cols: usize,
    lines: usize,
}

impl CellRect {
    fn is_empty(&self) -> bool {
        self.cols == 0 || self.lines == 0
    }

    fn contains(&self, col: usize, line: usize) -> bool {
        (self.col..self.col + self.cols).contains(&col)
            && (self.line..self.line + self.lines).contains(&line)
    }

    fn overlaps(&self, other: &CellRect) -> bool {
        self.col < other.col + other.cols
            && other.col < self.col + self.cols
            && self.line < other.line + other.lines
            && other.line < self.line + self.lines
    }
}

fn cell_rect(key: &Key) -> CellRect {
    let pos = key.position();
    let size = key.size();
    let to_cells = |v: f32, unit: f32| (v / unit).round().max(0.0) as usize;

    let col = to_cells(pos.x, app_settings::TEXT_UNITS_PER_COLUMN);
    let line = to_cells(pos.y, app_settings::TEXT_UNITS_PER_LINE);
    let right = to_cells(pos.x + size.width, app_settings::TEXT_UNITS_PER_COLUMN);
    let bottom = to_cells(pos.y + size.height, app_settings::TEXT_UNITS_PER_LINE);
    CellRect {
        col,
        line,
        cols: right.saturating_sub(col),
        lines: bottom.saturating_sub(line).max(1),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::KeyTracker;

    fn two_keys() -> Keyboard {
        let mut kb = Keyboard::default();
        {
            let mut row = kb.start_row(0.0);
            row.shifted_key("1", "!", "Digit1");
            row.key("Q", "KeyQ");
        }
        kb
    }

    #[test]
    fn test_renders_borders_and_labels() {
        let mut r = TextRenderer::new();
        r.render_keyboard(&two_keys());

        // Digit1 at x=10,y=10 -> column 2, line 1, 8 columns by 4 lines
        assert_eq!(r.cell(2, 1), Some('+'));
        assert_eq!(r.cell(9, 1), Some('+'));
        assert_eq!(r.cell(3, 2), Some('1'));
        assert_eq!(r.cell(3, 3), Some('!'), "Shift label on the second line");
        assert_eq!(r.cell(11, 2), Some('Q'));
    }

    #[test]
    fn test_render_key_reflects_state() {
        let mut t = KeyTracker::new(two_keys());
        let mut r = TextRenderer::new();
        r.render_keyboard(t.keyboard());
        assert_eq!(r.cell(12, 3), Some(' '));

        t.key_down("KeyQ");
        r.render_key(t.keyboard(), t.keyboard().key("KeyQ").unwrap());
        assert_eq!(r.cell(12, 3), Some('#'));

        t.key_up("KeyQ");
        r.render_key(t.keyboard(), t.keyboard().key("KeyQ").unwrap());
        assert_eq!(r.cell(12, 3), Some('.'));
    }

    #[test]
    fn test_short_key_paints_label_strip() {
        let mut kb = Keyboard::default();
        kb.start_row(0.0).key("Esc", "Escape").set_height(10.0);

        let mut r = TextRenderer::new();
        r.render_keyboard(&kb);
        let out = r.output();
        assert!(out.contains("[Esc"), "Short key should be a strip: {:?}", out);
        assert!(!out.contains('+'), "Short key has no border");
    }

    #[test]
    fn test_low_stack_order_paints_first() {
        let mut kb = Keyboard::default();
        {
            let mut row = kb.start_row(0.0);
            row.key("+", "NumpadAdd").set_height(80.0);
        }
        {
            let mut row = kb.start_row(0.0);
            row.key("under", "Hidden").set_stack_order(-1);
        }

        let order: Vec<&str> = paint_order(&kb).into_iter().map(|k| k.identifier()).collect();
        assert_eq!(order, vec!["Hidden", "NumpadAdd"]);

        let mut r = TextRenderer::new();
        r.render_keyboard(&kb);
        assert!(!r.output().contains("under"), "Tall key paints over the hidden one");
    }

    #[test]
    fn test_null_renderer_accepts_everything() {
        let kb = two_keys();
        let mut r = NullRenderer;
        r.render_keyboard(&kb);
        r.render_key(&kb, &kb.keys()[0]);
    }

    #[test]
    fn test_render_key_keeps_taller_neighbour_on_top() {
        let mut t = KeyTracker::new(crate::catalog::laptop_compact());
        let mut r = TextRenderer::new();
        r.render_keyboard(t.keyboard());

        // Enter's interior, above the hidden part of Backslash
        assert_eq!(r.cell(115, 14), Some(' '));

        t.key_down("Backslash");
        r.render_key(t.keyboard(), t.keyboard().key("Backslash").unwrap());
        assert_eq!(r.cell(115, 14), Some(' '), "Enter stays painted over Backslash");
        assert_eq!(r.cell(106, 15), Some('#'), "Visible part of Backslash shows it held");

        let mut full = TextRenderer::new();
        full.render_keyboard(t.keyboard());
        assert_eq!(r.output(), full.output(), "Single-key repaint matches a full repaint");
    }

    #[test]
    fn test_cell_rect_overlap() {
        let a = CellRect { col: 0, line: 0, cols: 4, lines: 2 };
        let b = CellRect { col: 3, line: 1, cols: 4, lines: 2 };
        let c = CellRect { col: 4, line: 0, cols: 2, lines: 2 };
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c), "Touching edges do not overlap");
        assert!(a.contains(3, 1));
        assert!(!a.contains(4, 1));
    }
}
