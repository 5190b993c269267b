// SPDX-License-Identifier: GPL-3.0-only

//! Centralized application settings and constants.

/// Application ID in RDNN (reverse domain name notation) format.
pub const APP_ID: &str = "io.github.keytester.KeyTester";

/// Environment variable naming an optional JSON configuration file.
pub const CONFIG_ENV_VAR: &str = "KEYTESTER_CONFIG";

/// Default key width in layout units.
pub const DEFAULT_KEY_WIDTH: f32 = 40.0;

/// Default key height in layout units.
pub const DEFAULT_KEY_HEIGHT: f32 = 40.0;

/// Left margin before the first key of every row.
pub const MARGIN_LEFT: f32 = 10.0;

/// Top margin above the first row.
pub const MARGIN_TOP: f32 = 10.0;

/// Keys at or below this height are painted as label-only strips.
pub const SHORT_KEY_HEIGHT: f32 = 10.0;

/// Layout units covered by one column of the text renderer.
pub const TEXT_UNITS_PER_COLUMN: f32 = 5.0;

/// Layout units covered by one line of the text renderer.
pub const TEXT_UNITS_PER_LINE: f32 = 10.0;

/// Capacity of the command channel between the stdin reader and the tester.
pub const COMMAND_CHANNEL_CAPACITY: usize = 64;
