// SPDX-License-Identifier: GPL-3.0-only

//! KeyTester - a visual keyboard tester
//!
//! Draws a keyboard model and highlights keys as they are pressed on a
//! physical keyboard, so every key can be checked for registering input.
//!
//! # Architecture
//!
//! 1. **Layout builder** (`layout`): turns row-by-row "add key / add gap"
//!    calls into absolute key geometry.
//!
//! 2. **Key-state tracker** (`tracker`): maps physical key codes to keys and
//!    moves each key through never pressed, down and pressed.
//!
//! The `app` module ties both together behind a small facade driven by
//! `Message`s; a render sink is told about every change.
//!
//! # Modules
//!
//! - `app`: Tester facade and message dispatch
//! - `app_settings`: Centralized constants
//! - `catalog`: Static catalog of selectable keyboard models
//! - `config`: JSON configuration for the command-line driver
//! - `driver`: Async command loop behind the command-line driver
//! - `input`: Line protocol parsing for raw key events
//! - `layout`: Layout builder and key records
//! - `tracker`: Key-state tracker and render sinks

pub mod app;
pub mod app_settings;
pub mod catalog;
pub mod config;
pub mod driver;
pub mod input;
pub mod layout;
pub mod tracker;

// ============================================================================
// Integration Tests
// ============================================================================
