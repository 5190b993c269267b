// SPDX-License-Identifier: GPL-3.0-only

//! Command loop for the command-line driver.
//!
//! Lines are parsed by [`read_commands`] and sent through a bounded
//! `futures` channel to [`run`], the single consumer, which applies each
//! command to the tester in arrival order and writes paints, JSON snapshots
//! and summaries to its output.

use futures::channel::mpsc;
use futures::{SinkExt, StreamExt};
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::app::KeyTester;
use crate::config::Config;
use crate::input::{parse_command, Command};
use crate::layout::KeyState;
use crate::tracker::TextRenderer;

/// Parses lines from `reader` and forwards every command to `tx`.
///
/// Blank lines and comments are skipped; malformed lines are logged. Returns
/// at end of input, on a read error, or once the receiver is gone.
pub async fn read_commands<R>(reader: R, mut tx: mpsc::Sender<Command>)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::error!("Failed to read input: {}", e);
                break;
            }
        };
        match parse_command(&line) {
            Ok(Some(command)) => {
                if tx.send(command).await.is_err() {
                    tracing::debug!("Command receiver closed, stopping reader");
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("{}", e),
        }
    }
}

/// Applies commands until `quit` or until every sender is dropped.
pub async fn run<W: Write>(
    tester: &mut KeyTester<TextRenderer>,
    config: &Config,
    mut rx: mpsc::Receiver<Command>,
    out: &mut W,
) -> io::Result<()> {
    while let Some(command) = rx.next().await {
        match command {
            Command::Tester(message) => {
                if let Err(e) = tester.update(message) {
                    tracing::warn!("{}", e);
                    continue;
                }
                if config.render_after_event {
                    write!(out, "{}", tester.sink().output())?;
                }
            }
            Command::Press(code) => {
                tester.dispatch_key_down(&code);
                tester.dispatch_key_up(&code);
                if config.render_after_event {
                    write!(out, "{}", tester.sink().output())?;
                }
            }
            Command::Models => {
                for (id, name) in tester.list_models() {
                    writeln!(out, "{:<16} {}", id, name)?;
                }
            }
            Command::States => {
                serde_json::to_writer_pretty(&mut *out, &tester.key_states())?;
                writeln!(out)?;
            }
            Command::Show => write!(out, "{}", tester.sink().output())?,
            Command::Summary => write_summary(tester, out)?,
            Command::Quit => break,
        }
    }

    if config.print_summary_on_exit {
        write_summary(tester, out)?;
    }
    out.flush()
}

/// One line with the registered count, then the untested identifiers.
pub fn write_summary<W: Write>(tester: &KeyTester<TextRenderer>, out: &mut W) -> io::Result<()> {
    let states = tester.key_states();
    writeln!(
        out,
        "{}: {} of {} keys registered",
        tester.model_id().unwrap_or("no model"),
        states.count(KeyState::Pressed) + states.count(KeyState::Down),
        states.len()
    )?;
    let untested = states.untested();
    if !untested.is_empty() {
        writeln!(out, "untested: {}", untested.join(" "))?;
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
