// SPDX-License-Identifier: GPL-3.0-only

//! KeyTester command-line driver
//!
//! Reads key events from stdin, one command per line (see `keytester::input`),
//! and paints the keyboard to stdout after each change. Logs go to stderr.

use futures::channel::mpsc;
use tokio::io::BufReader;

use keytester::app::KeyTester;
use keytester::app_settings;
use keytester::catalog;
use keytester::config::Config;
use keytester::driver;
use keytester::input::Command;
use keytester::tracker::TextRenderer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("keytester=info".parse()?),
        )
        .init();

    let config = load_config();

    let mut tester = KeyTester::new(TextRenderer::new());
    if let Err(e) = tester.select_model(&config.default_model) {
        tracing::warn!("{}", e);
        tester.select_model(catalog::DEFAULT_MODEL)?;
    }
    print!("{}", tester.sink().output());

    // All commands funnel through one channel so each event is applied to a
    // fully built keyboard, in arrival order.
    let (tx, rx) = mpsc::channel::<Command>(app_settings::COMMAND_CHANNEL_CAPACITY);
    tokio::spawn(driver::read_commands(BufReader::new(tokio::io::stdin()), tx));

    driver::run(&mut tester, &config, rx, &mut std::io::stdout()).await?;

    // After `quit` the stdin read is still parked on a blocking thread, which
    // runtime shutdown would wait for.
    std::process::exit(0)
}

/// Reads the file named by the config environment variable, if any.
fn load_config() -> Config {
    let Ok(path) = std::env::var(app_settings::CONFIG_ENV_VAR) else {
        return Config::default();
    };
    match Config::load(&path) {
        Ok(config) => {
            tracing::info!("Loaded configuration from {}", path);
            config
        }
        Err(e) => {
            tracing::warn!("Using default configuration: {}", e);
            Config::default()
        }
    }
}
