// SPDX-License-Identifier: GPL-3.0-only

//! Extra keys preview
//!
//! Prints the packed panel as text, collapsed and then expanded.
//!
//! Usage: `eks-preview [KEYS_FILE]`. Without an argument the default user
//! key file from the configuration directory is used.

use clap::Parser;
use extra_keys::config::{DefaultLocator, FixedLocator};
use extra_keys::panel::{ExtraKeysPanel, PanelOptions};
use extra_keys::renderer::TextSink;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "eks-preview")]
#[command(about = "Print the extra keys panel as text, collapsed then expanded", long_about = None)]
#[command(version)]
struct Cli {
    /// User key file (JSON); defaults to eks/default.json in the config directory
    keys_file: Option<PathBuf>,
}

impl Cli {
    fn panel_options(self) -> PanelOptions {
        match self.keys_file {
            Some(path) => PanelOptions::default().with_locator(FixedLocator(path)),
            None => PanelOptions::default().with_locator(DefaultLocator),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging, stdout is reserved for the panel
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("extra_keys=info")),
        )
        .init();

    let mut panel =
        ExtraKeysPanel::with_options(cli.panel_options(), TextSink::new(std::io::stdout()));

    tracing::info!(
        "Panel has {} key(s) in {} row(s)",
        panel.registry().len(),
        panel.rows().len()
    );

    if !panel.toggle_expanded() {
        tracing::info!("Nothing beyond the compact rows to expand");
    }
}
