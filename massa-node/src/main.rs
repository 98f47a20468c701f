// Copyright (c) 2022 MASSA LABS <info@massa.net>
//! Massa node: opens the spent addresses store, loads the previous epochs
//! and runs one-shot maintenance commands on it.
#![warn(missing_docs)]

use crate::settings::Settings;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use massa_models::{address::Address, config::build_massa_settings, prehash::PreHashSet};
use massa_spent_addresses_exports::SpentAddressesController;
use massa_spent_addresses_worker::SpentAddresses;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;
use tracing_subscriber::filter::{filter_fn, LevelFilter};
use tracing_subscriber::prelude::*;

mod settings;

#[derive(Parser)]
#[command(version, about = "Massa node spent addresses store")]
struct Args {
    /// Ephemeral network: do not load the previous epochs spent addresses
    #[arg(long)]
    testnet: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Tell whether each address was already spent
    Check {
        #[arg(required = true)]
        addresses: Vec<String>,
    },
    /// Record addresses as spent
    Mark {
        #[arg(required = true)]
        addresses: Vec<String>,
    },
    /// Write every spent address to a previous epochs file
    Export { file: PathBuf },
}

fn setup_logging(level: usize) {
    let tracing_layer = tracing_subscriber::fmt::layer()
        .with_filter(match level {
            4 => LevelFilter::TRACE,
            3 => LevelFilter::DEBUG,
            2 => LevelFilter::INFO,
            1 => LevelFilter::WARN,
            _ => LevelFilter::ERROR,
        })
        .with_filter(filter_fn(|metadata| {
            metadata.target().starts_with("massa") // ignore non-massa logs
        }));
    tracing_subscriber::registry().with(tracing_layer).init();
}

fn parse_addresses(args: &[String]) -> Result<Vec<Address>> {
    args.iter()
        .map(|arg| Address::from_str(arg).with_context(|| format!("invalid address {}", arg)))
        .collect()
}

fn run(args: Args, settings: Settings, spent_addresses: SpentAddresses) -> Result<()> {
    match args.command {
        None => {}
        Some(Command::Check { addresses }) => {
            for address in parse_addresses(&addresses)? {
                let spent = spent_addresses
                    .contains(&address)
                    .with_context(|| format!("could not check address {}", address))?;
                println!("{} {}", address, if spent { "spent" } else { "unspent" });
            }
        }
        Some(Command::Mark { addresses }) => {
            let addresses = parse_addresses(&addresses)?;
            if let [address] = addresses.as_slice() {
                spent_addresses
                    .mark_spent(address)
                    .with_context(|| format!("could not mark address {}", address))?;
            } else {
                let batch: PreHashSet<Address> = addresses.into_iter().collect();
                spent_addresses
                    .mark_spent_batch(&batch)
                    .context("could not mark addresses")?;
            }
            info!("addresses marked as spent");
        }
        Some(Command::Export { file }) => {
            let mut writer = BufWriter::new(
                File::create(&file)
                    .with_context(|| format!("could not create {}", file.display()))?,
            );
            let count = spent_addresses
                .export(&mut writer)
                .with_context(|| format!("could not export to {}", file.display()))?;
            info!(
                "exported {} spent addresses from {} to {}",
                count,
                settings.spent_addresses.db_path.display(),
                file.display()
            );
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings: Settings = build_massa_settings("massa-node", "MASSA_NODE")
        .context("could not load the node settings")?;
    setup_logging(settings.logging.level);

    let ephemeral = args.testnet || settings.testnet;
    let spent_addresses = SpentAddresses::new(settings.spent_addresses.to_config(ephemeral))
        .context("could not open the spent addresses store")?;
    info!(
        "spent addresses store ready at {}",
        settings.spent_addresses.db_path.display()
    );

    run(args, settings, spent_addresses)
}
