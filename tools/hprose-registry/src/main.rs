// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! hprose-registry - Inspect the Hprose serializer registry
//!
//! Lists the bootstrap type table and encodes JSON documents to Hprose bytes.

mod json;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::*;
use hprose_io::{Encoder, RegistryConfig, SerializerRegistry, Value};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hprose-registry")]
#[command(about = "Inspect the Hprose serializer registry")]
#[command(version)]
struct Cli {
    /// Registry configuration file (TOML)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Do not install the extended date/time family
    #[arg(long, global = true)]
    no_extended_time: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the registered type -> serializer table
    List {
        /// Only show types whose name contains this text
        #[arg(short, long)]
        filter: Option<String>,

        /// Output format: pretty, json
        #[arg(long, default_value = "pretty")]
        format: OutputFormat,
    },

    /// Encode a JSON document and print the Hprose bytes
    Encode {
        /// JSON text; objects with a "$class" member are encoded as class instances
        #[arg(long, value_name = "TEXT")]
        json: String,

        /// Print bytes as hex instead of text
        #[arg(long)]
        hex: bool,
    },
}

#[derive(Clone, Debug)]
enum OutputFormat {
    Pretty,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "p" => Ok(OutputFormat::Pretty),
            "json" | "j" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// `RUST_LOG` overrides the level chosen by `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .try_init();
}

fn load_config(cli: &Cli) -> anyhow::Result<RegistryConfig> {
    let mut config = match &cli.config {
        Some(path) => RegistryConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => RegistryConfig::default(),
    };
    if cli.no_extended_time {
        config.extended_time = false;
    }
    log::debug!("[cli] config: {:?}", config);
    Ok(config)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    let registry = SerializerRegistry::try_with_config(&config)?;

    match &cli.command {
        Commands::List { filter, format } => cmd_list(&registry, filter.as_deref(), format),
        Commands::Encode { json, hex } => cmd_encode(&registry, json, *hex),
    }
}

fn cmd_list(
    registry: &SerializerRegistry,
    filter: Option<&str>,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let entries: Vec<_> = registry
        .entries()
        .into_iter()
        .filter(|(key, _)| filter.map_or(true, |f| key.name().contains(f)))
        .collect();

    match format {
        OutputFormat::Pretty => {
            let width = entries
                .iter()
                .map(|(key, _)| key.name().len())
                .max()
                .unwrap_or(0);
            for (key, serializer) in &entries {
                println!(
                    "{:<width$}  {}",
                    key.name(),
                    serializer.name().cyan(),
                    width = width
                );
            }
            println!();
            println!(
                "{} {} of {} entries",
                "Total:".bold(),
                entries.len(),
                registry.len()
            );
        }
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = entries
                .iter()
                .map(|(key, serializer)| {
                    serde_json::json!({
                        "type": key.name(),
                        "serializer": serializer.name(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }
    Ok(())
}

fn cmd_encode(registry: &SerializerRegistry, text: &str, hex: bool) -> anyhow::Result<()> {
    let document: serde_json::Value =
        serde_json::from_str(text).context("parsing --json document")?;
    let value = json::to_value(&document);
    log::info!(
        "[cli] {} value resolved to {}",
        value.variant_name(),
        registry.get_for::<Value>().name()
    );

    let mut encoder = Encoder::new(registry);
    encoder.encode(&value)?;
    let bytes = encoder.into_bytes();

    if hex {
        let rendered: Vec<String> = bytes.iter().map(|b| format!("{:02x}", b)).collect();
        println!("{}", rendered.join(" "));
    } else {
        println!("{}", String::from_utf8_lossy(&bytes));
    }
    Ok(())
}
