//! CLI command implementations.

pub mod adapt;
pub mod config;
pub mod resolve;
pub mod validate;

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Arguments for the resolve command.
#[derive(Args)]
pub struct ResolveArgs {
    /// Catalog or simple-product JSON file.
    pub product: PathBuf,

    /// Selected value as Title=Value. Repeat for each axis.
    #[arg(short, long = "select", value_name = "TITLE=VALUE")]
    pub selections: Vec<String>,

    /// Start from the first in-stock variant's values.
    #[arg(long, conflicts_with = "selections")]
    pub initial: bool,

    /// Override the low-stock threshold.
    #[arg(short, long)]
    pub threshold: Option<u32>,

    /// Read the file as a simple product (sizes/colors lists).
    #[arg(long)]
    pub simple: bool,
}

/// Arguments for the adapt command.
#[derive(Args)]
pub struct AdaptArgs {
    /// Simple-product JSON file.
    pub product: PathBuf,
}

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Catalog or simple-product JSON file.
    pub product: PathBuf,

    /// Read the file as a simple product.
    #[arg(long)]
    pub simple: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Print a default config file.
    Init,
}
