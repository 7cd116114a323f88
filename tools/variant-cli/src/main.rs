//! turbo-variants - inspect product variant resolution from the command line.
//!
//! Commands:
//! - `turbo-variants resolve` - Resolve a selection against a product file
//! - `turbo-variants adapt` - Convert a sizes/colors product to options
//! - `turbo-variants validate` - Check a catalog for integrity problems
//! - `turbo-variants config` - Show or initialize configuration

mod commands;
mod config;
mod context;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AdaptArgs, ConfigArgs, ResolveArgs, ValidateArgs};

/// Inspect TurboCommerce product variant resolution
#[derive(Parser)]
#[command(name = "turbo-variants")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a selection to availability, variant and stock
    Resolve(ResolveArgs),

    /// Convert a simple product to options and variants
    Adapt(AdaptArgs),

    /// Validate a product file
    Validate(ValidateArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.json);
    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    init_tracing(cli.verbose, ctx.config.log_level.as_deref())?;

    let result = match cli.command {
        Commands::Resolve(args) => commands::resolve::run(args, &ctx),
        Commands::Adapt(args) => commands::adapt::run(args, &ctx),
        Commands::Validate(args) => commands::validate::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// `RUST_LOG` wins, then the config's `log_level`, then `--verbose`.
fn init_tracing(verbose: bool, configured: Option<&str>) -> Result<()> {
    let fallback = configured.unwrap_or(if verbose { "debug" } else { "warn" });
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(fallback))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
