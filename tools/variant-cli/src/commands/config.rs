//! Configuration commands.

use anyhow::Result;

use super::{ConfigArgs, ConfigCommand};
use crate::config::CliConfig;
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    let config = match args.command {
        ConfigCommand::Show => ctx.config.clone(),
        ConfigCommand::Init => CliConfig::default(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&config);
    } else {
        print!("{}", config.to_toml()?);
    }
    Ok(())
}
