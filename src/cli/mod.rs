use std::path::PathBuf;

use crate::framework::config::DEFAULT_FILE;

/// Rolls weighted outcomes for users who react to a Discord message.
#[derive(clap::Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// TOML config file; a missing file means defaults plus environment.
    #[arg(long, env = "ROLLBOT_CONFIG", default_value = DEFAULT_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.unwrap_or_default()
    }
}

#[derive(clap::Subcommand, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Command {
    /// Print the resolved configuration as TOML and exit.
    Config,

    /// Connect to Discord and start handling commands and reactions.
    #[default]
    Start,
}
