#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

mod cli;
use cli::{Cli, Command};

mod commands;

/// Everything the bot does on Discord besides answering commands.
mod discord;

mod errors;

mod framework;
use framework::{config::ConfigSetup, Config, PoiseData};

mod odds;
mod store;
mod utils;

use anyhow::Context as _;
use clap::Parser;
use poise::serenity_prelude::{self as serenity, GatewayIntents};
use tracing::info;

use store::{ConfigStore, JsonFile};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    framework::logging::init_tracing();

    let cli = Cli::parse();

    match cli.command() {
        Command::Config => {
            let config = Config::load(&cli.config)?;
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
        Command::Start => start(&cli).await,
    }
}

async fn start(cli: &Cli) -> anyhow::Result<()> {
    info!("starting rollbot {}", env!("CARGO_PKG_VERSION"));

    let setup = ConfigSetup::load(&cli.config).await?;
    let token = setup.token().to_owned();
    let config = setup.finish();

    let store = ConfigStore::open(JsonFile::new(&config.store_path))
        .await
        .context("could not open the guild config store")?;

    let framework = framework::poise::build(PoiseData::new(config, store));

    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGE_REACTIONS;
    let mut client = serenity::Client::builder(token, intents)
        .framework(framework)
        .await
        .context("client should be valid")?;

    client.start().await?;

    Ok(())
}
