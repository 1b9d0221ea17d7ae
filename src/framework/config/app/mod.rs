use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

mod bot;
pub use bot::BotConfig;

pub const DEFAULT_FILE: &str = "rollbot.toml";
const ENV_PREFIX: &str = "ROLLBOT";

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    /// JSON document holding every guild's roller config.
    pub store_path: PathBuf,

    pub bot: BotConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("roll_config.json"),
            bot: BotConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reads the TOML file at `path` (if it exists), then `ROLLBOT__*` variables on top.
    #[instrument(name = "config")]
    pub fn load(path: &Path) -> Result<Self, Error> {
        let config = ::config::Config::builder()
            .add_source(
                ::config::File::new(&path.to_string_lossy(), ::config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(Error::Read)?
            .try_deserialize()
            .map_err(Error::Parse)?;

        info!("config loaded");

        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("file read error: {0}")]
    Read(::config::ConfigError),

    #[error("parsing error: {0}")]
    Parse(::config::ConfigError),
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use poise::serenity_prelude::{ChannelId, GuildId};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config.store_path, PathBuf::from("roll_config.json"));
        assert_eq!(config.bot.testing_server(), None);
    }

    #[test]
    fn reads_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
store_path = "/var/lib/rollbot/guilds.json"

[bot]
testing_server = 1234
status_channel = 5678
activity = "watching the dice"
"#
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();

        assert_eq!(config.store_path, PathBuf::from("/var/lib/rollbot/guilds.json"));
        assert_eq!(config.bot.testing_server(), Some(GuildId::new(1234)));
        assert_eq!(config.bot.status_channel(), Some(ChannelId::new(5678)));
        assert!(config.bot.activity().is_some());
    }

    #[test]
    fn prints_back_as_toml() {
        let config = AppConfig::default();
        let printed = toml::to_string_pretty(&config).unwrap();

        assert!(printed.contains("store_path = \"roll_config.json\""));
    }
}
