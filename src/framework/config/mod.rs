mod app;
use std::path::Path;

pub use app::{AppConfig as Config, DEFAULT_FILE};

mod secrets;
pub use secrets::Secrets;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("problem loading config file: {0}")]
    App(#[from] app::Error),

    #[error("problem loading secrets: {0}")]
    Secrets(#[from] secrets::Error),
}

/// Everything needed to connect, before the bot's shared data exists.
#[derive(Debug, Clone)]
pub struct ConfigSetup {
    app: Config,
    secrets: Secrets,
}

impl ConfigSetup {
    #[tracing::instrument(skip_all, name = "config")]
    pub async fn load(path: &Path) -> Result<Self, Error> {
        let app = Config::load(path)?;
        let secrets = Secrets::load().await?;

        Ok(Self { app, secrets })
    }

    pub fn token(&self) -> &str {
        self.secrets.bot_token()
    }

    pub fn finish(self) -> Config {
        self.app
    }
}
