use std::{collections::HashMap, fmt::Display};

use tracing::{debug, instrument};

/// Credentials that never live in the config file.
#[derive(Clone)]
pub struct Secrets {
    bot_token: String,
}

impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets")
            .field("bot_token", &"<redacted>")
            .finish()
    }
}

impl Secrets {
    pub async fn from_store(store: impl SecretStore) -> Result<Self, Error> {
        let bot_token = store.require(SecretKey::BotToken).await?;
        Ok(Self { bot_token })
    }

    /// Loads `.env` into the process environment first, then reads from it.
    #[instrument(name = "secrets")]
    pub async fn load() -> Result<Self, Error> {
        match dotenvy::dotenv() {
            Ok(path) => debug!(?path, "loaded .env file"),
            Err(err) => debug!(%err, "no .env file loaded"),
        }

        Self::from_store(EnvSecrets).await
    }

    pub fn bot_token(&self) -> &str {
        &self.bot_token
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SecretKey {
    BotToken,
}

impl SecretKey {
    pub const fn var(self) -> &'static str {
        match self {
            Self::BotToken => "DISCORD_TOKEN",
        }
    }
}

impl Display for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.var())
    }
}

pub trait SecretStore {
    async fn get(&self, secret: SecretKey) -> Option<String>;

    async fn require(&self, secret: SecretKey) -> Result<String, Error> {
        self.get(secret)
            .await
            .filter(|value| !value.trim().is_empty())
            .ok_or(Error::Missing(secret))
    }
}

/// Reads secrets from environment variables.
pub struct EnvSecrets;

impl SecretStore for EnvSecrets {
    async fn get(&self, secret: SecretKey) -> Option<String> {
        std::env::var(secret.var()).ok()
    }
}

impl SecretStore for HashMap<SecretKey, String> {
    async fn get(&self, secret: SecretKey) -> Option<String> {
        HashMap::get(self, &secret).cloned()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0} is not set")]
    Missing(SecretKey),
}
